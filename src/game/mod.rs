use macroquad::logging::{debug, info, warn};

use crate::audio::AudioError;
use crate::background::BackgroundField;
use crate::balloon::BalloonSet;
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::phase::{Phase, PhaseEvent};
use crate::pointer::Press;
use crate::viewport::Viewport;

mod render;

/// Work the controller hands back to the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start the audio unlock and report back through [`Game::audio_settled`].
    UnlockAudio,
    PlayPop,
}

/// 🎈 Owns every piece of game state. Nothing else mutates it.
///
/// A frame runs in three steps: [`Game::update`] moves the clock and the
/// phase, [`Game::draw`] renders, and [`Game::advance`] moves the entities.
/// Entities are drawn where they were before they move.
pub struct Game {
    config: GameConfig,
    viewport: Viewport,
    phase: Phase,
    score: u32,
    clock: Clock,
    background: BackgroundField,
    balloons: BalloonSet,

    // Audio
    audio_ready: bool,
    unlock_pending: bool,

    // Set on the frame the clock runs out, cleared once that frame advanced
    final_frame: bool,
}

impl Game {
    pub fn new(config: GameConfig, viewport: Viewport) -> Self {
        Self {
            clock: Clock::new(config.round_seconds),
            config,
            viewport,
            phase: Phase::Loading,
            score: 0,
            background: BackgroundField::new(viewport),
            balloons: BalloonSet::new(viewport),
            audio_ready: false,
            unlock_pending: false,
            final_frame: false,
        }
    }

    /// Fresh round: score, clock and every entity are regenerated.
    pub fn reset(&mut self) {
        self.score = 0;
        self.clock = Clock::new(self.config.round_seconds);
        self.background = BackgroundField::new(self.viewport);
        self.balloons = BalloonSet::new(self.viewport);
        self.final_frame = false;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seconds_left(&self) -> i32 {
        self.clock.seconds_left()
    }

    pub fn audio_ready(&self) -> bool {
        self.audio_ready
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn balloons(&self) -> &BalloonSet {
        &self.balloons
    }

    pub fn balloons_mut(&mut self) -> &mut BalloonSet {
        &mut self.balloons
    }

    pub fn background(&self) -> &BackgroundField {
        &self.background
    }

    /// Whether this frame renders the play field. True in the active phases
    /// and on the frame the round ran out, which shows the field once more
    /// with the game already over.
    pub fn shows_play_field(&self) -> bool {
        self.phase.is_active() || self.final_frame
    }

    fn transition(&mut self, event: PhaseEvent) {
        let next = self.phase.next(event);
        if next != self.phase {
            info!("phase {:?} -> {:?} (score {})", self.phase, next, self.score);
            self.phase = next;
        }
    }

    /// Handles one pointer press at time `now` (seconds).
    pub fn press(&mut self, press: Press, now: f64) -> Option<Effect> {
        match self.phase {
            Phase::GameOver => {
                // Any tap restarts from a clean slate
                self.reset();
                self.transition(PhaseEvent::Press);
                None
            }
            Phase::Loading => {
                // Unlocked in an earlier round, no need to ask again
                if self.audio_ready {
                    self.start_countdown(PhaseEvent::Replay, now);
                    return None;
                }

                // One unlock in flight at a time
                if self.unlock_pending {
                    return None;
                }
                self.transition(PhaseEvent::Press);
                self.unlock_pending = true;
                Some(Effect::UnlockAudio)
            }
            Phase::Countdown | Phase::Playing => {
                self.transition(PhaseEvent::Press);

                // Empty space is fine, only a hit makes a sound
                let index = self.balloons.hit(press.pos, self.viewport)?;
                debug!("popped balloon {index}");
                self.audio_ready.then_some(Effect::PlayPop)
            }
        }
    }

    /// Completion of the audio unlock. Success and failure continue the same
    /// way; only the log differs.
    pub fn audio_settled(&mut self, outcome: Result<(), AudioError>, now: f64) {
        match outcome {
            Ok(()) => info!("audio unlocked"),
            Err(err) => warn!("audio unlock failed: {err}"),
        }
        self.unlock_pending = false;
        self.audio_ready = true;
        self.start_countdown(PhaseEvent::AudioSettled, now);
    }

    fn start_countdown(&mut self, event: PhaseEvent, now: f64) {
        if self.phase == Phase::Loading {
            self.transition(event);
            // Seconds count from here, not from when the tap happened
            self.clock.anchor(now);
        }
    }

    /// ⏱️ Start of a frame: ticks the clock and ends the round when it runs
    /// out. Static screens do not tick.
    pub fn update(&mut self, now: f64) {
        if !self.phase.is_active() {
            return;
        }

        self.clock.advance(now);
        if self.clock.expired() {
            self.transition(PhaseEvent::TimeUp);
            self.final_frame = true;
        }
    }

    /// End of a frame, after [`Game::draw`]: moves the background and the
    /// balloons and scores finished explosions.
    pub fn advance(&mut self) {
        if !self.shows_play_field() {
            return;
        }

        // Background drifts regardless of the phase
        self.background.update(self.viewport);

        // Explosions finishing on the final frame score nothing
        self.score += self.balloons.update(self.viewport, self.phase.is_active());

        self.final_frame = false;
    }

    /// New surface size. Entities keep their positions and adapt on recycle.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(
                "viewport {}x{} -> {}x{}",
                self.viewport.width, self.viewport.height, viewport.width, viewport.height
            );
            self.viewport = viewport;
        }
    }
}
