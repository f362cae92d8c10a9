/// Top-level mode of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Loading,
    Countdown,
    Playing,
    GameOver,
}

/// Anything that can move the game between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Pointer press anywhere on the surface.
    Press,
    /// The audio unlock finished, whatever its outcome.
    AudioSettled,
    /// Press in Loading when the audio was already unlocked in an earlier round.
    Replay,
    /// The round clock hit zero.
    TimeUp,
}

impl Phase {
    /// The single transition table. Every pair is listed.
    pub fn next(self, event: PhaseEvent) -> Self {
        match (self, event) {
            // Waiting for the first tap; only a settled unlock or a replay starts the round
            (Phase::Loading, PhaseEvent::AudioSettled | PhaseEvent::Replay) => Phase::Countdown,
            (Phase::Loading, PhaseEvent::Press | PhaseEvent::TimeUp) => Phase::Loading,

            // Second tap starts play, the clock ends it
            (Phase::Countdown, PhaseEvent::Press) => Phase::Playing,
            (Phase::Playing, PhaseEvent::Press) => Phase::Playing,
            (Phase::Countdown | Phase::Playing, PhaseEvent::TimeUp) => Phase::GameOver,
            (Phase::Countdown, PhaseEvent::AudioSettled | PhaseEvent::Replay) => Phase::Countdown,
            (Phase::Playing, PhaseEvent::AudioSettled | PhaseEvent::Replay) => Phase::Playing,

            // Any tap on the score screen goes back to the start
            (Phase::GameOver, PhaseEvent::Press) => Phase::Loading,
            (Phase::GameOver, PhaseEvent::AudioSettled | PhaseEvent::Replay) => Phase::GameOver,
            (Phase::GameOver, PhaseEvent::TimeUp) => Phase::GameOver,
        }
    }

    /// Countdown and Playing both run the simulation and score pops.
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Countdown | Phase::Playing)
    }
}
