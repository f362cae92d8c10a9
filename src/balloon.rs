use macroquad::prelude::{Color, Vec2};
use macroquad::rand;

use crate::config::{
    BALLOON_COUNT, EXPLOSION_FRAMES, EXPLOSION_GROWTH, FAST_SPEED, HIGHLIGHT_CORNER, HIT_SLACK,
    MAX_RADIUS, MIN_RADIUS, PALETTE, SLOW_SPEED,
};
use crate::viewport::Viewport;

/// Linear speed for a radius: small balloons rise fast, big ones slow.
pub fn speed_for_radius(radius: f32) -> f32 {
    FAST_SPEED + (radius - MIN_RADIUS) * (SLOW_SPEED - FAST_SPEED) / (MAX_RADIUS - MIN_RADIUS)
}

/// Palette color with the given alpha (0..=255).
pub fn random_color(alpha: f32) -> Color {
    let (r, g, b) = PALETTE[rand::gen_range(0, PALETTE.len())];
    let mut color = Color::from_rgba(r, g, b, 255);
    color.a = alpha / 255.0;
    color
}

/// ✨ The white rounded square glinting on every balloon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub size: f32,
    pub offset: f32,
}

impl Highlight {
    pub fn for_radius(radius: f32) -> Self {
        Self {
            size: radius * rand::gen_range(0.15_f32, 0.22),
            offset: radius * 0.22,
        }
    }

    /// Rounded corner radius, never more than half the side.
    pub fn corner_radius(&self) -> f32 {
        HIGHLIGHT_CORNER.min(self.size / 2.0)
    }
}

/// One frame of an explosion: how big and how opaque it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub radius: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub speed: f32,
    pub highlight: Highlight,
    pub exploding: bool,
    /// Radius captured when the explosion started.
    pub base_radius: f32,
    /// Frames since the explosion started.
    pub timer: u32,
}

/// What happened to a balloon during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Rising,
    Exploding,
    /// Floated off the top without being popped.
    Escaped,
    /// Explosion animation just finished.
    Popped,
}

impl Balloon {
    /// 🎈 Fresh balloon just below the bottom edge.
    pub fn spawn(viewport: Viewport) -> Self {
        // Size drives speed, so roll it first
        let radius = rand::gen_range(MIN_RADIUS, MAX_RADIUS);
        // Balloons are never as faint as the background
        let alpha = rand::gen_range(150.0, 255.0);

        Self {
            pos: Vec2::new(
                rand::gen_range(0.0, viewport.width),
                viewport.height + radius,
            ),
            radius,
            color: random_color(alpha),
            speed: speed_for_radius(radius),
            highlight: Highlight::for_radius(radius),
            exploding: false,
            base_radius: radius,
            timer: 0,
        }
    }

    /// Radius of the circular hit region around the center.
    pub fn hit_radius(&self) -> f32 {
        self.radius / 2.0 + HIT_SLACK
    }

    /// Whether the balloon is close enough to the screen to be clickable.
    pub fn is_visible(&self, viewport: Viewport) -> bool {
        self.pos.y > -self.radius && self.pos.y < viewport.height + self.radius
    }

    pub fn is_hit(&self, point: Vec2, viewport: Viewport) -> bool {
        !self.exploding
            && self.is_visible(viewport)
            && self.pos.distance(point) < self.hit_radius()
    }

    /// Starts the explosion animation.
    pub fn pop(&mut self) {
        self.exploding = true;
        self.base_radius = self.radius;
        self.timer = 0;
    }

    /// Current explosion size and opacity, `None` while rising.
    pub fn burst(&self) -> Option<Burst> {
        if !self.exploding {
            return None;
        }

        // Timer 0 is the balloon itself, timer 16 is fully faded
        let progress = (self.timer as f32 / EXPLOSION_FRAMES as f32).min(1.0);
        Some(Burst {
            radius: self.base_radius + self.timer as f32 * EXPLOSION_GROWTH,
            alpha: self.color.a * (1.0 - progress),
        })
    }

    /// Advances one frame. The caller recycles on `Escaped` and `Popped`.
    pub fn update(&mut self) -> Step {
        if self.exploding {
            // Exploding balloons stay put while the rings grow
            self.timer += 1;
            if self.timer > EXPLOSION_FRAMES {
                Step::Popped
            } else {
                Step::Exploding
            }
        } else {
            // Float up until fully past the top edge
            self.pos.y -= self.speed;
            if self.pos.y + self.radius / 2.0 < 0.0 {
                Step::Escaped
            } else {
                Step::Rising
            }
        }
    }
}

/// The fixed group of clickable balloons.
#[derive(Debug, Clone)]
pub struct BalloonSet {
    balloons: [Balloon; BALLOON_COUNT],
}

impl BalloonSet {
    /// Spawns the set below the screen, staggered so they arrive one by one.
    pub fn new(viewport: Viewport) -> Self {
        let balloons = std::array::from_fn(|i| {
            // 80px apart, the first one 100px under the bottom edge
            let mut balloon = Balloon::spawn(viewport);
            balloon.pos.y = viewport.height + 100.0 + i as f32 * 80.0;
            balloon
        });
        Self { balloons }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Balloon> {
        self.balloons.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Balloon> {
        self.balloons.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Balloon> {
        self.balloons.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.balloons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balloons.is_empty()
    }

    /// Pops the first balloon under `point`, scanning from index 0.
    pub fn hit(&mut self, point: Vec2, viewport: Viewport) -> Option<usize> {
        // Lowest index wins when balloons overlap
        let index = self
            .balloons
            .iter()
            .position(|balloon| balloon.is_hit(point, viewport))?;
        self.balloons[index].pop();
        Some(index)
    }

    /// Advances every balloon one frame and returns the points earned.
    /// Finished explosions only score while `active`.
    pub fn update(&mut self, viewport: Viewport, active: bool) -> u32 {
        let mut points = 0;
        for balloon in &mut self.balloons {
            match balloon.update() {
                Step::Rising | Step::Exploding => {}

                // Missed balloons come back without a point
                Step::Escaped => *balloon = Balloon::spawn(viewport),

                // Explosion done: score it, then reuse the slot
                Step::Popped => {
                    if active {
                        points += 1;
                    }
                    *balloon = Balloon::spawn(viewport);
                }
            }
        }
        points
    }
}
