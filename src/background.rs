use macroquad::prelude::{Color, Vec2};
use macroquad::rand;

use crate::balloon::{random_color, speed_for_radius, Highlight};
use crate::config::{BACKGROUND_COUNT, MAX_RADIUS, MIN_RADIUS};
use crate::viewport::Viewport;

// Decorative circle drifting behind the balloons
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub speed: f32,
    pub highlight: Highlight,
}

impl Circle {
    /// Random circle somewhere on screen.
    pub fn spawn(viewport: Viewport) -> Self {
        let radius = rand::gen_range(MIN_RADIUS, MAX_RADIUS);

        Self {
            pos: Vec2::new(
                rand::gen_range(0.0, viewport.width),
                rand::gen_range(0.0, viewport.height),
            ),
            radius,
            color: random_color(rand::gen_range(50.0, 255.0)),
            speed: speed_for_radius(radius),
            highlight: Highlight::for_radius(radius),
        }
    }

    /// Moves up; once fully past the top edge it reappears just below the bottom.
    pub fn update(&mut self, height: f32) {
        self.pos.y -= self.speed;
        if self.pos.y + self.radius / 2.0 < 0.0 {
            self.pos.y = height + self.radius / 2.0;
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackgroundField {
    circles: [Circle; BACKGROUND_COUNT],
}

impl BackgroundField {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            circles: std::array::from_fn(|_| Circle::spawn(viewport)),
        }
    }

    pub fn update(&mut self, viewport: Viewport) {
        for circle in &mut self.circles {
            circle.update(viewport.height);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.circles.iter()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
