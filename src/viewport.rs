use macroquad::prelude::{screen_height, screen_width};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reads the live window size. Needs a macroquad context.
    pub fn current() -> Self {
        Self::new(screen_width(), screen_height())
    }
}
