use std::f32::consts::FRAC_PI_2;

use macroquad::prelude::*;

use super::Game;
use crate::background::Circle;
use crate::balloon::{Balloon, Highlight};
use crate::phase::Phase;

const HIGHLIGHT: Color = Color::new(1.0, 1.0, 1.0, 120.0 / 255.0);
// Triangles per rounded corner
const CORNER_SEGMENTS: usize = 6;

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}

// Text centered horizontally on the screen
fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        y + dims.offset_y / 2.0,
        font_size,
        color,
    );
}

// Right-aligned text, 10px in from the edge
fn draw_right(text: &str, top: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        screen_width() - dims.width - 10.0,
        top + dims.offset_y,
        font_size,
        color,
    );
}

// Quarter disc as a triangle fan, sweeping from `start` by 90 degrees
fn draw_corner(center: Vec2, radius: f32, start: f32, color: Color) {
    let step = FRAC_PI_2 / CORNER_SEGMENTS as f32;
    for i in 0..CORNER_SEGMENTS {
        let a = start + step * i as f32;
        let b = a + step;
        draw_triangle(
            center,
            center + Vec2::new(a.cos(), a.sin()) * radius,
            center + Vec2::new(b.cos(), b.sin()) * radius,
            color,
        );
    }
}

// Rounded square built from pieces that never overlap, so the translucent
// white blends once everywhere
fn draw_rounded_square(x: f32, y: f32, size: f32, corner: f32, color: Color) {
    let inner = size - 2.0 * corner;

    // Middle column, then the two side strips between the corners
    draw_rectangle(x + corner, y, inner, size, color);
    draw_rectangle(x, y + corner, corner, inner, color);
    draw_rectangle(x + size - corner, y + corner, corner, inner, color);

    // Corners, clockwise from top-left (y grows downwards)
    let near = corner;
    let far = size - corner;
    draw_corner(Vec2::new(x + near, y + near), corner, 2.0 * FRAC_PI_2, color);
    draw_corner(Vec2::new(x + far, y + near), corner, 3.0 * FRAC_PI_2, color);
    draw_corner(Vec2::new(x + far, y + far), corner, 0.0, color);
    draw_corner(Vec2::new(x + near, y + far), corner, FRAC_PI_2, color);
}

fn draw_highlight(pos: Vec2, highlight: Highlight) {
    draw_rounded_square(
        pos.x + highlight.offset,
        pos.y - highlight.offset,
        highlight.size,
        highlight.corner_radius(),
        HIGHLIGHT,
    );
}

impl Game {
    /// 🖌️ Draws the frame. Call between [`Game::update`] and [`Game::advance`].
    pub fn draw(&self) {
        // The frame the round ran out still shows the field
        if self.shows_play_field() {
            self.draw_play();
            return;
        }

        match self.phase {
            Phase::Loading => self.draw_loading(),
            _ => self.draw_game_over(),
        }
    }

    fn draw_loading(&self) {
        clear_background(Color::from_rgba(0x28, 0x2c, 0x34, 255));

        let middle = screen_height() / 2.0;
        draw_centered("Tap to start popping balloons!", middle, 36.0, WHITE);
        draw_centered("(your tap turns the sound on)", middle + 50.0, 18.0, WHITE);
    }

    fn draw_game_over(&self) {
        clear_background(Color::from_rgba(0x38, 0x0e, 0x20, 255));

        let middle = screen_height() / 2.0;
        draw_centered("Time's up!", middle - 50.0, 64.0, WHITE);
        draw_centered(&format!("Score: {}", self.score), middle + 30.0, 48.0, WHITE);
        draw_centered("Tap to play again", middle + 100.0, 24.0, WHITE);
    }

    fn draw_play(&self) {
        clear_background(Color::from_rgba(0xe2, 0xf6, 0xf7, 255));

        // Background first so balloons sit on top
        for circle in self.background.iter() {
            draw_circle_entity(circle);
        }

        // Rising balloons vanish once the round is over
        let active = self.phase.is_active();
        for balloon in self.balloons.iter() {
            draw_balloon(balloon, active);
        }

        // Text last, nothing covers it
        self.draw_overlay();
    }

    fn draw_overlay(&self) {
        // Tag in the top-left corner
        let tag = &self.config.tag;
        let dims = measure_text(tag, None, 15, 1.0);
        draw_text(tag, 10.0, 10.0 + dims.offset_y, 15.0, Color::from_rgba(50, 50, 50, 255));

        // Score and time in the top-right corner
        let ink = Color::from_rgba(30, 30, 30, 255);
        draw_right(&format!("Score: {}", self.score), 10.0, 22.0, ink);
        draw_right(
            &format!("Time: {}s", self.clock.display_seconds()),
            40.0,
            18.0,
            ink,
        );
    }
}

fn draw_circle_entity(circle: &Circle) {
    draw_circle(circle.pos.x, circle.pos.y, circle.radius / 2.0, circle.color);
    draw_highlight(circle.pos, circle.highlight);
}

fn draw_balloon(balloon: &Balloon, active: bool) {
    let Some(burst) = balloon.burst() else {
        if active {
            draw_circle(balloon.pos.x, balloon.pos.y, balloon.radius / 2.0, balloon.color);
            draw_highlight(balloon.pos, balloon.highlight);
        }
        return;
    };

    // Three expanding rings, each wider, fainter and thinner
    for ring in 0..3 {
        let step = ring as f32;
        let radius = burst.radius * (1.0 + step * 0.4);
        let alpha = burst.alpha * (0.5 - step * 0.15);
        draw_circle_lines(
            balloon.pos.x,
            balloon.pos.y,
            radius / 2.0,
            8.0 - step * 2.0,
            with_alpha(balloon.color, alpha),
        );
    }

    // Fading core
    draw_circle(
        balloon.pos.x,
        balloon.pos.y,
        burst.radius * 0.7 / 2.0,
        with_alpha(balloon.color, burst.alpha),
    );
}
