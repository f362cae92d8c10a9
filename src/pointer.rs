use macroquad::prelude::*;

/// 🖱️ A press on the surface, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub pos: Vec2,
}

impl Press {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

/// Returns this frame's press, if any.
///
/// Touch screens report the first finger that went down this frame. Mouse
/// clicks are only read when no finger is on the screen, otherwise the
/// emulated mouse event of a tap would count twice.
pub fn poll_press() -> Option<Press> {
    let touches = touches();

    if !touches.is_empty() {
        return touches
            .iter()
            .find(|touch| matches!(touch.phase, TouchPhase::Started))
            .map(|touch| Press::new(touch.position.x, touch.position.y));
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        return Some(Press::new(x, y));
    }

    None
}
