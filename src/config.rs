//! Gameplay constants and the few knobs that can differ between builds.

/// Popping balloons alive at any time.
pub const BALLOON_COUNT: usize = 5;
/// Decorative circles in the background field.
pub const BACKGROUND_COUNT: usize = 90;

/// Frames an explosion animation lasts before the balloon is recycled.
pub const EXPLOSION_FRAMES: u32 = 16;
/// Pixels the explosion radius grows per frame.
pub const EXPLOSION_GROWTH: f32 = 18.0;

pub const MIN_RADIUS: f32 = 30.0;
pub const MAX_RADIUS: f32 = 120.0;
/// Speed (px/frame) of the smallest and the largest balloon.
pub const FAST_SPEED: f32 = 2.5;
pub const SLOW_SPEED: f32 = 0.5;

/// Corner radius of the highlight square, shrunk on squares too small for it.
pub const HIGHLIGHT_CORNER: f32 = 4.0;

/// Extra slack added to half the radius when hit-testing a press.
pub const HIT_SLACK: f32 = 5.0;

/// Balloon colors, `#0081a7 #00afb9 #f0e6ef #fed9b7 #f07167`.
pub const PALETTE: [(u8, u8, u8); 5] = [
    (0x00, 0x81, 0xa7),
    (0x00, 0xaf, 0xb9),
    (0xf0, 0xe6, 0xef),
    (0xfe, 0xd9, 0xb7),
    (0xf0, 0x71, 0x67),
];

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Length of one round in seconds.
    pub round_seconds: i32,
    /// Identifier drawn in the top-left corner while playing.
    pub tag: String,
    pub pop_sound_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: 10,
            tag: "414730571".to_owned(),
            pop_sound_path: "assets/soft-balloon-pop.wav".to_owned(),
        }
    }
}
