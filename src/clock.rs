/// Round countdown tied to wall-clock seconds rather than frame count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    seconds_left: i32,
    /// Timestamp (seconds) of the last decrement, or of the anchor.
    last_tick: f64,
}

impl Clock {
    pub fn new(seconds: i32) -> Self {
        Self {
            seconds_left: seconds,
            last_tick: 0.0,
        }
    }

    /// Restarts second counting from `now` without touching the remaining time.
    pub fn anchor(&mut self, now: f64) {
        self.last_tick = now;
    }

    /// Drops one second if a full second passed since the last tick.
    /// Returns true when a second was consumed.
    pub fn advance(&mut self, now: f64) -> bool {
        if now - self.last_tick >= 1.0 {
            self.seconds_left -= 1;
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    pub fn seconds_left(&self) -> i32 {
        self.seconds_left
    }

    /// Remaining seconds as shown to the player, never negative.
    pub fn display_seconds(&self) -> i32 {
        self.seconds_left.max(0)
    }

    pub fn expired(&self) -> bool {
        self.seconds_left <= 0
    }
}
