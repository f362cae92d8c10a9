pub mod audio;
pub mod background;
pub mod balloon;
pub mod clock;
pub mod config;
pub mod game;
pub mod phase;
pub mod pointer;
pub mod viewport;
