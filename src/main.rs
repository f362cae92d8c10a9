use macroquad::logging::warn;
use macroquad::prelude::*;

use balloon_pop::audio::PopSound;
use balloon_pop::config::GameConfig;
use balloon_pop::game::{Effect, Game};
use balloon_pop::pointer;
use balloon_pop::viewport::Viewport;

fn window_conf() -> Conf {
    Conf {
        window_title: "🎈 Balloon Pop".to_owned(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = GameConfig::default();

    let mut sound = match PopSound::load(&config.pop_sound_path).await {
        Ok(sound) => sound,
        Err(err) => {
            warn!("{err}, continuing without sound");
            PopSound::silent(&config.pop_sound_path)
        }
    };

    let mut game = Game::new(config, Viewport::current());

    loop {
        game.resize(Viewport::current());

        if let Some(press) = pointer::poll_press() {
            match game.press(press, get_time()) {
                Some(Effect::UnlockAudio) => {
                    let outcome = sound.unlock().await;
                    game.audio_settled(outcome, get_time());
                }
                Some(Effect::PlayPop) => sound.play_pop(),
                None => {}
            }
        }

        // Clock first, then draw, then move: entities show where they were
        game.update(get_time());
        game.draw();
        game.advance();

        next_frame().await
    }
}
