use macroquad::audio::{load_sound, play_sound, play_sound_once, PlaySoundParams, Sound};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to load sound `{path}`")]
    Load {
        path: String,
        #[source]
        source: macroquad::Error,
    },
    #[error("no sound is loaded")]
    NoSound,
}

async fn load(path: &str) -> Result<Sound, AudioError> {
    load_sound(path).await.map_err(|source| AudioError::Load {
        path: path.to_owned(),
        source,
    })
}

/// The balloon pop effect and whether the output has been unlocked by a tap.
pub struct PopSound {
    path: String,
    sound: Option<Sound>,
    unlocked: bool,
}

impl PopSound {
    /// Loads the asset before the first frame.
    pub async fn load(path: &str) -> Result<Self, AudioError> {
        let sound = load(path).await?;
        Ok(Self {
            path: path.to_owned(),
            sound: Some(sound),
            unlocked: false,
        })
    }

    /// Stand-in used when the asset could not be loaded at startup.
    /// `unlock` will retry the load.
    pub fn silent(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            sound: None,
            unlocked: false,
        }
    }

    /// Wakes the audio output from inside a user gesture. Browsers keep audio
    /// suspended until something plays in response to input, so this plays the
    /// effect once at zero volume.
    pub async fn unlock(&mut self) -> Result<(), AudioError> {
        if self.sound.is_none() {
            self.sound = Some(load(&self.path).await?);
        }
        let sound = self.sound.as_ref().ok_or(AudioError::NoSound)?;

        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: 0.0,
            },
        );
        self.unlocked = true;
        Ok(())
    }

    /// Plays the pop. Skipped while locked or without an asset.
    pub fn play_pop(&self) {
        if !self.unlocked {
            return;
        }
        if let Some(sound) = &self.sound {
            play_sound_once(sound);
        }
    }
}
