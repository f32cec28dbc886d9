//! Looping background music. Missing files and playback errors are logged and
//! otherwise ignored; the game never waits on audio.

use ggez::audio::{self, SoundSource};
use ggez::Context;
use log::{error, warn};

pub struct Soundtrack {
    source: Option<audio::Source>,
}

impl Soundtrack {
    pub fn load(ctx: &mut Context, path: &str) -> Self {
        let source = match audio::Source::new(ctx, path) {
            Ok(mut source) => {
                source.set_repeat(true);
                Some(source)
            }
            Err(e) => {
                warn!("Background music {} unavailable: {}", path, e);
                None
            }
        };
        Self { source }
    }

    /// Plays from the beginning.
    pub fn start(&mut self, ctx: &mut Context) {
        if let Some(source) = self.source.as_mut() {
            if let Err(e) = source.play(ctx) {
                error!("Audio playback failed: {}", e);
            }
        }
    }

    pub fn pause(&self) {
        if let Some(source) = &self.source {
            source.pause();
        }
    }

    pub fn resume(&self) {
        if let Some(source) = &self.source {
            source.resume();
        }
    }
}
