use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};

use crate::audio::Soundtrack;
use crate::config::{self, GameConfig};
use crate::input::command_for;
use crate::render;
use crate::scores::FileStore;
use crate::session::{Session, SessionEvent};

/// ggez glue: feeds frames and key presses into the session and reacts to
/// what comes back.
pub struct SnakeApp {
    session: Session<FileStore>,
    music: Soundtrack,
}

impl SnakeApp {
    pub fn new(ctx: &mut Context) -> Self {
        let store = FileStore::new(config::STORAGE_FILE);
        Self {
            session: Session::new(GameConfig::default(), store),
            music: Soundtrack::load(ctx, config::MUSIC_PATH),
        }
    }

    fn on_event(&mut self, ctx: &mut Context, event: Option<SessionEvent>) {
        match event {
            Some(SessionEvent::Started(_)) => self.music.start(ctx),
            Some(SessionEvent::Paused) | Some(SessionEvent::Ended(_)) => self.music.pause(),
            Some(SessionEvent::Resumed) => self.music.resume(),
            None => {}
        }
        if self.session.quit_requested() {
            ctx.request_quit();
        }
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let now = ctx.time.time_since_start();
        let event = self.session.advance(now);
        self.on_event(ctx, event);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        render::paint(ctx, &render::compose(&self.session))
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(command) = input.keycode.and_then(command_for) {
            let now = ctx.time.time_since_start();
            let event = self.session.handle(command, now);
            self.on_event(ctx, event);
        }
        Ok(())
    }
}
