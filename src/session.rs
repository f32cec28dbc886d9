//! The single owner of everything that changes while the program runs.
//!
//! Key presses arrive as [`Command`]s, frame updates arrive as timestamps, and
//! the session answers with the [`SessionEvent`] the shell has to react to
//! (music, logging). Nothing in here touches ggez, so whole games can be
//! played in tests.

use chrono::{DateTime, Local};
use log::{info, warn};
use std::fmt;
use std::time::Duration;

use crate::config::GameConfig;
use crate::game::{Difficulty, Direction, GameEngine, Status, TickOutcome};
use crate::input::Command;
use crate::scores::{HighScores, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crashed,
    Won,
    /// Left for the menu or quit before the game finished
    Abandoned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub difficulty: Difficulty,
    pub score: u32,
    pub outcome: Outcome,
    pub new_best: bool,
    pub ended_at: DateTime<Local>,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} session {:?} with score {} at {}",
            self.difficulty,
            self.outcome,
            self.score,
            self.ended_at.format("%Y-%m-%d %H:%M:%S"),
        )?;
        if self.new_best {
            write!(f, " (new best)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Started(Difficulty),
    Paused,
    Resumed,
    Ended(SessionSummary),
}

/// Fires at most once per interval, measured from the previous firing.
#[derive(Debug, Clone, Copy)]
struct TickClock {
    last: Duration,
}

impl TickClock {
    fn due(&mut self, now: Duration, interval: Duration) -> bool {
        if now.saturating_sub(self.last) > interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}

pub struct Session<S: KeyValueStore> {
    engine: GameEngine,
    screen: Screen,
    selection: Difficulty,
    high_scores: HighScores,
    store: S,
    /// Armed while a session is in progress; dropping it stops all ticking.
    clock: Option<TickClock>,
    quit_requested: bool,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_engine(GameEngine::new(config, Difficulty::default()), store)
    }

    pub fn seeded(config: GameConfig, store: S, seed: u64) -> Self {
        Self::with_engine(GameEngine::seeded(config, Difficulty::default(), seed), store)
    }

    fn with_engine(engine: GameEngine, store: S) -> Self {
        let high_scores = HighScores::load(&store);
        Self {
            engine,
            screen: Screen::Menu,
            selection: Difficulty::default(),
            high_scores,
            store,
            clock: None,
            quit_requested: false,
        }
    }

    pub fn handle(&mut self, command: Command, now: Duration) -> Option<SessionEvent> {
        if command == Command::Quit {
            self.quit_requested = true;
            return self.is_in_progress().then(|| self.finish(Outcome::Abandoned));
        }

        match self.screen {
            Screen::Menu => match command {
                Command::Steer(Direction::Up) => {
                    self.selection = self.selection.previous();
                    None
                }
                Command::Steer(Direction::Down) => {
                    self.selection = self.selection.next();
                    None
                }
                Command::Confirm => Some(self.start(self.selection, now)),
                Command::Choose(difficulty) => Some(self.start(difficulty, now)),
                _ => None,
            },
            Screen::Game => match command {
                Command::Steer(direction) => {
                    self.engine.set_pending_direction(direction);
                    None
                }
                Command::TogglePause => self.toggle_pause(),
                Command::Restart if !self.is_in_progress() => {
                    Some(self.start(self.engine.difficulty(), now))
                }
                Command::Menu => self.return_to_menu(),
                _ => None,
            },
        }
    }

    pub fn start(&mut self, difficulty: Difficulty, now: Duration) -> SessionEvent {
        self.engine.reset(difficulty);
        self.selection = difficulty;
        self.screen = Screen::Game;
        self.clock = Some(TickClock { last: now });
        info!(
            "Starting {} session, best so far {}",
            difficulty,
            self.high_scores.get(difficulty)
        );
        SessionEvent::Started(difficulty)
    }

    pub fn toggle_pause(&mut self) -> Option<SessionEvent> {
        if !self.is_in_progress() || !self.engine.toggle_pause() {
            return None;
        }
        match self.engine.status() {
            Status::Paused => Some(SessionEvent::Paused),
            _ => Some(SessionEvent::Resumed),
        }
    }

    /// Called every frame with the time since startup. Ticks the engine when
    /// the current interval has elapsed.
    pub fn advance(&mut self, now: Duration) -> Option<SessionEvent> {
        if self.engine.status() != Status::Running {
            return None;
        }
        let interval = self.engine.interval();
        let due = match self.clock.as_mut() {
            Some(clock) => clock.due(now, interval),
            None => false,
        };
        if !due {
            return None;
        }

        match self.engine.tick() {
            TickOutcome::Crashed(_) => Some(self.finish(Outcome::Crashed)),
            TickOutcome::Won => Some(self.finish(Outcome::Won)),
            TickOutcome::Moved | TickOutcome::Ate | TickOutcome::Idle => None,
        }
    }

    pub fn return_to_menu(&mut self) -> Option<SessionEvent> {
        let event = self.is_in_progress().then(|| self.finish(Outcome::Abandoned));
        self.screen = Screen::Menu;
        event
    }

    fn finish(&mut self, outcome: Outcome) -> SessionEvent {
        self.clock = None;
        let difficulty = self.engine.difficulty();
        let score = self.engine.score();
        let new_best = self.high_scores.record(difficulty, score);
        if new_best {
            if let Err(e) = self.high_scores.save(&mut self.store) {
                warn!("Failed to save high scores: {}", e);
            }
        }

        let summary = SessionSummary {
            difficulty,
            score,
            outcome,
            new_best,
            ended_at: Local::now(),
        };
        info!("{}", summary);
        SessionEvent::Ended(summary)
    }

    pub fn is_in_progress(&self) -> bool {
        self.clock.is_some()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selection(&self) -> Difficulty {
        self.selection
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
