//! Board geometry, pacing and file locations.

use std::time::Duration;

use crate::game::Position;

pub const CANVAS_WIDTH: i32 = 400;
pub const CANVAS_HEIGHT: i32 = 400;
pub const CELL_SIZE: i32 = 20;

/// Score at which the session is won
pub const WIN_SCORE: u32 = 20;

/// Fastest tick interval any difficulty can reach
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Points between two speed-ups
pub const SPEEDUP_EVERY: u32 = 5;

pub const SNAKE_START: [Position; 2] = [Position { x: 10, y: 10 }, Position { x: 9, y: 10 }];

pub const WINDOW_TITLE: &str = "Snake";
pub const RESOURCE_DIR: &str = "./resources";
pub const MUSIC_PATH: &str = "/music.ogg";
pub const STORAGE_FILE: &str = "snake_storage.json";
pub const LOG_FILE: &str = "snake.log";

/// Runtime view of the constants above.
///
/// The engine and renderer only ever read from this, which lets tests play on
/// boards other than the shipped 20x20 one.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub cell_size: i32,
    pub win_score: u32,
    pub min_interval: Duration,
    pub speedup_every: u32,
    pub snake_start: Vec<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            win_score: WIN_SCORE,
            min_interval: MIN_INTERVAL,
            speedup_every: SPEEDUP_EVERY,
            snake_start: SNAKE_START.to_vec(),
        }
    }
}

impl GameConfig {
    /// Number of columns on the board
    pub fn grid_width(&self) -> i32 {
        self.canvas_width / self.cell_size
    }

    /// Number of rows on the board
    pub fn grid_height(&self) -> i32 {
        self.canvas_height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.grid_width() * self.grid_height()) as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width() && pos.y >= 0 && pos.y < self.grid_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 20);
        assert_eq!(config.grid_height(), 20);
        assert_eq!(config.cell_count(), 400);
    }

    #[test]
    fn test_contains() {
        let config = GameConfig::default();
        assert!(config.contains(Position::new(0, 0)));
        assert!(config.contains(Position::new(19, 19)));
        assert!(!config.contains(Position::new(-1, 10)));
        assert!(!config.contains(Position::new(20, 10)));
        assert!(!config.contains(Position::new(5, 20)));
    }
}
