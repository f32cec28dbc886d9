use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyInfo {
    /// Tick interval at the start of a session
    pub initial_interval: Duration,
    /// Amount the interval shrinks at every speed-up
    pub speed_increment: Duration,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn get_info(&self) -> DifficultyInfo {
        match self {
            Difficulty::Easy => DifficultyInfo {
                initial_interval: Duration::from_millis(200),
                speed_increment: Duration::from_millis(5),
            },
            Difficulty::Medium => DifficultyInfo {
                initial_interval: Duration::from_millis(150),
                speed_increment: Duration::from_millis(10),
            },
            Difficulty::Hard => DifficultyInfo {
                initial_interval: Duration::from_millis(100),
                speed_increment: Duration::from_millis(15),
            },
        }
    }

    /// Next entry down the menu, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Next entry up the menu, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.pad(name)
    }
}
