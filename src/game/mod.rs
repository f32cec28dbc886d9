//! Board state and the per-tick update. No rendering, audio or storage here.

pub mod difficulty;
pub mod engine;
pub mod food;
pub mod position;

pub use difficulty::{Difficulty, DifficultyInfo};
pub use engine::{Collision, GameEngine, Snapshot, Status, TickOutcome};
pub use position::{Direction, Position};
