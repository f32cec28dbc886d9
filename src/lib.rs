//! Snake on a fixed 20x20 board: three difficulties, speed-ups every five
//! points, a win at twenty, and a best score per difficulty kept on disk.
//!
//! - `game`: the board and its per-tick update
//! - `session`: the one controller that owns all mutable state
//! - `render`: draw commands for the current state and the ggez painter
//! - `scores`: the high-score table and its key-value store
//! - `app`: the ggez event handler tying it together

pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod scores;
pub mod session;

pub use error::{Result, SnakeError};
