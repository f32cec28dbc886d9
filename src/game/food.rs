//! Food placement.

use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

use super::position::Position;
use crate::config::GameConfig;

/// Random draws tried before falling back to sampling the free cells directly.
const RANDOM_ATTEMPTS: usize = 64;

/// Picks a uniformly random cell that is not covered by `snake`.
///
/// Returns `None` when the snake occupies every cell of the board.
pub fn place_food<R: Rng>(rng: &mut R, config: &GameConfig, snake: &VecDeque<Position>) -> Option<Position> {
    if snake.len() >= config.cell_count() {
        return None;
    }

    for _ in 0..RANDOM_ATTEMPTS {
        let pos = Position {
            x: rng.gen_range(0..config.grid_width()),
            y: rng.gen_range(0..config.grid_height()),
        };
        if !snake.contains(&pos) {
            return Some(pos);
        }
    }

    // Crowded board: draw from the complement instead of spinning.
    let occupied: HashSet<Position> = snake.iter().copied().collect();
    (0..config.grid_height())
        .flat_map(|y| (0..config.grid_width()).map(move |x| Position::new(x, y)))
        .filter(|pos| !occupied.contains(pos))
        .choose(rng)
}
