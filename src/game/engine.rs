use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::time::Duration;

use super::difficulty::Difficulty;
use super::food::place_food;
use super::position::{Direction, Position};
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
    GameWon,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::GameOver | Status::GameWon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
    Won,
}

/// An explicit board layout for [`GameEngine::restore`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub interval: Duration,
}

/// Owns the whole board and advances it one cell per tick.
pub struct GameEngine {
    config: GameConfig,
    difficulty: Difficulty,
    snake: VecDeque<Position>,
    food: Position,
    score: u32,
    direction: Direction,
    pending_direction: Direction,
    interval: Duration,
    status: Status,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig, difficulty: Difficulty) -> Self {
        Self::with_rng(config, difficulty, StdRng::from_entropy())
    }

    /// Same as [`GameEngine::new`] with a reproducible food sequence.
    pub fn seeded(config: GameConfig, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(config, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, difficulty: Difficulty, rng: StdRng) -> Self {
        let mut engine = Self {
            snake: VecDeque::new(),
            food: Position::new(0, 0),
            score: 0,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            interval: difficulty.get_info().initial_interval,
            status: Status::Running,
            difficulty,
            config,
            rng,
        };
        engine.reset(difficulty);
        engine
    }

    /// Puts an arbitrary layout on the board with status `Running`.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.snake = snapshot.snake.into_iter().collect();
        self.direction = snapshot.direction;
        self.pending_direction = snapshot.direction;
        self.food = snapshot.food;
        self.score = snapshot.score;
        self.interval = snapshot.interval;
        self.status = Status::Running;
    }

    pub fn reset(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.snake = self.config.snake_start.iter().copied().collect();
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.interval = difficulty.get_info().initial_interval;
        self.status = Status::Running;
        match place_food(&mut self.rng, &self.config, &self.snake) {
            Some(food) => self.food = food,
            None => self.status = Status::GameWon,
        }
    }

    /// Records the direction for the next tick. Reversals and input outside a
    /// running game are dropped.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.status != Status::Running || direction.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Flips between running and paused. Returns whether the state changed.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver | Status::GameWon => return false,
        };
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::Idle;
        }

        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);

        // Checked against the body before the tail moves.
        let collision = if !self.config.contains(new_head) {
            Some(Collision::Wall)
        } else if self.snake.contains(&new_head) {
            Some(Collision::SelfHit)
        } else {
            None
        };
        if let Some(collision) = collision {
            debug!("{:?} collision at ({}, {})", collision, new_head.x, new_head.y);
            self.status = Status::GameOver;
            return TickOutcome::Crashed(collision);
        }

        self.snake.push_front(new_head);

        if new_head != self.food {
            self.snake.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        let board_full = match place_food(&mut self.rng, &self.config, &self.snake) {
            Some(food) => {
                self.food = food;
                false
            }
            None => true,
        };

        if self.score % self.config.speedup_every == 0 {
            let step = self.difficulty.get_info().speed_increment;
            self.interval = self.interval.saturating_sub(step).max(self.config.min_interval);
        }

        if self.score >= self.config.win_score || board_full {
            self.status = Status::GameWon;
            return TickOutcome::Won;
        }
        TickOutcome::Ate
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::seeded(GameConfig::default(), Difficulty::Medium, 42)
    }

    fn layout(snake: &[(i32, i32)], direction: Direction, food: (i32, i32), score: u32) -> Snapshot {
        Snapshot {
            snake: snake.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            direction,
            food: Position::new(food.0, food.1),
            score,
            interval: Difficulty::Medium.get_info().initial_interval,
        }
    }

    #[test]
    fn test_reset_state() {
        let mut engine = engine();
        engine.reset(Difficulty::Hard);
        assert_eq!(engine.snake().len(), 2);
        assert_eq!(engine.head(), Position::new(10, 10));
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.interval(), Duration::from_millis(100));
        assert!(!engine.snake().contains(&engine.food()));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        let mut engine = engine();
        engine.restore(layout(&[(10, 10), (9, 10)], Direction::Right, (0, 0), 0));

        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.head(), Position::new(11, 10));
        assert_eq!(engine.snake().len(), 2);
        assert_eq!(engine.snake()[1], Position::new(10, 10));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut engine = engine();
        engine.restore(layout(&[(10, 10), (9, 10)], Direction::Right, (11, 10), 0));

        assert_eq!(engine.tick(), TickOutcome::Ate);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake().len(), 3);
        assert!(!engine.snake().contains(&engine.food()));
    }

    #[test]
    fn test_wall_ends_game() {
        let mut engine = engine();
        engine.restore(layout(&[(0, 10), (1, 10)], Direction::Left, (5, 5), 3));

        assert_eq!(engine.tick(), TickOutcome::Crashed(Collision::Wall));
        assert_eq!(engine.status(), Status::GameOver);
        assert_eq!(engine.head(), Position::new(0, 10));
        assert_eq!(engine.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_tail_cell_counts_as_collision() {
        let mut engine = engine();
        // Square loop: moving down from (5,5) lands on the current tail (5,6).
        engine.restore(layout(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Left, (0, 0), 0));
        engine.set_pending_direction(Direction::Down);

        assert_eq!(engine.tick(), TickOutcome::Crashed(Collision::SelfHit));
        assert_eq!(engine.status(), Status::GameOver);
    }

    #[test]
    fn test_reverse_is_ignored() {
        let mut engine = engine();
        assert!(!engine.set_pending_direction(Direction::Left));
        engine.tick();
        assert_eq!(engine.direction(), Direction::Right);
    }

    #[test]
    fn test_last_pending_direction_wins() {
        let mut engine = engine();
        assert!(engine.set_pending_direction(Direction::Up));
        assert!(engine.set_pending_direction(Direction::Down));
        // Still checked against the applied direction, not the pending one.
        assert!(!engine.set_pending_direction(Direction::Left));
        engine.tick();
        assert_eq!(engine.direction(), Direction::Down);
        assert_eq!(engine.head(), Position::new(10, 11));
    }

    #[test]
    fn test_direction_ignored_while_paused() {
        let mut engine = engine();
        assert!(engine.toggle_pause());
        assert!(!engine.set_pending_direction(Direction::Up));
        assert_eq!(engine.tick(), TickOutcome::Idle);
        assert!(engine.toggle_pause());
        assert_eq!(engine.status(), Status::Running);
    }

    #[test]
    fn test_pause_not_allowed_after_game_over() {
        let mut engine = engine();
        engine.restore(layout(&[(0, 10), (1, 10)], Direction::Left, (5, 5), 0));
        engine.tick();
        assert!(!engine.toggle_pause());
        assert_eq!(engine.status(), Status::GameOver);
    }

    #[test]
    fn test_speed_up_every_five_points() {
        let mut engine = engine();
        engine.restore(layout(&[(10, 10), (9, 10)], Direction::Right, (11, 10), 4));

        engine.tick();
        assert_eq!(engine.score(), 5);
        assert_eq!(engine.interval(), Duration::from_millis(140));
    }

    #[test]
    fn test_interval_floored_at_minimum() {
        let mut engine = engine();
        let mut snapshot = layout(&[(10, 10), (9, 10)], Direction::Right, (11, 10), 9);
        snapshot.interval = Duration::from_millis(55);
        engine.restore(snapshot);

        engine.tick();
        assert_eq!(engine.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_reaching_win_score() {
        let mut engine = engine();
        engine.restore(layout(&[(10, 10), (9, 10)], Direction::Right, (11, 10), 19));

        assert_eq!(engine.tick(), TickOutcome::Won);
        assert_eq!(engine.score(), 20);
        assert_eq!(engine.status(), Status::GameWon);
        assert!(!engine.toggle_pause());
    }

    #[test]
    fn test_invariants_over_long_random_run() {
        let mut engine = GameEngine::seeded(GameConfig::default(), Difficulty::Hard, 99);
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        let mut last_interval = engine.interval();

        for step in 0..2_000 {
            if engine.status().is_terminal() {
                engine.reset(Difficulty::Hard);
                last_interval = engine.interval();
            }
            // Steer greedily towards the food, keeping away from walls.
            let head = engine.head();
            let food = engine.food();
            let wanted = if food.x > head.x {
                Direction::Right
            } else if food.x < head.x {
                Direction::Left
            } else if food.y > head.y {
                Direction::Down
            } else {
                Direction::Up
            };
            if !engine.set_pending_direction(wanted) {
                engine.set_pending_direction(turns[step % turns.len()]);
            }

            let before_len = engine.snake().len();
            let before_score = engine.score();
            let applied_from = engine.direction();
            let outcome = engine.tick();

            assert!(!engine.direction().is_opposite(applied_from));
            match outcome {
                TickOutcome::Moved => assert_eq!(engine.snake().len(), before_len),
                TickOutcome::Ate | TickOutcome::Won => {
                    assert_eq!(engine.snake().len(), before_len + 1);
                    assert_eq!(engine.score(), before_score + 1);
                }
                TickOutcome::Crashed(_) | TickOutcome::Idle => {}
            }
            if !engine.status().is_terminal() {
                assert!(!engine.snake().contains(&engine.food()));
            }
            assert!(engine.interval() <= last_interval);
            assert!(engine.interval() >= engine.config().min_interval);
            last_interval = engine.interval();
        }
    }
}
