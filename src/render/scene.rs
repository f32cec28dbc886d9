//! Turns the session into an ordered list of draw commands.
//!
//! Everything here is a pure read of the state; the painter is the only part
//! that talks to the graphics context.

use ggez::graphics::{Color, Rect};
use ggez::mint::Point2;

use super::theme::{self, Theme};
use crate::config::GameConfig;
use crate::game::{Difficulty, Direction, GameEngine, Position, Status};
use crate::scores::{HighScores, KeyValueStore};
use crate::session::{Screen, Session};

const SCORE_TEXT_SIZE: f32 = 16.0;
const STATUS_TEXT_SIZE: f32 = 32.0;
const FINAL_SCORE_TEXT_SIZE: f32 = 18.0;
const TEXT_MARGIN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Anchored at the top-left corner
    Left,
    /// Anchored at the top-right corner
    Right,
    /// Centred on the anchor both ways
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point2<f32>,
        to: Point2<f32>,
        width: f32,
        color: Color,
    },
    /// Blends from the top-left corner to the bottom-right corner
    LinearGradient {
        rect: Rect,
        from: Color,
        to: Color,
    },
    /// Solid `inner` out to a quarter of the side, fading to `outer` at half
    RadialGradient {
        rect: Rect,
        inner: Color,
        outer: Color,
    },
    Text {
        text: String,
        at: Point2<f32>,
        size: f32,
        align: Align,
        color: Color,
    },
}

pub fn compose<S: KeyValueStore>(session: &Session<S>) -> Vec<DrawCommand> {
    match session.screen() {
        Screen::Menu => compose_menu(
            session.engine().config(),
            session.selection(),
            session.high_scores(),
        ),
        Screen::Game => {
            let engine = session.engine();
            compose_game(engine, session.high_scores().get(engine.difficulty()))
        }
    }
}

pub fn compose_game(engine: &GameEngine, high_score: u32) -> Vec<DrawCommand> {
    let config = engine.config();
    let theme = Theme::for_difficulty(engine.difficulty());
    let width = config.canvas_width as f32;
    let height = config.canvas_height as f32;
    let mut commands = Vec::new();

    commands.push(DrawCommand::Fill {
        rect: Rect::new(0.0, 0.0, width, height),
        color: theme.background,
    });
    push_grid(&mut commands, config, theme.grid);

    commands.push(DrawCommand::RadialGradient {
        rect: cell_rect(config, engine.food()),
        inner: Color::WHITE,
        outer: theme.food,
    });

    for (i, segment) in engine.snake().iter().enumerate() {
        let rect = cell_rect(config, *segment);
        if i == 0 {
            commands.push(DrawCommand::LinearGradient {
                rect,
                from: theme.snake_head,
                to: theme.snake_body,
            });
            for eye in eye_rects(rect, engine.direction()) {
                commands.push(DrawCommand::Fill {
                    rect: eye,
                    color: theme::EYE_COLOR,
                });
            }
        } else {
            commands.push(DrawCommand::LinearGradient {
                rect,
                from: theme.snake_body,
                to: theme.snake_head,
            });
        }
    }

    commands.push(text(
        format!("Score: {}", engine.score()),
        TEXT_MARGIN,
        TEXT_MARGIN,
        SCORE_TEXT_SIZE,
        Align::Left,
        theme::TEXT_COLOR,
    ));
    commands.push(text(
        format!("High Score: {}", high_score),
        width - TEXT_MARGIN,
        TEXT_MARGIN,
        SCORE_TEXT_SIZE,
        Align::Right,
        theme::TEXT_COLOR,
    ));

    let headline = match engine.status() {
        Status::Running => return commands,
        Status::Paused => ("PAUSED", theme::TEXT_COLOR, height / 2.0),
        Status::GameOver => ("GAME OVER", theme::GAME_OVER_COLOR, height / 2.0 - 20.0),
        Status::GameWon => ("YOU WIN!", theme.snake_head, height / 2.0 - 20.0),
    };
    commands.push(DrawCommand::Fill {
        rect: Rect::new(0.0, 0.0, width, height),
        color: theme::OVERLAY_COLOR,
    });
    let (label, color, y) = headline;
    commands.push(text(label.to_string(), width / 2.0, y, STATUS_TEXT_SIZE, Align::Center, color));
    if engine.status().is_terminal() {
        commands.push(text(
            format!("Final Score: {}", engine.score()),
            width / 2.0,
            height / 2.0 + 20.0,
            FINAL_SCORE_TEXT_SIZE,
            Align::Center,
            theme::TEXT_COLOR,
        ));
    }
    commands
}

pub fn compose_menu(config: &GameConfig, selection: Difficulty, high_scores: &HighScores) -> Vec<DrawCommand> {
    let theme = Theme::for_difficulty(selection);
    let width = config.canvas_width as f32;
    let height = config.canvas_height as f32;
    let center = width / 2.0;

    let mut commands = vec![
        DrawCommand::Fill {
            rect: Rect::new(0.0, 0.0, width, height),
            color: theme.background,
        },
        text("SNAKE".to_string(), center, 70.0, 40.0, Align::Center, theme::TEXT_COLOR),
        text(
            "Select Difficulty".to_string(),
            center,
            130.0,
            20.0,
            Align::Center,
            theme::MENU_HINT_COLOR,
        ),
    ];

    for (i, diff) in Difficulty::ALL.iter().enumerate() {
        let selected = *diff == selection;
        let marker = if selected { ">" } else { " " };
        let color = if selected {
            Theme::for_difficulty(*diff).snake_head
        } else {
            theme::TEXT_COLOR
        };
        commands.push(text(
            format!("{} {}. {:<6}  best {}", marker, i + 1, diff, high_scores.get(*diff)),
            center,
            190.0 + i as f32 * 50.0,
            22.0,
            Align::Center,
            color,
        ));
    }

    commands.push(text(
        "Up/Down + Enter or 1-3 to start".to_string(),
        center,
        height - 60.0,
        12.0,
        Align::Center,
        theme::MENU_HINT_COLOR,
    ));
    commands.push(text(
        "Arrows steer, Space/P pause, Esc menu, Q quit".to_string(),
        center,
        height - 35.0,
        12.0,
        Align::Center,
        theme::MENU_HINT_COLOR,
    ));
    commands
}

fn push_grid(commands: &mut Vec<DrawCommand>, config: &GameConfig, color: Color) {
    let width = config.canvas_width as f32;
    let height = config.canvas_height as f32;
    let step = config.cell_size as usize;

    for x in (config.cell_size..config.canvas_width).step_by(step) {
        commands.push(DrawCommand::Line {
            from: Point2 { x: x as f32, y: 0.0 },
            to: Point2 { x: x as f32, y: height },
            width: 1.0,
            color,
        });
    }
    for y in (config.cell_size..config.canvas_height).step_by(step) {
        commands.push(DrawCommand::Line {
            from: Point2 { x: 0.0, y: y as f32 },
            to: Point2 { x: width, y: y as f32 },
            width: 1.0,
            color,
        });
    }
}

fn cell_rect(config: &GameConfig, pos: Position) -> Rect {
    let size = config.cell_size as f32;
    Rect::new(pos.x as f32 * size, pos.y as f32 * size, size, size)
}

/// Two eyes across the middle of the head, side by side relative to travel.
pub fn eye_rects(head: Rect, direction: Direction) -> [Rect; 2] {
    let g = head.w;
    let eye = g / 5.0;
    if direction.is_horizontal() {
        [
            Rect::new(head.x + g / 2.0, head.y + g / 4.0 - eye / 2.0, eye, eye),
            Rect::new(head.x + g / 2.0, head.y + 3.0 * g / 4.0 - eye / 2.0, eye, eye),
        ]
    } else {
        [
            Rect::new(head.x + g / 4.0 - eye / 2.0, head.y + g / 2.0, eye, eye),
            Rect::new(head.x + 3.0 * g / 4.0 - eye / 2.0, head.y + g / 2.0, eye, eye),
        ]
    }
}

fn text(text: String, x: f32, y: f32, size: f32, align: Align, color: Color) -> DrawCommand {
    DrawCommand::Text {
        text,
        at: Point2 { x, y },
        size,
        align,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snapshot;
    use std::time::Duration;

    fn engine_at(status_after_tick: bool) -> GameEngine {
        let mut engine = GameEngine::seeded(GameConfig::default(), Difficulty::Easy, 5);
        if status_after_tick {
            engine.restore(Snapshot {
                snake: vec![Position::new(0, 10), Position::new(1, 10)],
                direction: Direction::Left,
                food: Position::new(4, 4),
                score: 3,
                interval: Duration::from_millis(200),
            });
            engine.tick();
        }
        engine
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_running_frame_order() {
        let engine = engine_at(false);
        let commands = compose_game(&engine, 9);

        assert!(matches!(commands[0], DrawCommand::Fill { .. }));
        // 19 vertical + 19 horizontal grid lines on a 20x20 board
        let lines = commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count();
        assert_eq!(lines, 38);
        assert!(matches!(commands[1 + lines], DrawCommand::RadialGradient { .. }));
        assert!(matches!(commands[2 + lines], DrawCommand::LinearGradient { .. }));
        assert_eq!(texts(&commands), vec!["Score: 0", "High Score: 9"]);
        assert!(matches!(commands.last(), Some(DrawCommand::Text { .. })));
    }

    #[test]
    fn test_food_drawn_at_food_cell() {
        let engine = engine_at(false);
        let food = engine.food();
        let commands = compose_game(&engine, 0);
        let rect = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::RadialGradient { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(rect, Rect::new(food.x as f32 * 20.0, food.y as f32 * 20.0, 20.0, 20.0));
    }

    #[test]
    fn test_game_over_overlay() {
        let engine = engine_at(true);
        let commands = compose_game(&engine, 3);
        assert_eq!(
            texts(&commands),
            vec!["Score: 3", "High Score: 3", "GAME OVER", "Final Score: 3"]
        );
        let overlay = commands.iter().any(|c| {
            matches!(c, DrawCommand::Fill { color, .. } if *color == theme::OVERLAY_COLOR)
        });
        assert!(overlay);
    }

    #[test]
    fn test_paused_overlay_has_no_final_score() {
        let mut engine = engine_at(false);
        engine.toggle_pause();
        let commands = compose_game(&engine, 0);
        assert_eq!(texts(&commands), vec!["Score: 0", "High Score: 0", "PAUSED"]);
    }

    #[test]
    fn test_eyes_follow_direction() {
        let head = Rect::new(200.0, 200.0, 20.0, 20.0);
        let [a, b] = eye_rects(head, Direction::Right);
        assert_eq!(a.x, b.x);
        assert_eq!(a.x, 210.0);
        assert_eq!(a.y, 203.0);
        assert_eq!(b.y, 213.0);

        let [c, d] = eye_rects(head, Direction::Up);
        assert_eq!(c.y, d.y);
        assert_eq!(c.x, 203.0);
        assert_eq!(d.x, 213.0);
    }

    #[test]
    fn test_menu_lists_best_scores() {
        let mut scores = HighScores::default();
        scores.record(Difficulty::Hard, 14);
        let commands = compose_menu(&GameConfig::default(), Difficulty::Hard, &scores);
        let listed = texts(&commands);
        assert!(listed.iter().any(|t| t.contains("Hard") && t.contains("best 14")));
        assert!(listed.iter().any(|t| t.starts_with("> 3.")));
    }
}
