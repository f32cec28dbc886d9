use ggez::graphics::Color;

use crate::game::Difficulty;

pub const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.7);
pub const EYE_COLOR: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const GAME_OVER_COLOR: Color = Color::new(0.937, 0.267, 0.267, 1.0);
pub const MENU_HINT_COLOR: Color = Color::new(0.61, 0.64, 0.69, 1.0);

/// Colours for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub background: Color,
    pub grid: Color,
}

impl Theme {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Theme {
                snake_head: Color::from_rgb_u32(0x4ade80),
                snake_body: Color::from_rgb_u32(0x86efac),
                food: Color::from_rgb_u32(0xfacc15),
                background: Color::from_rgb_u32(0x1f2937),
                grid: Color::from_rgba(156, 163, 175, 26),
            },
            Difficulty::Medium => Theme {
                snake_head: Color::from_rgb_u32(0x60a5fa),
                snake_body: Color::from_rgb_u32(0x93c5fd),
                food: Color::from_rgb_u32(0xf97316),
                background: Color::from_rgb_u32(0x1e293b),
                grid: Color::from_rgba(156, 163, 175, 38),
            },
            Difficulty::Hard => Theme {
                snake_head: Color::from_rgb_u32(0xf87171),
                snake_body: Color::from_rgb_u32(0xfca5a5),
                food: Color::from_rgb_u32(0xa855f7),
                background: Color::from_rgb_u32(0x171717),
                grid: Color::from_rgba(163, 163, 163, 51),
            },
        }
    }
}

/// Straight-line blend between two colours, `t` in `[0, 1]`.
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    Color::new(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}
