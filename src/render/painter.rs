use ggez::graphics::{self, Color, DrawParam, Mesh, MeshData, Rect, TextAlign, TextLayout, Vertex};
use ggez::{Context, GameResult};
use std::f32::consts::PI;

use super::scene::{Align, DrawCommand};
use super::theme::mix;

/// Spokes used to approximate the round falloff of the food gradient.
const RADIAL_SPOKES: usize = 16;

/// Draws one frame. Commands are painted in order, later ones on top.
pub fn paint(ctx: &mut Context, commands: &[DrawCommand]) -> GameResult {
    let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);

    for command in commands {
        match command {
            DrawCommand::Fill { rect, color } => {
                let mesh = Mesh::new_rectangle(ctx, graphics::DrawMode::fill(), *rect, *color)?;
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::Line { from, to, width, color } => {
                let mesh = Mesh::new_line(ctx, &[*from, *to], *width, *color)?;
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::LinearGradient { rect, from, to } => {
                let (vertices, indices) = linear_gradient(*rect, *from, *to);
                let mesh = Mesh::from_data(
                    ctx,
                    MeshData {
                        vertices: &vertices,
                        indices: &indices,
                    },
                );
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::RadialGradient { rect, inner, outer } => {
                let (vertices, indices) = radial_gradient(*rect, *inner, *outer);
                let mesh = Mesh::from_data(
                    ctx,
                    MeshData {
                        vertices: &vertices,
                        indices: &indices,
                    },
                );
                canvas.draw(&mesh, DrawParam::default());
            }
            DrawCommand::Text {
                text,
                at,
                size,
                align,
                color,
            } => {
                let mut label = graphics::Text::new(text.as_str());
                label.set_scale(*size).set_layout(layout_for(*align));
                canvas.draw(&label, DrawParam::default().dest(*at).color(*color));
            }
        }
    }

    canvas.finish(ctx)?;
    Ok(())
}

fn layout_for(align: Align) -> TextLayout {
    match align {
        Align::Left => TextLayout {
            h_align: TextAlign::Begin,
            v_align: TextAlign::Begin,
        },
        Align::Right => TextLayout {
            h_align: TextAlign::End,
            v_align: TextAlign::Begin,
        },
        Align::Center => TextLayout {
            h_align: TextAlign::Middle,
            v_align: TextAlign::Middle,
        },
    }
}

fn vertex(x: f32, y: f32, rect: Rect, color: Color) -> Vertex {
    Vertex {
        position: [x, y],
        uv: [(x - rect.x) / rect.w, (y - rect.y) / rect.h],
        color: color.into(),
    }
}

/// Quad with `from` in the top-left corner and `to` in the bottom-right one.
fn linear_gradient(rect: Rect, from: Color, to: Color) -> (Vec<Vertex>, Vec<u32>) {
    let mid = mix(from, to, 0.5);
    let vertices = vec![
        vertex(rect.x, rect.y, rect, from),
        vertex(rect.x + rect.w, rect.y, rect, mid),
        vertex(rect.x + rect.w, rect.y + rect.h, rect, to),
        vertex(rect.x, rect.y + rect.h, rect, mid),
    ];
    (vertices, vec![0, 1, 2, 0, 2, 3])
}

/// Fan of spokes from the centre: solid `inner` out to a quarter of the side,
/// blending to `outer` at half the side and staying `outer` into the corners.
fn radial_gradient(rect: Rect, inner: Color, outer: Color) -> (Vec<Vertex>, Vec<u32>) {
    let cx = rect.x + rect.w / 2.0;
    let cy = rect.y + rect.h / 2.0;
    let half = rect.w.min(rect.h) / 2.0;
    let inner_radius = half / 2.0;

    let mut vertices = Vec::with_capacity(1 + RADIAL_SPOKES * 3);
    vertices.push(vertex(cx, cy, rect, inner));
    for i in 0..RADIAL_SPOKES {
        let angle = i as f32 * 2.0 * PI / RADIAL_SPOKES as f32;
        let (dy, dx) = angle.sin_cos();
        // Stretch the spoke so it ends on the square's edge.
        let reach = half / dx.abs().max(dy.abs());
        vertices.push(vertex(cx + dx * inner_radius, cy + dy * inner_radius, rect, inner));
        vertices.push(vertex(cx + dx * half, cy + dy * half, rect, outer));
        vertices.push(vertex(cx + dx * reach, cy + dy * reach, rect, outer));
    }

    let mut indices = Vec::with_capacity(RADIAL_SPOKES * 15);
    for i in 0..RADIAL_SPOKES {
        let a = 1 + 3 * i as u32;
        let b = 1 + 3 * ((i + 1) % RADIAL_SPOKES) as u32;
        indices.extend_from_slice(&[0, a, b]);
        // inner ring -> circle, circle -> square edge
        indices.extend_from_slice(&[a, a + 1, b + 1, a, b + 1, b]);
        indices.extend_from_slice(&[a + 1, a + 2, b + 2, a + 1, b + 2, b + 1]);
    }
    (vertices, indices)
}
