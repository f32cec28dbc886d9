use ggez::event;
use log::info;

use snake_canvas::app::SnakeApp;
use snake_canvas::config::{self, CANVAS_HEIGHT, CANVAS_WIDTH};
use snake_canvas::logging;

fn main() -> ggez::GameResult {
    logging::init(config::LOG_FILE)?;
    info!("Starting {}", config::WINDOW_TITLE);

    let resource_dir = std::path::PathBuf::from(config::RESOURCE_DIR);
    let window_setup = ggez::conf::WindowSetup::default()
        .title(config::WINDOW_TITLE)
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("snake_canvas", "snake_canvas")
        .add_resource_path(resource_dir)
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = SnakeApp::new(&mut ctx);
    event::run(ctx, event_loop, app)
}
