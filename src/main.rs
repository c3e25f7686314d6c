use std::process;

use chess_board::config::{ConfigError, Settings};
use chess_board::render::Game;
use env_logger::Env;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder, GameResult};
use log::{error, info};

fn main() {
    let settings = match Settings::from_args(std::env::args_os()) {
        Ok(settings) => settings,
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let env = Env::default().filter_or("CHESS_LOG", settings.log_level().to_string());
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(&settings) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(settings: &Settings) -> GameResult<()> {
    let (mut ctx, mut event_loop) = ContextBuilder::new("chess_board", "chess_board")
        .window_setup(WindowSetup::default().title(&settings.title))
        .window_mode(
            WindowMode::default().dimensions(settings.window_width, settings.window_height),
        )
        .add_resource_path(settings.resource_dir.clone())
        .build()?;
    info!(
        "window {}x{}, resources in {}",
        settings.window_width,
        settings.window_height,
        settings.resource_dir.display()
    );
    let mut game = Game::new(&mut ctx, settings)?;
    event::run(&mut ctx, &mut event_loop, &mut game)
}
