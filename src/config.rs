use std::ffi::OsString;
use std::path::PathBuf;

use clap::{crate_version, App, Arg};
use derive_builder::Builder;
use log::LevelFilter;
use thiserror::Error;

use crate::session::EnemyClick;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("--fps expects a positive whole number, got {0:?}")]
    InvalidFps(String),
    #[error("incomplete settings: {0}")]
    Incomplete(String),
}

/// Settings holds everything the window and asset loader need. The board
/// geometry itself is fixed and lives in `Geometry::STANDARD`.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default)]
pub struct Settings {
    #[builder(setter(into))]
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Directory ggez mounts as the resource root.
    #[builder(setter(into))]
    pub resource_dir: PathBuf,
    /// Resource paths are rooted at `resource_dir`, hence the leading slash.
    #[builder(setter(into))]
    pub board_image: String,
    #[builder(setter(into))]
    pub pieces_image: String,
    pub target_fps: u32,
    pub enemy_click: EnemyClick,
    pub verbosity: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: "Chess Game!".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            resource_dir: PathBuf::from("assets"),
            board_image: "/images/brown_chessboard.png".to_string(),
            pieces_image: "/images/chess_pieces.png".to_string(),
            target_fps: 60,
            enemy_click: EnemyClick::Reselect,
            verbosity: 0,
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("chess_board")
        .version(crate_version!())
        .about("Two-player chess board: click a piece, then click where it goes.")
        .arg(
            Arg::with_name("assets")
                .long("assets")
                .value_name("DIR")
                .takes_value(true)
                .help("Resource directory holding images/ (default: assets)"),
        )
        .arg(
            Arg::with_name("fps")
                .long("fps")
                .value_name("N")
                .takes_value(true)
                .help("Frames per second (default: 60)"),
        )
        .arg(
            Arg::with_name("capture")
                .long("capture")
                .help("Clicking an enemy piece with a piece selected tries to capture it"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More log output, repeat for more"),
        )
}

impl Settings {
    /// Parses command line arguments, the first item being the program name.
    pub fn from_args<I, T>(args: I) -> Result<Settings, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        let mut builder = SettingsBuilder::default();
        if let Some(dir) = matches.value_of("assets") {
            builder.resource_dir(dir);
        }
        if let Some(raw) = matches.value_of("fps") {
            match raw.parse::<u32>() {
                Ok(fps) if fps > 0 => {
                    builder.target_fps(fps);
                }
                _ => return Err(ConfigError::InvalidFps(raw.to_string())),
            }
        }
        if matches.is_present("capture") {
            builder.enemy_click(EnemyClick::Capture);
        }
        builder.verbosity(matches.occurrences_of("verbose"));
        builder.build().map_err(ConfigError::Incomplete)
    }

    /// Default log level; `CHESS_LOG` still overrides it.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let settings = Settings::from_args(vec!["chess_board"]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_level(), LevelFilter::Info);
    }

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::from_args(vec![
            "chess_board",
            "--assets",
            "/tmp/res",
            "--fps",
            "30",
            "--capture",
            "-vv",
        ])
        .unwrap();
        assert_eq!(settings.resource_dir, PathBuf::from("/tmp/res"));
        assert_eq!(settings.target_fps, 30);
        assert_eq!(settings.enemy_click, EnemyClick::Capture);
        assert_eq!(settings.log_level(), LevelFilter::Trace);
        assert_eq!(settings.title, "Chess Game!");
    }

    #[test]
    fn bad_fps_is_rejected() {
        for bad in &["0", "fast", "-3"] {
            let result = Settings::from_args(vec!["chess_board", "--fps", *bad]);
            assert!(result.is_err(), "accepted --fps {}", bad);
        }
    }

    #[test]
    fn unknown_flag_is_a_cli_error() {
        match Settings::from_args(vec!["chess_board", "--nope"]) {
            Err(ConfigError::Cli(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn builder_fills_unset_fields() {
        let settings = SettingsBuilder::default()
            .title("Test")
            .target_fps(10)
            .build()
            .unwrap();
        assert_eq!(settings.title, "Test");
        assert_eq!(settings.target_fps, 10);
        assert_eq!(settings.window_width, 800.0);
    }
}
