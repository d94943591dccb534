//! Desk scene dry run
//!
//! Prepares the desk scene on the recording backends, draws the configured
//! number of frames and logs what the scene asked of its shader, mesh and
//! texture collaborators.
//!
//! ```text
//! desk_scene                         # built-in defaults
//! desk_scene desk.toml               # load a TOML or RON config
//! desk_scene desk.ron --frames 10 --log-level debug
//! desk_scene --write-default desk.toml
//! ```

use clap::{value_parser, Arg, ArgMatches, Command};
use scene_engine::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error("Failed to load configuration from {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },

    #[error("Failed to write default configuration to {path}: {source}")]
    WriteDefault {
        path: String,
        #[source]
        source: ConfigError,
    },
}

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Action {
    Run {
        config: Option<String>,
        log_level: Option<String>,
        frames: Option<u32>,
    },
    WriteDefault(String),
}

fn cli() -> Command {
    Command::new("desk_scene")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dry run of the desk scene on recording backends")
        .arg(
            Arg::new("config")
                .help("TOML or RON configuration file")
                .value_name("CONFIG"),
        )
        .arg(
            Arg::new("write-default")
                .long("write-default")
                .value_name("PATH")
                .help("Write the default configuration to PATH and exit")
                .conflicts_with_all(["config", "log-level", "frames"]),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Override the configured log level"),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .value_name("N")
                .help("Override the configured frame count")
                .value_parser(value_parser!(u32)),
        )
}

fn action_from(matches: &ArgMatches) -> Action {
    match matches.get_one::<String>("write-default") {
        Some(path) => Action::WriteDefault(path.clone()),
        None => Action::Run {
            config: matches.get_one::<String>("config").cloned(),
            log_level: matches.get_one::<String>("log-level").cloned(),
            frames: matches.get_one::<u32>("frames").copied(),
        },
    }
}

fn load_config(path: Option<&str>) -> Result<ApplicationConfig, AppError> {
    match path {
        Some(path) => ApplicationConfig::load_validated(path).map_err(|source| AppError::Config {
            path: path.to_string(),
            source,
        }),
        None => Ok(ApplicationConfig::default()),
    }
}

fn apply_overrides(mut config: ApplicationConfig, log_level: Option<String>, frames: Option<u32>) -> ApplicationConfig {
    if let Some(level) = log_level {
        config.engine = config.engine.with_log_level(level);
    }
    if let Some(frames) = frames {
        config.engine = config.engine.with_frames(frames);
    }
    config
}

fn run(config: ApplicationConfig) {
    let frames = config.engine.frames;
    let mut scene = HeadlessScene::headless(config.scene);

    match scene.prepare_scene() {
        Ok(report) if !report.texture_failures.is_empty() => log::warn!(
            "{} textures missing, affected objects sample slot -1: {:?}",
            report.texture_failures.len(),
            report.texture_failures
        ),
        Ok(_) => {}
        Err(e) => log::error!("{}", e),
    }

    let mut totals = FrameStats::default();
    for _ in 0..frames {
        let stats = scene.render_scene();
        totals.draws += stats.draws;
        totals.failed_draws += stats.failed_draws;
    }

    log::info!(
        "Rendered {} frames: {} draws ({} failed), {} uniform writes",
        scene.frames_rendered(),
        totals.draws,
        totals.failed_draws,
        scene.shader().writes().len()
    );

    let released = scene.destroy_textures();
    log::info!("Released {} textures", released);
}

fn main() -> Result<(), AppError> {
    let matches = cli().get_matches();

    match action_from(&matches) {
        Action::WriteDefault(path) => {
            logging::init_with_level("info");
            ApplicationConfig::default()
                .save_to_file(&path)
                .map_err(|source| AppError::WriteDefault {
                    path: path.clone(),
                    source,
                })?;
            log::info!("Wrote default configuration to {}", path);
        }
        Action::Run {
            config,
            log_level,
            frames,
        } => {
            let config = match load_config(config.as_deref()) {
                Ok(config) => apply_overrides(config, log_level, frames),
                Err(e) => {
                    logging::init_with_level(log_level.as_deref().unwrap_or("info"));
                    log::error!("{}", e);
                    return Err(e);
                }
            };

            logging::init_with_level(&config.engine.log_level);
            log::info!("Starting desk scene dry run");
            run(config);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Action, clap::Error> {
        cli()
            .try_get_matches_from(std::iter::once("desk_scene").chain(args.iter().copied()))
            .map(|matches| action_from(&matches))
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            parse(&[]).unwrap(),
            Action::Run {
                config: None,
                log_level: None,
                frames: None
            }
        );
        assert_eq!(
            parse(&["desk.ron", "--frames", "5", "--log-level", "debug"]).unwrap(),
            Action::Run {
                config: Some("desk.ron".to_string()),
                log_level: Some("debug".to_string()),
                frames: Some(5),
            }
        );
        assert_eq!(
            parse(&["--write-default", "out.toml"]).unwrap(),
            Action::WriteDefault("out.toml".to_string())
        );
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert_eq!(parse(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert_eq!(parse(&["a", "b"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert_eq!(parse(&["--frames", "many"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(
            parse(&["desk.toml", "--write-default", "out.toml"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_overrides_replace_configured_values() {
        let config = apply_overrides(ApplicationConfig::default(), Some("trace".to_string()), Some(7));
        assert_eq!(config.engine.log_level, "trace");
        assert_eq!(config.engine.frames, 7);

        let untouched = apply_overrides(ApplicationConfig::default(), None, None);
        assert_eq!(untouched.engine.frames, ApplicationConfig::default().engine.frames);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let err = load_config(Some("does_not_exist.toml")).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
