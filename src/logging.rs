//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Logger writing to stderr at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialize logging from a log4rs YAML file if given, else the stderr logger.
pub fn init(config_file: Option<&Path>, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    match config_file {
        Some(file) => {
            log4rs::init_file(file, Default::default())?;
            log::info!("Logging configured from {}", file.display());
        }
        None => {
            log4rs::init_config(stderr_config(level)?)?;
        }
    }
    Ok(())
}
