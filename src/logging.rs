//! log4rs initialization.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialize logging from a log4rs YAML file, or log warnings to stderr if
/// the file does not exist.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())?;
        log::debug!("Logging configured from {config_file}");
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
