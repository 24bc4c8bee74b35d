use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::General;

const PATTERN: &str = "{d} {l} {t} - {m}{n}";

/// Sets up log4rs with a console appender and, if a log path is configured, a file appender
///
/// # Arguments
///
/// * 'general' - general configuration holding log path and log level
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let level = LevelFilter::from_str(&general.log_level)
        .map_err(|_| ConfigError(format!("invalid log level: {}", general.log_level)))?;

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let mut builder = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(log_path)?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = builder.build(root.build(level))?;
    log4rs::init_config(config)?;

    Ok(())
}
