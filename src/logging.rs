use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::General;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Sets up logging to stdout and, when a log path is configured, to file
///
/// # Arguments
///
/// * 'general' - the general configuration section
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;

        config = config.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    log4rs::init_config(config.build(root.build(general.log_level))?)?;

    Ok(())
}
