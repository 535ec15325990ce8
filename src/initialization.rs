use std::env;
use std::str::FromStr;
use log::LevelFilter;
use crate::errors::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 3000;

pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

pub struct Providers {
    pub cwa_api_key: Option<String>,
    pub moenv_api_key: Option<String>,
}

pub struct General {
    pub log_level: LevelFilter,
    pub log_path: Option<String>,
}

pub struct Config {
    pub web_server: WebServer,
    pub providers: Providers,
    pub general: General,
}

/// Resolves all configuration items from the process environment.
///
/// Missing provider keys are not an error at this point: an unset weather
/// key is rejected per request in the endpoint layer, and an unset air
/// quality key merely disables the air quality enrichment.
pub fn config() -> Result<Config, ConfigError> {
    let bind_address = env::var("BIND_ADDRESS").unwrap_or(DEFAULT_BIND_ADDRESS.to_string());

    let bind_port = match env::var("PORT") {
        Ok(port) => u16::from_str(&port)
            .map_err(|_| ConfigError(format!("PORT is not a valid port number: {}", port)))?,
        Err(_) => DEFAULT_BIND_PORT,
    };

    let log_level = match env::var("LOG_LEVEL") {
        Ok(level) => LevelFilter::from_str(&level)
            .map_err(|_| ConfigError(format!("LOG_LEVEL is not a valid log level: {}", level)))?,
        Err(_) => LevelFilter::Info,
    };

    Ok(Config {
        web_server: WebServer { bind_address, bind_port },
        providers: Providers {
            cwa_api_key: env::var("CWA_API_KEY").ok().filter(|key| !key.is_empty()),
            moenv_api_key: env::var("MOENV_API_KEY").ok().filter(|key| !key.is_empty()),
        },
        general: General {
            log_level,
            log_path: env::var("LOG_PATH").ok().filter(|path| !path.is_empty()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "BIND_ADDRESS", "PORT", "LOG_LEVEL", "LOG_PATH", "CWA_API_KEY", "MOENV_API_KEY",
    ];

    fn clear_environment() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    // The process environment is shared across test threads, so every
    // scenario runs inside this one test
    #[test]
    fn resolves_configuration_from_the_environment() {
        clear_environment();

        let config = config().unwrap();
        assert_eq!(config.web_server.bind_address, "0.0.0.0");
        assert_eq!(config.web_server.bind_port, 3000);
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.log_path.is_none());
        assert!(config.providers.cwa_api_key.is_none());
        assert!(config.providers.moenv_api_key.is_none());

        env::set_var("BIND_ADDRESS", "127.0.0.1");
        env::set_var("PORT", "8080");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("CWA_API_KEY", "forecast-key");
        env::set_var("MOENV_API_KEY", "");

        let config = super::config().unwrap();
        assert_eq!(config.web_server.bind_address, "127.0.0.1");
        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.providers.cwa_api_key.as_deref(), Some("forecast-key"));
        assert!(config.providers.moenv_api_key.is_none());

        env::set_var("PORT", "abc");
        assert!(matches!(super::config(), Err(ConfigError(e)) if e.contains("PORT")));

        env::set_var("PORT", "70000");
        assert!(matches!(super::config(), Err(ConfigError(e)) if e.contains("PORT")));

        env::set_var("PORT", "8080");
        env::set_var("LOG_LEVEL", "chatty");
        assert!(matches!(super::config(), Err(ConfigError(e)) if e.contains("LOG_LEVEL")));

        clear_environment();
    }
}
