//! Per-request options for a face swapping pipeline.
//!
//! [`ProcessOptions`] is built once per processing run from a
//! [`ProcessRequest`] and read by the processing stages afterwards.
//! Install wide defaults for requests live in a TOML config file, see [`config`].

pub mod config;
pub mod error;
pub mod options;
pub mod utils;

pub use error::{ConfigError, OptionsError};
pub use options::*;

use flexi_logger::LoggerHandle;
use log::info;

/// Loads and caches the config file, then starts logging as configured in `[system]`.
pub fn init() -> Result<(config::Config, LoggerHandle), Box<dyn std::error::Error>> {
    let config = config::init_config()?;
    let logger = utils::logger::init_logger(&config.system())?;
    info!("[✓] config loaded, log level: {}", config.system().log_level());
    Ok((config, logger))
}
