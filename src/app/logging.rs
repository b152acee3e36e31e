// SPDX-License-Identifier: MPL-2.0
//! Log dispatch to stderr and the data-directory log file.
//!
//! The level comes from `STOREFRONT_LOG`, then `[general] log_level`, then
//! `info`. HTTP and windowing crates are capped at `warn`.

use crate::app::config::DEFAULT_LOG_LEVEL;
use crate::app::paths;
use crate::error::{Error, Result};
use log::LevelFilter;
use std::str::FromStr;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG";

/// Crates whose chatter is capped at `warn`.
const NOISY_TARGETS: &[&str] = &["wgpu", "naga", "cosmic_text", "iced_wgpu", "winit", "hyper", "reqwest"];

/// Resolves the level filter from the environment value and config value.
///
/// Unparseable values are skipped.
#[must_use]
pub fn resolve_level(env_level: Option<&str>, config_level: Option<&str>) -> LevelFilter {
    [env_level, config_level, Some(DEFAULT_LOG_LEVEL)]
        .into_iter()
        .flatten()
        .find_map(|raw| LevelFilter::from_str(raw.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs the global logger.
///
/// # Errors
///
/// Returns [`Error::Io`] when the log file cannot be opened and
/// [`Error::Config`] when a logger is already installed.
pub fn init(config_level: Option<&str>) -> Result<()> {
    let env_level = std::env::var(ENV_LOG_LEVEL).ok();
    let level = resolve_level(env_level.as_deref(), config_level);

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level);
    for target in NOISY_TARGETS {
        dispatch = dispatch.level_for(*target, level.min(LevelFilter::Warn));
    }
    dispatch = dispatch.chain(std::io::stderr());

    if let Some(log_file) = paths::get_log_file() {
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        dispatch = dispatch.chain(fern::log_file(&log_file)?);
    }

    dispatch
        .apply()
        .map_err(|err| Error::Config(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_wins_over_config() {
        assert_eq!(resolve_level(Some("trace"), Some("warn")), LevelFilter::Trace);
    }

    #[test]
    fn config_used_without_environment() {
        assert_eq!(resolve_level(None, Some("debug")), LevelFilter::Debug);
    }

    #[test]
    fn garbage_falls_through_to_default() {
        assert_eq!(resolve_level(Some("loud"), Some("")), LevelFilter::Info);
    }
}
