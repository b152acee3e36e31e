// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to the `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) recorded by
//!    [`init_cli_overrides`]
//! 3. **Environment variables** (`STOREFRONT_DATA_DIR`, `STOREFRONT_CONFIG_DIR`)
//! 4. **Platform default** via `dirs`, with the application name appended
//!
//! The data directory holds captured pictures and the log file. The config
//! directory holds `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "Storefront";

/// Sub-directory of the data directory receiving captured pictures.
const PICTURES_DIR: &str = "pictures";

/// Log file name inside the data directory.
const LOG_FILE: &str = "storefront.log";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STOREFRONT_CONFIG_DIR";

#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let overrides = CliOverrides {
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        log::warn!("directory overrides already initialized");
    }
}

fn cli_overrides() -> Option<&'static CliOverrides> {
    CLI_OVERRIDES.get()
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env_name: &str,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| env_dir(env_name))
        .or_else(|| platform.map(|path| path.join(APP_NAME)))
}

/// Returns the application data directory.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory, preferring `override_path`.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        cli_overrides().and_then(|o| o.data_dir.clone()),
        ENV_DATA_DIR,
        dirs::data_dir(),
    )
}

/// Returns the application config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        cli_overrides().and_then(|o| o.config_dir.clone()),
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

/// Returns the directory captured pictures are written to.
///
/// An explicit `configured` directory (from `[capture] pictures_dir`) wins
/// over `<data dir>/pictures`.
pub fn get_pictures_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    configured.or_else(|| get_app_data_dir().map(|dir| dir.join(PICTURES_DIR)))
}

/// Returns the log file path inside the data directory.
pub fn get_log_file() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process-wide environment variables run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));
        assert_eq!(
            get_pictures_dir(None),
            Some(PathBuf::from("/test/data/dir/pictures"))
        );
        assert_eq!(
            get_log_file(),
            Some(PathBuf::from("/test/data/dir/storefront.log"))
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn configured_pictures_dir_wins() {
        let configured = PathBuf::from("/srv/shop/pictures");
        assert_eq!(get_pictures_dir(Some(configured.clone())), Some(configured));
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }
}
