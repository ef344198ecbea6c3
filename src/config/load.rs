use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads the optional config file first and lets environment
/// variables (prefix `AUDIOBOOKS__`) override it; missing keys keep struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("AUDIOBOOKS")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.tools.merge_command.trim().is_empty() {
            return Err("tools.merge_command must not be empty".to_string());
        }
        if self.tools.chapters_command.trim().is_empty() {
            return Err("tools.chapters_command must not be empty".to_string());
        }
        if self.library.extension.trim().trim_start_matches('.').is_empty() {
            return Err("library.extension must not be empty".to_string());
        }
        if self.output.index_file_name.trim().is_empty() {
            return Err("output.index_file_name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `AUDIOBOOKS_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("AUDIOBOOKS_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/audiobooks/config.toml`
/// or `~/.config/audiobooks/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("audiobooks").join("config.toml"))
}
