use anyhow::Context;
use serde::Deserialize;

use super::storage::KeyValueStorage;

/// localStorage key holding an optional TOML override of the defaults
pub const CONFIG_STORAGE_KEY: &str = "portal_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PortalConfig {
    pub app: AppConfig,
    pub logging: LoggingConfig,
    pub persistence: PersistenceConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// error | warn | info | debug | trace
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PersistenceConfig {
    /// 0 writes on every change; otherwise writes are batched and flushed
    /// this many milliseconds after the last change
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub default_theme: String,
    pub search_min_chars: usize,
    pub toast_timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Portail des opérations"

[logging]
level = "debug"

[persistence]
debounce_ms = 0

[ui]
default_theme = "light"
search_min_chars = 3
toast_timeout_ms = 4000
"#;

impl PortalConfig {
    pub fn log_level(&self) -> log::Level {
        match self.logging.level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        // The embedded document is covered by a test
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            app: AppConfig {
                title: "Portail des opérations".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            persistence: PersistenceConfig { debounce_ms: 0 },
            ui: UiConfig {
                default_theme: "light".to_string(),
                search_min_chars: 3,
                toast_timeout_ms: 4000,
            },
        })
    }
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["portal_config"]` (TOML)
/// 2. Falls back to embedded default config
pub fn load_config(storage: &dyn KeyValueStorage) -> anyhow::Result<PortalConfig> {
    match storage.get_item(CONFIG_STORAGE_KEY) {
        Ok(Some(contents)) => {
            log::info!("Loading config from localStorage['{}']", CONFIG_STORAGE_KEY);
            return toml::from_str(&contents).context("invalid portal_config override");
        }
        Ok(None) => {}
        Err(e) => log::warn!("config override not readable: {}", e),
    }

    log::info!("Using default embedded configuration");
    let config: PortalConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// `load_config`, falling back to defaults when the override is invalid
pub fn load_config_or_default(storage: &dyn KeyValueStorage) -> PortalConfig {
    load_config(storage).unwrap_or_else(|e| {
        log::warn!("{:#}, using defaults", e);
        PortalConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_default_config_loads() {
        let config: Result<PortalConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.persistence.debounce_ms, 0);
        assert_eq!(config.ui.search_min_chars, 3);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_override_from_storage() {
        let storage = MemoryStorage::new();
        let mut override_toml = DEFAULT_CONFIG.replace("debounce_ms = 0", "debounce_ms = 250");
        override_toml = override_toml.replace("level = \"debug\"", "level = \"warn\"");
        storage.set_item(CONFIG_STORAGE_KEY, &override_toml).unwrap();

        let config = load_config(&storage).unwrap();
        assert_eq!(config.persistence.debounce_ms, 250);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let storage = MemoryStorage::new();
        storage.set_item(CONFIG_STORAGE_KEY, "[app\ntitle=").unwrap();

        assert!(load_config(&storage).is_err());
        assert_eq!(load_config_or_default(&storage), PortalConfig::default());
    }
}
