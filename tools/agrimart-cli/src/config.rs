//! CLI configuration.

use std::path::Path;

use agrimart_commerce::search::{BrowseSettings, SortKey};
use agrimart_commerce::Currency;
use agrimart_observability::LogConfig;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for when no `--config` is given, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["agrimart.toml", ".agrimart.toml", "agrimart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog snapshot comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Catalog grid settings.
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.browse.settings.page_size == 0 {
            bail!("browse.page_size must be at least 1");
        }
        if let Some(path) = &self.catalog.path {
            if path.trim().is_empty() {
                bail!("catalog.path must not be empty when set");
            }
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON snapshot to load instead of the built-in sample catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Currency used for prices typed on the command line.
    #[serde(default)]
    pub currency: Currency,
}

/// Catalog grid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Pagination settings.
    #[serde(flatten)]
    pub settings: BrowseSettings,

    /// Sort used when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortKey,
}

/// Generate a default agrimart.toml config file.
pub fn generate_default_config() -> String {
    r#"# AgriMart storefront configuration

[catalog]
# path = "catalog.json"
currency = "USD"

[browse]
initial_display = 4
page_size = 4
default_sort = "featured"

[logging]
level = "info"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrimart_observability::{LogFormat, LogLevel};

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [browse]
            page_size = 8
            default_sort = "price-high"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.browse.settings.page_size, 8);
        assert_eq!(config.browse.settings.initial_display, 4);
        assert_eq!(config.browse.default_sort, SortKey::PriceHigh);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = CliConfig::default();
        config.browse.settings.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.path = Some("produce.json".to_string());
        config.browse.default_sort = SortKey::Newest;

        for name in ["agrimart.toml", "agrimart.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(CliConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agrimart.toml");
        std::fs::write(&path, "[browse]\npage_size = \"many\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
