//! Match configuration loader.

use std::path::Path;

use duel_core::DuelConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`DuelConfig::default`].
    pub fn load(path: &Path) -> LoadResult<DuelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<DuelConfig> {
        let config: DuelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Locale;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("locale = \"ru\"\nround_separator = true\n").unwrap();

        assert_eq!(config.locale, Locale::Ru);
        assert!(config.round_separator);
        assert_eq!(config.starting_hp, DuelConfig::DEFAULT_STARTING_HP);
        assert_eq!(config.starting_energy, DuelConfig::DEFAULT_STARTING_ENERGY);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = ConfigLoader::parse("locale = \"fr\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn bundled_config_is_the_default_match() {
        let path = crate::bundled_data_dir().join("duel.toml");
        assert_eq!(ConfigLoader::load(&path).unwrap(), DuelConfig::default());
    }
}
