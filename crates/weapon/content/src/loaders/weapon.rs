//! Weapon definition loader.

use std::path::Path;

use weapon_core::WeaponConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for weapon definitions from RON or TOML files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load a weapon definition, picking the format from the file extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.toml` file containing a WeaponConfig
    ///
    /// Fields missing from the file keep their chainsaw defaults.
    pub fn load(path: &Path) -> LoadResult<WeaponConfig> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let content = read_file(path)?;
        let config = match extension {
            "ron" => Self::from_ron(&content),
            "toml" => Self::from_toml(&content),
            other => Err(anyhow::anyhow!(
                "Unsupported weapon definition format '{}' for {}",
                other,
                path.display()
            )),
        }?;

        tracing::debug!(
            "loaded weapon definition {} (fire interval {}ms)",
            path.display(),
            config.fire_interval_ms
        );
        Ok(config)
    }

    /// Parse a weapon definition from RON.
    pub fn from_ron(content: &str) -> LoadResult<WeaponConfig> {
        let config: WeaponConfig = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon RON: {}", e))?;
        Self::validate(config)
    }

    /// Parse a weapon definition from TOML.
    pub fn from_toml(content: &str) -> LoadResult<WeaponConfig> {
        let config: WeaponConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon TOML: {}", e))?;
        Self::validate(config)
    }

    fn validate(config: WeaponConfig) -> LoadResult<WeaponConfig> {
        anyhow::ensure!(
            config.fire_interval_ms > 0,
            "fire_interval_ms must be positive"
        );
        Ok(config)
    }
}
