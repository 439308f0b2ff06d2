//! # graha-config
//!
//! Layered configuration loading for Graha using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRAHA_*` prefix, `__` as separator)
//! 2. Project-level `.graha/config.toml`
//! 3. User-level `~/.config/graha/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GRAHA_RESOLUTION__CYCLE_POLICY` -> `resolution.cycle_policy`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use graha_config::{CyclePolicy, GrahaConfig};
//!
//! let config = GrahaConfig::load_with_dotenv().expect("config");
//!
//! if config.resolution.cycle_policy == CyclePolicy::Fail {
//!     println!("conjunction cycles are reported as errors");
//! }
//! ```

mod error;
mod resolution;

pub use error::ConfigError;
pub use resolution::{CyclePolicy, MixedPeerBucket, ResolutionConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GrahaConfig {
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

impl GrahaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`GrahaConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// does not deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`GrahaConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".graha/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GRAHA_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("graha").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GrahaConfig::default();
        assert_eq!(config.resolution.cycle_policy, CyclePolicy::BaseCharacter);
        assert_eq!(config.resolution.mixed_peer_bucket, MixedPeerBucket::Malefic);
    }

    #[test]
    fn figment_defaults_extract() {
        let config: GrahaConfig = Figment::from(Serialized::defaults(GrahaConfig::default()))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.resolution, ResolutionConfig::default());
    }
}
