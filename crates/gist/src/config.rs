//! Configuration loading for the gist library.
//!
//! TOML-based configuration with a precedence system:
//! - Bundled defaults (include_str! from gist.toml)
//! - User overrides (~/.config/gist/gist.toml, then ./gist.toml)
//!
//! The Groq API key is never part of the file; it comes from the
//! `GROQ_API_KEY` environment variable.

use config::{Config, File, FileFormat};
use gist_cache::CacheConfig;
use gist_client::ClientConfig;
use gist_core::SettingsPatch;
use gist_error::{ConfigError, GistResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Top-level gist configuration.
///
/// # Example
///
/// ```no_run
/// use gist::GistConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Bundled defaults + user overrides
/// let config = GistConfig::load()?;
/// println!("model: {}", config.client.model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GistConfig {
    /// Rate-limited client tunables
    #[serde(default)]
    pub client: ClientConfig,

    /// Default variation preset keys, overridable per request
    #[serde(default)]
    pub summary: SettingsPatch,

    /// Summary cache tunables
    #[serde(default)]
    pub cache: CacheConfig,
}

impl GistConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> GistResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override
    /// earlier):
    /// 1. Bundled defaults (gist.toml shipped with the library)
    /// 2. User config in home directory (~/.config/gist/gist.toml)
    /// 3. User config in current directory (./gist.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> GistResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../gist.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/gist/gist.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("gist").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}
