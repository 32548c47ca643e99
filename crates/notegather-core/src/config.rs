//! Configuration for notegather
//!
//! Settings live in a TOML file. Lookup order: an explicit path, then
//! `.notegather.toml` at the vault root, then `config.toml` in the user
//! config directory (`$NOTEGATHER_CONFIG_DIR` or `~/.config/notegather`),
//! then built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GatherError, Result};
use crate::graph::DiscoveryLimits;
use crate::journal::JournalSectionFilter;
use crate::links::ResolverOptions;

pub use types::{GatherConfig, QueryConfig, DEFAULT_MAX_DEPTH};

/// Config file name at the vault root
pub const VAULT_CONFIG_FILE: &str = ".notegather.toml";

const CONFIG_DIR: &str = "notegather";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NOTEGATHER_CONFIG_DIR";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Vault(PathBuf),
    User(PathBuf),
    Defaults,
}

impl GatherConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GatherError::io_operation("read config", path.display(), e))?;
        let config: GatherConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find and load the active configuration
    ///
    /// An explicit path must exist; the other locations are optional.
    pub fn discover(explicit: Option<&Path>, vault: Option<&Path>) -> Result<(Self, ConfigSource)> {
        Self::discover_in(explicit, vault, user_config_path().as_deref())
    }

    fn discover_in(
        explicit: Option<&Path>,
        vault: Option<&Path>,
        user: Option<&Path>,
    ) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        if let Some(path) = vault.map(|v| v.join(VAULT_CONFIG_FILE)) {
            if path.is_file() {
                return Ok((Self::load(&path)?, ConfigSource::Vault(path)));
            }
        }

        if let Some(path) = user.filter(|p| p.is_file()) {
            return Ok((Self::load(path)?, ConfigSource::User(path.to_path_buf())));
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Validated discovery limits
    pub fn limits(&self) -> Result<DiscoveryLimits> {
        // Reject a bad header template here too, before any traversal runs
        self.journal_filter()?;
        DiscoveryLimits::new(self.max_depth, self.max_chars, self.exclude_folders.clone())
    }

    pub fn journal_filter(&self) -> Result<JournalSectionFilter> {
        JournalSectionFilter::new(&self.journal_header_format)
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            query_enabled: self.query.enabled,
            query_language: self.query.language.clone(),
        }
    }
}

/// User-level config file, if a config directory can be determined
pub fn user_config_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
