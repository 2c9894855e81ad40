//! Project configuration.
//!
//! Handles reading and validating the optional `signet.toml` in the project
//! root. Every field has a default, so a project without the file behaves
//! like the stock Gradle setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `signet.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Where signing credentials come from and whether they are mandatory
    pub signing: SigningSection,
    /// Release build type options
    pub release: ReleaseSection,
}

/// `[signing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningSection {
    /// Properties file, relative to the project root
    pub properties: PathBuf,
    /// What to do when a release build has no signing profile
    pub policy: SigningPolicy,
}

impl Default for SigningSection {
    fn default() -> Self {
        Self {
            properties: PathBuf::from(constants::PROPERTIES_FILE),
            policy: SigningPolicy::default(),
        }
    }
}

/// Whether release builds may proceed without a signing profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SigningPolicy {
    /// Produce an unsigned release variant and warn.
    #[default]
    AllowUnsigned,
    /// Fail when the release variant is configured without a profile.
    Require,
}

/// `[release]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSection {
    pub minify: bool,
    pub shrink_resources: bool,
}

impl Default for ReleaseSection {
    fn default() -> Self {
        Self {
            minify: true,
            shrink_resources: true,
        }
    }
}

impl ProjectConfig {
    /// Path to the configuration file under `root`.
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load `signet.toml` from `root`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no signet.toml, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            properties = %config.signing.properties.display(),
            policy = ?config.signing.policy,
            "config loaded"
        );

        Ok(config)
    }

    /// Save configuration to `signet.toml` under `root`.
    pub fn save(&self, root: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(Self::config_path(root), contents)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the properties path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.signing.properties.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "signing.properties",
                reason: "path cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Ensure `.gitignore` under `root` ignores signing material.
///
/// Adds `key.properties`, `*.keystore` and `*.jks` if not already present.
pub fn ensure_gitignore(root: &Path) -> Result<()> {
    let gitignore = root.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}
