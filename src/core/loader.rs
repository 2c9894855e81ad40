//! Signing configuration loader.
//!
//! Turns a `key.properties` file into a validated [`SigningProfile`]. A
//! missing file is not an error: it yields [`SigningConfig::Absent`] so
//! debug builds keep working, and callers that need signing use
//! [`SigningConfig::require`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::constants;
use crate::core::profile::{Secret, SigningKey, SigningProfile};
use crate::core::properties::Properties;
use crate::error::{Result, SigningError};

/// Outcome of loading signing properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningConfig {
    /// All four keys present and the keystore exists.
    Resolved(SigningProfile),
    /// The properties file was not found at `path`.
    Absent { path: PathBuf },
}

impl SigningConfig {
    pub fn profile(&self) -> Option<&SigningProfile> {
        match self {
            SigningConfig::Resolved(profile) => Some(profile),
            SigningConfig::Absent { .. } => None,
        }
    }

    pub fn into_profile(self) -> Option<SigningProfile> {
        match self {
            SigningConfig::Resolved(profile) => Some(profile),
            SigningConfig::Absent { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SigningConfig::Resolved(_))
    }

    /// The profile, or `SigningError::MissingConfigFile` if absent.
    pub fn require(&self) -> Result<&SigningProfile> {
        match self {
            SigningConfig::Resolved(profile) => Ok(profile),
            SigningConfig::Absent { path } => {
                Err(SigningError::MissingConfigFile(path.clone()).into())
            }
        }
    }
}

/// Loads signing profiles for a project.
///
/// Relative paths, both of the properties file and of `storeFile` inside
/// it, resolve against the project root.
#[derive(Debug, Clone)]
pub struct SigningConfigLoader {
    project_root: PathBuf,
}

impl SigningConfigLoader {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Load `key.properties` from the project root.
    pub fn load_default(&self) -> Result<SigningConfig> {
        self.load(Path::new(constants::PROPERTIES_FILE))
    }

    /// Load a signing profile from a properties file.
    ///
    /// # Errors
    ///
    /// - `SigningError::IncompleteSigningConfig` if any required key is
    ///   missing or blank, listing every such key
    /// - `SigningError::KeystoreNotFound` if `storeFile` does not resolve
    ///   to an existing file
    /// - `PropertiesError` if the file cannot be read or parsed
    pub fn load(&self, path: &Path) -> Result<SigningConfig> {
        let path = self.absolute(path)?;
        debug!(path = %path.display(), "loading signing properties");

        if !path.exists() {
            warn!(
                path = %path.display(),
                "signing properties not found, release builds will be unsigned"
            );
            return Ok(SigningConfig::Absent { path });
        }

        let props = Properties::read(&path)?;
        let profile = self.resolve(&path, &props)?;

        debug!(
            store_file = %profile.store_file().display(),
            key_alias = profile.key_alias(),
            "signing profile resolved"
        );

        Ok(SigningConfig::Resolved(profile))
    }

    /// Build a profile from already-parsed properties.
    ///
    /// `source` is only used in error messages.
    pub fn resolve(&self, source: &Path, props: &Properties) -> Result<SigningProfile> {
        let mut missing = Vec::new();
        let mut take = |key: SigningKey| match field(props, key) {
            Some(v) => v,
            None => {
                missing.push(key);
                ""
            }
        };
        let store_file = take(SigningKey::StoreFile);
        let store_password = take(SigningKey::StorePassword);
        let key_alias = take(SigningKey::KeyAlias);
        let key_password = take(SigningKey::KeyPassword);

        if !missing.is_empty() {
            return Err(SigningError::IncompleteSigningConfig {
                path: source.to_path_buf(),
                missing,
            }
            .into());
        }

        let store_file = self.absolute(Path::new(store_file))?;
        if !store_file.is_file() {
            return Err(SigningError::KeystoreNotFound { path: store_file }.into());
        }

        Ok(SigningProfile::new(
            store_file,
            Secret::new(store_password),
            key_alias.to_string(),
            Secret::new(key_password),
        ))
    }

    /// Resolve `path` against the project root, then the current
    /// directory. `.` components are dropped from the result.
    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        let joined = self.project_root.join(path);
        let joined = if joined.is_absolute() {
            joined
        } else {
            std::env::current_dir()?.join(joined)
        };
        Ok(joined.components().collect())
    }
}

/// A required value; whitespace-only counts as missing.
fn field(props: &Properties, key: SigningKey) -> Option<&str> {
    props
        .get(key.as_str())
        .filter(|v| !v.trim().is_empty())
}
