//! Constants used throughout signet.
//!
//! Centralizes file names and defaults.

/// Signing properties file name, relative to the project root.
pub const PROPERTIES_FILE: &str = "key.properties";

/// Project configuration file name (signet.toml).
pub const CONFIG_FILE: &str = "signet.toml";

/// Gitignore entries that keep signing material out of version control.
pub const GITIGNORE_ENTRIES: &[&str] = &["key.properties", "*.keystore", "*.jks"];

/// Permissions for a freshly written properties file (Unix only).
#[cfg(unix)]
pub const PROPERTIES_MODE: u32 = 0o600;
