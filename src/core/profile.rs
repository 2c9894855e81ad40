//! Signing profile.
//!
//! The resolved set of credentials used to sign a release artifact.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::Result;

/// One of the four keys a signing properties file must define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SigningKey {
    StoreFile,
    StorePassword,
    KeyAlias,
    KeyPassword,
}

impl SigningKey {
    /// All required keys, in the order they are reported.
    pub const ALL: [SigningKey; 4] = [
        SigningKey::StoreFile,
        SigningKey::StorePassword,
        SigningKey::KeyAlias,
        SigningKey::KeyPassword,
    ];

    /// Property name as it appears in the file.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningKey::StoreFile => "storeFile",
            SigningKey::StorePassword => "storePassword",
            SigningKey::KeyAlias => "keyAlias",
            SigningKey::KeyPassword => "keyPassword",
        }
    }
}

impl fmt::Display for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A secret string, wiped from memory on drop and redacted in `Debug`.
#[derive(Clone)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Access the plaintext value.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Secret {}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([redacted])")
    }
}

/// Credentials for signing a release build.
///
/// Only constructed by the loader once every field has been validated, so a
/// `SigningProfile` is always complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningProfile {
    store_file: PathBuf,
    store_password: Secret,
    key_alias: String,
    key_password: Secret,
}

impl SigningProfile {
    pub(crate) fn new(
        store_file: PathBuf,
        store_password: Secret,
        key_alias: String,
        key_password: Secret,
    ) -> Self {
        Self {
            store_file,
            store_password,
            key_alias,
            key_password,
        }
    }

    /// Absolute path to the keystore.
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn store_password(&self) -> &Secret {
        &self.store_password
    }

    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    pub fn key_password(&self) -> &Secret {
        &self.key_password
    }

    /// SHA-256 of the keystore contents, lowercase hex.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the keystore cannot be read.
    pub fn keystore_fingerprint(&self) -> Result<String> {
        let mut file = std::fs::File::open(&self.store_file)?;
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(format!("{:x}", hasher.finalize()))
    }
}
