//! Init command - write a key.properties file.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::{self, ProjectConfig};
use crate::core::profile::SigningKey;
use crate::core::properties::Properties;
use crate::error::{ConfigError, Error, Result};

/// Arguments for `signet init`.
pub struct InitArgs {
    pub store_file: String,
    pub key_alias: String,
    pub store_password: Option<String>,
    pub key_password: Option<String>,
    pub force: bool,
}

/// Write the signing properties file configured for the project.
pub fn execute(root: &Path, args: InitArgs) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let path = root.join(&config.signing.properties);

    if path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    let store_file = non_empty(SigningKey::StoreFile, args.store_file)?;
    let key_alias = non_empty(SigningKey::KeyAlias, args.key_alias)?;
    let store_password = password(SigningKey::StorePassword, args.store_password)?;
    let key_password = password(SigningKey::KeyPassword, args.key_password)?;

    let mut props = Properties::new();
    props.insert(SigningKey::StoreFile.as_str(), store_file.as_str());
    props.insert(SigningKey::StorePassword.as_str(), store_password.as_str());
    props.insert(SigningKey::KeyAlias.as_str(), key_alias.as_str());
    props.insert(SigningKey::KeyPassword.as_str(), key_password.as_str());
    let contents = Zeroizing::new(props.to_string());

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, contents.as_bytes())?;

    // Restrict permissions on the properties file (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(
            &path,
            std::fs::Permissions::from_mode(crate::core::constants::PROPERTIES_MODE),
        )?;
    }

    config::ensure_gitignore(root)?;
    info!(path = %path.display(), "signing properties written");

    output::success(&format!("wrote {}", output::path(path.display())));

    let keystore = root.join(&store_file);
    if !keystore.is_file() {
        output::warn(&format!(
            "keystore {} does not exist yet",
            output::path(keystore.display())
        ));
        output::hint(&format!(
            "run: keytool -genkeypair -v -keystore {} -alias {} -keyalg RSA -keysize 2048 -validity 10000",
            store_file, key_alias
        ));
    }

    Ok(())
}

fn non_empty(key: SigningKey, value: String) -> Result<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(Error::Other(format!("{} cannot be empty", key)));
    }
    Ok(value)
}

/// Take a password from the flag/env, or prompt for it with hidden input.
fn password(key: SigningKey, given: Option<String>) -> Result<Zeroizing<String>> {
    let value = match given {
        Some(value) => Zeroizing::new(value),
        None if io::stdin().is_terminal() => Zeroizing::new(
            Password::new()
                .with_prompt(key.as_str())
                .with_confirmation("Confirm", "values do not match")
                .interact()?,
        ),
        None => {
            return Err(Error::Other(format!(
                "{} not provided and stdin is not a terminal",
                key
            )))
        }
    };

    if value.trim().is_empty() {
        return Err(Error::Other(format!("{} cannot be empty", key)));
    }
    Ok(value)
}
