//! Check command.
//!
//! Resolves the signing profile and reports what a release build would
//! sign with. Passwords are never printed.

use std::path::{Path, PathBuf};

use crate::cli::{load_signing, output};
use crate::core::config::{ProjectConfig, SigningPolicy};
use crate::core::loader::SigningConfig;
use crate::error::Result;

/// Validate signing properties.
pub fn execute(root: &Path, properties: Option<PathBuf>, require: bool, json: bool) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let signing = load_signing(root, &config, properties)?;
    let required = require || config.signing.policy == SigningPolicy::Require;

    match &signing {
        SigningConfig::Resolved(profile) => {
            let fingerprint = profile.keystore_fingerprint()?;

            if json {
                let result = serde_json::json!({
                    "status": "resolved",
                    "store_file": profile.store_file().display().to_string(),
                    "key_alias": profile.key_alias(),
                    "keystore_sha256": fingerprint,
                });
                output::data(&serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            output::section("Signing profile");
            output::kv("store file", output::path(profile.store_file().display()));
            output::kv("key alias", profile.key_alias());
            output::kv("store password", "********");
            output::kv("key password", "********");
            output::kv("sha-256", &fingerprint);
            output::blank();
            output::success("release builds will be signed");
        }
        SigningConfig::Absent { path } => {
            if required {
                signing.require()?;
            }

            if json {
                let result = serde_json::json!({
                    "status": "absent",
                    "path": path.display().to_string(),
                });
                output::data(&serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            output::hint("run: signet init --store-file <keystore> --key-alias <alias>");
        }
    }

    Ok(())
}
