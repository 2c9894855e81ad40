//! Variants command.
//!
//! Shows the signing and optimization settings of each build type.

use std::path::{Path, PathBuf};

use crate::cli::{load_signing, output};
use crate::core::build::{BuildTypeConfigurator, Variant, VariantSigning};
use crate::core::config::ProjectConfig;
use crate::error::Result;

/// Show configured build variants.
///
/// A signing failure is reported on the release variant only; the debug
/// variant is still shown and the error is returned afterwards.
pub fn execute(root: &Path, properties: Option<PathBuf>, json: bool) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let signing = load_signing(root, &config, properties);
    let outcomes = BuildTypeConfigurator::new(&config).configure_each(signing);

    if json {
        let variants_json: Vec<_> = outcomes
            .iter()
            .map(|(build_type, outcome)| match outcome {
                Ok(variant) => variant_json(variant),
                Err(e) => serde_json::json!({
                    "name": build_type,
                    "signing": "error",
                    "error": e.to_string(),
                }),
            })
            .collect();
        let result = serde_json::json!({ "variants": variants_json });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else {
        for (build_type, outcome) in &outcomes {
            output::section(build_type.name());
            let variant = match outcome {
                Ok(variant) => variant,
                Err(_) => {
                    output::kv("signing", "failed");
                    continue;
                }
            };
            output::kv("signing", signing_label(variant));
            if let VariantSigning::Profile(profile) = &variant.signing {
                output::kv("keystore", output::path(profile.store_file().display()));
                output::kv("key alias", profile.key_alias());
            }
            output::kv("minify", variant.minify_enabled);
            output::kv("shrink resources", variant.shrink_resources);
            output::kv("debuggable", variant.debuggable);
        }

        let unsigned = outcomes
            .iter()
            .any(|(_, outcome)| matches!(outcome, Ok(v) if !v.is_signed()));
        if unsigned {
            output::blank();
            output::warn("unsigned variants cannot be published");
        }
    }

    for (_, outcome) in outcomes {
        outcome?;
    }

    Ok(())
}

fn variant_json(variant: &Variant) -> serde_json::Value {
    let store_file = match &variant.signing {
        VariantSigning::Profile(p) => Some(p.store_file().display().to_string()),
        _ => None,
    };
    serde_json::json!({
        "name": variant.build_type,
        "signing": signing_label(variant),
        "store_file": store_file,
        "minify": variant.minify_enabled,
        "shrink_resources": variant.shrink_resources,
        "debuggable": variant.debuggable,
    })
}

fn signing_label(variant: &Variant) -> &'static str {
    match variant.signing {
        VariantSigning::Profile(_) => "release key",
        VariantSigning::DebugKey => "debug key",
        VariantSigning::Unsigned => "unsigned",
    }
}
