//! Build-type configuration.
//!
//! Attaches a signing profile to the release build type. The signing
//! config is always passed in explicitly; the configurator holds only
//! options from `signet.toml`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::config::{ProjectConfig, ReleaseSection, SigningPolicy};
use crate::core::loader::SigningConfig;
use crate::core::profile::SigningProfile;
use crate::error::{Error, Result, SigningError};

/// A named build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub const ALL: [BuildType; 2] = [BuildType::Debug, BuildType::Release];

    pub fn name(&self) -> &'static str {
        match self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            other => Err(Error::Other(format!("unknown build type: {}", other))),
        }
    }
}

/// How a variant's artifact gets signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSigning {
    /// Signed with the project's release profile.
    Profile(SigningProfile),
    /// Signed with the toolchain's auto-generated debug key.
    DebugKey,
    /// Not signed; the toolchain refuses to publish it.
    Unsigned,
}

/// A configured build variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub build_type: BuildType,
    pub signing: VariantSigning,
    pub minify_enabled: bool,
    pub shrink_resources: bool,
    pub debuggable: bool,
}

impl Variant {
    pub fn is_signed(&self) -> bool {
        !matches!(self.signing, VariantSigning::Unsigned)
    }
}

/// Produces build variants from a signing config.
#[derive(Debug, Clone)]
pub struct BuildTypeConfigurator {
    policy: SigningPolicy,
    release: ReleaseSection,
}

impl BuildTypeConfigurator {
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            policy: config.signing.policy,
            release: config.release.clone(),
        }
    }

    /// Override the signing policy.
    pub fn with_policy(mut self, policy: SigningPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Configure one build type.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::SigningRequired` when configuring a release
    /// build under `SigningPolicy::Require` without a resolved profile.
    pub fn configure(&self, build_type: BuildType, signing: &SigningConfig) -> Result<Variant> {
        let variant = match build_type {
            BuildType::Debug => self.debug_variant(),
            BuildType::Release => Variant {
                build_type,
                signing: self.release_signing(signing)?,
                minify_enabled: self.release.minify,
                // resource shrinking only runs on minified builds
                shrink_resources: self.release.minify && self.release.shrink_resources,
                debuggable: false,
            },
        };

        debug!(
            variant = %variant.build_type,
            signed = variant.is_signed(),
            "variant configured"
        );

        Ok(variant)
    }

    /// Configure every build type.
    pub fn configure_all(&self, signing: &SigningConfig) -> Result<Vec<Variant>> {
        BuildType::ALL
            .into_iter()
            .map(|build_type| self.configure(build_type, signing))
            .collect()
    }

    /// Configure every build type from the outcome of loading signing.
    ///
    /// A failed load only fails the release variant; debug never needs
    /// release signing.
    pub fn configure_each(
        &self,
        signing: Result<SigningConfig>,
    ) -> Vec<(BuildType, Result<Variant>)> {
        let release = signing.and_then(|signing| self.configure(BuildType::Release, &signing));
        vec![
            (BuildType::Debug, Ok(self.debug_variant())),
            (BuildType::Release, release),
        ]
    }

    fn debug_variant(&self) -> Variant {
        Variant {
            build_type: BuildType::Debug,
            signing: VariantSigning::DebugKey,
            minify_enabled: false,
            shrink_resources: false,
            debuggable: true,
        }
    }

    fn release_signing(&self, signing: &SigningConfig) -> Result<VariantSigning> {
        match (signing, self.policy) {
            (SigningConfig::Resolved(profile), _) => Ok(VariantSigning::Profile(profile.clone())),
            (SigningConfig::Absent { path }, SigningPolicy::Require) => {
                Err(SigningError::SigningRequired {
                    variant: BuildType::Release.to_string(),
                    path: path.clone(),
                }
                .into())
            }
            (SigningConfig::Absent { path }, SigningPolicy::AllowUnsigned) => {
                warn!(
                    path = %path.display(),
                    "release variant configured without signing"
                );
                Ok(VariantSigning::Unsigned)
            }
        }
    }
}
