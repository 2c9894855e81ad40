//! Signet - Release-signing configuration for Android builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Validate key.properties and the keystore
//! │   ├── variants      # Show configured build variants
//! │   ├── init          # Write key.properties
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── properties    # .properties parsing
//!     ├── profile       # SigningProfile and Secret
//!     ├── loader        # SigningConfigLoader
//!     ├── build         # Build-type configurator
//!     └── config        # signet.toml management
//! ```
//!
//! # Example
//!
//! ```no_run
//! use signet::{BuildType, BuildTypeConfigurator, ProjectConfig, SigningConfigLoader};
//!
//! # fn main() -> signet::error::Result<()> {
//! let root = std::path::Path::new("android");
//! let config = ProjectConfig::load(root)?;
//! let signing = SigningConfigLoader::new(root).load(&config.signing.properties)?;
//! let release = BuildTypeConfigurator::new(&config).configure(BuildType::Release, &signing)?;
//! println!("release signed: {}", release.is_signed());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::build::{BuildType, BuildTypeConfigurator, Variant, VariantSigning};
pub use crate::core::config::{ProjectConfig, SigningPolicy};
pub use crate::core::loader::{SigningConfig, SigningConfigLoader};
pub use crate::core::profile::{Secret, SigningKey, SigningProfile};
pub use crate::core::properties::Properties;
