//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod variants;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::config::ProjectConfig;
use crate::core::loader::{SigningConfig, SigningConfigLoader};
use crate::error::Result;

/// Signet - Release-signing configuration for Android builds.
#[derive(Parser)]
#[command(
    name = "signet",
    about = "Release-signing configuration for Android builds",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (where key.properties and signet.toml live)
    #[arg(long, global = true, default_value = ".", env = "SIGNET_ROOT")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate signing properties and the keystore they point at
    Check {
        /// Properties file (default: from signet.toml, else key.properties)
        #[arg(short, long)]
        properties: Option<PathBuf>,
        /// Fail if the properties file is missing
        #[arg(long)]
        require: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how each build type is configured
    Variants {
        /// Properties file (default: from signet.toml, else key.properties)
        #[arg(short, long)]
        properties: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a key.properties file
    Init {
        /// Keystore path, relative to the project root or absolute
        #[arg(long)]
        store_file: String,
        /// Key alias within the keystore
        #[arg(long)]
        key_alias: String,
        /// Keystore password (prompted if omitted)
        #[arg(long, env = "SIGNET_STORE_PASSWORD", hide_env_values = true)]
        store_password: Option<String>,
        /// Key password (prompted if omitted)
        #[arg(long, env = "SIGNET_KEY_PASSWORD", hide_env_values = true)]
        key_password: Option<String>,
        /// Overwrite an existing properties file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command against the project at `root`.
pub fn execute(command: Command, root: &Path) -> Result<()> {
    use Command::*;

    match command {
        Check {
            properties,
            require,
            json,
        } => check::execute(root, properties, require, json),
        Variants { properties, json } => variants::execute(root, properties, json),
        Init {
            store_file,
            key_alias,
            store_password,
            key_password,
            force,
        } => init::execute(
            root,
            init::InitArgs {
                store_file,
                key_alias,
                store_password,
                key_password,
                force,
            },
        ),
        Completions { shell } => completions::execute(shell),
    }
}

/// Load the signing config that `config` points at.
///
/// An explicit `--properties` path wins over the configured one.
pub(crate) fn load_signing(
    root: &Path,
    config: &ProjectConfig,
    properties: Option<PathBuf>,
) -> Result<SigningConfig> {
    let properties = properties.unwrap_or_else(|| config.signing.properties.clone());
    SigningConfigLoader::new(root).load(&properties)
}
