//! Signet - Release-signing configuration for Android builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use signet::cli::output;
use signet::cli::{execute, Cli};
use signet::error::{Error, SigningError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SIGNET_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("signet=debug")
        } else {
            EnvFilter::new("signet=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.root) {
        let suggestion = match &e {
            Error::Signing(SigningError::MissingConfigFile(_))
            | Error::Signing(SigningError::SigningRequired { .. }) => {
                Some("run: signet init --store-file <keystore> --key-alias <alias>")
            }
            Error::Signing(SigningError::IncompleteSigningConfig { .. }) => {
                Some("add the missing keys to the properties file")
            }
            Error::Signing(SigningError::KeystoreNotFound { .. }) => {
                Some("check storeFile; relative paths resolve against the project root")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
