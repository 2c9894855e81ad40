//! Core library components.
//!
//! Properties parsing, signing profile resolution, and build-type
//! configuration. Nothing here prints; the CLI owns all output.

pub mod build;
pub mod config;
pub mod constants;
pub mod loader;
pub mod profile;
pub mod properties;
pub mod types;
