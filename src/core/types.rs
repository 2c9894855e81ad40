//! Type aliases for domain concepts.

/// A key in a `.properties` file (e.g., storeFile, keyAlias).
pub type PropertyKey = String;

/// A build variant name (e.g., debug, release).
pub type VariantName = String;
