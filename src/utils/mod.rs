//! Utility functions and helpers.

/// Running the CLI.
pub mod cli;
/// Password hashing and verification.
pub mod passwords;
