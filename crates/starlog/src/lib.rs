//! Starlog CLI library
//!
//! The command surface lives here so integration tests can drive it
//! directly against fixture repositories.

pub mod cli;
pub mod exit_codes;

pub use cli::Cli;
