pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod http;
pub mod logging;
pub mod output;
pub mod report;
pub mod snapshot;

pub use error::{ApiSnapError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// A check found at least one breaking difference.
pub const EXIT_BREAKING: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
