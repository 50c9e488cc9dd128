//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::BenchArgs;
pub use types::{OutputFormat, PositiveU64, PositiveUsize};
