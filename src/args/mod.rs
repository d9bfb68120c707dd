//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;


pub use cli::{DEFAULT_TIMEOUT, RunnerArgs};
pub(crate) use parsers::parse_duration;
