//! Loads test-case records from a CSV suite file.
mod reader;


pub use reader::{COLUMNS, SuiteOptions, read_test_cases};
