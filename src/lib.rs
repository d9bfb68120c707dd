//! Core library for the `apicase` CLI.
//!
//! `apicase` reads declarative HTTP API test cases from a CSV suite, sends
//! each request in order, judges the response by status code and JSON body,
//! and records the verdicts. The building blocks are exposed here: the
//! record model, the request adapter, the executor, JSON comparison, the
//! suite reader, and the result sinks.
pub mod args;
pub mod compare;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod model;
pub mod runner;
pub mod sinks;
pub mod suite;
