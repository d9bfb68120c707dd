mod app;
mod args;
mod compare;
mod config;
mod entry;
mod error;
mod executor;
mod http;
mod logger;
mod model;
mod runner;
mod sinks;
mod suite;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
