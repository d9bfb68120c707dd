mod app;
mod config;
mod history;
mod http;
mod sink;
mod suite;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use history::HistoryError;
pub use http::{HttpError, RequestError};
pub use sink::SinkError;
pub use suite::SuiteError;
pub use validation::ValidationError;
