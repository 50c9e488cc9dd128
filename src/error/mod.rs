mod app;
mod bench;
mod config;
mod http;
mod sink;
mod validation;

pub use app::{AppError, AppResult};
pub use bench::BenchError;
pub use config::ConfigError;
pub use http::HttpError;
pub use sink::SinkError;
pub use validation::ValidationError;
