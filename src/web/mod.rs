mod api;
mod api_doc;
mod config;
mod error;
mod relay;
mod server;

pub use config::{Config, ConfigError};
pub use error::ServeError;
pub use server::run_server;
