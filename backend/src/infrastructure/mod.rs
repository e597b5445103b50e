pub mod config;
pub mod persistence;
pub mod web;

pub use config::{ConfigError, WikiConfig};
pub use persistence::InMemoryPageRepository;
