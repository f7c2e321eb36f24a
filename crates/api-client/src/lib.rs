pub mod api;
pub mod config;
pub mod workflow;

pub use api::{AdherenceApi, ApiClient};
pub use config::ClientConfig;
