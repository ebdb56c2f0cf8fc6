// qualgate-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod fs;
pub mod loader;
pub mod logging;
pub mod sink;

pub use error::InfrastructureError;
