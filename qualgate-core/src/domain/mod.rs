pub mod configuration;
pub mod dataset;
pub mod environment;
pub mod error;
pub mod ports;
pub mod quality;

// Handy re-exports to keep imports short elsewhere
pub use configuration::Settings;
pub use environment::{BreachSeverity, Environment, EnvironmentProfile, LogLevel};
pub use error::DomainError;
