// qualgate-core/src/lib.rs

// 1. Documentation is not enforced yet
#![allow(missing_docs)]
// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the core needs from the outside world (Reporter...)
pub mod ports;

// 2. Domain (Business core)
// Validation rules, aggregation, quality gate, environment profiles.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// CSV loader, JSON metrics sink, YAML/env configuration, tracing reporter.
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Pipeline orchestration, metrics report reading.
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers write: use qualgate_core::QualgateError;
pub use error::QualgateError;
