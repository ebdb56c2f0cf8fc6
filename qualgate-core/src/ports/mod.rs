// qualgate-core/src/ports/mod.rs

pub mod reporter;

pub use reporter::Reporter;
