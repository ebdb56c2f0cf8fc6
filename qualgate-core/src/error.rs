// qualgate-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum QualgateError {
    // --- DOMAIN ERRORS (Schema contract, Quality gate) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl QualgateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Infrastructure(InfrastructureError::NotFound(_)))
    }

    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Domain(DomainError::SchemaError { .. }))
    }

    pub fn is_quality_gate_failure(&self) -> bool {
        matches!(self, Self::Domain(DomainError::QualityGateFailed { .. }))
    }
}

// Manual implementation to avoid a duplicate enum variant but keep `?` ergonomics
impl From<std::io::Error> for QualgateError {
    fn from(err: std::io::Error) -> Self {
        QualgateError::Infrastructure(InfrastructureError::Io(err))
    }
}
