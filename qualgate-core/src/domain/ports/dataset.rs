use crate::domain::dataset::Dataset;
use crate::error::QualgateError;
use std::path::Path;

/// Reads a tabular source into ordered records.
///
/// Implementations only enforce structure (existence, required columns);
/// cell values are left to the validator.
pub trait DatasetLoader: Send + Sync {
    fn load(&self, source: &Path) -> Result<Dataset, QualgateError>;
}
