// qualgate-core/src/domain/dataset/schema.rs

use crate::domain::error::DomainError;

/// Columns every customer dataset must expose, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["customer_id", "name", "age", "email", "country"];

/// Checks the header against the required-column contract.
/// Extra columns are accepted; any missing one rejects the whole dataset.
pub fn check_required_columns<S: AsRef<str>>(header: &[S]) -> Result<(), DomainError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !header.iter().any(|h| h.as_ref() == **required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::SchemaError { missing })
    }
}
