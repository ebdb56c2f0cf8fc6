// qualgate-core/src/domain/dataset/mod.rs

pub mod record;
pub mod schema;

pub use record::{Dataset, Record};
pub use schema::{REQUIRED_COLUMNS, check_required_columns};
