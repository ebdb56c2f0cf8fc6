// qualgate-core/src/infrastructure/loader/mod.rs

pub mod csv;

pub use self::csv::CsvDatasetLoader;
