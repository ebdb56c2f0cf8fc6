// qualgate-core/src/infrastructure/loader/csv.rs

use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::dataset::{Dataset, Record, check_required_columns};
use crate::domain::ports::DatasetLoader;
use crate::error::QualgateError;
use crate::infrastructure::error::InfrastructureError;

/// Loads a delimited file with a header row.
///
/// Only the structure is checked here: the file must exist and the header must
/// carry every required column. Rows may be shorter or longer than the header;
/// their content is judged later by the validator.
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    delimiter: u8,
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvDatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn load_from_reader<R: Read>(&self, input: R) -> Result<Dataset, QualgateError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let columns: Vec<String> = reader
            .headers()
            .map_err(InfrastructureError::from)?
            .iter()
            .map(str::to_string)
            .collect();

        // Schema first: a bad header rejects the dataset before any row is read
        check_required_columns(&columns)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(InfrastructureError::from)?;
            records.push(Record::from_row(&columns, row.iter()));
        }

        Ok(Dataset::new(columns, records))
    }
}

impl DatasetLoader for CsvDatasetLoader {
    #[instrument(skip(self), fields(source = %source.display()))]
    fn load(&self, source: &Path) -> Result<Dataset, QualgateError> {
        if !source.is_file() {
            return Err(InfrastructureError::NotFound(source.to_path_buf()).into());
        }

        let file = std::fs::File::open(source)?;
        let dataset = self.load_from_reader(std::io::BufReader::new(file))?;
        debug!(
            rows = dataset.len(),
            columns = dataset.columns.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }
}
