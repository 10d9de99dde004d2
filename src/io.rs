//! IO
//!
//! Loading of comma separated datasets. The first row holds the column names,
//! the last column is the class label and every other row is one example.
use crate::data::Dataset;
use crate::errors::Id3Error;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a dataset from any reader of CSV text.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, Id3Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = records
        .next()
        .ok_or_else(|| Id3Error::InvalidHeader("the input is empty".to_string()))?
        .map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
    let mut dataset = Dataset::new(&header.iter().collect::<Vec<_>>())?;

    for result in records {
        let record = result.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        let row: Vec<&str> = record.iter().collect();
        match row.split_last() {
            Some((label, feature_values)) => dataset.add_example(feature_values, label)?,
            None => {
                return Err(Id3Error::Arity {
                    expected: dataset.feature_names().len(),
                    found: 0,
                })
            }
        }
    }
    Ok(dataset)
}

/// Load a dataset from a CSV file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, Id3Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
    let dataset = read_dataset(BufReader::new(file))?;
    debug!(
        "Loaded {} examples with {} features from {}.",
        dataset.len(),
        dataset.feature_names().len(),
        path.display()
    );
    Ok(dataset)
}
