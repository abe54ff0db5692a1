//! Forecast/actual time series loading.
//!
//! The input file is a delimited table with at least two columns; the last
//! two columns are bound as (forecast, actual). A leading header row is
//! tolerated and skipped.

use boreas_error::{DatasetError, DatasetErrorKind};
use std::path::Path;

/// One row of the time series.
///
/// # Examples
///
/// ```
/// use boreas_pipeline::ObservationPair;
///
/// let pair = ObservationPair::new(5.2, 4.9);
/// assert_eq!(*pair.forecast(), 5.2);
/// assert_eq!(*pair.actual(), 4.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new, derive_getters::Getters)]
pub struct ObservationPair {
    /// Forecasted power demand
    forecast: f64,
    /// Actual power demand
    actual: f64,
}

/// The full (forecast, actual) time series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<ObservationPair>,
}

impl Dataset {
    /// Wraps already-parsed observation pairs.
    pub fn from_pairs(rows: Vec<ObservationPair>) -> Self {
        Self { rows }
    }

    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any record is
    /// malformed (see [`Self::from_reader`]).
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            DatasetError::new(DatasetErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Self::from_reader(file)
    }

    /// Loads a dataset from any reader of CSV data.
    ///
    /// Every record must have at least two columns; the last two are bound
    /// as (forecast, actual). A first record whose bound columns do not
    /// parse as numbers is treated as a header and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed CSV, a record with fewer than two
    /// columns, or a non-numeric data cell past the first record.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record =
                result.map_err(|e| DatasetError::new(DatasetErrorKind::Csv(e.to_string())))?;

            if record.len() < 2 {
                return Err(DatasetError::new(DatasetErrorKind::TooFewColumns {
                    row,
                    found: record.len(),
                }));
            }

            let forecast_column = record.len() - 2;
            let parse_cell = |column: usize| -> Result<f64, DatasetError> {
                let value = record.get(column).unwrap_or_default();
                value.parse::<f64>().map_err(|_| {
                    DatasetError::new(DatasetErrorKind::NonNumeric {
                        row,
                        column,
                        value: value.to_string(),
                    })
                })
            };

            match (parse_cell(forecast_column), parse_cell(forecast_column + 1)) {
                (Ok(forecast), Ok(actual)) => rows.push(ObservationPair::new(forecast, actual)),
                (Err(e), _) | (_, Err(e)) => {
                    // a non-numeric first record is a header row
                    if row == 0 {
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        tracing::debug!(rows = rows.len(), "Loaded dataset");
        Ok(Self { rows })
    }

    /// The observation pairs in file order.
    pub fn rows(&self) -> &[ObservationPair] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_headerless_two_column_data() {
        let data = "5.2,4.9\n6.1,6.3\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(*dataset.rows()[0].forecast(), 5.2);
        assert_eq!(*dataset.rows()[1].actual(), 6.3);
    }

    #[test]
    fn skips_header_row() {
        let data = "forecast,actual\n5.2,4.9\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn binds_last_two_of_wider_tables() {
        let data = "2024-01-01,100,5.2,4.9\n2024-01-02,101,6.1,6.3\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(*dataset.rows()[0].forecast(), 5.2);
        assert_eq!(*dataset.rows()[0].actual(), 4.9);
    }

    #[test]
    fn rejects_single_column_records() {
        let data = "5.2\n";
        let err = Dataset::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err.kind,
            DatasetErrorKind::TooFewColumns { row: 0, found: 1 }
        ));
    }

    #[test]
    fn rejects_non_numeric_data_cells() {
        let data = "5.2,4.9\n6.1,oops\n";
        let err = Dataset::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err.kind,
            DatasetErrorKind::NonNumeric { row: 1, column: 1, .. }
        ));
    }
}
