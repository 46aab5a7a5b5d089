//! Generic catalog file parser.
//!
//! Catalog files are tab-delimited with a header row. Lines starting with
//! `#` are comments. List-valued columns separate items with `|`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{RiskError, RiskResult};

/// Trait for catalog entries that can be parsed from a tab-delimited row.
pub trait CatalogRecord: Sized {
    /// Expected column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> RiskResult<Self>;
}

/// A streaming parser for catalog files.
pub struct CatalogParser<R: Read, T: CatalogRecord> {
    reader: Reader<R>,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<T: CatalogRecord> CatalogParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> RiskResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RiskError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: CatalogRecord> CatalogParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> RiskResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    /// Validates that the file has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> RiskResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() != expected.len() {
            return Err(RiskError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(RiskError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Parses all records into a Vec.
    ///
    /// Stops at the first malformed row.
    pub fn parse_all(self) -> RiskResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: CatalogRecord> Iterator for CatalogParser<R, T> {
    type Item = RiskResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    if record.iter().all(|f| f.is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing catalog field values.
pub mod parse {
    use super::{RiskError, RiskResult};

    /// Separator between items of a list-valued column.
    pub const LIST_SEPARATOR: char = '|';

    /// Returns the field value, failing if it is empty.
    pub fn required<'a>(value: Option<&'a str>, column: &str) -> RiskResult<&'a str> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(RiskError::MissingField {
                column: column.to_string(),
            }),
        }
    }

    /// Parses a probability in [0, 1].
    pub fn probability(value: &str, condition: &str) -> RiskResult<f64> {
        value
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && (0.0..=1.0).contains(p))
            .ok_or_else(|| RiskError::InvalidProbability {
                condition: condition.to_string(),
                value: value.to_string(),
            })
    }

    /// Splits a `|`-separated list, dropping blank items.
    pub fn list(value: &str) -> Vec<String> {
        value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probability() {
        assert_eq!(parse::probability("0.8", "Cold").unwrap(), 0.8);
        assert_eq!(parse::probability("1", "Cold").unwrap(), 1.0);
        assert_eq!(parse::probability("0", "Cold").unwrap(), 0.0);
        assert!(parse::probability("1.5", "Cold").is_err());
        assert!(parse::probability("-0.1", "Cold").is_err());
        assert!(parse::probability("NaN", "Cold").is_err());
        assert!(parse::probability("likely", "Cold").is_err());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse::list("Rest | Hydration|Vitamin C intake"),
            vec!["Rest", "Hydration", "Vitamin C intake"]
        );
        assert_eq!(parse::list("Rest||"), vec!["Rest"]);
        assert!(parse::list("").is_empty());
    }

    #[test]
    fn test_parse_required() {
        assert_eq!(parse::required(Some("Fever"), "name").unwrap(), "Fever");
        assert!(matches!(
            parse::required(Some(""), "name"),
            Err(RiskError::MissingField { .. })
        ));
        assert!(parse::required(None, "name").is_err());
    }
}
