//! Диапазоны числовых признаков для бакетизации

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{FeatConfigError, Result};
use crate::schema::DatasetSchema;

/// Число границ бакетов для каждой числовой колонки
pub const NUM_BOUNDARIES: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    fn update(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// `n` равномерно распределённых точек от min до max включительно
    pub fn linspace(&self, n: usize) -> Vec<f64> {
        Array1::linspace(self.min, self.max, n).to_vec()
    }

    pub fn boundaries(&self) -> Vec<f64> {
        self.linspace(NUM_BOUNDARIES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericRanges(BTreeMap<String, NumericRange>);

impl NumericRanges {
    pub fn get(&self, column: &str) -> Result<NumericRange> {
        self.0
            .get(column)
            .copied()
            .ok_or_else(|| FeatConfigError::MissingRange(column.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NumericRange)> {
        self.0.iter()
    }
}

impl FromIterator<(String, NumericRange)> for NumericRanges {
    fn from_iter<I: IntoIterator<Item = (String, NumericRange)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Сканирует train и test, собирая min/max по бакетизируемым колонкам.
/// Результат не кэшируется: каждый вызов читает файлы заново.
pub struct NumericRangeScanner<'a> {
    schema: &'a DatasetSchema,
    // (имя колонки, индекс в строке)
    targets: Vec<(&'a str, usize)>,
}

impl<'a> NumericRangeScanner<'a> {
    pub fn new(schema: &'a DatasetSchema) -> Result<Self> {
        let targets = schema
            .bucketized_columns()
            .into_iter()
            .map(|name| {
                schema
                    .column_index(name)
                    .map(|idx| (name, idx))
                    .ok_or_else(|| FeatConfigError::Config(format!("unknown bucketized column '{}'", name)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { schema, targets })
    }

    pub fn scan(&self, train: impl AsRef<Path>, test: impl AsRef<Path>) -> Result<NumericRanges> {
        let train = train.as_ref();
        let test = test.as_ref();
        let open = |path: &Path| {
            File::open(path).map_err(|source| FeatConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let train_file = open(train)?;
        let test_file = open(test)?;

        self.scan_named([
            (train.display().to_string(), train_file),
            (test.display().to_string(), test_file),
        ])
    }

    pub fn scan_readers<R: Read>(&self, train: R, test: R) -> Result<NumericRanges> {
        self.scan_named([("train".to_string(), train), ("test".to_string(), test)])
    }

    fn scan_named<R: Read>(&self, sources: impl IntoIterator<Item = (String, R)>) -> Result<NumericRanges> {
        let mut ranges: Vec<Option<NumericRange>> = vec![None; self.targets.len()];

        for (label, reader) in sources {
            let rows = self.scan_source(&label, reader, &mut ranges)?;
            tracing::debug!("Scanned {}: {} rows", label, rows);
        }

        self.targets
            .iter()
            .zip(ranges)
            .map(|(&(name, _), range)| {
                range
                    .map(|r| (name.to_string(), r))
                    .ok_or_else(|| FeatConfigError::EmptyColumn(name.to_string()))
            })
            .collect()
    }

    fn scan_source<R: Read>(&self, label: &str, reader: R, ranges: &mut [Option<NumericRange>]) -> Result<usize> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'|'))
            .from_reader(reader);

        let expected = self.schema.columns.len();
        let mut rows = 0;

        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() != expected {
                return Err(FeatConfigError::SchemaMismatch {
                    path: label.to_string(),
                    line,
                    expected,
                    found: record.len(),
                });
            }

            for (slot, &(name, idx)) in ranges.iter_mut().zip(&self.targets) {
                let raw = record.get(idx).unwrap_or("");
                if raw.is_empty() {
                    continue;
                }
                let value: f64 = raw.parse().map_err(|_| FeatConfigError::InvalidNumber {
                    column: name.to_string(),
                    value: raw.to_string(),
                    line,
                })?;

                slot.get_or_insert(NumericRange { min: value, max: value })
                    .update(value);
            }
            rows += 1;
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::census;

    const TRAIN: &str = "\
39, State-gov, 77516, Bachelors, 13, Never-married, Adm-clerical, Not-in-family, White, Male, 2174, 0, 40, United-States, <=50K
50, Self-emp-not-inc, 83311, Bachelors, 13, Married-civ-spouse, Exec-managerial, Husband, White, Male, 0, 0, 13, United-States, <=50K
";

    const TEST: &str = "\
|1x3 Cross validator
25, Private, 226802, 11th, 7, Never-married, Machine-op-inspct, Own-child, Black, Male, 0, 0, 40, United-States, <=50K.

90, Private, 89814, HS-grad, 9, Married-civ-spouse, Farming-fishing, Husband, White, Male, 0, 1902, 99, United-States, >50K.
";

    #[test]
    fn test_scan_ranges_over_both_sources() {
        let scanner = NumericRangeScanner::new(census()).unwrap();
        let ranges = scanner.scan_readers(TRAIN.as_bytes(), TEST.as_bytes()).unwrap();

        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges.get("age").unwrap(), NumericRange { min: 25.0, max: 90.0 });
        assert_eq!(ranges.get("education_num").unwrap(), NumericRange { min: 7.0, max: 13.0 });
        assert_eq!(ranges.get("capital_gain").unwrap(), NumericRange { min: 0.0, max: 2174.0 });
        assert_eq!(ranges.get("capital_loss").unwrap(), NumericRange { min: 0.0, max: 1902.0 });
        assert_eq!(ranges.get("hours_per_week").unwrap(), NumericRange { min: 13.0, max: 99.0 });
        assert!(matches!(ranges.get("fnlwgt"), Err(FeatConfigError::MissingRange(_))));
    }

    #[test]
    fn test_column_count_mismatch() {
        let scanner = NumericRangeScanner::new(census()).unwrap();
        let err = scanner
            .scan_readers(TRAIN.as_bytes(), "39, State-gov, 77516\n".as_bytes())
            .unwrap_err();

        match err {
            FeatConfigError::SchemaMismatch { path, expected, found, .. } => {
                assert_eq!(path, "test");
                assert_eq!(expected, 15);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_value() {
        let scanner = NumericRangeScanner::new(census()).unwrap();
        let bad = TRAIN.replacen("39,", "abc,", 1);
        let err = scanner.scan_readers(bad.as_bytes(), TEST.as_bytes()).unwrap_err();

        assert!(matches!(err, FeatConfigError::InvalidNumber { ref column, .. } if column == "age"));
    }

    #[test]
    fn test_empty_sources() {
        let scanner = NumericRangeScanner::new(census()).unwrap();
        let err = scanner.scan_readers("".as_bytes(), "".as_bytes()).unwrap_err();
        assert!(matches!(err, FeatConfigError::EmptyColumn(_)));
    }

    #[test]
    fn test_missing_file() {
        let scanner = NumericRangeScanner::new(census()).unwrap();
        let err = scanner
            .scan("/nonexistent/adult.data", "/nonexistent/adult.test")
            .unwrap_err();
        assert!(matches!(err, FeatConfigError::Io { .. }));
    }

    #[test]
    fn test_boundaries() {
        let range = NumericRange { min: 17.0, max: 90.0 };
        let boundaries = range.boundaries();

        assert_eq!(boundaries.len(), NUM_BOUNDARIES);
        assert_eq!(boundaries[0], 17.0);
        assert!((boundaries[NUM_BOUNDARIES - 1] - 90.0).abs() < 1e-9);

        let step = (90.0 - 17.0) / (NUM_BOUNDARIES - 1) as f64;
        for pair in boundaries.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }
}
