//! Построение колонок признаков Wide & Deep

pub mod builder;
pub mod deep;
pub mod demo;
pub mod wide;

pub use builder::{build_census_feat_columns, BuilderConfig, FeatureColumnBuilder};
pub use deep::build_deep_columns;
pub use demo::official_census_feature_columns_demo;
pub use wide::build_wide_columns;

use crate::error::{FeatConfigError, Result};
use crate::schema::DatasetSchema;
use crate::types::{BucketizedColumn, CategoricalColumn};
use crate::preprocessing::NumericRanges;

pub const DEFAULT_EMBEDDING_DIM: usize = 8;

/// Минимальный размер хэш-пространства категориальной колонки
pub const MIN_HASH_BUCKET_SIZE: usize = 1000;

/// Запас бакетов для колонок с большой кардинальностью
pub const HASH_BUCKET_OVERPROVISION: usize = 10000;

pub const CROSS_HASH_BUCKET_SIZE: usize = 10000;

/// Размер хэш-пространства по кардинальности словаря, `None` при переполнении
pub fn hash_bucket_size(vocab_size: usize) -> Option<usize> {
    if vocab_size <= MIN_HASH_BUCKET_SIZE {
        Some(MIN_HASH_BUCKET_SIZE)
    } else {
        vocab_size
            .checked_add(HASH_BUCKET_OVERPROVISION)
            .map(|size| size.max(MIN_HASH_BUCKET_SIZE))
    }
}

fn hashed_column(schema: &DatasetSchema, name: &str) -> Result<CategoricalColumn> {
    let vocab_size = schema.vocab_size(name)?;
    let size = hash_bucket_size(vocab_size).ok_or_else(|| {
        FeatConfigError::Config(format!("vocabulary size {} of column '{}' is too large", vocab_size, name))
    })?;
    Ok(CategoricalColumn::hash_bucket(name, size))
}

/// Границы должны строго возрастать, иначе тренер отвергнет колонку
fn bucketized_column(ranges: &NumericRanges, name: &str) -> Result<BucketizedColumn> {
    let range = ranges.get(name)?;
    let boundaries = range.boundaries();
    if !boundaries.windows(2).all(|w| w[0] < w[1]) {
        return Err(FeatConfigError::Config(format!(
            "column '{}' has a degenerate range [{}, {}], boundaries are not strictly increasing",
            name, range.min, range.max
        )));
    }
    Ok(BucketizedColumn::new(name, boundaries))
}
