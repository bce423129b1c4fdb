//! Wide-часть: разреженные индикаторы, бакеты и пересечения

use crate::error::Result;
use crate::preprocessing::NumericRanges;
use crate::schema::DatasetSchema;
use crate::types::{CategoricalColumn, CrossKey, FeatureColumn};

use super::{bucketized_column, hashed_column, CROSS_HASH_BUCKET_SIZE};

pub fn build_wide_columns(
    schema: &DatasetSchema,
    ranges: &NumericRanges,
) -> Result<(Vec<FeatureColumn>, usize)> {
    let mut base_columns = Vec::with_capacity(schema.wide_multi_hot_cols.len() + schema.wide_bucket_cols.len());
    let mut cross_columns = Vec::with_capacity(schema.wide_cross_cols.len());

    for col in &schema.wide_multi_hot_cols {
        base_columns.push(FeatureColumn::indicator(hashed_column(schema, col)?));
    }

    // Без эмбеддинга: индекс бакета остаётся разреженным
    for col in &schema.wide_bucket_cols {
        base_columns.push(FeatureColumn::Categorical(CategoricalColumn::Bucketized(
            bucketized_column(ranges, col)?,
        )));
    }

    for (a, b) in &schema.wide_cross_cols {
        let crossed = CategoricalColumn::crossed(
            vec![CrossKey::raw(a.as_str()), CrossKey::raw(b.as_str())],
            CROSS_HASH_BUCKET_SIZE,
        );
        cross_columns.push(FeatureColumn::indicator(crossed));
    }

    let mut feature_columns = base_columns;
    feature_columns.extend(cross_columns);
    let feat_field_size = feature_columns.len();
    Ok((feature_columns, feat_field_size))
}
