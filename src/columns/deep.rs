//! Deep-часть: плотные эмбеддинги

use crate::error::Result;
use crate::preprocessing::NumericRanges;
use crate::schema::DatasetSchema;
use crate::types::{CategoricalColumn, FeatureColumn};

use super::{bucketized_column, hashed_column};

/// Эмбеддинги хэшированных категориальных колонок, затем эмбеддинги
/// бакетизированных числовых. Возвращает колонки и их количество.
pub fn build_deep_columns(
    schema: &DatasetSchema,
    ranges: &NumericRanges,
    embedding_dim: usize,
) -> Result<(Vec<FeatureColumn>, usize)> {
    let mut feature_columns =
        Vec::with_capacity(schema.deep_emb_cols.len() + schema.deep_bucket_emb_cols.len());

    for col in &schema.deep_emb_cols {
        feature_columns.push(FeatureColumn::embedding(hashed_column(schema, col)?, embedding_dim));
    }

    for col in &schema.deep_bucket_emb_cols {
        let bucketized = CategoricalColumn::Bucketized(bucketized_column(ranges, col)?);
        feature_columns.push(FeatureColumn::embedding(bucketized, embedding_dim));
    }

    let feat_field_size = feature_columns.len();
    Ok((feature_columns, feat_field_size))
}
