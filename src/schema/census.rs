//! Схема датасета census (UCI adult)

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{ColumnSpec, DatasetSchema};

const VOCAB_SIZE: [(&str, usize); 7] = [
    ("gender", 2),
    ("education", 16),
    ("relationship", 6),
    ("marital_status", 7),
    ("workclass", 9),
    ("native_country", 42),
    ("occupation", 15),
];

const CATEGORICAL_COLS: [&str; 7] = [
    "gender",
    "education",
    "relationship",
    "marital_status",
    "workclass",
    "native_country",
    "occupation",
];

const BUCKET_COLS: [&str; 5] = ["age", "education_num", "capital_gain", "capital_loss", "hours_per_week"];

const CROSS_COLS: [(&str, &str); 3] = [
    ("education", "occupation"),
    ("native_country", "occupation"),
    ("gender", "occupation"),
];

/// Схема census, создаётся один раз на процесс
pub fn census() -> &'static DatasetSchema {
    static SCHEMA: OnceLock<DatasetSchema> = OnceLock::new();
    SCHEMA.get_or_init(build_census_schema)
}

fn build_census_schema() -> DatasetSchema {
    let columns = vec![
        ColumnSpec::numeric("age"),
        ColumnSpec::categorical("workclass"),
        ColumnSpec::numeric("fnlwgt"),
        ColumnSpec::categorical("education"),
        ColumnSpec::numeric("education_num"),
        ColumnSpec::categorical("marital_status"),
        ColumnSpec::categorical("occupation"),
        ColumnSpec::categorical("relationship"),
        ColumnSpec::categorical("race"),
        ColumnSpec::categorical("gender"),
        ColumnSpec::numeric("capital_gain"),
        ColumnSpec::numeric("capital_loss"),
        ColumnSpec::numeric("hours_per_week"),
        ColumnSpec::categorical("native_country"),
        ColumnSpec::categorical("income_bracket"),
    ];

    let to_owned = |cols: &[&str]| cols.iter().map(|c| c.to_string()).collect::<Vec<_>>();

    DatasetSchema {
        columns,
        vocab_size: VOCAB_SIZE
            .iter()
            .map(|(name, size)| (name.to_string(), *size))
            .collect::<BTreeMap<_, _>>(),
        deep_emb_cols: to_owned(&CATEGORICAL_COLS),
        deep_bucket_emb_cols: to_owned(&BUCKET_COLS),
        wide_multi_hot_cols: to_owned(&CATEGORICAL_COLS),
        wide_bucket_cols: to_owned(&BUCKET_COLS),
        wide_cross_cols: CROSS_COLS
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnKind, ColumnUsage, DefaultValue};

    #[test]
    fn test_census_schema_is_valid() {
        assert!(census().validate().is_ok());
    }

    #[test]
    fn test_census_columns_and_defaults() {
        let schema = census();
        assert_eq!(schema.columns.len(), 15);
        assert_eq!(schema.column_names()[0], "age");
        assert_eq!(schema.column_names()[14], "income_bracket");

        for col in &schema.columns {
            match col.kind {
                ColumnKind::Numeric => assert_eq!(col.default, DefaultValue::Int(-1)),
                ColumnKind::Categorical => assert_eq!(col.default, DefaultValue::Str(String::new())),
            }
        }
        assert_eq!(schema.column_defaults().len(), schema.columns.len());
    }

    #[test]
    fn test_census_groups() {
        let schema = census();
        assert_eq!(schema.deep_emb_cols.len(), 7);
        assert_eq!(schema.deep_bucket_emb_cols.len(), 5);
        assert_eq!(schema.wide_multi_hot_cols.len(), 7);
        assert_eq!(schema.wide_bucket_cols.len(), 5);
        assert_eq!(schema.wide_cross_cols.len(), 3);
        assert_eq!(schema.vocab_size("native_country").unwrap(), 42);
        assert_eq!(schema.usage("fnlwgt"), ColumnUsage::Unused);
        assert_eq!(schema.usage("occupation"), ColumnUsage::Both);
    }

    #[test]
    fn test_census_is_shared() {
        assert!(std::ptr::eq(census(), census()));
    }
}
