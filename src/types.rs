//! Дескрипторы колонок признаков для Wide & Deep модели
//!
//! Дескрипторы ничего не вычисляют: это описание преобразований, которое
//! внешний тренер превращает в свои feature columns.

use serde::{Deserialize, Serialize};

/// Бакетизированная числовая колонка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketizedColumn {
    pub key: String,
    pub boundaries: Vec<f64>,
}

impl BucketizedColumn {
    pub fn new(key: impl Into<String>, boundaries: Vec<f64>) -> Self {
        Self {
            key: key.into(),
            boundaries,
        }
    }

    pub fn name(&self) -> String {
        format!("{}_bucketized", self.key)
    }

    /// Число бакетов: на одну больше, чем границ
    pub fn num_buckets(&self) -> usize {
        self.boundaries.len() + 1
    }
}

/// Ключ пересечения: сырая колонка или бакетизированная
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrossKey {
    Raw { key: String },
    Bucketized(BucketizedColumn),
}

impl CrossKey {
    pub fn raw(key: impl Into<String>) -> Self {
        CrossKey::Raw { key: key.into() }
    }

    pub fn name(&self) -> String {
        match self {
            CrossKey::Raw { key } => key.clone(),
            CrossKey::Bucketized(col) => col.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoricalColumn {
    HashBucket {
        key: String,
        hash_bucket_size: usize,
    },
    VocabularyList {
        key: String,
        vocabulary: Vec<String>,
    },
    Bucketized(BucketizedColumn),
    Crossed {
        keys: Vec<CrossKey>,
        hash_bucket_size: usize,
    },
}

impl CategoricalColumn {
    pub fn hash_bucket(key: impl Into<String>, hash_bucket_size: usize) -> Self {
        CategoricalColumn::HashBucket {
            key: key.into(),
            hash_bucket_size,
        }
    }

    pub fn vocabulary_list<S: AsRef<str>>(key: impl Into<String>, vocabulary: &[S]) -> Self {
        CategoricalColumn::VocabularyList {
            key: key.into(),
            vocabulary: vocabulary.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }

    pub fn crossed(keys: Vec<CrossKey>, hash_bucket_size: usize) -> Self {
        CategoricalColumn::Crossed {
            keys,
            hash_bucket_size,
        }
    }

    pub fn name(&self) -> String {
        match self {
            CategoricalColumn::HashBucket { key, .. } => key.clone(),
            CategoricalColumn::VocabularyList { key, .. } => key.clone(),
            CategoricalColumn::Bucketized(col) => col.name(),
            CategoricalColumn::Crossed { keys, .. } => keys
                .iter()
                .map(CrossKey::name)
                .collect::<Vec<_>>()
                .join("_X_"),
        }
    }

    pub fn num_buckets(&self) -> usize {
        match self {
            CategoricalColumn::HashBucket { hash_bucket_size, .. } => *hash_bucket_size,
            CategoricalColumn::VocabularyList { vocabulary, .. } => vocabulary.len(),
            CategoricalColumn::Bucketized(col) => col.num_buckets(),
            CategoricalColumn::Crossed { hash_bucket_size, .. } => *hash_bucket_size,
        }
    }
}

/// Вид дескриптора, без параметров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Numeric,
    HashBucket,
    VocabularyList,
    Bucketized,
    Crossed,
    Embedding,
    Indicator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureColumn {
    Numeric {
        key: String,
    },
    Categorical(CategoricalColumn),
    Embedding {
        categorical_column: CategoricalColumn,
        dimension: usize,
    },
    Indicator {
        categorical_column: CategoricalColumn,
    },
}

impl FeatureColumn {
    pub fn numeric(key: impl Into<String>) -> Self {
        FeatureColumn::Numeric { key: key.into() }
    }

    pub fn embedding(categorical_column: CategoricalColumn, dimension: usize) -> Self {
        FeatureColumn::Embedding {
            categorical_column,
            dimension,
        }
    }

    pub fn indicator(categorical_column: CategoricalColumn) -> Self {
        FeatureColumn::Indicator { categorical_column }
    }

    pub fn name(&self) -> String {
        match self {
            FeatureColumn::Numeric { key } => key.clone(),
            FeatureColumn::Categorical(col) => col.name(),
            FeatureColumn::Embedding { categorical_column, .. } => {
                format!("{}_embedding", categorical_column.name())
            }
            FeatureColumn::Indicator { categorical_column } => {
                format!("{}_indicator", categorical_column.name())
            }
        }
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureColumn::Numeric { .. } => FeatureKind::Numeric,
            FeatureColumn::Categorical(col) => match col {
                CategoricalColumn::HashBucket { .. } => FeatureKind::HashBucket,
                CategoricalColumn::VocabularyList { .. } => FeatureKind::VocabularyList,
                CategoricalColumn::Bucketized(_) => FeatureKind::Bucketized,
                CategoricalColumn::Crossed { .. } => FeatureKind::Crossed,
            },
            FeatureColumn::Embedding { .. } => FeatureKind::Embedding,
            FeatureColumn::Indicator { .. } => FeatureKind::Indicator,
        }
    }

    /// Вложенная категориальная колонка (для обёрток и самой категориальной)
    pub fn categorical(&self) -> Option<&CategoricalColumn> {
        match self {
            FeatureColumn::Numeric { .. } => None,
            FeatureColumn::Categorical(col) => Some(col),
            FeatureColumn::Embedding { categorical_column, .. } => Some(categorical_column),
            FeatureColumn::Indicator { categorical_column } => Some(categorical_column),
        }
    }
}

/// Итоговая конфигурация для тренера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub deep_columns: Vec<FeatureColumn>,
    pub deep_fields_size: usize,
    pub wide_columns: Vec<FeatureColumn>,
    pub wide_fields_size: usize,
    pub embedding_dim: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: FeatureKind,
}

/// Краткое описание конфигурации, без границ бакетов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureConfigSummary {
    pub deep_columns: Vec<ColumnSummary>,
    pub deep_fields_size: usize,
    pub wide_columns: Vec<ColumnSummary>,
    pub wide_fields_size: usize,
    pub embedding_dim: usize,
}

impl FeatureConfig {
    pub fn summary(&self) -> FeatureConfigSummary {
        let summarize = |cols: &[FeatureColumn]| -> Vec<ColumnSummary> {
            cols.iter()
                .map(|c| ColumnSummary {
                    name: c.name(),
                    kind: c.kind(),
                })
                .collect()
        };

        FeatureConfigSummary {
            deep_columns: summarize(&self.deep_columns),
            deep_fields_size: self.deep_fields_size,
            wide_columns: summarize(&self.wide_columns),
            wide_fields_size: self.wide_fields_size,
            embedding_dim: self.embedding_dim,
        }
    }
}

/// Эталонный набор колонок, собранный вручную
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoFeatureColumns {
    pub feature_columns: Vec<FeatureColumn>,
    pub base_columns: Vec<CategoricalColumn>,
    pub crossed_columns: Vec<CategoricalColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        let hashed = CategoricalColumn::hash_bucket("occupation", 1000);
        assert_eq!(FeatureColumn::embedding(hashed.clone(), 8).name(), "occupation_embedding");
        assert_eq!(FeatureColumn::indicator(hashed).name(), "occupation_indicator");

        let age = BucketizedColumn::new("age", vec![18.0, 25.0]);
        assert_eq!(age.name(), "age_bucketized");
        assert_eq!(age.num_buckets(), 3);

        let crossed = CategoricalColumn::crossed(
            vec![CrossKey::Bucketized(age), CrossKey::raw("education")],
            1000,
        );
        assert_eq!(crossed.name(), "age_bucketized_X_education");
        assert_eq!(FeatureColumn::indicator(crossed).name(), "age_bucketized_X_education_indicator");
    }

    #[test]
    fn test_kind_and_categorical() {
        let col = FeatureColumn::Categorical(CategoricalColumn::Bucketized(BucketizedColumn::new(
            "hours_per_week",
            vec![1.0, 50.0, 99.0],
        )));
        assert_eq!(col.kind(), FeatureKind::Bucketized);
        assert_eq!(col.categorical().map(|c| c.num_buckets()), Some(4));
        assert!(FeatureColumn::numeric("age").categorical().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let col = FeatureColumn::embedding(CategoricalColumn::hash_bucket("gender", 1000), 8);
        let value = serde_json::to_value(&col).unwrap();
        assert_eq!(value["type"], "embedding");
        assert_eq!(value["dimension"], 8);
        assert_eq!(value["categorical_column"]["kind"], "hash_bucket");
        assert_eq!(value["categorical_column"]["hash_bucket_size"], 1000);
    }
}
