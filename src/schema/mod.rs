//! Схема табличного датасета: колонки, значения по умолчанию, группы признаков

pub mod census;

pub use census::census;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FeatConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Значение для пропущенного или битого поля при парсинге
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Int(i64),
    Str(String),
}

impl DefaultValue {
    fn matches(&self, kind: ColumnKind) -> bool {
        matches!(
            (self, kind),
            (DefaultValue::Int(_), ColumnKind::Numeric) | (DefaultValue::Str(_), ColumnKind::Categorical)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
    pub default: DefaultValue,
}

impl ColumnSpec {
    /// Числовая колонка, по умолчанию -1
    pub fn numeric(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
            default: DefaultValue::Int(-1),
        }
    }

    /// Категориальная колонка, по умолчанию пустая строка
    pub fn categorical(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ColumnKind::Categorical,
            default: DefaultValue::Str(String::new()),
        }
    }
}

/// В какой части модели участвует колонка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnUsage {
    Deep,
    Wide,
    Both,
    Unused,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSchema {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub vocab_size: BTreeMap<String, usize>,
    #[serde(default)]
    pub deep_emb_cols: Vec<String>,
    #[serde(default)]
    pub deep_bucket_emb_cols: Vec<String>,
    #[serde(default)]
    pub wide_multi_hot_cols: Vec<String>,
    #[serde(default)]
    pub wide_bucket_cols: Vec<String>,
    #[serde(default)]
    pub wide_cross_cols: Vec<(String, String)>,
}

impl DatasetSchema {
    /// Загрузка схемы из JSON с проверкой
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FeatConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: DatasetSchema = serde_json::from_str(&raw)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_defaults(&self) -> Vec<&DefaultValue> {
        self.columns.iter().map(|c| &c.default).collect()
    }

    pub fn vocab_size(&self, name: &str) -> Result<usize> {
        self.vocab_size
            .get(name)
            .copied()
            .ok_or_else(|| FeatConfigError::Config(format!("no vocabulary size for column '{}'", name)))
    }

    pub fn usage(&self, name: &str) -> ColumnUsage {
        let contains = |group: &[String]| group.iter().any(|c| c == name);
        let deep = contains(&self.deep_emb_cols) || contains(&self.deep_bucket_emb_cols);
        let wide = contains(&self.wide_multi_hot_cols)
            || contains(&self.wide_bucket_cols)
            || self.wide_cross_cols.iter().any(|(a, b)| a == name || b == name);

        match (deep, wide) {
            (true, true) => ColumnUsage::Both,
            (true, false) => ColumnUsage::Deep,
            (false, true) => ColumnUsage::Wide,
            (false, false) => ColumnUsage::Unused,
        }
    }

    /// Колонки, для которых нужен диапазон значений: сначала deep, затем wide, без повторов
    pub fn bucketized_columns(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.deep_bucket_emb_cols
            .iter()
            .chain(self.wide_bucket_cols.iter())
            .filter(|c| seen.insert(c.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(FeatConfigError::Config("schema has no columns".to_string()));
        }

        let mut names = HashSet::new();
        for col in &self.columns {
            if !names.insert(col.name.as_str()) {
                return Err(FeatConfigError::Config(format!("duplicate column '{}'", col.name)));
            }
            if !col.default.matches(col.kind) {
                return Err(FeatConfigError::Config(format!(
                    "default value of column '{}' does not match its kind {:?}",
                    col.name, col.kind
                )));
            }
        }

        let groups: [(&str, &[String], ColumnKind); 4] = [
            ("deep_emb_cols", &self.deep_emb_cols, ColumnKind::Categorical),
            ("deep_bucket_emb_cols", &self.deep_bucket_emb_cols, ColumnKind::Numeric),
            ("wide_multi_hot_cols", &self.wide_multi_hot_cols, ColumnKind::Categorical),
            ("wide_bucket_cols", &self.wide_bucket_cols, ColumnKind::Numeric),
        ];

        for (group, cols, kind) in groups {
            for name in cols {
                let col = self.column(name).ok_or_else(|| {
                    FeatConfigError::Config(format!("{} references unknown column '{}'", group, name))
                })?;
                if col.kind != kind {
                    return Err(FeatConfigError::Config(format!(
                        "{} expects {:?} columns, '{}' is {:?}",
                        group, kind, name, col.kind
                    )));
                }
                if kind == ColumnKind::Categorical {
                    self.vocab_size(name)?;
                }
            }
        }

        for (a, b) in &self.wide_cross_cols {
            for name in [a, b] {
                if self.column(name).is_none() {
                    return Err(FeatConfigError::Config(format!(
                        "wide_cross_cols references unknown column '{}'",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}
