//! Сборка полной конфигурации признаков

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FeatConfigError, Result};
use crate::preprocessing::NumericRangeScanner;
use crate::schema::{census, DatasetSchema};
use crate::types::FeatureConfig;

use super::{build_deep_columns, build_wide_columns, DEFAULT_EMBEDDING_DIM};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_train_path")]
    pub train_path: PathBuf,
    #[serde(default = "default_test_path")]
    pub test_path: PathBuf,
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
}

fn default_train_path() -> PathBuf { PathBuf::from("data/census/adult.data") }
fn default_test_path() -> PathBuf { PathBuf::from("data/census/adult.test") }
fn default_embedding_dim() -> usize { DEFAULT_EMBEDDING_DIM }

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            train_path: default_train_path(),
            test_path: default_test_path(),
            embedding_dim: default_embedding_dim(),
        }
    }
}

impl BuilderConfig {
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn with_data(mut self, train_path: impl Into<PathBuf>, test_path: impl Into<PathBuf>) -> Self {
        self.train_path = train_path.into();
        self.test_path = test_path.into();
        self
    }
}

pub struct FeatureColumnBuilder<'a> {
    schema: &'a DatasetSchema,
    config: BuilderConfig,
}

impl<'a> FeatureColumnBuilder<'a> {
    pub fn new(schema: &'a DatasetSchema, config: BuilderConfig) -> Self {
        Self { schema, config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Диапазоны пересчитываются при каждом вызове
    pub fn build(&self) -> Result<FeatureConfig> {
        let embedding_dim = self.config.embedding_dim;
        if embedding_dim == 0 {
            return Err(FeatConfigError::Config("embedding_dim must be positive".to_string()));
        }
        self.schema.validate()?;

        let scanner = NumericRangeScanner::new(self.schema)?;
        let numeric_range = scanner.scan(&self.config.train_path, &self.config.test_path)?;

        let (deep_columns, deep_fields_size) = build_deep_columns(self.schema, &numeric_range, embedding_dim)?;
        let (wide_columns, wide_fields_size) = build_wide_columns(self.schema, &numeric_range)?;

        tracing::info!(
            "Feature columns built: {} deep, {} wide, embedding_dim {}",
            deep_fields_size,
            wide_fields_size,
            embedding_dim
        );

        Ok(FeatureConfig {
            deep_columns,
            deep_fields_size,
            wide_columns,
            wide_fields_size,
            embedding_dim,
        })
    }
}

/// Конфигурация census с путями к данным по умолчанию
pub fn build_census_feat_columns(embedding_dim: usize) -> Result<FeatureConfig> {
    let config = BuilderConfig::default().with_embedding_dim(embedding_dim);
    FeatureColumnBuilder::new(census(), config).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.embedding_dim, 8);
        assert_eq!(config.train_path, PathBuf::from("data/census/adult.data"));
        assert_eq!(config.test_path, PathBuf::from("data/census/adult.test"));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: BuilderConfig = serde_json::from_str(r#"{"embedding_dim": 32}"#).unwrap();
        assert_eq!(config.embedding_dim, 32);
        assert_eq!(config.train_path, default_train_path());
    }

    #[test]
    fn test_zero_embedding_dim() {
        let config = BuilderConfig::default().with_embedding_dim(0);
        let err = FeatureColumnBuilder::new(census(), config).build().unwrap_err();
        assert!(matches!(err, FeatConfigError::Config(_)));
    }

    #[test]
    fn test_missing_data_files() {
        let config = BuilderConfig::default().with_data("/nonexistent/train.csv", "/nonexistent/test.csv");
        let result = FeatureColumnBuilder::new(census(), config).build();
        assert!(matches!(result, Err(FeatConfigError::Io { .. })));
    }
}
