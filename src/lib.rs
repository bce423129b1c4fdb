//! Census Feat - конфигурация признаков Wide & Deep модели

pub mod error;
pub mod types;
pub mod schema;
pub mod preprocessing;
pub mod columns;

pub use error::{FeatConfigError, Result};
pub use types::*;
pub use schema::{census, ColumnKind, ColumnSpec, ColumnUsage, DatasetSchema, DefaultValue};
pub use preprocessing::*;
pub use columns::*;
