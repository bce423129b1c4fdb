//! Модуль предобработки данных

pub mod numeric_range;

pub use numeric_range::{NumericRange, NumericRangeScanner, NumericRanges, NUM_BOUNDARIES};
