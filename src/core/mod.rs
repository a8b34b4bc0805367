pub mod classifier;
pub mod consolidator;
pub mod reducer;
pub mod types;

pub use classifier::classify;
pub use consolidator::{OTHER_LABEL, consolidate, should_consolidate};
pub use reducer::{SampleIndices, reduce, should_reduce, stride_indices};
pub use types::{ChartFamily, ColorHint, Dataset, DisplayProfile, Series, ThemeMode};
