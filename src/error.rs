use thiserror::Error;

use crate::core::ChartFamily;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    DataShape(#[from] DataShapeError),
}

/// Dataset shapes the builder cannot turn into a chart.
///
/// `ChartSpecBuilder::build` recovers from all of these by emitting the empty
/// spec; `try_build` surfaces them to callers that want the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataShapeError {
    #[error("series `{series}` has {actual} values but dataset has {expected} labels")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("dataset has no labels but {series_count} series")]
    MissingLabels { series_count: usize },

    #[error("dataset has no series")]
    NoSeries,

    #[error("{family:?} dataset has no usable value array")]
    NoUsableValues { family: ChartFamily },
}
