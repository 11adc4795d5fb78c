use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("radar needs at least 3 axes, got {count}")]
    InvalidAxisCount { count: usize },

    #[error("axis `{axis}` max must be finite and > 0, got {max}")]
    InvalidMax { axis: String, max: f64 },

    #[error("dataset `{dataset}` has {actual} values but the chart has {expected} axes")]
    AxisCountMismatch {
        dataset: String,
        expected: usize,
        actual: usize,
    },

    #[error("no datasets to draw")]
    EmptyDatasetList,

    #[error("dataset `{dataset}` value for axis {axis} is not finite: {value}")]
    NonFiniteValue {
        dataset: String,
        axis: usize,
        value: f64,
    },

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
