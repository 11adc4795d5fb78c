pub mod dataset;
pub mod polar;
pub mod stat_summary;
pub mod types;

pub use dataset::{BaseStats, Dataset, StatVector};
pub use polar::{PolarLayout, axis_angle, normalized_ratio, radar_point};
pub use stat_summary::{StatBarRow, StatSummary};
pub use types::{Axis, ChartConfig, Point, Rect, validate_axes};
