use serde::{Deserialize, Serialize};

use crate::core::{Axis, Dataset, validate_axes};
use crate::error::ChartResult;
use crate::render::Color;

/// One progress-bar row shown beside a single-entity radar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBarRow {
    pub label: String,
    /// Raw value as displayed, never clamped.
    pub value: f64,
    pub max: f64,
    /// Bar fill in `[0, 1]`.
    pub fill_ratio: f64,
    pub color: Option<Color>,
}

impl StatBarRow {
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.value > self.max
    }
}

/// Stat bars plus the total of all raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub rows: Vec<StatBarRow>,
    pub total: f64,
}

impl StatSummary {
    pub fn from_dataset(dataset: &Dataset, axes: &[Axis]) -> ChartResult<Self> {
        validate_axes(axes)?;
        dataset.validate_against(axes)?;

        let rows: Vec<StatBarRow> = axes
            .iter()
            .zip(dataset.values.iter().copied())
            .map(|(axis, value)| StatBarRow {
                label: axis.name.clone(),
                value,
                max: axis.max,
                fill_ratio: (value / axis.max).clamp(0.0, 1.0),
                color: axis.label_color,
            })
            .collect();
        let total = rows.iter().map(|row| row.value).sum();

        Ok(Self { rows, total })
    }
}
