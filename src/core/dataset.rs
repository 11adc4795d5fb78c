use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Axis;
use crate::error::{ChartError, ChartResult};
use crate::render::ColorPair;

/// Ordered per-axis values of one entity. Radars rarely exceed eight axes.
pub type StatVector = SmallVec<[f64; 8]>;

/// One entity's plotted values plus its optional explicit colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub label: String,
    pub values: StatVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorPair>,
}

impl Dataset {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            values: values.into_iter().collect(),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorPair) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds a dataset ordered like [`Axis::base_stat_axes`].
    #[must_use]
    pub fn from_base_stats(
        id: impl Into<String>,
        label: impl Into<String>,
        stats: &BaseStats,
    ) -> Self {
        Self::new(id, label, stats.to_values())
    }

    /// Checks value count against `axes` and rejects NaN/infinite values.
    pub fn validate_against(&self, axes: &[Axis]) -> ChartResult<()> {
        if self.values.len() != axes.len() {
            return Err(ChartError::AxisCountMismatch {
                dataset: self.id.clone(),
                expected: axes.len(),
                actual: self.values.len(),
            });
        }
        if let Some((axis, value)) = self
            .values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ChartError::NonFiniteValue {
                dataset: self.id.clone(),
                axis,
                value,
            });
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Catalog base-stat block as delivered by the catalog REST payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub special_attack: f64,
    pub special_defense: f64,
    pub speed: f64,
}

impl BaseStats {
    #[must_use]
    pub fn to_values(&self) -> StatVector {
        SmallVec::from_slice(&[
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ])
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.to_values().iter().sum()
    }
}
