use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Where vertex markers take their fill from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerFill {
    /// Series stroke color.
    SeriesStroke,
    /// Label color of the marker's axis, falling back to the series stroke.
    AxisColor,
}

/// Contrasting outline drawn around each vertex marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerBorder {
    pub color: Color,
    pub width: f64,
}

/// Visual constants of a radar frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarStyle {
    pub ring_color: Color,
    pub ring_width: f64,
    pub spoke_color: Color,
    pub spoke_width: f64,
    /// Distance past the outer ring at which axis labels are anchored.
    pub label_offset: f64,
    pub label_font_size_px: f64,
    /// Used for axes without their own label color.
    pub label_color: Color,
    pub series_stroke_width: f64,
    pub marker_radius: f64,
    pub marker_fill: MarkerFill,
    #[serde(default)]
    pub marker_border: Option<MarkerBorder>,
}

impl RadarStyle {
    /// Compact look used next to the stat bars of one entity.
    #[must_use]
    pub fn single_entity() -> Self {
        Self {
            label_offset: 20.0,
            label_font_size_px: 11.0,
            marker_fill: MarkerFill::AxisColor,
            marker_border: Some(MarkerBorder {
                color: Color::WHITE,
                width: 2.0,
            }),
            ..Self::overlay()
        }
    }

    /// Larger look used when several entities share one radar.
    #[must_use]
    pub fn overlay() -> Self {
        Self {
            ring_color: Color::WHITE.with_alpha(0.1),
            ring_width: 1.0,
            spoke_color: Color::WHITE.with_alpha(0.2),
            spoke_width: 1.0,
            label_offset: 30.0,
            label_font_size_px: 14.0,
            label_color: Color::WHITE,
            series_stroke_width: 3.0,
            marker_radius: 5.0,
            marker_fill: MarkerFill::SeriesStroke,
            marker_border: None,
        }
    }

    /// Farthest extent of anything the grid draws, measured from the center.
    #[must_use]
    pub fn outer_extent(&self, radius: f64) -> f64 {
        radius + self.label_offset + self.label_font_size_px
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("ring_width", self.ring_width),
            ("spoke_width", self.spoke_width),
            ("label_font_size_px", self.label_font_size_px),
            ("series_stroke_width", self.series_stroke_width),
            ("marker_radius", self.marker_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.label_offset.is_finite() || self.label_offset < 0.0 {
            return Err(ChartError::InvalidConfig(
                "style `label_offset` must be finite and >= 0".to_owned(),
            ));
        }
        if self.series_stroke_width <= self.ring_width.max(self.spoke_width) {
            return Err(ChartError::InvalidConfig(
                "series stroke must be heavier than grid lines".to_owned(),
            ));
        }
        if let Some(border) = self.marker_border {
            if !border.width.is_finite() || border.width <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "marker border width must be finite and > 0".to_owned(),
                ));
            }
            border.color.validate()?;
        }
        self.ring_color.validate()?;
        self.spoke_color.validate()?;
        self.label_color.validate()
    }
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self::overlay()
    }
}
