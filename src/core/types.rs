use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Point in surface pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `2 * half_extent` centered on `center`.
    #[must_use]
    pub fn around(center: Point, half_extent: f64) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// One named, max-bounded dimension of the radar.
///
/// Axis order is significant: it decides the angular position of the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<Color>,
}

impl Axis {
    #[must_use]
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            max,
            label_color: None,
        }
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    /// The six catalog base-stat axes, each bounded by 255.
    #[must_use]
    pub fn base_stat_axes() -> Vec<Axis> {
        const BASE_STAT_MAX: f64 = 255.0;
        [
            ("HP", Color::rgb8(0xff, 0x55, 0x55)),
            ("Atk", Color::rgb8(0xff, 0x99, 0x55)),
            ("Def", Color::rgb8(0x55, 0xaa, 0xff)),
            ("SpA", Color::rgb8(0xaa, 0x55, 0xff)),
            ("SpD", Color::rgb8(0x55, 0xff, 0x99)),
            ("Spd", Color::rgb8(0xff, 0xff, 0x55)),
        ]
        .into_iter()
        .map(|(name, color)| Axis::new(name, BASE_STAT_MAX).with_label_color(color))
        .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChartError::InvalidData("axis name must not be empty".to_owned()));
        }
        if !self.max.is_finite() || self.max <= 0.0 {
            return Err(ChartError::InvalidMax {
                axis: self.name.clone(),
                max: self.max,
            });
        }
        if let Some(color) = self.label_color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Validates a full axis set: at least 3 axes, each named and with a positive max.
pub fn validate_axes(axes: &[Axis]) -> ChartResult<()> {
    if axes.len() < 3 {
        return Err(ChartError::InvalidAxisCount { count: axes.len() });
    }
    for axis in axes {
        axis.validate()?;
    }
    Ok(())
}

/// Polar layout parameters shared by every layer of one radar frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub center: Point,
    pub radius: f64,
    #[serde(default = "default_grid_levels")]
    pub grid_levels: u32,
    #[serde(default = "default_start_angle_offset")]
    pub start_angle_offset: f64,
    /// Surface region owned by the chart. Derived from the layout when unset.
    #[serde(default)]
    pub region: Option<Rect>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            grid_levels: default_grid_levels(),
            start_angle_offset: default_start_angle_offset(),
            region: None,
        }
    }

    /// Centers the chart in a `width x height` canvas and claims the whole canvas.
    #[must_use]
    pub fn centered_in(width: f64, height: f64, radius: f64) -> Self {
        Self::new(Point::new(width / 2.0, height / 2.0), radius)
            .with_region(Rect::new(0.0, 0.0, width, height))
    }

    #[must_use]
    pub fn with_grid_levels(mut self, grid_levels: u32) -> Self {
        self.grid_levels = grid_levels;
        self
    }

    #[must_use]
    pub fn with_start_angle_offset(mut self, start_angle_offset: f64) -> Self {
        self.start_angle_offset = start_angle_offset;
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: Rect) -> Self {
        self.region = Some(region);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidConfig("center must be finite".to_owned()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if self.grid_levels == 0 {
            return Err(ChartError::InvalidConfig("grid_levels must be >= 1".to_owned()));
        }
        if !self.start_angle_offset.is_finite() {
            return Err(ChartError::InvalidConfig("start_angle_offset must be finite".to_owned()));
        }
        if self.region.is_some_and(|region| !region.is_valid()) {
            return Err(ChartError::InvalidConfig(
                "region must be finite with non-negative size".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_grid_levels() -> u32 {
    5
}

fn default_start_angle_offset() -> f64 {
    -FRAC_PI_2
}
