use std::f64::consts::TAU;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Polar layout of one radar: `total` axes spread evenly around `center`.
///
/// Axis `i` sits at `start_angle_offset + i * (2π / total)`. With the default
/// offset of `-π/2` axis 0 points straight up and angles grow clockwise in
/// surface space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLayout {
    total: usize,
    radius: f64,
    center: Point,
    start_angle_offset: f64,
}

impl PolarLayout {
    pub fn new(
        total: usize,
        radius: f64,
        center: Point,
        start_angle_offset: f64,
    ) -> ChartResult<Self> {
        if total < 3 {
            return Err(ChartError::InvalidAxisCount { count: total });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "radius must be finite and > 0, got {radius}"
            )));
        }
        if !center.is_finite() || !start_angle_offset.is_finite() {
            return Err(ChartError::InvalidConfig(
                "center and start angle must be finite".to_owned(),
            ));
        }
        Ok(Self {
            total,
            radius,
            center,
            start_angle_offset,
        })
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.center
    }

    #[must_use]
    pub fn angle_step(self) -> f64 {
        TAU / self.total as f64
    }

    #[must_use]
    pub fn angle(self, index: usize) -> f64 {
        self.start_angle_offset + index as f64 * self.angle_step()
    }

    /// Point at an absolute pixel distance from the center along axis `index`.
    #[must_use]
    pub fn point_at_distance(self, index: usize, distance: f64) -> Point {
        let angle = self.angle(index);
        Point::new(
            self.center.x + angle.cos() * distance,
            self.center.y + angle.sin() * distance,
        )
    }

    /// Maps `value` on an axis bounded by `max` to a point.
    ///
    /// Geometry is clamped to `[0, radius]`; the caller keeps the raw value for
    /// display.
    pub fn point(self, index: usize, value: f64, max: f64) -> ChartResult<Point> {
        let ratio = normalized_ratio(value, max).map_err(|err| match err {
            ChartError::NonFiniteValue { dataset, value, .. } => ChartError::NonFiniteValue {
                dataset,
                axis: index,
                value,
            },
            other => other,
        })?;
        let distance = self.radius * ratio;
        Ok(self.point_at_distance(index, distance))
    }
}

/// `clamp(value / max, 0, 1)` with the mapper's preconditions enforced.
pub fn normalized_ratio(value: f64, max: f64) -> ChartResult<f64> {
    if !max.is_finite() || max <= 0.0 {
        return Err(ChartError::InvalidMax {
            axis: String::new(),
            max,
        });
    }
    if !value.is_finite() {
        return Err(ChartError::NonFiniteValue {
            dataset: String::new(),
            axis: 0,
            value,
        });
    }
    Ok((value / max).clamp(0.0, 1.0))
}

/// Angle of axis `index` out of `total` axes.
pub fn axis_angle(index: usize, total: usize, start_angle_offset: f64) -> ChartResult<f64> {
    if total < 3 {
        return Err(ChartError::InvalidAxisCount { count: total });
    }
    Ok(start_angle_offset + index as f64 * (TAU / total as f64))
}

/// Single-call form of the coordinate mapping.
pub fn radar_point(
    index: usize,
    total: usize,
    value: f64,
    max: f64,
    radius: f64,
    center: Point,
    start_angle_offset: f64,
) -> ChartResult<Point> {
    PolarLayout::new(total, radius, center, start_angle_offset)?.point(index, value, max)
}
