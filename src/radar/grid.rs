use serde::{Deserialize, Serialize};

use crate::core::{Axis, ChartConfig, PolarLayout, Point, validate_axes};
use crate::error::ChartResult;
use crate::radar::RadarStyle;
use crate::render::{DrawingSurface, TextAlign, TextPrimitive};

/// Dataset-independent background of a radar frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub center: Point,
    /// Ring radii, innermost first.
    pub rings: Vec<f64>,
    /// Outer end of each axis spoke, in axis order.
    pub spoke_ends: Vec<Point>,
    /// One label per axis, in axis order.
    pub labels: Vec<TextPrimitive>,
}

/// Computes rings, spokes and labels for `axes` without touching a surface.
pub fn project_grid(
    config: &ChartConfig,
    style: &RadarStyle,
    axes: &[Axis],
) -> ChartResult<GridGeometry> {
    config.validate()?;
    validate_axes(axes)?;
    let layout = PolarLayout::new(
        axes.len(),
        config.radius,
        config.center,
        config.start_angle_offset,
    )?;

    let levels = f64::from(config.grid_levels);
    let rings = (1..=config.grid_levels)
        .map(|level| f64::from(level) / levels * config.radius)
        .collect();

    let mut spoke_ends = Vec::with_capacity(axes.len());
    let mut labels = Vec::with_capacity(axes.len());
    for (index, axis) in axes.iter().enumerate() {
        spoke_ends.push(layout.point(index, axis.max, axis.max)?);
        let label = TextPrimitive::new(
            axis.name.clone(),
            layout.point_at_distance(index, config.radius + style.label_offset),
            style.label_font_size_px,
            axis.label_color.unwrap_or(style.label_color),
            TextAlign::Center,
        );
        // Labels are painted interleaved with spokes, so reject them up front.
        label.validate()?;
        labels.push(label);
    }

    Ok(GridGeometry {
        center: config.center,
        rings,
        spoke_ends,
        labels,
    })
}

/// Paints previously projected grid geometry.
pub fn paint_grid<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    grid: &GridGeometry,
    style: &RadarStyle,
) -> ChartResult<()> {
    for &ring in &grid.rings {
        surface.stroke_circle(grid.center, ring, style.ring_color, style.ring_width)?;
    }

    for (spoke_end, label) in grid.spoke_ends.iter().zip(&grid.labels) {
        surface.begin_path();
        surface.move_to(grid.center);
        surface.line_to(*spoke_end);
        surface.stroke_path(style.spoke_color, style.spoke_width)?;
        surface.draw_text(label)?;
    }
    Ok(())
}

/// Draws concentric rings, axis spokes and axis labels.
pub fn draw_grid<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    config: &ChartConfig,
    style: &RadarStyle,
    axes: &[Axis],
) -> ChartResult<()> {
    let grid = project_grid(config, style, axes)?;
    paint_grid(surface, &grid, style)
}
