use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::{Axis, ChartConfig, Dataset, PolarLayout, Point, validate_axes};
use crate::error::ChartResult;
use crate::radar::{MarkerFill, RadarStyle};
use crate::render::{Color, ColorPair, DrawingSurface};

/// A value whose geometry was clamped into `[0, max]`.
///
/// The raw value stays the displayed one; this only flags the mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampedValue {
    pub dataset_id: String,
    pub axis_index: usize,
    pub axis: String,
    pub value: f64,
    pub max: f64,
}

/// Deterministic geometry of one plotted dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub dataset_id: String,
    pub label: String,
    pub colors: ColorPair,
    /// One vertex per axis, in axis order. The closing vertex is not repeated.
    pub vertices: SmallVec<[Point; 8]>,
    pub marker_colors: SmallVec<[Color; 8]>,
    pub clamped: Vec<ClampedValue>,
}

impl SeriesGeometry {
    /// Polygon outline with the first vertex repeated as the closing vertex.
    #[must_use]
    pub fn closed_outline(&self) -> Vec<Point> {
        let mut outline = Vec::with_capacity(self.vertices.len() + 1);
        outline.extend(self.vertices.iter().copied());
        if let Some(first) = self.vertices.first() {
            outline.push(*first);
        }
        outline
    }
}

/// Maps every value of `dataset` onto its axis.
pub fn project_series(
    dataset: &Dataset,
    axes: &[Axis],
    config: &ChartConfig,
    style: &RadarStyle,
    colors: ColorPair,
) -> ChartResult<SeriesGeometry> {
    config.validate()?;
    validate_axes(axes)?;
    dataset.validate_against(axes)?;
    colors.validate()?;
    let layout = PolarLayout::new(
        axes.len(),
        config.radius,
        config.center,
        config.start_angle_offset,
    )?;

    let mut vertices = SmallVec::with_capacity(axes.len());
    let mut marker_colors = SmallVec::with_capacity(axes.len());
    let mut clamped = Vec::new();
    for (index, (axis, value)) in axes.iter().zip(dataset.values.iter().copied()).enumerate() {
        vertices.push(layout.point(index, value, axis.max)?);
        marker_colors.push(match style.marker_fill {
            MarkerFill::SeriesStroke => colors.stroke,
            MarkerFill::AxisColor => axis.label_color.unwrap_or(colors.stroke),
        });
        if !(0.0..=axis.max).contains(&value) {
            warn!(
                dataset = %dataset.id,
                axis = %axis.name,
                value,
                max = axis.max,
                "value outside axis range, geometry clamped"
            );
            clamped.push(ClampedValue {
                dataset_id: dataset.id.clone(),
                axis_index: index,
                axis: axis.name.clone(),
                value,
                max: axis.max,
            });
        }
    }

    Ok(SeriesGeometry {
        dataset_id: dataset.id.clone(),
        label: dataset.label.clone(),
        colors,
        vertices,
        marker_colors,
        clamped,
    })
}

/// Paints the filled polygon, its outline and the vertex markers.
pub fn paint_series<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series: &SeriesGeometry,
    style: &RadarStyle,
) -> ChartResult<()> {
    let outline = series.closed_outline();
    let Some((first, rest)) = outline.split_first() else {
        return Ok(());
    };

    surface.begin_path();
    surface.move_to(*first);
    for point in rest {
        surface.line_to(*point);
    }
    surface.close_path();
    surface.fill_path(series.colors.fill)?;
    surface.stroke_path(series.colors.stroke, style.series_stroke_width)?;

    for (vertex, color) in series.vertices.iter().zip(&series.marker_colors) {
        surface.fill_circle(*vertex, style.marker_radius, *color)?;
        if let Some(border) = style.marker_border {
            surface.stroke_circle(*vertex, style.marker_radius, border.color, border.width)?;
        }
    }
    Ok(())
}

/// Draws one dataset on top of whatever the surface already holds.
pub fn draw_series<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    dataset: &Dataset,
    axes: &[Axis],
    config: &ChartConfig,
    style: &RadarStyle,
    colors: ColorPair,
) -> ChartResult<()> {
    let series = project_series(dataset, axes, config, style, colors)?;
    paint_series(surface, &series, style)
}
