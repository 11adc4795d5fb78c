use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Axis, ChartConfig, Dataset, Rect, validate_axes};
use crate::error::{ChartError, ChartResult};
use crate::radar::{
    ClampedValue, ColorPalette, GridGeometry, LegendEntry, RadarStyle, SeriesGeometry,
    legend_entries, paint_grid, paint_series, project_grid, project_series,
};
use crate::render::DrawingSurface;

/// Which entry point produced a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Single,
    Overlay,
}

/// Fully validated geometry of one radar frame, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarFrame {
    pub mode: RenderMode,
    pub region: Rect,
    pub grid: GridGeometry,
    /// Later entries are drawn on top of earlier ones.
    pub series: Vec<SeriesGeometry>,
}

impl RadarFrame {
    /// Every value whose geometry was clamped, across all series.
    pub fn clamped_values(&self) -> impl Iterator<Item = &ClampedValue> {
        self.series.iter().flat_map(|series| series.clamped.iter())
    }

    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.clamped_values().next().is_some()
    }
}

/// Composes grid and series layers into one frame.
///
/// Holds no per-frame state: every render recomputes geometry from its inputs
/// and clears the owned region before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    config: ChartConfig,
    style: RadarStyle,
    palette: ColorPalette,
}

impl RadarChart {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        Self::with_parts(config, RadarStyle::overlay(), ColorPalette::comparison())
    }

    /// Compact style and accent palette for a one-entity chart.
    pub fn single_entity(config: ChartConfig) -> ChartResult<Self> {
        Self::with_parts(config, RadarStyle::single_entity(), ColorPalette::accent())
    }

    pub fn with_parts(
        config: ChartConfig,
        style: RadarStyle,
        palette: ColorPalette,
    ) -> ChartResult<Self> {
        config.validate()?;
        style.validate()?;
        Ok(Self {
            config,
            style,
            palette,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> &RadarStyle {
        &self.style
    }

    #[must_use]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Surface region cleared at the start of every frame.
    #[must_use]
    pub fn region(&self) -> Rect {
        self.config.region.unwrap_or_else(|| {
            Rect::around(
                self.config.center,
                self.style.outer_extent(self.config.radius),
            )
        })
    }

    #[must_use]
    pub fn legend(&self, datasets: &[Dataset]) -> Vec<LegendEntry> {
        legend_entries(datasets, &self.palette)
    }

    /// Validates inputs and computes the frame without drawing.
    pub fn plan(
        &self,
        mode: RenderMode,
        datasets: &[Dataset],
        axes: &[Axis],
    ) -> ChartResult<RadarFrame> {
        validate_axes(axes)?;
        if datasets.is_empty() {
            return Err(ChartError::EmptyDatasetList);
        }
        for dataset in datasets {
            dataset.validate_against(axes)?;
        }

        let grid = project_grid(&self.config, &self.style, axes)?;
        let series = datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                let colors = self.palette.color_for(index, dataset.color);
                trace!(dataset = %dataset.id, index, "project series");
                project_series(dataset, axes, &self.config, &self.style, colors)
            })
            .collect::<ChartResult<Vec<_>>>()?;

        Ok(RadarFrame {
            mode,
            region: self.region(),
            grid,
            series,
        })
    }

    /// Clears the owned region, then paints the grid and every series.
    pub fn paint<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        frame: &RadarFrame,
    ) -> ChartResult<()> {
        surface.clear_region(frame.region)?;
        paint_grid(surface, &frame.grid, &self.style)?;
        for series in &frame.series {
            paint_series(surface, series, &self.style)?;
        }
        Ok(())
    }

    /// Renders `datasets` in caller order; later datasets draw on top.
    ///
    /// All validation happens before the surface is touched.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        datasets: &[Dataset],
        axes: &[Axis],
    ) -> ChartResult<RadarFrame> {
        self.render_mode(surface, RenderMode::Overlay, datasets, axes)
    }

    /// One-entity radar.
    pub fn render_single<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        dataset: &Dataset,
        axes: &[Axis],
    ) -> ChartResult<RadarFrame> {
        self.render_mode(surface, RenderMode::Single, std::slice::from_ref(dataset), axes)
    }

    /// Several entities superimposed on shared axes.
    pub fn render_overlay<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        datasets: &[Dataset],
        axes: &[Axis],
    ) -> ChartResult<RadarFrame> {
        self.render_mode(surface, RenderMode::Overlay, datasets, axes)
    }

    fn render_mode<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        mode: RenderMode,
        datasets: &[Dataset],
        axes: &[Axis],
    ) -> ChartResult<RadarFrame> {
        debug!(
            ?mode,
            dataset_count = datasets.len(),
            axis_count = axes.len(),
            "render radar frame"
        );
        let frame = self.plan(mode, datasets, axes)?;
        self.paint(surface, &frame)?;
        Ok(frame)
    }
}

/// Renders with the default overlay style and comparison palette.
pub fn render<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    datasets: &[Dataset],
    axes: &[Axis],
    config: ChartConfig,
) -> ChartResult<RadarFrame> {
    RadarChart::new(config)?.render(surface, datasets, axes)
}

/// One-entity radar with the single-entity style.
pub fn render_single<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    dataset: &Dataset,
    axes: &[Axis],
    config: ChartConfig,
) -> ChartResult<RadarFrame> {
    RadarChart::single_entity(config)?.render_single(surface, dataset, axes)
}

/// Multi-entity radar with the overlay style.
pub fn render_overlay<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    datasets: &[Dataset],
    axes: &[Axis],
    config: ChartConfig,
) -> ChartResult<RadarFrame> {
    RadarChart::new(config)?.render_overlay(surface, datasets, axes)
}
