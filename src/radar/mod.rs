//! Radar building blocks: palette, grid and series layers.
//!
//! Each layer splits into a pure `project_*` step producing serializable
//! geometry and a `paint_*` step issuing surface calls.

mod grid;
mod legend;
mod palette;
mod series;
mod style;

pub use grid::{GridGeometry, draw_grid, paint_grid, project_grid};
pub use legend::{LegendEntry, legend_entries};
pub use palette::ColorPalette;
pub use series::{ClampedValue, SeriesGeometry, draw_series, paint_series, project_series};
pub use style::{MarkerBorder, MarkerFill, RadarStyle};
