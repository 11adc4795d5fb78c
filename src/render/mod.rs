mod primitives;
mod recording_surface;
mod svg_surface;

pub use primitives::{Color, ColorPair, TextAlign, TextPrimitive};
pub use recording_surface::{DrawCommand, RecordedPolygon, RecordingSurface};
pub use svg_surface::SvgSurface;

use crate::core::{Point, Rect};
use crate::error::ChartResult;

/// Immediate-mode drawing capability supplied by the host.
///
/// Path calls build one current path; `fill_path` and `stroke_path` paint it
/// without consuming it, so a fill may be followed by a stroke of the same
/// outline. `begin_path` discards the current path.
///
/// The radar engine takes the surface as an explicit `&mut` parameter for the
/// duration of one render call and never retains it.
pub trait DrawingSurface {
    fn clear_region(&mut self, region: Rect) -> ChartResult<()>;

    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    fn close_path(&mut self);

    fn fill_path(&mut self, color: Color) -> ChartResult<()>;

    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> ChartResult<()>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    ) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
