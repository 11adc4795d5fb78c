use std::f64::consts::TAU;
use std::io::Write;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub paths_filled: usize,
    pub paths_stroked: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Cairo + Pango drawing surface.
///
/// Works either on an external context (for example a GTK `DrawingArea`
/// callback) or on an owned offscreen image surface. The current path is kept
/// on our side and replayed for every paint so fill and stroke can share it.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    path: Vec<PathOp>,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            image: None,
            path: Vec::new(),
            stats: CairoSurfaceStats::default(),
        }
    }

    pub fn offscreen(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData("cairo surface size must be > 0".to_owned()));
        }
        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            context,
            image: Some(image),
            path: Vec::new(),
            stats: CairoSurfaceStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    /// Encodes the offscreen image as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            ChartError::Backend("png export needs an offscreen surface".to_owned())
        })?;
        image
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn replay_path(&self) -> ChartResult<()> {
        if self.path.is_empty() {
            return Err(ChartError::Backend("paint requested without a current path".to_owned()));
        }
        self.context.new_path();
        for op in &self.path {
            match *op {
                PathOp::MoveTo(point) => self.context.move_to(point.x, point.y),
                PathOp::LineTo(point) => self.context.line_to(point.x, point.y),
                PathOp::Close => self.context.close_path(),
            }
        }
        Ok(())
    }

    fn circle_path(&self, center: Point, radius: f64) {
        self.context.new_path();
        self.context.arc(center.x, center.y, radius, 0.0, TAU);
    }
}

impl DrawingSurface for CairoSurface {
    fn clear_region(&mut self, region: Rect) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.context.set_operator(Operator::Clear);
        self.context.new_path();
        self.context
            .rectangle(region.x, region.y, region.width, region.height);
        let cleared = self
            .context
            .fill()
            .map_err(|err| map_backend_error("failed to clear region", err));
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        self.path.clear();
        cleared
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.path.push(PathOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.path.push(PathOp::LineTo(point));
    }

    fn close_path(&mut self) {
        self.path.push(PathOp::Close);
    }

    fn fill_path(&mut self, color: Color) -> ChartResult<()> {
        self.replay_path()?;
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.paths_filled += 1;
        Ok(())
    }

    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()> {
        self.replay_path()?;
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.paths_stroked += 1;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> ChartResult<()> {
        self.circle_path(center, radius);
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        self.stats.circles_drawn += 1;
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    ) -> ChartResult<()> {
        self.circle_path(center, radius);
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
        self.stats.circles_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("Sans Bold {}px", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.align {
            TextAlign::Left => text.anchor.x,
            TextAlign::Center => text.anchor.x - f64::from(text_width) / 2.0,
            TextAlign::Right => text.anchor.x - f64::from(text_width),
        };
        let y = text.anchor.y - f64::from(text_height) / 2.0;

        self.context.new_path();
        apply_color(&self.context, text.color);
        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
