use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextPrimitive};

/// One logged surface invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    ClearRegion(Rect),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    FillPath {
        path: Vec<Point>,
        closed: bool,
        color: Color,
    },
    StrokePath {
        path: Vec<Point>,
        closed: bool,
        color: Color,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    },
    DrawText(TextPrimitive),
}

/// Filled path extracted from a recording.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPolygon {
    /// Points in path order, including an explicit closing vertex if one was drawn.
    pub path: Vec<Point>,
    pub fill: Color,
}

impl RecordedPolygon {
    /// Path points without the trailing vertex that repeats the first one.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) if self.path.len() > 1 && first == last => {
                &self.path[..self.path.len() - 1]
            }
            _ => &self.path,
        }
    }
}

/// Surface that logs every call instead of drawing.
///
/// It still validates geometry so tests catch non-finite coordinates and bad
/// widths before a real backend sees them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    current_path: Vec<Point>,
    path_closed: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every filled path in draw order.
    #[must_use]
    pub fn filled_polygons(&self) -> Vec<RecordedPolygon> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillPath { path, color, .. } => Some(RecordedPolygon {
                    path: path.clone(),
                    fill: *color,
                }),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::DrawText(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn ensure_paintable_path(&self) -> ChartResult<()> {
        if self.current_path.is_empty() {
            return Err(ChartError::Backend("paint requested without a current path".to_owned()));
        }
        if !self.current_path.iter().all(|point| point.is_finite()) {
            return Err(ChartError::Backend("path coordinates must be finite".to_owned()));
        }
        Ok(())
    }
}

fn ensure_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::Backend(format!("{name} must be finite and > 0")));
    }
    Ok(())
}

impl DrawingSurface for RecordingSurface {
    fn clear_region(&mut self, region: Rect) -> ChartResult<()> {
        if !region.is_valid() {
            return Err(ChartError::Backend("clear region must be finite".to_owned()));
        }
        self.commands.push(DrawCommand::ClearRegion(region));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.current_path.clear();
        self.path_closed = false;
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.current_path.push(point);
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.current_path.push(point);
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn close_path(&mut self) {
        self.path_closed = true;
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill_path(&mut self, color: Color) -> ChartResult<()> {
        self.ensure_paintable_path()?;
        color.validate()?;
        self.commands.push(DrawCommand::FillPath {
            path: self.current_path.clone(),
            closed: self.path_closed,
            color,
        });
        Ok(())
    }

    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()> {
        self.ensure_paintable_path()?;
        color.validate()?;
        ensure_positive("stroke width", width)?;
        self.commands.push(DrawCommand::StrokePath {
            path: self.current_path.clone(),
            closed: self.path_closed,
            color,
            width,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> ChartResult<()> {
        if !center.is_finite() {
            return Err(ChartError::Backend("circle center must be finite".to_owned()));
        }
        ensure_positive("circle radius", radius)?;
        color.validate()?;
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    ) -> ChartResult<()> {
        if !center.is_finite() {
            return Err(ChartError::Backend("circle center must be finite".to_owned()));
        }
        ensure_positive("circle radius", radius)?;
        ensure_positive("stroke width", width)?;
        color.validate()?;
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.commands.push(DrawCommand::DrawText(text.clone()));
        Ok(())
    }
}
