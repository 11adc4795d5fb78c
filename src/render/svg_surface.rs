use std::fmt::Write as _;

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextAlign, TextPrimitive};

/// Drawing surface that builds a standalone SVG document.
///
/// SVG output is append-only, so `clear_region` drops every element emitted so
/// far and, when a background is configured, paints it over the region.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    font_family: String,
    elements: Vec<String>,
    path_data: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "svg document size must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            width,
            height,
            background: None,
            font_family: "Arial, sans-serif".to_owned(),
            elements: Vec::new(),
            path_data: String::new(),
        })
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serializes the document.
    #[must_use]
    pub fn finish(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        out.push('\n');
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_path_command(&mut self, command: char, point: Point) {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        let _ = write!(
            self.path_data,
            "{command}{},{}",
            fmt_num(point.x),
            fmt_num(point.y)
        );
    }

    fn current_path(&self) -> ChartResult<&str> {
        if self.path_data.is_empty() {
            return Err(ChartError::Backend("paint requested without a current path".to_owned()));
        }
        Ok(&self.path_data)
    }
}

impl DrawingSurface for SvgSurface {
    fn clear_region(&mut self, region: Rect) -> ChartResult<()> {
        self.elements.clear();
        self.path_data.clear();
        if let Some(background) = self.background {
            self.elements.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
                fmt_num(region.x),
                fmt_num(region.y),
                fmt_num(region.width),
                fmt_num(region.height),
                paint_attrs("fill", background),
            ));
        }
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path_data.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.push_path_command('M', point);
    }

    fn line_to(&mut self, point: Point) {
        self.push_path_command('L', point);
    }

    fn close_path(&mut self) {
        self.path_data.push_str(" Z");
    }

    fn fill_path(&mut self, color: Color) -> ChartResult<()> {
        let element = format!(
            r#"<path d="{}" {} stroke="none"/>"#,
            self.current_path()?,
            paint_attrs("fill", color)
        );
        self.elements.push(element);
        Ok(())
    }

    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()> {
        let element = format!(
            r#"<path d="{}" fill="none" {} stroke-width="{}" stroke-linejoin="round"/>"#,
            self.current_path()?,
            paint_attrs("stroke", color),
            fmt_num(width)
        );
        self.elements.push(element);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> ChartResult<()> {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" {} stroke="none"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            paint_attrs("fill", color)
        ));
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    ) -> ChartResult<()> {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" {} stroke-width="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            paint_attrs("stroke", color),
            fmt_num(width)
        ));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let anchor = match text.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="bold" text-anchor="{anchor}" dominant-baseline="central" {}>{}</text>"#,
            fmt_num(text.anchor.x),
            fmt_num(text.anchor.y),
            escape_xml(&self.font_family),
            fmt_num(text.font_size_px),
            paint_attrs("fill", text.color),
            escape_xml(&text.text)
        ));
        Ok(())
    }
}

fn paint_attrs(kind: &str, color: Color) -> String {
    if color.alpha < 1.0 {
        format!(
            r#"{kind}="{}" {kind}-opacity="{}""#,
            color.to_hex_rgb(),
            fmt_num(color.alpha)
        )
    } else {
        format!(r#"{kind}="{}""#, color.to_hex_rgb())
    }
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0" in output.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
