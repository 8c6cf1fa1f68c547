//! In-memory drawing surface.
//!
//! A [`Figure`] is a list of primitives in pitch meters plus the [`Axes`]
//! window that is visible. Callers may keep annotating it after the pitch has
//! been drawn and serialise it with [`Figure::to_svg`].

use serde::{Deserialize, Serialize};

pub type Point = (f64, f64);

/// Visible data window, y pointing up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub face_color: String,
}

impl Axes {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn contains(&self, (x, y): Point) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Line { from: Point, to: Point, color: String },
    Circle { centre: Point, radius: f64, color: String, filled: bool },
    /// Counter-clockwise from `theta1` to `theta2`, degrees.
    Arc { centre: Point, radius: f64, theta1: f64, theta2: f64, color: String },
    /// Shot location, optionally annotated with its xG.
    Shot { at: Point, xg: Option<f64>, color: String },
    Text { at: Point, text: String, color: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub width_px: u32,
    pub height_px: u32,
    pub axes: Axes,
    pub line_color: String,
    pub shot_color: String,
    elements: Vec<Element>,
}

/// Marker radius, meters.
const SHOT_BASE_RADIUS_M: f64 = 0.5;
const SHOT_XG_RADIUS_M: f64 = 2.0;
const FONT_SIZE_PX: f64 = 12.0;

impl Figure {
    pub fn new(width_px: u32, height_px: u32, axes: Axes) -> Self {
        Self {
            width_px,
            height_px,
            axes,
            line_color: "white".to_string(),
            shot_color: "crimson".to_string(),
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn line(&mut self, from: Point, to: Point) {
        let color = self.line_color.clone();
        self.push(Element::Line { from, to, color });
    }

    pub fn circle(&mut self, centre: Point, radius: f64, filled: bool) {
        let color = self.line_color.clone();
        self.push(Element::Circle { centre, radius, color, filled });
    }

    pub fn arc(&mut self, centre: Point, radius: f64, theta1: f64, theta2: f64) {
        let color = self.line_color.clone();
        self.push(Element::Arc { centre, radius, theta1, theta2, color });
    }

    /// Overlay a shot in pitch coordinates; the marker grows with `xg`.
    pub fn add_shot(&mut self, x: f64, y: f64, xg: Option<f64>) {
        let color = self.shot_color.clone();
        self.push(Element::Shot { at: (x, y), xg, color });
    }

    pub fn add_label(&mut self, x: f64, y: f64, text: impl Into<String>) {
        let color = self.line_color.clone();
        self.push(Element::Text { at: (x, y), text: text.into(), color });
    }

    fn scale(&self) -> f64 {
        let sx = f64::from(self.width_px) / self.axes.x_span();
        let sy = f64::from(self.height_px) / self.axes.y_span();
        sx.min(sy)
    }

    /// Pixel position of a pitch point. Equal scale on both axes, centred.
    pub fn data_to_px(&self, (x, y): Point) -> Point {
        let scale = self.scale();
        let offset_x = (f64::from(self.width_px) - self.axes.x_span() * scale) / 2.0;
        let offset_y = (f64::from(self.height_px) - self.axes.y_span() * scale) / 2.0;
        (
            offset_x + (x - self.axes.x_min) * scale,
            offset_y + (self.axes.y_max - y) * scale,
        )
    }

    pub fn to_svg(&self) -> String {
        let scale = self.scale();
        let (left, top) = self.data_to_px((self.axes.x_min, self.axes.y_max));
        let (right, bottom) = self.data_to_px((self.axes.x_max, self.axes.y_min));

        let mut body = String::new();
        for element in &self.elements {
            self.write_element(&mut body, element, scale);
        }

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs><clipPath id="pitch-area"><rect x="{l:.2}" y="{t:.2}" width="{cw:.2}" height="{ch:.2}"/></clipPath></defs>
  <rect x="{l:.2}" y="{t:.2}" width="{cw:.2}" height="{ch:.2}" fill="{face}"/>
  <g clip-path="url(#pitch-area)" stroke-width="2">
{body}  </g>
</svg>"##,
            w = self.width_px,
            h = self.height_px,
            l = left,
            t = top,
            cw = right - left,
            ch = bottom - top,
            face = self.axes.face_color,
            body = body,
        )
    }

    fn write_element(&self, out: &mut String, element: &Element, scale: f64) {
        match element {
            Element::Line { from, to, color } => {
                let (x1, y1) = self.data_to_px(*from);
                let (x2, y2) = self.data_to_px(*to);
                push_line(
                    out,
                    format!(
                        r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
                        x1, y1, x2, y2, color
                    ),
                );
            }
            Element::Circle { centre, radius, color, filled } => {
                let (cx, cy) = self.data_to_px(*centre);
                let fill = if *filled { color.as_str() } else { "none" };
                push_line(
                    out,
                    format!(
                        r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}"/>"#,
                        cx,
                        cy,
                        radius * scale,
                        fill,
                        color
                    ),
                );
            }
            Element::Arc { centre, radius, theta1, theta2, color } => {
                let point_at = |deg: f64| {
                    let rad = deg.to_radians();
                    self.data_to_px((centre.0 + radius * rad.cos(), centre.1 + radius * rad.sin()))
                };
                let (sx, sy) = point_at(*theta1);
                let (ex, ey) = point_at(*theta2);
                let span = (theta2 - theta1).rem_euclid(360.0);
                let large_arc = if span > 180.0 { 1 } else { 0 };
                let r = radius * scale;
                // y is flipped on screen, so counter-clockwise keeps sweep-flag 0.
                push_line(
                    out,
                    format!(
                        r#"    <path d="M {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2}" fill="none" stroke="{}"/>"#,
                        sx, sy, r, r, large_arc, ex, ey, color
                    ),
                );
            }
            Element::Shot { at, xg, color } => {
                let (cx, cy) = self.data_to_px(*at);
                let radius = SHOT_BASE_RADIUS_M + SHOT_XG_RADIUS_M * xg.unwrap_or(0.0).clamp(0.0, 1.0);
                push_line(
                    out,
                    format!(
                        r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="black" stroke-width="1" fill-opacity="0.8"/>"#,
                        cx,
                        cy,
                        radius * scale,
                        color
                    ),
                );
                if let Some(xg) = xg {
                    push_line(
                        out,
                        format!(
                            r#"    <text x="{:.2}" y="{:.2}" fill="{}" stroke="none" font-size="{}">{:.2}</text>"#,
                            cx + radius * scale + 2.0,
                            cy - 2.0,
                            color,
                            FONT_SIZE_PX,
                            xg
                        ),
                    );
                }
            }
            Element::Text { at, text, color } => {
                let (x, y) = self.data_to_px(*at);
                push_line(
                    out,
                    format!(
                        r#"    <text x="{:.2}" y="{:.2}" fill="{}" stroke="none" font-size="{}">{}</text>"#,
                        x,
                        y,
                        color,
                        FONT_SIZE_PX,
                        escape_xml(text)
                    ),
                );
            }
        }
    }
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
