//! Software rasterizer executing draw commands on an RGBA8 frame buffer.

use std::path::Path;

use rusttype::{point, Font, Scale};

use crate::config::Color;
use crate::error::ClockError;
use crate::scene::{DrawCommand, DrawSurface, TextMetrics};

/// Reads a TrueType/OpenType font for numeral rendering.
pub fn load_font(path: &Path) -> Result<Font<'static>, ClockError> {
    let data = std::fs::read(path).map_err(|source| ClockError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| ClockError::InvalidFont(path.to_path_buf()))
}

/// Mutable view over an RGBA8 frame.
///
/// Text commands are skipped when no font is attached.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    font: Option<&'a Font<'static>>,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert!(frame.len() >= width * height * 4);
        Self {
            frame,
            width,
            height,
            font: None,
        }
    }

    pub fn with_font(mut self, font: Option<&'a Font<'static>>) -> Self {
        self.font = font;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// RGBA value at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        self.frame
            .get(idx..idx + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let Some(dst) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let a = alpha.clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = (s * a + *d as f32 * (1.0 - a)).round() as u8;
        }
        dst[3] = 0xff;
    }

    /// Pixel rows and columns touched by `[min, max]`, clipped to the canvas.
    fn clip(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<(i32, i32, i32, i32)> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return None;
        }
        let x0 = (min_x.floor() as i32).max(0);
        let y0 = (min_y.floor() as i32).max(0);
        let x1 = (max_x.ceil() as i32).min(self.width as i32 - 1);
        let y1 = (max_y.ceil() as i32).min(self.height as i32 - 1);
        (x0 <= x1 && y0 <= y1).then_some((x0, y0, x1, y1))
    }

    fn fill_oval(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Color) {
        let (a, b) = ((right - left) / 2.0, (bottom - top) / 2.0);
        if !(a > 0.0 && b > 0.0) {
            return;
        }
        let (cx, cy) = (left + a, top + b);
        let Some((x0, y0, x1, y1)) = self.clip(left - 1.0, top - 1.0, right + 1.0, bottom + 1.0)
        else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let norm = ((dx / a).powi(2) + (dy / b).powi(2)).sqrt();
                // Pixel distance past the edge along the ray through the center.
                let outside = if norm > 0.0 { dist * (1.0 - 1.0 / norm) } else { -a.min(b) };
                let aa = (0.5 - outside).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(
            cx - radius - 1.0,
            cy - radius - 1.0,
            cx + radius + 1.0,
            cy + radius + 1.0,
        ) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let aa = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn draw_thick_line_aa(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        if ![x0, y0, x1, y1, thickness].iter().all(|v| v.is_finite()) {
            return;
        }
        let pad = thickness.max(0.0) / 2.0 + 1.0;
        let Some((min_x, min_y, max_x, max_y)) = self.clip(
            x0.min(x1) - pad,
            y0.min(y1) - pad,
            x0.max(x1) + pad,
            y0.max(y1) + pad,
        ) else {
            return;
        };
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5 - x0;
                let py = y as f32 + 0.5 - y0;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = x0 + t * dx;
                let ly = y0 + t * dy;
                let dist = ((lx - x as f32 - 0.5).powi(2) + (ly - y as f32 - 0.5).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }

    fn draw_text(&mut self, x: f32, baseline: f32, text: &str, font_size: f32, color: Color) {
        let Some(font) = self.font else {
            log::trace!("no font attached, skipping text {text:?}");
            return;
        };
        if !(font_size > 0.0 && x.is_finite() && baseline.is_finite()) {
            return;
        }
        let scale = Scale::uniform(font_size);
        let text_width = text_advance(font, text, scale);
        let glyphs: Vec<_> = font
            .layout(text, scale, point(x - text_width / 2.0, baseline))
            .collect();
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.set_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, color, v);
                });
            }
        }
    }
}

/// Horizontal advance of `text` laid out on one line.
fn text_advance(font: &Font<'_>, text: &str, scale: Scale) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

impl DrawSurface for Canvas<'_> {
    fn text_metrics(&self, font_size: f32) -> TextMetrics {
        match self.font {
            Some(font) => {
                let v = font.v_metrics(Scale::uniform(font_size));
                TextMetrics {
                    ascent: v.ascent,
                    descent: v.descent,
                }
            }
            None => TextMetrics::approximate(font_size),
        }
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FilledOval {
                left,
                top,
                right,
                bottom,
                color,
            } => self.fill_oval(*left, *top, *right, *bottom, *color),
            DrawCommand::FilledCircle { cx, cy, radius, color } => {
                self.fill_circle(*cx, *cy, *radius, *color)
            }
            DrawCommand::Line {
                x0,
                y0,
                x1,
                y1,
                width,
                color,
            } => self.draw_thick_line_aa(*x0, *y0, *x1, *y1, *width, *color),
            DrawCommand::Text {
                x,
                y,
                text,
                font_size,
                color,
            } => self.draw_text(*x, *y, text, *font_size, *color),
        }
    }
}
