//! Dial placement and the boundary-radius strategy shared by every element.

/// How the dial fills the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialShape {
    /// Full-bleed ellipse; becomes a circle only on square canvases.
    #[default]
    Stretched,
    /// Largest circle that fits, centered along the longer axis.
    Circular,
}

impl DialShape {
    pub fn from_circular(circular: bool) -> Self {
        if circular {
            DialShape::Circular
        } else {
            DialShape::Stretched
        }
    }
}

/// Distance from the center of an axis-aligned ellipse to its edge along `angle`.
///
/// `a` is the horizontal semi-axis and `b` the vertical one.
pub fn ellipse_radius(a: f32, b: f32, angle: f32) -> f32 {
    let (sin, cos) = angle.sin_cos();
    (a * b) / (b * b * cos * cos + a * a * sin * sin).sqrt()
}

/// Axis-aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn inset(self, d: f32) -> Self {
        Self {
            left: self.left + d,
            top: self.top + d,
            right: self.right - d,
            bottom: self.bottom - d,
        }
    }
}

/// Dial footprint for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub shape: DialShape,
    pub cx: f32,
    pub cy: f32,
    /// Horizontal semi-axis.
    pub a: f32,
    /// Vertical semi-axis.
    pub b: f32,
    /// `min(width, height)`, the base for size ratios.
    pub min_size: f32,
}

impl Dial {
    pub fn new(width: f32, height: f32, shape: DialShape) -> Self {
        let min_size = width.min(height);
        match shape {
            DialShape::Stretched => Self {
                shape,
                cx: width / 2.0,
                cy: height / 2.0,
                a: width / 2.0,
                b: height / 2.0,
                min_size,
            },
            DialShape::Circular => {
                let radius = min_size / 2.0;
                let offset_x = if width > height { (width - height) / 2.0 } else { 0.0 };
                let offset_y = if height > width { (height - width) / 2.0 } else { 0.0 };
                Self {
                    shape,
                    cx: offset_x + radius,
                    cy: offset_y + radius,
                    a: radius,
                    b: radius,
                    min_size,
                }
            }
        }
    }

    /// Distance from the center to the dial edge along `angle`.
    pub fn radius_at(&self, angle: f32) -> f32 {
        match self.shape {
            DialShape::Stretched => ellipse_radius(self.a, self.b, angle),
            DialShape::Circular => self.a,
        }
    }

    /// Point at `fraction` of the boundary radius along `angle`.
    ///
    /// Negative fractions land behind the center.
    pub fn point_at(&self, angle: f32, fraction: f32) -> (f32, f32) {
        let r = self.radius_at(angle) * fraction;
        let (sin, cos) = angle.sin_cos();
        (self.cx + cos * r, self.cy + sin * r)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.cx - self.a,
            top: self.cy - self.b,
            right: self.cx + self.a,
            bottom: self.cy + self.b,
        }
    }
}

/// Numeral printed at tick `index`: 0 → 12, 5 → 1, … 55 → 11.
pub fn numeral_label(index: u32) -> String {
    ((index / 5 + 11) % 12 + 1).to_string()
}
