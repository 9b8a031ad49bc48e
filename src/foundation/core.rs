use crate::foundation::error::{GuideError, GuideResult};

pub use kurbo::Point;

/// Largest canvas edge the CPU raster surface can address.
pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> GuideResult<Self> {
        if width == 0 || height == 0 {
            return Err(GuideError::validation("canvas size must be > 0"));
        }
        if width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
            return Err(GuideError::validation(format!(
                "canvas size {width}x{height} exceeds {MAX_CANVAS_EDGE}"
            )));
        }
        Ok(Self { width, height })
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

/// Axis-aligned integer pixel rectangle, half-open on the end coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Roi {
    pub xbegin: i32,
    pub xend: i32, // exclusive
    pub ybegin: i32,
    pub yend: i32, // exclusive
}

impl Roi {
    pub fn new(xbegin: i32, xend: i32, ybegin: i32, yend: i32) -> Self {
        Self {
            xbegin,
            xend,
            ybegin,
            yend,
        }
    }

    pub fn from_canvas(size: CanvasSize) -> Self {
        Self::new(0, size.width as i32, 0, size.height as i32)
    }

    pub fn width(self) -> i32 {
        self.xend - self.xbegin
    }

    pub fn height(self) -> i32 {
        self.yend - self.ybegin
    }

    /// Integer midpoint on both axes, floored.
    pub fn center(self) -> (i32, i32) {
        (
            (self.xbegin + self.xend).div_euclid(2),
            (self.ybegin + self.yend).div_euclid(2),
        )
    }

    /// Width over height; infinite for zero-height regions.
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width()) / f64::from(self.height())
    }

    /// Grow (positive `d`) or shrink (negative `d`) every edge by `d` pixels.
    pub fn inflate(self, d: i32) -> Self {
        Self::new(
            self.xbegin - d,
            self.xend + d,
            self.ybegin - d,
            self.yend + d,
        )
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Linear RGB color; alpha is implied to be 1.0.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
