use crate::{
    compile::plan::{OverlayPlan, TextAlignX, TextAlignY},
    foundation::core::{Color, Point, Roi},
    foundation::error::GuideResult,
    render::passes::execute_plan,
};

/// A rendered overlay as straight-alpha RGBA floats.
#[derive(Clone, Debug)]
pub struct FrameRgbaF32 {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA samples, tightly packed, row-major.
    pub data: Vec<f32>,
}

impl FrameRgbaF32 {
    /// Fully transparent frame.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; (width as usize) * (height as usize) * 4],
        }
    }

    /// RGBA sample at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// One label to draw.
#[derive(Clone, Copy, Debug)]
pub struct TextRun<'a> {
    pub position: Point,
    pub text: &'a str,
    pub color: Color,
    pub align_x: TextAlignX,
    pub align_y: TextAlignY,
}

/// Rasterization primitives an overlay plan is lowered to.
///
/// Box thickness and dash patterns are expanded by [`execute_plan`]; a backend only ever sees
/// 1px outlines, 1px lines and text runs. Geometry outside the canvas must be clipped, not
/// rejected.
pub trait RasterBackend {
    /// Outline the pixels on the border of `roi` (first and last row/column).
    fn draw_outline(&mut self, roi: Roi, color: Color) -> GuideResult<()>;

    /// Line through the centers of the pixels at `p0` and `p1`, both included.
    fn draw_line(&mut self, p0: Point, p1: Point, color: Color) -> GuideResult<()>;

    fn draw_text(&mut self, run: TextRun<'_>) -> GuideResult<()>;

    /// Resolve everything drawn so far into a frame.
    fn finish(&mut self) -> GuideResult<FrameRgbaF32>;

    /// Execute a full [`OverlayPlan`] and read back the frame.
    fn render_plan(&mut self, plan: &OverlayPlan) -> GuideResult<FrameRgbaF32> {
        execute_plan(self, plan)
    }
}
