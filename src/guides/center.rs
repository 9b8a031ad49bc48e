use crate::{
    compile::plan::DrawInstruction,
    foundation::core::{Color, Roi},
    foundation::math::trunc_i32,
};

/// Fraction of the frame's longer edge covered by each arm of the cross.
pub const CROSS_FRACTION: f64 = 0.05;

/// Position and size of the center cross.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenterCross {
    pub cx: i32,
    pub cy: i32,
    /// Pixel count of each line; endpoints are inclusive, so a line spans `size - 1`.
    pub size: i32,
}

impl CenterCross {
    pub fn from_frame(frame: Roi) -> Self {
        let (cx, cy) = frame.center();
        let longer = frame.width().max(frame.height());
        Self {
            cx,
            cy,
            size: trunc_i32(f64::from(longer) * CROSS_FRACTION),
        }
    }

    /// Horizontal arm as `(xbegin, xend)`, both inclusive.
    pub fn horizontal(self) -> (i32, i32) {
        let begin = self.cx - self.size / 2;
        (begin, begin + self.size - 1)
    }

    /// Vertical arm as `(ybegin, yend)`, both inclusive.
    pub fn vertical(self) -> (i32, i32) {
        let begin = self.cy - self.size / 2;
        (begin, begin + self.size - 1)
    }
}

/// Horizontal then vertical line of the center cross.
pub fn center_point(frame: Roi, color: Color) -> [DrawInstruction; 2] {
    let cross = CenterCross::from_frame(frame);
    let (cx, cy) = (f64::from(cross.cx), f64::from(cross.cy));
    let (x0, x1) = cross.horizontal();
    let (y0, y1) = cross.vertical();
    [
        DrawInstruction::line((f64::from(x0), cy), (f64::from(x1), cy), color),
        DrawInstruction::line((cx, f64::from(y0)), (cx, f64::from(y1)), color),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/guides/center.rs"]
mod tests;
