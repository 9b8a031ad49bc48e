//! Diagonal symmetry grid.
//!
//! The grid combines the baroque (anti-) diagonal, the main diagonal and the reciprocal
//! construction used in classical composition analysis: lines from every corner that meet
//! the opposite edge at the foot of the reciprocal, the rectangle split lines through the
//! points where those reciprocals cross the diagonals, and dashed verticals marking the
//! reciprocal feet.

use std::f64::consts::FRAC_PI_2;

use crate::{
    compile::plan::DrawInstruction,
    foundation::core::{Color, Roi},
    foundation::math::trunc_i32,
};

/// Which far-edge coordinate grid lines end on.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EndpointInset {
    /// Diagonals end on the last pixel (`end - 1`); reciprocal, split and dashed lines end
    /// on the exclusive edge (`end`). Matches historical overlays pixel for pixel.
    #[default]
    Mixed,
    /// Every line ends on the last pixel (`end - 1`).
    Uniform,
}

/// Real-valued reciprocal construction for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reciprocals {
    /// Angle between the frame diagonal and the vertical edge, in `(0, PI/2)`.
    pub angle: f64,
    /// Horizontal run from a corner to the foot of its reciprocal on the opposite edge.
    pub length: f64,
    /// Offset of the vertical split lines from the left/right edges.
    pub cross_x: f64,
    /// Offset of the horizontal split lines from the top/bottom edges.
    pub cross_y: f64,
}

impl Reciprocals {
    /// `None` when the frame is narrower or shorter than two pixels.
    pub fn from_frame(frame: Roi) -> Option<Self> {
        let dx = f64::from(frame.width() - 1);
        let dy = f64::from(frame.height() - 1);
        if dx <= 0.0 || dy <= 0.0 {
            return None;
        }

        let angle = FRAC_PI_2 - (dx / dy).atan();
        let length = dy * angle.tan();
        let hypotenuse = dy * angle.cos();
        Some(Self {
            angle,
            length,
            cross_x: hypotenuse * angle.sin(),
            cross_y: hypotenuse * angle.cos(),
        })
    }
}

/// Grid instructions for `frame`, in drawing order.
pub fn symmetry_grid(
    frame: Roi,
    color: Color,
    inset: EndpointInset,
    dot_interval: u32,
) -> Vec<DrawInstruction> {
    let xb = f64::from(frame.xbegin);
    let yb = f64::from(frame.ybegin);
    let x_last = f64::from(frame.xend - 1);
    let y_last = f64::from(frame.yend - 1);

    let mut out = Vec::with_capacity(12);
    // baroque
    out.push(DrawInstruction::line((xb, y_last), (x_last, yb), color));
    out.push(DrawInstruction::line((xb, yb), (x_last, y_last), color));

    let Some(rec) = Reciprocals::from_frame(frame) else {
        tracing::debug!(?frame, "frame too small for reciprocal diagonals");
        return out;
    };

    let (xe, ye) = match inset {
        EndpointInset::Mixed => (f64::from(frame.xend), f64::from(frame.yend)),
        EndpointInset::Uniform => (x_last, y_last),
    };
    let len = rec.length;

    out.push(DrawInstruction::line((xb, yb), (xb + len, ye), color));
    out.push(DrawInstruction::line((xb, ye), (xb + len, yb), color));
    out.push(DrawInstruction::line((xe, yb), (xe - len, ye), color));
    out.push(DrawInstruction::line((xe, ye), (xe - len, yb), color));

    out.push(DrawInstruction::line(
        (xb + rec.cross_x, yb),
        (xb + rec.cross_x, ye),
        color,
    ));
    out.push(DrawInstruction::line(
        (xe - rec.cross_x, yb),
        (xe - rec.cross_x, ye),
        color,
    ));
    out.push(DrawInstruction::line(
        (xb, ye - rec.cross_y),
        (xe, ye - rec.cross_y),
        color,
    ));
    out.push(DrawInstruction::line(
        (xb, yb + rec.cross_y),
        (xe, yb + rec.cross_y),
        color,
    ));

    let ye_px = ye as i32;
    for x in [trunc_i32(xb + len), trunc_i32(xe - len)] {
        out.push(DrawInstruction::DashedLine {
            roi: Roi::new(x, x, frame.ybegin, ye_px),
            color,
            dot_interval,
        });
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/guides/symmetry.rs"]
mod tests;
