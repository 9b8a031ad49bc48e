use crate::{
    compile::plan::{DrawInstruction, OverlayPlan},
    foundation::core::{Point, Roi},
    foundation::error::GuideResult,
    foundation::math::round_i32,
    render::backend::{FrameRgbaF32, RasterBackend, TextRun},
};

pub fn execute_plan<B: RasterBackend + ?Sized>(
    backend: &mut B,
    plan: &OverlayPlan,
) -> GuideResult<FrameRgbaF32> {
    let canvas = Roi::from_canvas(plan.canvas);
    for instr in &plan.instructions {
        match instr {
            DrawInstruction::Box {
                roi,
                color,
                thickness,
            } => {
                for outline in box_outlines(*roi, *thickness) {
                    backend.draw_outline(outline, *color)?;
                }
            }
            DrawInstruction::Line { p0, p1, color } => backend.draw_line(*p0, *p1, *color)?,
            DrawInstruction::DashedLine {
                roi,
                color,
                dot_interval,
            } => {
                for (p0, p1) in dash_segments(*roi, *dot_interval, canvas) {
                    backend.draw_line(p0, p1, *color)?;
                }
            }
            DrawInstruction::Text {
                position,
                text,
                color,
                align_x,
                align_y,
            } => backend.draw_text(TextRun {
                position: *position,
                text,
                color: *color,
                align_x: *align_x,
                align_y: *align_y,
            })?,
        }
    }

    backend.finish()
}

/// Concentric 1px outlines making up a box `thickness` pixels wide.
///
/// For every `t` in `0..thickness` one outline sits `t` pixels inside the region and one
/// `t` pixels outside it; at `t == 0` both coincide and only one is returned.
pub fn box_outlines(roi: Roi, thickness: u32) -> Vec<Roi> {
    let mut out = Vec::with_capacity(thickness as usize * 2);
    for t in 0..thickness.min(i32::MAX as u32) as i32 {
        let inward = roi.inflate(-t);
        if !inward.is_empty() {
            out.push(inward);
        }
        if t > 0 {
            out.push(roi.inflate(t));
        }
    }
    out
}

/// Visible segments of a dashed line along the diagonal of `roi`.
///
/// The line is cut into `round(length / interval)` equal parts and every even part
/// (0-based) is kept, so dashes and gaps alternate. Endpoints are rounded to pixels.
/// Only parts that can touch `clip` are produced; the dash phase still follows `roi`.
pub fn dash_segments(roi: Roi, interval: u32, clip: Roi) -> Vec<(Point, Point)> {
    if interval == 0 {
        return Vec::new();
    }

    let dx = f64::from(roi.xend) - f64::from(roi.xbegin);
    let dy = f64::from(roi.yend) - f64::from(roi.ybegin);
    let dots = round_i32(dx.hypot(dy) / f64::from(interval));
    if dots <= 0 {
        return Vec::new();
    }
    let Some((t0, t1)) = clip_span(roi, dx, dy, clip) else {
        return Vec::new();
    };

    let total = f64::from(dots);
    let first = ((t0 * total).floor() as i32).clamp(0, dots);
    let last = ((t1 * total).ceil() as i32).clamp(0, dots);

    let at = |t: f64| {
        Point::new(
            f64::from(roi.xbegin) + f64::from(round_i32(dx * t)),
            f64::from(roi.ybegin) + f64::from(round_i32(dy * t)),
        )
    };
    (first - first % 2..last)
        .step_by(2)
        .map(|i| {
            let start = f64::from(i) / total;
            let end = f64::from(i + 1) / total;
            (at(start), at(end))
        })
        .collect()
}

/// Parameter range `[t0, t1]` of the segment from `roi`'s begin corner along `(dx, dy)`
/// that lies within `clip` grown by one pixel, or `None` if it misses it.
fn clip_span(roi: Roi, dx: f64, dy: f64, clip: Roi) -> Option<(f64, f64)> {
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let axes = [
        (f64::from(roi.xbegin), dx, clip.xbegin, clip.xend),
        (f64::from(roi.ybegin), dy, clip.ybegin, clip.yend),
    ];
    for (origin, delta, lo, hi) in axes {
        let (lo, hi) = (f64::from(lo) - 1.0, f64::from(hi));
        if delta == 0.0 {
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }
        let a = (lo - origin) / delta;
        let b = (hi - origin) / delta;
        t0 = t0.max(a.min(b));
        t1 = t1.min(a.max(b));
    }
    (t0 <= t1).then_some((t0, t1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/passes.rs"]
mod tests;
