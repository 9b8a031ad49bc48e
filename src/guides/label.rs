use crate::{
    compile::plan::{DrawInstruction, TextAlignX, TextAlignY},
    config::OverlayConfig,
    foundation::core::{Point, Roi},
};

/// Label margin as a fraction of the labelled region's width.
const MARGIN_FRACTION: f64 = 0.01;

/// Canvas label (bottom-left, on the baseline) and frame label (just below the frame).
pub fn labels(outer: Roi, frame: Roi, cfg: &OverlayConfig) -> [DrawInstruction; 2] {
    let outer_margin = f64::from(outer.width()) * MARGIN_FRACTION;
    let frame_margin = f64::from(frame.width()) * MARGIN_FRACTION;

    [
        DrawInstruction::Text {
            position: Point::new(
                f64::from(outer.xbegin) + outer_margin,
                f64::from(outer.yend) - outer_margin,
            ),
            text: format!(
                "size: {}, {} aspect ratio: {}",
                cfg.size.width, cfg.size.height, cfg.aspect_ratio
            ),
            color: cfg.color,
            align_x: TextAlignX::Left,
            align_y: TextAlignY::Baseline,
        },
        DrawInstruction::Text {
            position: Point::new(
                f64::from(frame.xbegin) + frame_margin,
                f64::from(frame.yend) + frame_margin,
            ),
            text: format!(
                "size: {}, {} scale: {}",
                frame.width(),
                frame.height(),
                cfg.scale
            ),
            color: cfg.color,
            align_x: TextAlignX::Left,
            align_y: TextAlignY::Top,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/guides/label.rs"]
mod tests;
