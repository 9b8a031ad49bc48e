use crate::{
    compile::plan::{DrawInstruction, OverlayPlan},
    config::OverlayConfig,
    foundation::core::Roi,
    foundation::error::GuideResult,
    guides::{center::center_point, label::labels, symmetry::symmetry_grid},
    transform::roi::{fit_aspect_ratio_with, scale_about},
};

/// Derive the aspect-fitted, scaled frame for `cfg`.
pub fn frame_for(cfg: &OverlayConfig) -> Roi {
    let outer = Roi::from_canvas(cfg.size);
    let fitted = fit_aspect_ratio_with(outer, cfg.aspect_ratio, cfg.fit_mode);
    scale_about(fitted, cfg.scale, cfg.scale)
}

/// Build the full instruction list for one overlay.
///
/// Order: canvas box, frame box, then the optional center cross, symmetry grid and labels.
#[tracing::instrument(skip(cfg), fields(size = ?cfg.size, ratio = cfg.aspect_ratio, scale = cfg.scale))]
pub fn compile_overlay(cfg: &OverlayConfig) -> GuideResult<OverlayPlan> {
    cfg.validate()?;

    let outer = Roi::from_canvas(cfg.size);
    let frame = frame_for(cfg);
    tracing::debug!(?outer, ?frame, "derived frame");

    let mut instructions = vec![
        DrawInstruction::Box {
            roi: outer,
            color: cfg.color,
            thickness: cfg.box_thickness,
        },
        DrawInstruction::Box {
            roi: frame,
            color: cfg.color,
            thickness: cfg.box_thickness,
        },
    ];

    if cfg.centerpoint {
        instructions.extend(center_point(frame, cfg.color));
    }
    if cfg.symmetrygrid {
        instructions.extend(symmetry_grid(
            frame,
            cfg.color,
            cfg.inset,
            cfg.dot_interval_px,
        ));
    }
    if cfg.label {
        instructions.extend(labels(outer, frame, cfg));
    }

    tracing::debug!(count = instructions.len(), "compiled overlay");
    Ok(OverlayPlan {
        canvas: cfg.size,
        frame,
        instructions,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/overlay.rs"]
mod tests;
