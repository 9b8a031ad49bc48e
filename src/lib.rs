//! guidekit computes composition-guide overlays and renders them to float RGBA images.
//!
//! An overlay is a canvas outline, an aspect-ratio frame scaled about its center, and
//! optionally a center cross, a diagonal symmetry grid and size labels. It is meant to be
//! laid over photographs or film frames as an alignment aid.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: flags or code build an immutable [`OverlayConfig`]
//! 2. **Compile**: `OverlayConfig -> OverlayPlan` (pure geometry, a flat list of [`DrawInstruction`]s)
//! 3. **Render**: `OverlayPlan -> FrameRgbaF32` through a [`RasterBackend`] (CPU backend)
//! 4. **Encode**: write the frame with the `image` crate; the container follows the extension
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure geometry**: compilation never touches pixels or IO and is deterministic.
//! - **Backends never see thickness or dash patterns**: those are lowered by [`execute_plan`].
//!
//! For a walkthrough of the geometry, see [`crate::guide`].
#![forbid(unsafe_code)]

mod compile;
mod config;
mod encode;
mod foundation;
mod guides;
mod render;

/// High-level documentation of the overlay geometry.
pub mod guide;
/// Region-of-interest transforms.
pub mod transform;

pub use compile::overlay::{compile_overlay, frame_for};
pub use compile::plan::{DrawInstruction, OverlayPlan, TextAlignX, TextAlignY};
pub use config::{OverlayConfig, parse_color, parse_f64, parse_size};
pub use encode::image_out::{StoredLayout, stored_layout, write_frame};
pub use foundation::core::{CanvasSize, Color, MAX_CANVAS_EDGE, Point, Roi};
pub use foundation::error::{GuideError, GuideResult};
pub use guides::center::{CROSS_FRACTION, CenterCross, center_point};
pub use guides::label::labels;
pub use guides::symmetry::{EndpointInset, Reciprocals, symmetry_grid};
pub use render::backend::{FrameRgbaF32, RasterBackend, TextRun};
pub use render::cpu::CpuBackend;
pub use render::passes::{box_outlines, dash_segments, execute_plan};
pub use render::text::TextLayoutEngine;
pub use transform::roi::{FitMode, fit_aspect_ratio, fit_aspect_ratio_with, scale_about};

/// Compile `cfg` and render it on the CPU backend.
///
/// `font_bytes` is only needed when `cfg.label` is set; without it labels are skipped.
pub fn render_overlay(
    cfg: &OverlayConfig,
    font_bytes: Option<Vec<u8>>,
) -> GuideResult<(OverlayPlan, FrameRgbaF32)> {
    let plan = compile_overlay(cfg)?;
    let mut backend = CpuBackend::new(plan.canvas, font_bytes, cfg.label_size_px)?;
    let frame = backend.render_plan(&plan)?;
    Ok((plan, frame))
}
