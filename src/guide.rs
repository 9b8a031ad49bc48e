//! # guidekit guide
//!
//! A walkthrough of how an overlay is derived, for readers who want to reason about the
//! exact pixels without reading every constructor.
//!
//! ---
//!
//! ## Regions
//!
//! Every rectangle is a [`Roi`](crate::Roi): integer `xbegin..xend`, `ybegin..yend`, end
//! exclusive. The canvas itself is `Roi::from_canvas(size)`. The *frame* is the canvas fitted
//! to the requested aspect ratio and then scaled about its own center:
//!
//! ```
//! use guidekit::{OverlayConfig, Roi, fit_aspect_ratio, scale_about};
//!
//! let cfg = OverlayConfig::default(); // 1024x1024, ratio 1.5, scale 0.5
//! let outer = Roi::new(0, 1024, 0, 1024);
//! let fitted = fit_aspect_ratio(outer, cfg.aspect_ratio);
//! assert_eq!(fitted, Roi::new(0, 1024, 171, 853));
//! let frame = scale_about(fitted, cfg.scale, cfg.scale);
//! assert_eq!(frame.center(), (512, 512));
//! ```
//!
//! [`fit_aspect_ratio`](crate::fit_aspect_ratio) only ever changes the height. A 4:3 canvas
//! fitted to 1:1 therefore yields a square as wide as the canvas that overflows it
//! vertically; this shows how much height a frame of that width implies. Use
//! [`FitMode::Contain`](crate::FitMode::Contain) for a frame inscribed in the canvas.
//!
//! ---
//!
//! ## Instructions
//!
//! [`compile_overlay`](crate::compile_overlay) emits, in order:
//!
//! - a 2px box around the canvas and one around the frame
//! - with `centerpoint`: a cross whose arms are 5% of the frame's longer edge
//! - with `symmetrygrid`: both diagonals, four reciprocal diagonals, four split lines and
//!   two dashed verticals (see [`Reciprocals`](crate::Reciprocals))
//! - with `label`: the canvas size/ratio and the frame size/scale
//!
//! Nothing in the plan is rasterized. A [`RasterBackend`](crate::RasterBackend) receives
//! 1px outlines, lines and text runs once [`execute_plan`](crate::execute_plan) has expanded
//! box thickness and dash patterns.
//!
//! ---
//!
//! ## Endpoint conventions
//!
//! The two frame diagonals end on the last pixel (`end - 1`) while reciprocal, split and
//! dashed lines end on the exclusive edge (`end`). This is the historical look and the
//! default, [`EndpointInset::Mixed`](crate::EndpointInset::Mixed). The difference is one
//! pixel at the far edges; [`EndpointInset::Uniform`](crate::EndpointInset::Uniform) pulls
//! every far endpoint onto the last pixel.
