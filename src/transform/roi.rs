//! Region-of-interest transforms.
//!
//! Both transforms are pure functions over [`Roi`] values. Results are never clamped to a
//! canvas; out-of-canvas geometry is clipped at raster time.

use crate::foundation::core::Roi;
use crate::foundation::math::round_i32;

/// How [`fit_aspect_ratio_with`] reaches the target ratio.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Keep the width and derive the height from it, growing or cropping vertically.
    ///
    /// This shows how much height a given frame width implies, so the result may extend
    /// past the input region when the target is narrower than the input.
    #[default]
    Height,
    /// Shrink whichever axis is too long so the result is inscribed in the input region.
    Contain,
}

/// Scale a region about its own center.
///
/// Extents are rounded to the nearest pixel and clamped at zero; the result is centered on
/// [`Roi::center`].
pub fn scale_about(roi: Roi, sx: f64, sy: f64) -> Roi {
    let (cx, cy) = roi.center();
    let width = round_i32(f64::from(roi.width()) * sx).max(0);
    let height = round_i32(f64::from(roi.height()) * sy).max(0);
    centered(cx, cy, width, height)
}

/// Fit a region to `target` (width / height) by recomputing its height.
///
/// Horizontal bounds are never touched. When the region already has the target ratio it is
/// returned as is; otherwise the height becomes `floor(width / target)` and the region is
/// re-centered vertically.
pub fn fit_aspect_ratio(roi: Roi, target: f64) -> Roi {
    fit_aspect_ratio_with(roi, target, FitMode::Height)
}

/// [`fit_aspect_ratio`] with an explicit [`FitMode`].
pub fn fit_aspect_ratio_with(roi: Roi, target: f64, mode: FitMode) -> Roi {
    let current = roi.aspect_ratio();
    if current == target {
        return roi;
    }

    let (cx, cy) = roi.center();
    let height_from_width = (f64::from(roi.width()) / target).floor() as i32;
    match mode {
        FitMode::Height => {
            let top = cy - height_from_width.div_euclid(2);
            Roi::new(roi.xbegin, roi.xend, top, top + height_from_width.max(0))
        }
        FitMode::Contain if current > target => {
            let width_from_height = (f64::from(roi.height()) * target).floor() as i32;
            centered(cx, cy, width_from_height.max(0), roi.height())
        }
        FitMode::Contain => centered(cx, cy, roi.width(), height_from_width.max(0)),
    }
}

fn centered(cx: i32, cy: i32, width: i32, height: i32) -> Roi {
    let xbegin = cx - width.div_euclid(2);
    let ybegin = cy - height.div_euclid(2);
    Roi::new(xbegin, xbegin + width, ybegin, ybegin + height)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/roi.rs"]
mod tests;
