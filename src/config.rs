use crate::{
    foundation::core::{CanvasSize, Color},
    foundation::error::{GuideError, GuideResult},
    guides::symmetry::EndpointInset,
    transform::roi::FitMode,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Immutable description of one overlay.
///
/// A config is built once (usually from command-line flags), validated with
/// [`OverlayConfig::validate`], and then passed by reference to every constructor.
pub struct OverlayConfig {
    /// Output canvas dimensions.
    pub size: CanvasSize,
    /// Target frame aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Fraction of the aspect-fitted frame kept, scaled about its center.
    pub scale: f64,
    /// Color of every guide.
    pub color: Color,
    /// Emit the center cross.
    pub centerpoint: bool,
    /// Emit the diagonal symmetry grid.
    pub symmetrygrid: bool,
    /// Emit size/ratio labels.
    pub label: bool,
    /// How the frame reaches `aspect_ratio`.
    #[serde(default)]
    pub fit_mode: FitMode,
    /// Far-edge convention for grid endpoints.
    #[serde(default)]
    pub inset: EndpointInset,
    /// Outline thickness of the canvas and frame boxes.
    pub box_thickness: u32,
    /// Pixel interval of the dashed grid center lines.
    pub dot_interval_px: u32,
    /// Label font size in pixels.
    pub label_size_px: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            size: CanvasSize::default(),
            aspect_ratio: 1.5,
            scale: 0.5,
            color: Color::WHITE,
            centerpoint: false,
            symmetrygrid: false,
            label: false,
            fit_mode: FitMode::default(),
            inset: EndpointInset::default(),
            box_thickness: 2,
            dot_interval_px: 5,
            label_size_px: 12.0,
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> GuideResult<()> {
        CanvasSize::new(self.size.width, self.size.height)?;
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(GuideError::validation(format!(
                "aspect ratio must be finite and > 0, got {}",
                self.aspect_ratio
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GuideError::validation(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        if !self.label_size_px.is_finite() || self.label_size_px <= 0.0 {
            return Err(GuideError::validation("label size must be finite and > 0"));
        }
        Ok(())
    }
}

/// Parse a single float argument such as `--scale 0.5`.
pub fn parse_f64(what: &'static str, raw: &str) -> GuideResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GuideError::parse(what, raw))
}

/// Parse `R,G,B` into a [`Color`].
pub fn parse_color(raw: &str) -> GuideResult<Color> {
    let [r, g, b] = split_fixed::<3>(raw).ok_or_else(|| GuideError::parse("color", raw))?;
    let channel = |s: &str| {
        s.parse::<f32>()
            .map_err(|_| GuideError::parse("color", raw))
    };
    Ok(Color::new(channel(r)?, channel(g)?, channel(b)?))
}

/// Parse `W,H` into a validated [`CanvasSize`].
pub fn parse_size(raw: &str) -> GuideResult<CanvasSize> {
    let [w, h] = split_fixed::<2>(raw).ok_or_else(|| GuideError::parse("size", raw))?;
    let edge = |s: &str| s.parse::<u32>().map_err(|_| GuideError::parse("size", raw));
    CanvasSize::new(edge(w)?, edge(h)?)
}

fn split_fixed<const N: usize>(raw: &str) -> Option<[&str; N]> {
    let mut out = [""; N];
    let mut parts = raw.split(',').map(str::trim);
    for slot in &mut out {
        *slot = parts.next()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
