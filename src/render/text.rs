use std::borrow::Cow;

use crate::{
    compile::plan::{TextAlignX, TextAlignY},
    foundation::error::{GuideError, GuideResult},
};

/// Shapes label text with a single user supplied font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font_bytes: Vec<u8>,
}

impl std::fmt::Debug for TextLayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayoutEngine")
            .field("family_name", &self.family_name)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

impl TextLayoutEngine {
    /// Register `font_bytes` (TTF/OTF) and remember its primary family.
    pub fn new(font_bytes: Vec<u8>) -> GuideResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| GuideError::render("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GuideError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_bytes,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn font_bytes(&self) -> &[u8] {
        &self.font_bytes
    }

    /// Lay out a single unwrapped line.
    pub fn layout_line(&mut self, text: &str, size_px: f32) -> GuideResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GuideError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Offset of the layout's top-left corner from the anchor position.
pub fn anchor_offset(
    width: f32,
    height: f32,
    first_baseline: f32,
    align_x: TextAlignX,
    align_y: TextAlignY,
) -> (f64, f64) {
    let dx = match align_x {
        TextAlignX::Left => 0.0,
        TextAlignX::Center => -width * 0.5,
        TextAlignX::Right => -width,
    };
    let dy = match align_y {
        TextAlignY::Top => 0.0,
        TextAlignY::Baseline => -first_baseline,
        TextAlignY::Bottom => -height,
    };
    (f64::from(dx), f64::from(dy))
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
