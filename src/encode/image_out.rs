use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{GuideError, GuideResult},
    render::backend::FrameRgbaF32,
};

/// Sample layout stored for a given container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoredLayout {
    Rgba32F,
    Rgb32F,
    Rgba16,
    Rgba8,
    Rgb8,
}

/// Pick the richest layout `format` can hold.
pub fn stored_layout(format: image::ImageFormat) -> StoredLayout {
    match format {
        image::ImageFormat::OpenExr => StoredLayout::Rgba32F,
        image::ImageFormat::Hdr => StoredLayout::Rgb32F,
        image::ImageFormat::Png | image::ImageFormat::Tiff => StoredLayout::Rgba16,
        image::ImageFormat::Jpeg | image::ImageFormat::Pnm => StoredLayout::Rgb8,
        _ => StoredLayout::Rgba8,
    }
}

/// Write `frame` to `path`; the container follows the file extension.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn write_frame(frame: &FrameRgbaF32, path: &Path) -> GuideResult<()> {
    let format = image::ImageFormat::from_path(path).map_err(|e| {
        GuideError::encode(format!("unsupported output '{}': {e}", path.display()))
    })?;

    let buffer = image::Rgba32FImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| GuideError::encode("frame data does not match its dimensions"))?;
    let img = image::DynamicImage::ImageRgba32F(buffer);
    let layout = stored_layout(format);
    let img = match layout {
        StoredLayout::Rgba32F => img,
        StoredLayout::Rgb32F => image::DynamicImage::ImageRgb32F(img.to_rgb32f()),
        StoredLayout::Rgba16 => image::DynamicImage::ImageRgba16(img.to_rgba16()),
        StoredLayout::Rgba8 => image::DynamicImage::ImageRgba8(img.to_rgba8()),
        StoredLayout::Rgb8 => image::DynamicImage::ImageRgb8(img.to_rgb8()),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    img.save_with_format(path, format)
        .map_err(|e| GuideError::encode(format!("write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), ?format, ?layout, "wrote overlay");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/image_out.rs"]
mod tests;
