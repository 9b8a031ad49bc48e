use crate::{
    foundation::core::{CanvasSize, Color, Point, Roi},
    foundation::error::{GuideError, GuideResult},
    foundation::math::{coverage_u8, over_premul, unpremul_f32},
    render::backend::{FrameRgbaF32, RasterBackend, TextRun},
    render::text::{TextLayoutEngine, anchor_offset},
};

/// CPU rasterizer powered by `vello_cpu`.
///
/// `vello_cpu` only produces coverage: everything is drawn in opaque white and the ink
/// color is applied in `f32` when a layer is resolved. Ink is never clamped or quantized,
/// so out-of-range colors reach float outputs unchanged. A color change resolves the
/// current layer first.
pub struct CpuBackend {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    /// Color of the coverage currently pending in `ctx`.
    ink: Option<Color>,
    /// Premultiplied float RGBA of every resolved layer.
    accum: Vec<f32>,
    text: Option<LabelFont>,
    label_size_px: f32,
}

struct LabelFont {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl CpuBackend {
    /// Create a backend for `canvas`.
    ///
    /// Text runs need `font_bytes`; without a font they are skipped with a warning.
    pub fn new(
        canvas: CanvasSize,
        font_bytes: Option<Vec<u8>>,
        label_size_px: f32,
    ) -> GuideResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| GuideError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| GuideError::render("canvas height exceeds u16"))?;

        let text = match font_bytes {
            Some(bytes) => {
                let engine = TextLayoutEngine::new(bytes)?;
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(engine.font_bytes().to_vec()),
                    0,
                );
                tracing::debug!(family = engine.family_name(), "label font loaded");
                Some(LabelFont { engine, font })
            }
            None => None,
        };

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            ink: None,
            accum: vec![0.0; usize::from(width) * usize::from(height) * 4],
            text,
            label_size_px,
        })
    }

    fn use_ink(&mut self, color: Color) {
        if self.ink.is_some_and(|ink| ink != color) {
            self.resolve_layer();
        }
        self.ink = Some(color);
    }

    /// Composite pending coverage in the current ink over `accum` and clear the context.
    fn resolve_layer(&mut self) {
        let Some(ink) = self.ink.take() else {
            return;
        };
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        self.ctx.reset();

        let ink = [ink.r, ink.g, ink.b];
        for (dst, px) in self
            .accum
            .chunks_exact_mut(4)
            .zip(pixmap.data_as_u8_slice().chunks_exact(4))
        {
            over_premul(dst, ink, coverage_u8(px[3]));
        }
    }

    fn prepare_stroke(&mut self, color: Color) {
        self.use_ink(color);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(COVERAGE_PAINT);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(1.0).with_caps(vello_cpu::kurbo::Cap::Square),
        );
    }
}

impl RasterBackend for CpuBackend {
    fn draw_outline(&mut self, roi: Roi, color: Color) -> GuideResult<()> {
        if roi.is_empty() {
            return Ok(());
        }
        self.prepare_stroke(color);
        // Stroke through pixel centers so the 1px outline covers whole pixels.
        let rect = vello_cpu::kurbo::Rect::new(
            f64::from(roi.xbegin) + 0.5,
            f64::from(roi.ybegin) + 0.5,
            f64::from(roi.xend) - 0.5,
            f64::from(roi.yend) - 0.5,
        );
        self.ctx.stroke_rect(&rect);
        Ok(())
    }

    fn draw_line(&mut self, p0: Point, p1: Point, color: Color) -> GuideResult<()> {
        self.prepare_stroke(color);
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(pixel_center(p0));
        path.line_to(pixel_center(p1));
        self.ctx.stroke_path(&path);
        Ok(())
    }

    fn draw_text(&mut self, run: TextRun<'_>) -> GuideResult<()> {
        let Some(label) = self.text.as_mut() else {
            tracing::warn!(text = run.text, "no label font configured, skipping text");
            return Ok(());
        };

        let layout = label.engine.layout_line(run.text, self.label_size_px)?;
        let first_baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0);
        let (dx, dy) = anchor_offset(
            layout.width(),
            layout.height(),
            first_baseline,
            run.align_x,
            run.align_y,
        );

        let font = label.font.clone();

        self.use_ink(run.color);
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((
                run.position.x + dx,
                run.position.y + dy,
            )));
        self.ctx.set_paint(COVERAGE_PAINT);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let glyphs = glyph_run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(glyph_run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn finish(&mut self) -> GuideResult<FrameRgbaF32> {
        self.resolve_layer();
        let data = self
            .accum
            .chunks_exact(4)
            .flat_map(|px| unpremul_f32([px[0], px[1], px[2], px[3]]))
            .collect();

        Ok(FrameRgbaF32 {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        })
    }
}

const COVERAGE_PAINT: vello_cpu::peniko::Color =
    vello_cpu::peniko::Color::new([1.0, 1.0, 1.0, 1.0]);

fn pixel_center(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x + 0.5, p.y + 0.5)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
