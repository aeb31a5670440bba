use image::{GrayImage, RgbImage};
use vello_cpu::kurbo::Shape as _;

use crate::{
    compose::blend,
    foundation::core::{Point, Rect, Rgb8},
    foundation::error::{BingoError, BingoResult},
    text::measure::{TextBrush, TextEngine},
};

const PATH_TOLERANCE: f64 = 0.1;

/// Transparent vector drawing surface, composited over an RGB image when finished.
///
/// Strokes, fills and glyphs are rasterized anti-aliased by `vello_cpu` into premultiplied
/// RGBA8. Draw order is paint order.
pub(crate) struct Overlay {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl Overlay {
    pub(crate) fn new(width: u32, height: u32) -> BingoResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| BingoError::render("overlay width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| BingoError::render("overlay height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(BingoError::render("overlay must be at least 1x1"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
        })
    }

    pub(crate) fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_paint());
        let shape = rounded_rect_to_cpu(rect, radius);
        self.ctx.fill_path(&shape.to_path(PATH_TOLERANCE));
    }

    /// Stroke `rect` with the whole line width falling inside it.
    pub(crate) fn stroke_rect_inside(&mut self, rect: Rect, width: f64, color: Rgb8) {
        self.stroke_rounded_rect_inside(rect, 0.0, width, color);
    }

    /// Stroke a rounded rect with the whole line width falling inside it.
    pub(crate) fn stroke_rounded_rect_inside(
        &mut self,
        rect: Rect,
        radius: f64,
        width: f64,
        color: Rgb8,
    ) {
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let inset = rect.inset(-half);
        if inset.width() <= 0.0 || inset.height() <= 0.0 {
            return;
        }

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_paint());
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        let shape = rounded_rect_to_cpu(inset, (radius - half).max(0.0));
        self.ctx.stroke_path(&shape.to_path(PATH_TOLERANCE));
    }

    /// Draw a (possibly multi-line) block with its top-left at `origin`.
    ///
    /// Lines are centered within the block's widest line.
    pub(crate) fn draw_text_block(
        &mut self,
        engine: &mut TextEngine,
        text: &str,
        size_px: f32,
        origin: Point,
        color: Rgb8,
    ) {
        let (layout, font) = engine.shaped(text, size_px, TextBrush::from(color));
        self.draw_shaped(&layout, &font, origin);
    }

    fn draw_shaped(
        &mut self,
        layout: &parley::Layout<TextBrush>,
        font: &vello_cpu::peniko::FontData,
        origin: Point,
    ) {
        let block_width = layout.width();
        for line in layout.lines() {
            let dx = ((block_width - line.metrics().advance) / 2.0).max(0.0).floor();
            self.ctx
                .set_transform(vello_cpu::kurbo::Affine::translate((
                    origin.x + f64::from(dx),
                    origin.y,
                )));

            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    fn render(mut self) -> vello_cpu::Pixmap {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }

    /// Rasterize and composite over `dst`, which must match the overlay size.
    pub(crate) fn composite_onto(self, dst: &mut RgbImage) -> BingoResult<()> {
        if dst.dimensions() != (u32::from(self.width), u32::from(self.height)) {
            return Err(BingoError::render("overlay and target sizes differ"));
        }
        let pixmap = self.render();
        blend::over_in_place(dst, pixmap.data_as_u8_slice())
    }

    /// Rasterize and return the coverage (alpha) channel.
    pub(crate) fn into_coverage(self) -> GrayImage {
        let (w, h) = (u32::from(self.width), u32::from(self.height));
        let pixmap = self.render();
        let alpha: Vec<u8> = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect();
        GrayImage::from_raw(w, h, alpha).unwrap_or_else(|| GrayImage::new(w, h))
    }
}

fn rounded_rect_to_cpu(r: Rect, radius: f64) -> vello_cpu::kurbo::RoundedRect {
    let max_radius = (r.width().min(r.height()) / 2.0).max(0.0);
    vello_cpu::kurbo::RoundedRect::new(r.x0, r.y0, r.x1, r.y1, radius.clamp(0.0, max_radius))
}
