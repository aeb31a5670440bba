use std::path::Path;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{BingoError, BingoResult},
    text::font::{self, FontOrigin, OutlineFont},
};

/// Pixel bounding box of a (possibly multi-line) text block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Width of the widest line.
    pub width: f32,
    /// Sum of line heights.
    pub height: f32,
}

impl TextExtent {
    pub fn fits_within(self, max_width: f32, max_height: f32) -> bool {
        self.width <= max_width && self.height <= max_height
    }
}

/// Text measurement capability shared by wrapping and fitting.
///
/// `text` may contain `\n`; each segment is measured as its own line.
pub trait TextMeasure {
    /// Measure `text` set at `size_px`.
    fn measure(&mut self, text: &str, size_px: f32) -> TextExtent;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through parley layouts.
pub struct TextBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgb8> for TextBrush {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

struct Shaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
    font_data: vello_cpu::peniko::FontData,
}

/// Reusable text measurement and layout engine bound to a single face.
///
/// The face is registered once; every measurement at any size reuses the same parley
/// contexts.
pub struct TextEngine {
    font: OutlineFont,
    shaper: Box<Shaper>,
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine")
            .field("origin", &self.font.origin)
            .field("family", &self.shaper.family)
            .finish()
    }
}

impl TextEngine {
    /// Build an engine for `font`, failing when its bytes cannot be registered.
    pub fn new(font: OutlineFont) -> BingoResult<Self> {
        let shaper = Box::new(Shaper::register(&font)?);
        Ok(Self { font, shaper })
    }

    /// Engine backed by the embedded DejaVu Sans face.
    pub fn builtin() -> BingoResult<Self> {
        Self::new(font::embedded_font())
    }

    /// Resolve the face for a card.
    ///
    /// Tries `font_path` first, then (when `allow_system` is set) a system sans-serif face,
    /// and finally the embedded face. Each degraded step is logged.
    pub fn resolve(font_path: &Path, allow_system: bool) -> BingoResult<Self> {
        match font::load_font_file(font_path).and_then(Self::new) {
            Ok(engine) => return Ok(engine),
            Err(err) => {
                tracing::warn!(
                    font = %font_path.display(),
                    error = %err,
                    "font unavailable, falling back to a default face"
                );
            }
        }

        if allow_system {
            match font::system_sans_serif().map(Self::new) {
                Some(Ok(engine)) => {
                    tracing::warn!(origin = ?engine.origin(), "using system fallback font");
                    return Ok(engine);
                }
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "system fallback font could not be registered");
                }
                None => tracing::debug!("no system sans-serif face found"),
            }
        }

        tracing::warn!("using embedded DejaVu Sans");
        Self::builtin()
    }

    pub fn font(&self) -> &OutlineFont {
        &self.font
    }

    pub fn origin(&self) -> FontOrigin {
        self.font.origin.clone()
    }

    /// Shape `text` for drawing.
    pub(crate) fn shaped(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> (parley::Layout<TextBrush>, vello_cpu::peniko::FontData) {
        let layout = self.shaper.layout(text, size_px, brush);
        (layout, self.shaper.font_data.clone())
    }
}

impl TextMeasure for TextEngine {
    fn measure(&mut self, text: &str, size_px: f32) -> TextExtent {
        let layout = self.shaper.layout(text, size_px, TextBrush::default());
        TextExtent {
            width: layout.width(),
            height: layout.height(),
        }
    }
}

impl Shaper {
    fn register(font: &OutlineFont) -> BingoResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.data.as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BingoError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BingoError::font("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.data.as_ref().clone()),
            font.index,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font_data,
        })
    }

    fn layout(&mut self, text: &str, size_px: f32, brush: TextBrush) -> parley::Layout<TextBrush> {
        let size_px = size_px.max(1.0);
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        // Only explicit newlines break lines; wrapping is decided by the caller.
        layout.break_all_lines(None);
        layout
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
