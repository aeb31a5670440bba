use std::path::Path;

use image::RgbImage;

use crate::{
    card::model::Card,
    compose::{gradient, layers, mask, panel},
    foundation::core::{Canvas, Rect, Rgb8},
    foundation::error::{BingoError, BingoResult},
    style::config::StyleConfig,
    text::font::FontOrigin,
    text::measure::TextEngine,
};

pub use crate::compose::panel::CellReport;

/// Pixel geometry of a card, derived from the element count and style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    /// Cells per row and per column.
    pub grid_size: u32,
    /// Square panel holding the grid.
    pub panel: Canvas,
    /// Whole output image.
    pub image: Canvas,
    /// Top-left corner of the panel inside the image.
    pub panel_origin: (u32, u32),
}

impl CardLayout {
    pub fn new(grid_size: u32, style: &StyleConfig) -> BingoResult<Self> {
        let side = style
            .cell_size
            .checked_mul(grid_size)
            .ok_or_else(|| BingoError::validation("panel size overflows"))?;
        let image_side = style
            .margin
            .checked_mul(2)
            .and_then(|m| m.checked_add(side))
            .ok_or_else(|| BingoError::validation("image size overflows"))?;
        if image_side > u32::from(u16::MAX) {
            return Err(BingoError::validation(format!(
                "image side {image_side}px exceeds the {} px limit",
                u16::MAX
            )));
        }
        Ok(Self {
            grid_size,
            panel: Canvas::square(side),
            image: Canvas::square(image_side),
            panel_origin: (style.margin, style.margin),
        })
    }

    /// Panel bounds in image coordinates.
    pub fn panel_rect(&self) -> Rect {
        let (x, y) = self.panel_origin;
        Rect::new(
            f64::from(x),
            f64::from(y),
            f64::from(x + self.panel.width),
            f64::from(y + self.panel.height),
        )
    }
}

/// A finished card image together with how it was laid out.
#[derive(Clone, Debug)]
pub struct RenderedCard {
    pub image: RgbImage,
    pub layout: CardLayout,
    /// Row-major, one entry per element.
    pub cells: Vec<CellReport>,
    pub font: FontOrigin,
}

impl RenderedCard {
    pub fn grid_size(&self) -> u32 {
        self.layout.grid_size
    }

    /// Write the image as PNG, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> BingoResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                BingoError::output(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| BingoError::output(format!("write png '{}': {e}", path.display())))?;
        tracing::info!(path = %path.display(), "bingo card saved");
        Ok(())
    }
}

/// Validate the card and style, resolve the font, and render the card in memory.
#[tracing::instrument(skip_all, fields(title = %card.title, elements = card.elements.len()))]
pub fn build_card(card: &Card, style: &StyleConfig) -> BingoResult<RenderedCard> {
    let layout = validate(card, style)?;
    let mut engine = TextEngine::resolve(&style.font_path, style.system_font_fallback)?;
    render_validated(card, style, layout, &mut engine)
}

/// Like [`build_card`] but with a caller-supplied text engine; no font lookup happens.
pub fn build_card_with_engine(
    card: &Card,
    style: &StyleConfig,
    engine: &mut TextEngine,
) -> BingoResult<RenderedCard> {
    let layout = validate(card, style)?;
    render_validated(card, style, layout, engine)
}

/// Build the card and write it to `out` as PNG.
///
/// Nothing is written when validation or rendering fails.
pub fn generate_card(card: &Card, style: &StyleConfig, out: &Path) -> BingoResult<RenderedCard> {
    let rendered = build_card(card, style)?;
    rendered.save(out)?;
    Ok(rendered)
}

fn validate(card: &Card, style: &StyleConfig) -> BingoResult<CardLayout> {
    let grid_size = card.grid_size()?;
    style.validate()?;
    CardLayout::new(grid_size, style)
}

fn render_validated(
    card: &Card,
    style: &StyleConfig,
    layout: CardLayout,
    engine: &mut TextEngine,
) -> BingoResult<RenderedCard> {
    let grid_size = layout.grid_size;
    tracing::debug!(
        grid_size,
        width = layout.image.width,
        height = layout.image.height,
        font = ?engine.origin(),
        "card layout resolved"
    );

    let [top, bottom] = style.gradient_colors;
    let mut image = gradient::vertical_gradient(layout.image, top.rgb8(), bottom.rgb8())?;

    let (panel_img, cells) = panel::render_panel(engine, &card.elements, grid_size, style)?;
    let radius = f64::from(style.corner_radius);
    let (panel_img, corner_mask) = mask::round_corners(&panel_img, radius, Rgb8::WHITE)?;

    // Fixed z-order: background, panel, title, outer border.
    layers::paste_panel(&mut image, &panel_img, &corner_mask, layout.panel_origin)?;
    layers::draw_title(
        &mut image,
        engine,
        &card.title,
        style.title_font_size,
        style.title_top,
        style.text_color.rgb8(),
    )?;
    layers::draw_outer_border(
        &mut image,
        layout.panel_rect(),
        radius,
        style.outer_border_width,
        style.line_color.rgb8(),
    )?;

    let overflowing = cells.iter().filter(|c| c.overflow).count();
    if overflowing > 0 {
        tracing::info!(overflowing, "some cells overflow at the minimum font size");
    }

    Ok(RenderedCard {
        image,
        layout,
        cells,
        font: engine.origin(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/card/builder.rs"]
mod tests;
