use image::{GrayImage, RgbImage};

use crate::{
    compose::{blend::paste_masked, overlay::Overlay},
    foundation::core::{Point, Rect, Rgb8, center_offset},
    foundation::error::{BingoError, BingoResult},
    text::measure::{TextEngine, TextMeasure},
};

/// Paste the corner-masked panel onto the background with its top-left at `at`.
pub fn paste_panel(
    background: &mut RgbImage,
    panel: &RgbImage,
    mask: &GrayImage,
    at: (u32, u32),
) -> BingoResult<()> {
    paste_masked(
        background,
        panel,
        i64::from(at.0),
        i64::from(at.1),
        mask,
    )
}

/// Draw `title` horizontally centered, its top edge at `top`.
pub fn draw_title(
    target: &mut RgbImage,
    engine: &mut TextEngine,
    title: &str,
    size_px: f32,
    top: u32,
    color: Rgb8,
) -> BingoResult<()> {
    if title.trim().is_empty() {
        return Ok(());
    }
    let (w, h) = target.dimensions();
    let extent = engine.measure(title, size_px);
    let origin = Point::new(
        center_offset(f64::from(w), f64::from(extent.width)),
        f64::from(top),
    );

    let mut overlay = Overlay::new(w, h)?;
    overlay.draw_text_block(engine, title, size_px, origin, color);
    overlay.composite_onto(target)
}

/// Stroke the rounded outline around the panel area, line width falling inside `rect`.
pub fn draw_outer_border(
    target: &mut RgbImage,
    rect: Rect,
    radius: f64,
    width: u32,
    color: Rgb8,
) -> BingoResult<()> {
    let (w, h) = target.dimensions();
    if rect.x1 > f64::from(w) || rect.y1 > f64::from(h) || rect.x0 < 0.0 || rect.y0 < 0.0 {
        return Err(BingoError::render("outer border lies outside the image"));
    }
    let mut overlay = Overlay::new(w, h)?;
    overlay.stroke_rounded_rect_inside(rect, radius, f64::from(width), color);
    overlay.composite_onto(target)
}
