use image::{GrayImage, RgbImage};

use crate::{
    compose::{blend::paste_masked, overlay::Overlay},
    foundation::core::{Rect, Rgb8},
    foundation::error::BingoResult,
};

/// Single-channel stencil of a filled, anti-aliased rounded rectangle covering the whole
/// `width`×`height` area.
///
/// The radius is clamped to half the shorter side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f64) -> BingoResult<GrayImage> {
    let mut overlay = Overlay::new(width, height)?;
    overlay.fill_rounded_rect(
        Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
        radius,
        Rgb8::WHITE,
    );
    Ok(overlay.into_coverage())
}

/// Clip `image` to a rounded rectangle, filling the cut corners with `background`.
///
/// Returns the clipped image together with the mask used, so callers can reuse it as a
/// paste stencil.
pub fn round_corners(
    image: &RgbImage,
    radius: f64,
    background: Rgb8,
) -> BingoResult<(RgbImage, GrayImage)> {
    let (w, h) = image.dimensions();
    let mask = rounded_rect_mask(w, h, radius)?;
    let mut out = RgbImage::from_pixel(w, h, background.to_pixel());
    paste_masked(&mut out, image, 0, 0, &mask)?;
    Ok((out, mask))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mask.rs"]
mod tests;
