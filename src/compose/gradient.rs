use image::{GrayImage, Luma, RgbImage};

use crate::{
    compose::blend::composite_by_mask,
    foundation::core::{Canvas, Rgb8},
    foundation::error::{BingoError, BingoResult},
};

/// Mask value for row `y` of a `height`-row gradient: `floor(255 * y / height)`.
pub fn gradient_row_alpha(y: u32, height: u32) -> u8 {
    if height == 0 {
        return 0;
    }
    ((255u64 * u64::from(y)) / u64::from(height)).min(255) as u8
}

/// Vertical ramp mask, constant along each row.
pub fn vertical_ramp_mask(canvas: Canvas) -> GrayImage {
    GrayImage::from_fn(canvas.width, canvas.height, |_, y| {
        Luma([gradient_row_alpha(y, canvas.height)])
    })
}

/// Background that blends `top` at row 0 toward `bottom` at the last row.
pub fn vertical_gradient(canvas: Canvas, top: Rgb8, bottom: Rgb8) -> BingoResult<RgbImage> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(BingoError::render("gradient canvas must be at least 1x1"));
    }
    let base = RgbImage::from_pixel(canvas.width, canvas.height, top.to_pixel());
    let over = RgbImage::from_pixel(canvas.width, canvas.height, bottom.to_pixel());
    composite_by_mask(&base, &over, &vertical_ramp_mask(canvas))
}
