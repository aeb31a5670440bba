use image::{GrayImage, RgbImage};

use crate::{
    foundation::error::{BingoError, BingoResult},
    foundation::math::{lerp_u8, mul_div255_u8},
};

pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied pixel onto an opaque RGB pixel.
pub fn over_opaque(dst: [u8; 3], src: PremulRgba8) -> [u8; 3] {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return [src[0], src[1], src[2]];
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a premultiplied RGBA8 buffer of the same size over `dst`.
pub fn over_in_place(dst: &mut RgbImage, src_premul: &[u8]) -> BingoResult<()> {
    let expected = (dst.width() as usize)
        .checked_mul(dst.height() as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BingoError::render("overlay buffer size overflow"))?;
    if src_premul.len() != expected {
        return Err(BingoError::render(
            "over_in_place expects an rgba8 buffer matching the target size",
        ));
    }

    for (d, s) in dst.pixels_mut().zip(src_premul.chunks_exact(4)) {
        d.0 = over_opaque(d.0, [s[0], s[1], s[2], s[3]]);
    }
    Ok(())
}

/// Per-pixel blend of `a` toward `b` by `mask` (0 keeps `a`, 255 takes `b`).
pub fn composite_by_mask(a: &RgbImage, b: &RgbImage, mask: &GrayImage) -> BingoResult<RgbImage> {
    if a.dimensions() != b.dimensions() || a.dimensions() != mask.dimensions() {
        return Err(BingoError::render(
            "composite_by_mask expects images and mask of equal size",
        ));
    }

    let mut out = a.clone();
    for ((o, bp), m) in out.pixels_mut().zip(b.pixels()).zip(mask.pixels()) {
        let t = m.0[0];
        for i in 0..3 {
            o.0[i] = lerp_u8(o.0[i], bp.0[i], t);
        }
    }
    Ok(out)
}

/// Paste `src` into `dst` with its top-left corner at `(x, y)`, using `mask` as coverage.
///
/// Pixels falling outside `dst` are clipped.
pub fn paste_masked(
    dst: &mut RgbImage,
    src: &RgbImage,
    x: i64,
    y: i64,
    mask: &GrayImage,
) -> BingoResult<()> {
    if src.dimensions() != mask.dimensions() {
        return Err(BingoError::render("paste mask must match the source size"));
    }

    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    for (sx, sy, sp) in src.enumerate_pixels() {
        let tx = x + i64::from(sx);
        let ty = y + i64::from(sy);
        if tx < 0 || ty < 0 || tx >= dw || ty >= dh {
            continue;
        }
        let t = mask.get_pixel(sx, sy).0[0];
        if t == 0 {
            continue;
        }
        let d = dst.get_pixel_mut(tx as u32, ty as u32);
        for i in 0..3 {
            d.0[i] = lerp_u8(d.0[i], sp.0[i], t);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
