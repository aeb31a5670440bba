use image::{Luma, Rgb};

use super::*;

#[test]
fn over_transparent_src_is_noop() {
    let dst = [10, 20, 30];
    assert_eq!(over_opaque(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over_opaque([0, 0, 0], [255, 0, 0, 255]), [255, 0, 0]);
}

#[test]
fn over_half_covered_black_on_white_is_mid_gray() {
    // Premultiplied black at alpha 128 keeps 127/255 of white.
    assert_eq!(over_opaque([255, 255, 255], [0, 0, 0, 128]), [127, 127, 127]);
}

#[test]
fn over_in_place_rejects_size_mismatch() {
    let mut dst = RgbImage::new(2, 2);
    assert!(over_in_place(&mut dst, &[0u8; 12]).is_err());
    assert!(over_in_place(&mut dst, &[0u8; 16]).is_ok());
}

#[test]
fn composite_by_mask_endpoints_select_inputs() {
    let a = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
    let b = RgbImage::from_pixel(2, 1, Rgb([200, 210, 220]));
    let mut mask = GrayImage::new(2, 1);
    mask.put_pixel(1, 0, Luma([255]));

    let out = composite_by_mask(&a, &b, &mask).unwrap();
    assert_eq!(out.get_pixel(0, 0), &Rgb([10, 20, 30]));
    assert_eq!(out.get_pixel(1, 0), &Rgb([200, 210, 220]));
}

#[test]
fn composite_by_mask_requires_equal_sizes() {
    let a = RgbImage::new(2, 2);
    let b = RgbImage::new(2, 2);
    let mask = GrayImage::new(1, 2);
    assert!(composite_by_mask(&a, &b, &mask).is_err());
}

#[test]
fn paste_masked_offsets_and_clips() {
    let mut dst = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
    let src = RgbImage::from_pixel(3, 3, Rgb([255, 255, 255]));
    let mut mask = GrayImage::from_pixel(3, 3, Luma([255]));
    mask.put_pixel(0, 0, Luma([0]));

    paste_masked(&mut dst, &src, 2, 2, &mask).unwrap();
    // (0,0) of src is masked out.
    assert_eq!(dst.get_pixel(2, 2), &Rgb([0, 0, 0]));
    assert_eq!(dst.get_pixel(3, 3), &Rgb([255, 255, 255]));
    assert_eq!(dst.get_pixel(3, 2), &Rgb([255, 255, 255]));
    assert_eq!(dst.get_pixel(1, 1), &Rgb([0, 0, 0]));
}

#[test]
fn paste_masked_rejects_mask_size_mismatch() {
    let mut dst = RgbImage::new(4, 4);
    let src = RgbImage::new(2, 2);
    let mask = GrayImage::new(3, 3);
    assert!(paste_masked(&mut dst, &src, 0, 0, &mask).is_err());
}
