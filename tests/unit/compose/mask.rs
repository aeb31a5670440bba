use image::Rgb;

use super::*;

#[test]
fn mask_is_opaque_in_the_middle_and_clear_at_corners() {
    let mask = rounded_rect_mask(120, 80, 30.0).unwrap();
    assert_eq!(mask.dimensions(), (120, 80));
    assert_eq!(mask.get_pixel(60, 40).0[0], 255);
    // Edge midpoints are inside the shape.
    assert_eq!(mask.get_pixel(60, 1).0[0], 255);
    assert_eq!(mask.get_pixel(1, 40).0[0], 255);
    // Corners are cut.
    assert_eq!(mask.get_pixel(0, 0).0[0], 0);
    assert_eq!(mask.get_pixel(119, 0).0[0], 0);
    assert_eq!(mask.get_pixel(0, 79).0[0], 0);
    assert_eq!(mask.get_pixel(119, 79).0[0], 0);
}

#[test]
fn zero_radius_mask_is_fully_opaque() {
    let mask = rounded_rect_mask(16, 16, 0.0).unwrap();
    assert!(mask.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn round_corners_fills_cut_corners_with_background() {
    let src = RgbImage::from_pixel(100, 100, Rgb([20, 40, 60]));
    let (out, mask) = round_corners(&src, 30.0, Rgb8::WHITE).unwrap();
    assert_eq!(mask.dimensions(), (100, 100));
    assert_eq!(out.get_pixel(0, 0), &Rgb([255, 255, 255]));
    assert_eq!(out.get_pixel(50, 50), &Rgb([20, 40, 60]));
}

#[test]
fn round_corners_is_idempotent_in_the_unclipped_region() {
    let src = RgbImage::from_fn(90, 70, |x, y| Rgb([(x * 2) as u8, (y * 3) as u8, 77]));
    let (once, mask) = round_corners(&src, 25.0, Rgb8::WHITE).unwrap();
    let (twice, _) = round_corners(&once, 25.0, Rgb8::WHITE).unwrap();

    for (x, y, m) in mask.enumerate_pixels() {
        if m.0[0] == 255 {
            assert_eq!(once.get_pixel(x, y), twice.get_pixel(x, y), "({x}, {y})");
            assert_eq!(once.get_pixel(x, y), src.get_pixel(x, y), "({x}, {y})");
        }
    }
}

#[test]
fn oversized_surfaces_are_rejected() {
    assert!(rounded_rect_mask(70_000, 10, 5.0).is_err());
    assert!(rounded_rect_mask(0, 10, 5.0).is_err());
}
