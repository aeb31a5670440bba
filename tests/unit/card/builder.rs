use std::path::PathBuf;

use image::Rgb;

use super::*;
use crate::{Color, foundation::core::Rgb8};

fn test_style() -> StyleConfig {
    StyleConfig {
        gradient_colors: [Color::rgb(0, 0, 255), Color::rgb(255, 0, 0)],
        panel_color: Color::rgb(255, 255, 255),
        line_color: Color::rgb(0, 0, 0),
        font_path: PathBuf::from("target/no-such-font.ttf"),
        system_font_fallback: false,
        title_font_size: 12.0,
        cell_font_size: 14.0,
        min_cell_font_size: 6.0,
        cell_size: 60,
        cell_padding: 10,
        margin: 20,
        title_top: 4,
        corner_radius: 10,
        ..StyleConfig::default()
    }
}

fn four_cells() -> Card {
    Card::new("Test", ["one", "two", "three", "four"])
}

#[test]
fn layout_adds_margin_on_every_side() {
    let layout = CardLayout::new(3, &StyleConfig::default()).unwrap();
    assert_eq!(layout.panel, Canvas::square(600));
    assert_eq!(layout.image, Canvas::square(800));
    assert_eq!(layout.panel_origin, (100, 100));
    assert_eq!(layout.panel_rect(), Rect::new(100.0, 100.0, 700.0, 700.0));
}

#[test]
fn layout_rejects_images_beyond_the_raster_limit() {
    let style = StyleConfig {
        cell_size: 65_600,
        margin: 0,
        ..StyleConfig::default()
    };
    let err = CardLayout::new(1, &style).unwrap_err();
    assert!(matches!(err, BingoError::Validation(_)));

    let at_limit = StyleConfig {
        cell_size: 65_535,
        margin: 0,
        ..StyleConfig::default()
    };
    assert_eq!(CardLayout::new(1, &at_limit).unwrap().image, Canvas::square(65_535));

    let margins_push_over = StyleConfig {
        cell_size: 65_000,
        margin: 300,
        ..StyleConfig::default()
    };
    assert!(CardLayout::new(1, &margins_push_over).is_err());
}

#[test]
fn oversized_card_fails_validation_without_rendering() {
    let style = StyleConfig {
        cell_size: 65_600,
        margin: 0,
        ..test_style()
    };
    let err = build_card(&Card::new("t", ["x"]), &style).unwrap_err();
    assert!(matches!(err, BingoError::Validation(_)));
}

#[test]
fn build_produces_expected_dimensions_and_reports() {
    let card = four_cells();
    let style = test_style();
    let rendered = build_card(&card, &style).unwrap();

    assert_eq!(rendered.image.dimensions(), (160, 160));
    assert_eq!(rendered.grid_size(), 2);
    assert_eq!(rendered.cells.len(), 4);
    assert_eq!(rendered.font, FontOrigin::Builtin);
    let texts: Vec<&str> = rendered.cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three", "four"]);
}

#[test]
fn margins_show_the_gradient_untouched() {
    let style = test_style();
    let rendered = build_card(&Card::new("", ["x"]), &style).unwrap();
    let bg = gradient::vertical_gradient(
        rendered.layout.image,
        style.gradient_colors[0].rgb8(),
        style.gradient_colors[1].rgb8(),
    )
    .unwrap();

    let (w, h) = rendered.image.dimensions();
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (5, h / 2)] {
        assert_eq!(rendered.image.get_pixel(x, y), bg.get_pixel(x, y), "({x}, {y})");
    }
    assert_eq!(rendered.image.get_pixel(0, 0), &Rgb([0, 0, 255]));
}

#[test]
fn rounded_panel_corner_reveals_the_background() {
    let style = test_style();
    let rendered = build_card(&Card::new("", ["x"]), &style).unwrap();
    let bg = gradient::vertical_gradient(
        rendered.layout.image,
        style.gradient_colors[0].rgb8(),
        style.gradient_colors[1].rgb8(),
    )
    .unwrap();
    // Panel starts at (20, 20); its corner pixel is outside the rounded outline.
    assert_eq!(rendered.image.get_pixel(20, 20), bg.get_pixel(20, 20));
}

#[test]
fn outer_border_is_drawn_over_the_panel_edge() {
    let rendered = build_card(&four_cells(), &test_style()).unwrap();
    // Panel spans 20..140; the 5px border sits inside that edge.
    assert_eq!(rendered.image.get_pixel(80, 21), &Rgb([0, 0, 0]));
    assert_eq!(rendered.image.get_pixel(21, 80), &Rgb([0, 0, 0]));
    assert_eq!(rendered.image.get_pixel(138, 80), &Rgb([0, 0, 0]));
}

#[test]
fn title_is_drawn_above_the_panel() {
    let style = test_style();
    let with_title = build_card(&Card::new("TITLE", ["x"]), &style).unwrap();
    let without = build_card(&Card::new("", ["x"]), &style).unwrap();

    let differs_above_panel = (0..20).any(|y| {
        (0..with_title.image.width())
            .any(|x| with_title.image.get_pixel(x, y) != without.image.get_pixel(x, y))
    });
    assert!(differs_above_panel);
}

#[test]
fn invalid_element_count_is_rejected_before_rendering() {
    let card = Card::new("t", ["a", "b", "c"]);
    let err = build_card(&card, &test_style()).unwrap_err();
    assert!(matches!(err, BingoError::Validation(_)));
}

#[test]
fn invalid_style_is_rejected() {
    let style = StyleConfig {
        cell_padding: 60,
        ..test_style()
    };
    let err = build_card(&four_cells(), &style).unwrap_err();
    assert!(matches!(err, BingoError::Validation(_)));
}

#[test]
fn explicit_engine_is_used_as_given() {
    let mut engine = TextEngine::builtin().unwrap();
    let rendered = build_card_with_engine(&four_cells(), &test_style(), &mut engine).unwrap();
    assert_eq!(rendered.font, FontOrigin::Builtin);
    assert!(rendered.cells.iter().all(|c| !c.overflow));
}

#[test]
fn generate_writes_png_and_creates_parent_dirs() {
    let out = PathBuf::from("target")
        .join("unit_card_builder")
        .join("nested")
        .join("card.png");
    let _ = std::fs::remove_file(&out);

    let rendered = generate_card(&four_cells(), &test_style(), &out).unwrap();
    let reread = image::open(&out).unwrap().to_rgb8();
    assert_eq!(reread, rendered.image);
}

#[test]
fn generate_writes_nothing_on_validation_failure() {
    let out = PathBuf::from("target")
        .join("unit_card_builder")
        .join("rejected.png");
    let _ = std::fs::remove_file(&out);

    let card = Card::new("t", Vec::<String>::new());
    assert!(generate_card(&card, &test_style(), &out).is_err());
    assert!(!out.exists());
}

#[test]
fn cell_panel_color_shows_inside_cells() {
    let style = StyleConfig {
        panel_color: Color::rgb(10, 200, 10),
        ..test_style()
    };
    let rendered = build_card(&Card::new("", ["", "", "", ""]), &style).unwrap();
    // Cell (0, 0) center: panel origin 20 + half a cell.
    assert_eq!(rendered.image.get_pixel(50, 50), &Rgb8::new(10, 200, 10).to_pixel());
}
