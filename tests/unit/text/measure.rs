use std::sync::Arc;

use super::*;

#[test]
fn wider_text_measures_wider() {
    let mut engine = TextEngine::builtin().unwrap();
    let short = engine.measure("abcd", 20.0);
    let long = engine.measure("abcdabcd", 20.0);
    assert!(short.width > 0.0);
    assert!(long.width > short.width * 1.5);
    assert!((long.height - short.height).abs() < 0.01);
}

#[test]
fn newlines_stack_lines_and_width_tracks_the_widest() {
    let mut engine = TextEngine::builtin().unwrap();
    let one = engine.measure("abcdef", 20.0);
    let two = engine.measure("ab\nabcdef", 20.0);
    assert!((two.width - one.width).abs() < 0.01);
    assert!(two.height > one.height * 1.5);
}

#[test]
fn extent_scales_with_size() {
    let mut engine = TextEngine::builtin().unwrap();
    let small = engine.measure("hello world", 10.0);
    let large = engine.measure("hello world", 30.0);
    assert!(large.width > small.width * 2.5);
    assert!(large.height > small.height * 2.5);
    // A line is roughly one em tall.
    assert!(large.height > 25.0 && large.height < 45.0);
}

#[test]
fn builtin_engine_reports_builtin_origin() {
    let engine = TextEngine::builtin().unwrap();
    assert_eq!(engine.origin(), FontOrigin::Builtin);
    assert_eq!(engine.font().index, 0);
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let font = OutlineFont {
        data: Arc::new(b"not a font at all".to_vec()),
        index: 0,
        origin: FontOrigin::File("junk.ttf".into()),
    };
    let err = TextEngine::new(font).unwrap_err();
    assert!(matches!(err, BingoError::Font(_)));
}

#[test]
fn resolve_missing_file_without_system_fonts_uses_builtin() {
    let engine = TextEngine::resolve(Path::new("no/such/font.ttf"), false).unwrap();
    assert_eq!(engine.origin(), FontOrigin::Builtin);
    assert!(engine.origin().is_fallback());
}

#[test]
fn resolve_missing_file_with_system_fonts_never_uses_the_path() {
    let engine = TextEngine::resolve(Path::new("no/such/font.ttf"), true).unwrap();
    assert!(engine.origin().is_fallback());
}

#[test]
fn resolve_prefers_a_readable_font_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fonts/DejaVuSans.ttf");
    let mut engine = TextEngine::resolve(&path, false).unwrap();
    assert_eq!(engine.origin(), FontOrigin::File(path));
    assert!(engine.measure("Guilty pleasure", 22.0).width > 0.0);
}

#[test]
fn extent_fit_check_is_inclusive() {
    let e = TextExtent {
        width: 180.0,
        height: 40.0,
    };
    assert!(e.fits_within(180.0, 40.0));
    assert!(!e.fits_within(179.5, 40.0));
    assert!(!e.fits_within(180.0, 39.0));
}
