//! Bingo card image generator.
//!
//! A [`Card`] holds a title and a perfect-square number of cell texts. [`build_card`] lays
//! the texts out on a rounded panel over a vertical gradient, shrinking each cell's font until
//! its wrapped text fits, and returns the RGB image. [`generate_card`] also writes it as PNG.
#![forbid(unsafe_code)]

mod card;
mod compose;
mod foundation;
mod style;
mod text;

pub use card::builder::{
    CardLayout, CellReport, RenderedCard, build_card, build_card_with_engine, generate_card,
};
pub use card::model::{Card, CardSpec};
pub use compose::gradient::{gradient_row_alpha, vertical_gradient, vertical_ramp_mask};
pub use compose::mask::{round_corners, rounded_rect_mask};
pub use foundation::core::{Canvas, CellPos, Point, Rect, Rgb8};
pub use foundation::error::{BingoError, BingoResult};
pub use style::color::Color;
pub use style::config::StyleConfig;
pub use text::fit::{FitParams, FittedText, fit_text};
pub use text::font::{FontOrigin, OutlineFont, embedded_font, load_font_file, system_sans_serif};
pub use text::measure::{TextEngine, TextExtent, TextMeasure};
pub use text::wrap::{WrappedText, max_block_extent, wrap_text};
