use std::path::PathBuf;

use crate::{
    foundation::error::{BingoError, BingoResult},
    style::color::Color,
    text::fit::FitParams,
};

/// Immutable visual configuration for one card.
///
/// Every field has a default, so a style document only lists what it overrides:
///
/// ```json
/// { "gradient_colors": ["#FFE1E1", "#9A8888"], "panel_color": "#E6CFE2",
///   "font_path": "fonts/Oldtimer.ttf" }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Background gradient, top color first.
    pub gradient_colors: [Color; 2],
    /// Fill behind the grid cells.
    pub panel_color: Color,
    /// Cell and title text.
    pub text_color: Color,
    /// Grid lines and the outer border.
    pub line_color: Color,
    /// Stroke width of the rounded outline around the panel.
    pub outer_border_width: u32,
    /// Stroke width of each cell border.
    pub inner_border_width: u32,
    /// Panel corner radius in pixels.
    pub corner_radius: u32,
    /// Scalable font used for title and cells.
    pub font_path: PathBuf,
    /// Look for a system sans-serif face before the embedded one when `font_path` fails.
    pub system_font_fallback: bool,
    pub title_font_size: f32,
    /// Starting (largest) cell font size.
    pub cell_font_size: f32,
    /// Smallest cell font size the fitter will try.
    pub min_cell_font_size: f32,
    pub font_size_step: f32,
    /// Side of each square cell in pixels.
    pub cell_size: u32,
    /// Space between the image edge and the panel, on every side.
    pub margin: u32,
    /// Distance from the top edge to the title.
    pub title_top: u32,
    /// Total horizontal (and vertical) padding inside a cell.
    pub cell_padding: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            gradient_colors: [Color::rgb(173, 216, 230), Color::rgb(255, 182, 193)],
            panel_color: Color::rgb(255, 255, 255),
            text_color: Color::rgb(0, 0, 0),
            line_color: Color::rgb(0, 0, 0),
            outer_border_width: 5,
            inner_border_width: 2,
            corner_radius: 30,
            font_path: PathBuf::from("arial.ttf"),
            system_font_fallback: true,
            title_font_size: 50.0,
            cell_font_size: 22.0,
            min_cell_font_size: 10.0,
            font_size_step: 1.0,
            cell_size: 200,
            margin: 100,
            title_top: 20,
            cell_padding: 20,
        }
    }
}

impl StyleConfig {
    /// Shrink-search parameters for cell text.
    pub fn fit_params(&self) -> FitParams {
        FitParams {
            max_size: self.cell_font_size,
            min_size: self.min_cell_font_size,
            step: self.font_size_step,
            padding: self.cell_padding as f32,
        }
    }

    pub fn validate(&self) -> BingoResult<()> {
        if self.outer_border_width == 0 || self.inner_border_width == 0 {
            return Err(BingoError::validation("border widths must be positive"));
        }
        if self.cell_size == 0 {
            return Err(BingoError::validation("cell_size must be > 0"));
        }
        if self.cell_padding >= self.cell_size {
            return Err(BingoError::validation(
                "cell_padding must be smaller than cell_size",
            ));
        }
        if !self.title_font_size.is_finite() || self.title_font_size <= 0.0 {
            return Err(BingoError::validation(
                "title_font_size must be finite and > 0",
            ));
        }
        self.fit_params().validate()
    }
}
