use image::RgbImage;

use crate::{
    compose::overlay::Overlay,
    foundation::core::{CellPos, Point, center_offset},
    foundation::error::BingoResult,
    style::config::StyleConfig,
    text::fit::fit_text,
    text::measure::{TextEngine, TextExtent},
    text::wrap::WrappedText,
};

/// How one cell's text was set.
#[derive(Clone, Debug, PartialEq)]
pub struct CellReport {
    pub pos: CellPos,
    pub text: String,
    pub size_px: f32,
    pub wrapped: WrappedText,
    pub extent: TextExtent,
    /// Text still exceeds the cell at the minimum size.
    pub overflow: bool,
}

/// Render the square grid panel: background, cell borders, and fitted cell text.
///
/// `elements` are laid out row-major into `grid_size` columns.
pub fn render_panel<S: AsRef<str>>(
    engine: &mut TextEngine,
    elements: &[S],
    grid_size: u32,
    style: &StyleConfig,
) -> BingoResult<(RgbImage, Vec<CellReport>)> {
    let side = style.cell_size * grid_size;
    let mut panel = RgbImage::from_pixel(side, side, style.panel_color.rgb8().to_pixel());
    let mut overlay = Overlay::new(side, side)?;

    let cell = f64::from(style.cell_size);
    let params = style.fit_params();
    let mut reports = Vec::with_capacity(elements.len());

    for (index, text) in elements.iter().enumerate() {
        let pos = CellPos::from_index(index, grid_size);
        let bounds = pos.bounds(style.cell_size);
        overlay.stroke_rect_inside(
            bounds,
            f64::from(style.inner_border_width),
            style.line_color.rgb8(),
        );

        let fitted = fit_text(engine, text.as_ref(), cell as f32, params);
        if fitted.overflow {
            tracing::debug!(
                row = pos.row,
                col = pos.col,
                size_px = fitted.size_px,
                "cell text overflows at the minimum size"
            );
        }

        let origin = Point::new(
            bounds.x0 + center_offset(cell, f64::from(fitted.extent.width)),
            bounds.y0 + center_offset(cell, f64::from(fitted.extent.height)),
        );
        overlay.draw_text_block(
            engine,
            &fitted.wrapped.joined(),
            fitted.size_px,
            origin,
            style.text_color.rgb8(),
        );

        reports.push(CellReport {
            pos,
            text: text.as_ref().to_owned(),
            size_px: fitted.size_px,
            wrapped: fitted.wrapped,
            extent: fitted.extent,
            overflow: fitted.overflow,
        });
    }

    overlay.composite_onto(&mut panel)?;
    Ok((panel, reports))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/panel.rs"]
mod tests;
