pub use kurbo::{Point, Rect};

/// Integer pixel size of a raster surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Straight (non-premultiplied) RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub fn to_paint(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}

/// Position of one cell in the grid, counted from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CellPos {
    pub row: u32,
    pub col: u32,
}

impl CellPos {
    /// Row-major position of element `index` in a grid of `size` columns.
    pub fn from_index(index: usize, size: u32) -> Self {
        let size = size.max(1) as usize;
        Self {
            row: (index / size) as u32,
            col: (index % size) as u32,
        }
    }

    /// Pixel bounds of this cell inside a panel of `cell_size` squares.
    pub fn bounds(self, cell_size: u32) -> Rect {
        let x0 = f64::from(self.col * cell_size);
        let y0 = f64::from(self.row * cell_size);
        Rect::new(
            x0,
            y0,
            x0 + f64::from(cell_size),
            y0 + f64::from(cell_size),
        )
    }
}

/// Offset that centers a box of `inner` length inside `outer`, rounded toward the origin.
pub fn center_offset(outer: f64, inner: f64) -> f64 {
    ((outer - inner) / 2.0).floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
