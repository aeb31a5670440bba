use crate::{
    foundation::error::{BingoError, BingoResult},
    text::measure::{TextExtent, TextMeasure},
    text::wrap::{WrappedText, wrap_text},
};

/// Bounds of the shrink-until-fits search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// First size tried (ceiling).
    pub max_size: f32,
    /// Last size tried (floor).
    pub min_size: f32,
    /// Amount subtracted per attempt.
    pub step: f32,
    /// Total padding removed from the box before testing fit.
    pub padding: f32,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            max_size: 22.0,
            min_size: 10.0,
            step: 1.0,
            padding: 20.0,
        }
    }
}

impl FitParams {
    pub fn validate(&self) -> BingoResult<()> {
        if !self.min_size.is_finite() || self.min_size <= 0.0 {
            return Err(BingoError::validation(
                "minimum font size must be finite and > 0",
            ));
        }
        if !self.max_size.is_finite() || self.max_size < self.min_size {
            return Err(BingoError::validation(
                "font size ceiling must be finite and >= the floor",
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(BingoError::validation("font size step must be > 0"));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(BingoError::validation("cell padding must be >= 0"));
        }
        Ok(())
    }
}

/// Outcome of fitting one text into a box.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedText {
    pub size_px: f32,
    pub wrapped: WrappedText,
    pub extent: TextExtent,
    /// The floor was reached and the block still exceeds the box.
    pub overflow: bool,
}

/// Shrink from `params.max_size` toward `params.min_size` until the wrapped block fits a
/// square box of `box_size` minus padding.
///
/// Best effort: when nothing fits, the floor attempt is returned with `overflow` set. The
/// returned size always lies within `[min_size, max_size]` for validated params.
pub fn fit_text<M>(measure: &mut M, text: &str, box_size: f32, params: FitParams) -> FittedText
where
    M: TextMeasure + ?Sized,
{
    let target = (box_size - params.padding).max(0.0);
    let floor = params.min_size.min(params.max_size);
    let step = if params.step > 0.0 { params.step } else { 1.0 };

    let mut size = params.max_size;
    loop {
        let wrapped = wrap_text(measure, text, size, target);
        let extent = measure.measure(&wrapped.joined(), size);
        let fits = extent.fits_within(target, target);
        if fits || size <= floor {
            return FittedText {
                size_px: size,
                wrapped,
                extent,
                overflow: !fits,
            };
        }
        size = (size - step).max(floor);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
