use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{BingoError, BingoResult},
    foundation::math::exact_sqrt,
    style::config::StyleConfig,
};

/// Title plus the ordered cell texts of one card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub title: String,
    /// Row-major cell texts. The count must be a non-zero perfect square.
    pub elements: Vec<String>,
}

impl Card {
    pub fn new<T, I, S>(title: T, elements: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Side length of the square grid, or a validation error when the element count is not
    /// a non-zero perfect square.
    pub fn grid_size(&self) -> BingoResult<u32> {
        let n = self.elements.len();
        if n == 0 {
            return Err(BingoError::validation("a card needs at least one element"));
        }
        let size = exact_sqrt(n).ok_or_else(|| {
            BingoError::validation(format!(
                "element count must be a perfect square, got {n}"
            ))
        })?;
        u32::try_from(size).map_err(|_| BingoError::validation("grid size exceeds u32"))
    }
}

/// On-disk card description: the card plus an optional style override.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardSpec {
    pub title: String,
    pub elements: Vec<String>,
    #[serde(default)]
    pub style: StyleConfig,
}

impl CardSpec {
    pub fn from_json_str(s: &str) -> BingoResult<Self> {
        serde_json::from_str(s).map_err(|e| BingoError::serde(e.to_string()))
    }

    /// Read a JSON card description.
    ///
    /// A relative `style.font_path` is resolved against the document's directory.
    pub fn from_path(path: impl AsRef<Path>) -> BingoResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read card description '{}'", path.display()))?;
        let mut spec = Self::from_json_str(&text)?;
        if spec.style.font_path.is_relative()
            && let Some(dir) = path.parent()
        {
            spec.style.font_path = dir.join(&spec.style.font_path);
        }
        Ok(spec)
    }

    pub fn card(&self) -> Card {
        Card {
            title: self.title.clone(),
            elements: self.elements.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
