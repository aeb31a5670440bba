use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::error::{BingoError, BingoResult};

/// DejaVu Sans, compiled in as the last-resort face.
const EMBEDDED_FONT: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");

/// Where the face used for a card came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// The font file named in the style.
    File(PathBuf),
    /// A sans-serif face found in the system font database.
    System { family: String },
    /// The face compiled into the crate.
    Builtin,
}

impl FontOrigin {
    /// True when the configured font could not be used.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::File(_))
    }
}

/// Raw outline font bytes plus the collection index of the face to use.
#[derive(Clone)]
pub struct OutlineFont {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
    pub origin: FontOrigin,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .field("origin", &self.origin)
            .finish()
    }
}

/// The embedded face used when neither the configured file nor a system font works.
pub fn embedded_font() -> OutlineFont {
    OutlineFont {
        data: Arc::new(EMBEDDED_FONT.to_vec()),
        index: 0,
        origin: FontOrigin::Builtin,
    }
}

/// Read a font file from disk.
///
/// Parsing happens later, when a [`crate::TextEngine`] registers the bytes.
pub fn load_font_file(path: &Path) -> BingoResult<OutlineFont> {
    let data = std::fs::read(path)
        .map_err(|e| BingoError::font(format!("read font '{}': {e}", path.display())))?;
    if data.is_empty() {
        return Err(BingoError::font(format!(
            "font file '{}' is empty",
            path.display()
        )));
    }
    Ok(OutlineFont {
        data: Arc::new(data),
        index: 0,
        origin: FontOrigin::File(path.to_path_buf()),
    })
}

/// Look up a sans-serif face in the system font database.
///
/// Only faces at collection index 0 are accepted, since the shaper registers whole files.
pub fn system_sans_serif() -> Option<OutlineFont> {
    use usvg::fontdb::{Database, Family, Query};

    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::SansSerif],
        ..Query::default()
    };
    let id = db
        .query(&query)
        .filter(|id| db.face(*id).is_some_and(|face| face.index == 0))
        .or_else(|| db.faces().find(|face| face.index == 0).map(|face| face.id))?;

    let family = db
        .face(id)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "unknown".to_string());
    let data = db.with_face_data(id, |data, _index| data.to_vec())?;

    Some(OutlineFont {
        data: Arc::new(data),
        index: 0,
        origin: FontOrigin::System { family },
    })
}
