use std::sync::OnceLock;

use ab_glyph::{FontArc, FontVec};
use fontdb::{Database, Family, Query, Style, Weight};

/// Families named in the SVG `font-family` attribute, in preference order.
const FAMILIES: [Family<'static>; 3] = [Family::Name("DejaVu Sans"), Family::Name("Arial"), Family::SansSerif];

/// Sans faces used to measure text. A face is `None` when the host has no
/// matching font installed.
pub struct FontHandle {
    pub regular: Option<FontArc>,
    pub bold: Option<FontArc>,
    pub italic: Option<FontArc>,
}

impl FontHandle {
    /// Look up the sans faces among the host's installed fonts.
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        let handle = Self {
            regular: load_face(&db, Weight::NORMAL, Style::Normal),
            bold: load_face(&db, Weight::BOLD, Style::Normal),
            italic: load_face(&db, Weight::NORMAL, Style::Italic),
        };
        if handle.regular.is_none() {
            log::warn!("no sans-serif font found among {} system faces; text widths are estimated", db.len());
        }
        handle
    }

    /// Face for a bold/italic combination, falling back to the regular face.
    pub fn select(&self, bold: bool, italic: bool) -> Option<&FontArc> {
        let styled = match (bold, italic) {
            (true, _) => self.bold.as_ref(),
            (false, true) => self.italic.as_ref(),
            (false, false) => None,
        };
        styled.or(self.regular.as_ref())
    }
}

fn load_face(db: &Database, weight: Weight, style: Style) -> Option<FontArc> {
    let id = db.query(&Query { families: &FAMILIES, weight, style, ..Query::default() })?;
    db.with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))?
        .map_err(|e| log::debug!("unreadable font face {id:?}: {e}"))
        .ok()
        .map(FontArc::new)
}

static SYSTEM_FONTS: OnceLock<FontHandle> = OnceLock::new();

/// Process-wide font handle, loaded on first use.
pub fn shared() -> &'static FontHandle {
    SYSTEM_FONTS.get_or_init(FontHandle::system)
}
