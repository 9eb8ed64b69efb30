use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Margins bound the area the cursor lays content into. The top margin is
/// where every output page starts writing, the bottom margin is the line the
/// cursor refuses to cross, and the left margin is where text starts.
/// Margins are also applied to [`Page`](crate::Page)s to determine the
/// `ArtBox` attribute of each page in the generated PDF
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
