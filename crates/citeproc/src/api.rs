// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

use soilbio_io::ItemType;

/// How a host should lay the bibliography out. The entry text itself carries
/// no presentation: this style wants a hanging indent and no blank line
/// between consecutive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BibliographyMeta {
    pub hanging_indent: bool,
    /// Blank lines between consecutive entries.
    pub entry_spacing: u32,
}

impl Default for BibliographyMeta {
    fn default() -> Self {
        BibliographyMeta {
            hanging_indent: true,
            entry_spacing: 0,
        }
    }
}

/// Degraded-rendering conditions collected while ingesting records. None of
/// them stops the batch; a bibliography gets a human read before
/// publication, so visible artifacts beat hard failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("reference {ref_id}: name {original:?} could not be split; kept whole as a family name")]
    MalformedName { ref_id: String, original: String },
    #[error("{item_type} {ref_id} has no year; it sorts after dated works and renders as \"n.d.\"")]
    MissingYear { ref_id: String, item_type: ItemType },
    #[error("{item_type} {ref_id} has no title; that segment renders empty")]
    MissingTitle { ref_id: String, item_type: ItemType },
    #[error("reference {ref_id} has a URL but no accessed date")]
    UrlWithoutAccessed { ref_id: String },
}

/// Cross-check of the in-text citations against the reference list:
/// `missing` ids are cited but have no reference entry; `uncited` entries
/// are never cited anywhere. The latter is clean-up advice, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub missing: Vec<String>,
    pub uncited: Vec<String>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }
}
