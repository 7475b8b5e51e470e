// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

pub type ClusterId = u32;

/// Kinds of pin-point reference an in-text citation can carry. `Unlabeled`
/// locators render their stored value verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LocatorType {
    Page,
    Figure,
    Table,
    Section,
    Unlabeled,
}

impl Default for LocatorType {
    fn default() -> Self {
        LocatorType::Page
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Locator {
    #[serde(default, rename = "label")]
    pub loc_type: LocatorType,
    /// Kept as supplied; a malformed value is rendered, not rejected.
    pub locator: String,
}

/// One cite inside a cluster, to exactly one reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cite {
    #[serde(rename = "id")]
    pub ref_id: String,
    #[serde(default)]
    pub locator: Option<Locator>,
}

impl Cite {
    pub fn basic(ref_id: impl Into<String>) -> Self {
        Cite {
            ref_id: ref_id.into(),
            locator: None,
        }
    }

    pub fn with_locator(ref_id: impl Into<String>, loc_type: LocatorType, value: &str) -> Self {
        Cite {
            ref_id: ref_id.into(),
            locator: Some(Locator {
                loc_type,
                locator: value.into(),
            }),
        }
    }
}

/// An ordered set of cites rendered at one citation point in a document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub cites: Vec<Cite>,
}
