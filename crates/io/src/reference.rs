// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

use crate::date::Date;
use crate::names::Name;

/// The record kinds this style distinguishes. `book` and `report` share a
/// rendering arm; everything else gets its own.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ItemType {
    #[serde(alias = "article")]
    #[strum(to_string = "article-journal", serialize = "article")]
    ArticleJournal,
    Chapter,
    Book,
    Report,
    Thesis,
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::ArticleJournal
    }
}

/// One bibliographic item, supplied whole by the reference manager and
/// treated as immutable for a formatting pass. Field names follow the
/// CSL-JSON data model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Reference {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub author: Vec<Name>,
    pub editor: Vec<Name>,
    pub issued: Option<Date>,
    pub title: Option<String>,
    pub container_title: Option<String>,
    pub volume: Option<String>,
    /// Page range or article number, stored as supplied.
    pub page: Option<String>,
    pub edition: Option<String>,
    pub publisher: Option<String>,
    pub publisher_place: Option<String>,
    /// e.g. "PhD thesis"; printed verbatim for theses.
    pub genre: Option<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub accessed: Option<Date>,
}

impl Reference {
    pub fn empty(id: impl Into<String>, item_type: ItemType) -> Reference {
        Reference {
            id: id.into(),
            item_type,
            ..Default::default()
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.issued.as_ref().and_then(Date::year)
    }

    pub fn first_author(&self) -> Option<&Name> {
        self.author.get(0)
    }
}
