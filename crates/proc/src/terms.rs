// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! The handful of fixed English terms the style uses. The journal publishes
//! in English only, so there is no locale layer to consult.

use soilbio_io::LocatorType;

pub const NO_DATE: &str = "n.d.";
pub const IN: &str = "In:";
pub const URL: &str = "URL";
pub const ACCESSED: &str = "accessed";
pub const PAGES: &str = "pp.";

pub fn editor_term(count: usize) -> &'static str {
    if count <= 1 {
        "(Ed.)"
    } else {
        "(Eds.)"
    }
}

/// Locator labels for in-text pin-points; `None` means the stored value is
/// rendered verbatim.
pub fn locator_term(loc_type: LocatorType) -> Option<&'static str> {
    match loc_type {
        LocatorType::Page => Some("p."),
        LocatorType::Figure => Some("fig."),
        LocatorType::Table => Some("tab."),
        LocatorType::Section => Some("sect."),
        LocatorType::Unlabeled => None,
    }
}
