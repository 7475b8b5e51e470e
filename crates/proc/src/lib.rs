// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! The processing pipeline for the style: derive sort keys, order the
//! bibliography, assign year-suffix letters over the whole record set, then
//! render entries and in-text clusters. Two phases, batch only — letters
//! depend on cross-record grouping, so nothing renders until the full set
//! has been sorted.

#[macro_use]
extern crate log;

pub mod cluster;
pub mod disamb;
pub mod names;
pub mod number;
pub mod renderer;
pub mod sort;
pub mod terms;

pub(crate) mod prelude {
    pub use soilbio_io::output::{Formatting, OutputFormat};
    pub use soilbio_io::{Cite, ItemType, Locator, Name, PersonName, Reference};
}
