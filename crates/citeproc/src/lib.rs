// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Batch citation processor for the journal's author–date style.
//!
//! Feed it the whole reference library and the document's citation clusters,
//! then ask for the formatted bibliography and in-text clusters. Everything
//! derived — sort position, year-suffix letters — is recomputed from the
//! full set on each call, so output is deterministic for a given input and
//! never depends on an earlier pass.

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

mod api;
mod processor;

pub use self::api::{BibliographyMeta, ConsistencyReport, Warning};
pub use self::processor::Processor;

pub use soilbio_io::output::{Formatting, Html, OutputFormat, PlainText};
pub use soilbio_io::{
    Cite, Cluster, ClusterId, Date, ItemType, Locator, LocatorType, MalformedName, Name,
    PersonName, Reference,
};
