// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Input types for the processor: bibliographic records, names, citation
//! clusters and dates, in a CSL-JSON-like shape. References are supplied
//! whole by an external reference-management store and treated as immutable
//! for one formatting pass; everything derived (sort position, year-suffix
//! letters) lives in the `proc` crate.

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

mod cite;
mod date;
mod names;
mod reference;

pub mod output;
pub mod utils;

pub use self::cite::*;
pub use self::date::*;
pub use self::names::*;
pub use self::reference::*;
