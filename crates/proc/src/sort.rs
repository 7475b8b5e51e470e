// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Bibliography ordering. Keys are derived fresh from each record, compared
//! with natural, case-insensitive string ordering; the sort is stable, so
//! ties beyond (family, initials, year, title) keep input order.

use crate::names;
use lexical_sort::natural_lexical_cmp;
use soilbio_io::Reference;
use std::cmp::Ordering;

/// Derived per record for one pass; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortKey {
    pub family: String,
    pub initials: String,
    pub year: Option<i32>,
    pub title: String,
}

impl SortKey {
    pub fn of(refr: &Reference) -> SortKey {
        let (family, initials) = match refr.first_author() {
            Some(name) => (names::family_only(name), names::initials_of(name)),
            None => Default::default(),
        };
        SortKey {
            family,
            initials,
            year: refr.year(),
            title: refr.title.clone().unwrap_or_default(),
        }
    }

    /// Records collide when this triple matches; the year-suffix pass groups
    /// on it. Case differences in the family name do not disambiguate.
    pub fn disamb_key(&self) -> (String, String, Option<i32>) {
        (
            self.family.to_lowercase(),
            self.initials.clone(),
            self.year,
        )
    }
}

/// Missing years sort after every known year and group together.
pub fn cmp_year(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    natural_lexical_cmp(&a.family, &b.family)
        .then_with(|| natural_lexical_cmp(&a.initials, &b.initials))
        .then_with(|| match (a.year, b.year) {
            (Some(x), Some(y)) => x
                .cmp(&y)
                .then_with(|| natural_lexical_cmp(&a.title, &b.title)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            // undated works group together in input order; no title tiebreak
            (None, None) => Ordering::Equal,
        })
}

/// The bibliography order as indices into `keys` (and whatever id slice the
/// caller keeps alongside). Stable: exact ties retain input order.
pub fn sorted_indices(keys: &[SortKey]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.sort_by(|&a, &b| compare(&keys[a], &keys[b]));
    indices
}
