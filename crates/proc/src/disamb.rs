// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Year-suffix disambiguation. A whole-set computation: letters depend on
//! which records collide, so the pass runs over the complete
//! bibliography-sorted sequence before anything renders.

use crate::sort::SortKey;
use fnv::FnvHashMap;
use itertools::Itertools;
use soilbio_io::utils::to_bijective_base_26;

/// Walk the bibliography-sorted records and assign suffix numbers ("a" = 1)
/// within every run of identical (family, initials, year) keys. Runs of one
/// get nothing. The input is already title-sorted, so letters come out in
/// ascending title order.
pub fn year_suffixes<'a, I>(sorted: I) -> FnvHashMap<String, u32>
where
    I: Iterator<Item = (&'a str, &'a SortKey)>,
{
    let mut suffixes = FnvHashMap::default();
    for (_key, group) in &sorted.group_by(|(_, key)| key.disamb_key()) {
        let members: Vec<&str> = group.map(|(id, _)| id).collect();
        if members.len() <= 1 {
            continue;
        }
        let mut i = 1; // "a" = 1
        for id in members {
            suffixes.insert(id.to_owned(), i);
            i += 1;
        }
    }
    suffixes
}

/// The displayed form of a suffix number.
pub fn suffix_letter(n: u32) -> String {
    to_bijective_base_26(n)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(family: &str, year: Option<i32>, title: &str) -> SortKey {
        SortKey {
            family: family.into(),
            initials: "J.".into(),
            year,
            title: title.into(),
        }
    }

    #[test]
    fn colliding_records_get_letters_in_title_order() {
        let keys = vec![
            ("smith-alpha", key("Smith", Some(2020), "Alpha")),
            ("smith-beta", key("Smith", Some(2020), "Beta")),
            ("jones", key("Jones", Some(2020), "Other")),
        ];
        let suffixes = year_suffixes(keys.iter().map(|(id, k)| (*id, k)));
        assert_eq!(suffixes.get("smith-alpha"), Some(&1));
        assert_eq!(suffixes.get("smith-beta"), Some(&2));
        // a group of one never receives a letter
        assert_eq!(suffixes.get("jones"), None);
        assert_eq!(suffix_letter(1), "a");
        assert_eq!(suffix_letter(2), "b");
    }

    #[test]
    fn different_years_do_not_collide() {
        let keys = vec![
            ("a", key("Smith", Some(2019), "One")),
            ("b", key("Smith", Some(2020), "Two")),
        ];
        let suffixes = year_suffixes(keys.iter().map(|(id, k)| (*id, k)));
        assert!(suffixes.is_empty());
    }

    #[test]
    fn undated_records_disambiguate_too() {
        let keys = vec![
            ("a", key("Smith", None, "One")),
            ("b", key("Smith", None, "Two")),
        ];
        let suffixes = year_suffixes(keys.iter().map(|(id, k)| (*id, k)));
        assert_eq!(suffixes.get("a"), Some(&1));
        assert_eq!(suffixes.get("b"), Some(&2));
    }

    #[test]
    fn letters_are_unique_within_a_group() {
        let keys: Vec<(String, SortKey)> = (0..30)
            .map(|i| {
                (
                    format!("ref-{:02}", i),
                    key("Smith", Some(2020), &format!("Title {:02}", i)),
                )
            })
            .collect();
        let suffixes = year_suffixes(keys.iter().map(|(id, k)| (id.as_str(), k)));
        let mut letters: Vec<String> =
            suffixes.values().map(|&n| suffix_letter(n)).collect();
        letters.sort();
        letters.dedup();
        assert_eq!(letters.len(), 30);
        // past "z" the letters run "aa", "ab", ...
        assert_eq!(suffix_letter(27), "aa");
    }
}
