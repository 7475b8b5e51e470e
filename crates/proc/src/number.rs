// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

/// English ordinal: 1 -> "1st", 2 -> "2nd", 11 -> "11th", 112 -> "112th".
pub fn render_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// "2" -> "2nd ed."; a non-numeric edition ("Revised") is kept verbatim with
/// the label appended, and one that already says "ed." passes through.
pub fn edition_label(edition: &str) -> String {
    let edition = edition.trim();
    if let Ok(n) = edition.parse::<u32>() {
        return format!("{} ed.", render_ordinal(n));
    }
    if edition.ends_with("ed.") || edition.ends_with("edn.") {
        return edition.to_owned();
    }
    format!("{} ed.", edition)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ordinals() {
        assert_eq!(render_ordinal(1), "1st");
        assert_eq!(render_ordinal(2), "2nd");
        assert_eq!(render_ordinal(3), "3rd");
        assert_eq!(render_ordinal(4), "4th");
        assert_eq!(render_ordinal(11), "11th");
        assert_eq!(render_ordinal(12), "12th");
        assert_eq!(render_ordinal(13), "13th");
        assert_eq!(render_ordinal(21), "21st");
        assert_eq!(render_ordinal(103), "103rd");
    }

    #[test]
    fn editions() {
        assert_eq!(edition_label("2"), "2nd ed.");
        assert_eq!(edition_label(" 3 "), "3rd ed.");
        assert_eq!(edition_label("Revised"), "Revised ed.");
        assert_eq!(edition_label("2nd ed."), "2nd ed.");
    }
}
