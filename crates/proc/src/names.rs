// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Name rendering: the long "Family, I.N." form for bibliography entries and
//! the abbreviated short-author form for in-text citations.

mod initials;

pub use self::initials::initials;

use crate::prelude::*;
use itertools::Itertools;

/// Family segment with the non-dropping particle in front, case preserved:
/// "van der Vlist". A particle ending in an apostrophe glues on without a
/// space ("d’Aubignac").
pub fn family_segment(pn: &PersonName) -> String {
    let family = pn.family.as_deref().unwrap_or("");
    match pn.non_dropping_particle.as_deref() {
        Some(particle) if !particle.is_empty() => {
            let mut s = String::with_capacity(particle.len() + family.len() + 1);
            s.push_str(particle);
            if !particle.ends_with(|c| matches!(c, '\'' | '\u{2019}' | '\u{02BB}')) {
                s.push(' ');
            }
            s.push_str(family);
            s
        }
        _ => family.to_owned(),
    }
}

/// "Family, I.N." with the dropping particle after the initials and any
/// suffix last: "Humboldt, A. von"; "King, M.L., Jr."
pub fn long_form(name: &Name) -> String {
    match name {
        Name::Literal { literal } => literal.clone(),
        Name::Person(pn) => {
            let mut s = family_segment(pn);
            if let Some(given) = pn.given.as_deref() {
                let init = initials(given);
                if !init.is_empty() {
                    s.push_str(", ");
                    s.push_str(&init);
                }
            }
            if let Some(dp) = pn.dropping_particle.as_deref() {
                s.push(' ');
                s.push_str(dp);
            }
            if let Some(suffix) = pn.suffix.as_deref() {
                s.push_str(", ");
                s.push_str(suffix);
            }
            s
        }
    }
}

pub fn family_only(name: &Name) -> String {
    match name {
        Name::Literal { literal } => literal.clone(),
        Name::Person(pn) => family_segment(pn),
    }
}

pub fn initials_of(name: &Name) -> String {
    match name {
        Name::Person(pn) => pn.given.as_deref().map(initials).unwrap_or_default(),
        Name::Literal { .. } => String::new(),
    }
}

/// All names, long form, comma-joined; the full reference entry never
/// truncates the author list.
pub fn name_list(names: &[Name]) -> String {
    names.iter().map(long_form).join(", ")
}

/// The in-text designation: one family name, "A and B", or "A et al." for
/// three or more. Applied uniformly — the first citation of a record
/// abbreviates exactly like every later one.
pub fn short_author(names: &[Name]) -> String {
    match names {
        [] => String::new(),
        [one] => family_only(one),
        [one, two] => format!("{} and {}", family_only(one), family_only(two)),
        [first, ..] => format!("{} et al.", family_only(first)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn person(family: &str, given: &str) -> Name {
        Name::Person(PersonName {
            family: Some(family.into()),
            given: Some(given.into()),
            ..Default::default()
        })
    }

    #[test]
    fn long_form_is_family_comma_initials() {
        assert_eq!(long_form(&person("Bradford", "M.A.")), "Bradford, M.A.");
        assert_eq!(long_form(&person("Keiser", "Abigail D.")), "Keiser, A.D.");
    }

    #[test]
    fn particles_stay_with_the_family() {
        let name = Name::Person(PersonName {
            family: Some("Vlist".into()),
            given: Some("Eric".into()),
            non_dropping_particle: Some("van der".into()),
            ..Default::default()
        });
        assert_eq!(long_form(&name), "van der Vlist, E.");
        assert_eq!(family_only(&name), "van der Vlist");
    }

    #[test]
    fn apostrophe_particle_glues_on() {
        let name = Name::Person(PersonName {
            family: Some("Aubignac".into()),
            non_dropping_particle: Some("d\u{2019}".into()),
            ..Default::default()
        });
        assert_eq!(family_only(&name), "d\u{2019}Aubignac");
    }

    #[test]
    fn dropping_particle_follows_initials() {
        let name = Name::Person(PersonName {
            family: Some("Humboldt".into()),
            given: Some("Alexander".into()),
            dropping_particle: Some("von".into()),
            ..Default::default()
        });
        assert_eq!(long_form(&name), "Humboldt, A. von");
    }

    #[test]
    fn short_author_et_al_rule() {
        let a = person("Bradford", "M.A.");
        let b = person("Keiser", "A.D.");
        let c = person("Georgiou", "K.");
        assert_eq!(short_author(&[a.clone()]), "Bradford");
        assert_eq!(short_author(&[a.clone(), b.clone()]), "Bradford and Keiser");
        assert_eq!(short_author(&[c, a, b]), "Georgiou et al.");
    }

    #[test]
    fn full_list_never_truncates() {
        let names: Vec<Name> = vec![
            person("Georgiou", "K."),
            person("Lavallee", "J.M."),
            person("Baisden", "W.T."),
        ];
        assert_eq!(
            name_list(&names),
            "Georgiou, K., Lavallee, J.M., Baisden, W.T."
        );
    }
}
