// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Personal names and their decomposition into family, given and particle
//! parts. Particle case is preserved exactly as supplied; hyphens, dashes and
//! casing inside the parts pass through byte-for-byte.

#[derive(Default, Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
struct PersonNameInput {
    family: Option<String>,
    given: Option<String>,
    non_dropping_particle: Option<String>,
    dropping_particle: Option<String>,
    suffix: Option<String>,
    #[serde(default)]
    static_particles: bool,
}

#[derive(Default, Debug, Eq, PartialEq, Hash, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case", from = "PersonNameInput")]
pub struct PersonName {
    pub family: Option<String>,
    pub given: Option<String>,
    pub non_dropping_particle: Option<String>,
    pub dropping_particle: Option<String>,
    pub suffix: Option<String>,
    /// Input asserted its particles are already split (or that there are
    /// none); `parse_particles` leaves such names alone.
    #[serde(default, skip_serializing)]
    pub static_particles: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameInput {
    // Literal must come first: PersonNameInput's fields are all optional, so
    // it would happily swallow `{ "literal": ... }` as an empty person.
    Literal { literal: String },
    Person(PersonNameInput),
}

#[derive(Debug, Eq, PartialEq, Hash, Deserialize, Serialize, Clone)]
#[serde(from = "NameInput")]
pub enum Name {
    Literal { literal: String },
    Person(PersonName),
}

impl From<NameInput> for Name {
    fn from(input: NameInput) -> Self {
        match input {
            // Normalise literal names into lone family names, so the
            // formatting paths are uniform.
            NameInput::Literal { literal } => Name::Person(PersonName {
                family: Some(literal),
                static_particles: true,
                ..Default::default()
            }),
            NameInput::Person(pn) => Name::Person(pn.into()),
        }
    }
}

impl From<PersonNameInput> for PersonName {
    fn from(input: PersonNameInput) -> Self {
        let PersonNameInput {
            family,
            given,
            non_dropping_particle,
            dropping_particle,
            suffix,
            static_particles,
        } = input;
        PersonName {
            family,
            given,
            non_dropping_particle,
            dropping_particle,
            suffix,
            static_particles,
        }
    }
}

/// A name the normalizer could not decompose; the original string keeps
/// serving as the family name and rendering continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("name {original:?} could not be split into family and given parts; keeping it whole")]
pub struct MalformedName {
    pub original: String,
}

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Strip leading particle-shaped words off a family name: one or more
/// lowercase-initial words ("van", "de la") or apostrophe-joined prefixes
/// ("d'", "d’"). Returns the particles with trailing whitespace removed.
fn split_nondrop_family(family: &mut String) -> Result<Option<String>, MalformedName> {
    let re = regex!(r#"^\s*(?:['’ʻ]?\p{Lowercase}\p{Alphabetic}*(?:['’ʻ\s]|\b))+\s*"#);
    let (end, mut particles) = match re.find(family) {
        Some(m) => (m.end(), m.as_str().to_owned()),
        None => return Ok(None),
    };
    if end >= family.len() {
        // Nothing left over to be the family proper ("van der" and no more):
        // ambiguous placement, so the caller keeps the string whole.
        return Err(MalformedName {
            original: family.clone(),
        });
    }
    let remainder = family.split_off(end);
    *family = remainder;
    let trimmed = particles.trim_end().len();
    particles.truncate(trimmed);
    Ok(Some(particles))
}

/// Strip trailing particle-shaped words off a given name ("Alexander von" ->
/// given "Alexander", dropping particle "von").
fn split_drop_given(given: &mut String) -> Option<String> {
    let re = regex!(r#"\s+(?:['’ʻ]?\p{Lowercase}\p{Alphabetic}*(?:['’ʻ\s]|\b)\s*)+$"#);
    let m = re.find(given)?;
    if m.start() == 0 {
        return None;
    }
    let particles = m.as_str().trim().to_owned();
    let start = m.start();
    drop(m);
    given.truncate(start);
    Some(particles)
}

/// A comma in the given name marks a suffix: "John, Jr." -> given "John",
/// suffix "Jr.".
fn split_suffix(given: &mut String) -> Option<String> {
    let re = regex!(r#",\s+\S.*$"#);
    let m = re.find(given)?;
    let suffix = m.as_str().trim_start_matches(',').trim().to_owned();
    let start = m.start();
    drop(m);
    given.truncate(start);
    let end = given.trim_end().len();
    given.truncate(end);
    Some(suffix)
}

impl PersonName {
    /// Decompose raw `family`/`given` strings into particle components.
    ///
    /// Skipped entirely when the input already carried explicit particles or
    /// set `static_particles`. On a malformed family name the fields are left
    /// untouched, so the whole string keeps acting as the family name, and
    /// the error is handed back for the caller to surface as a warning.
    pub fn parse_particles(&mut self) -> Result<(), MalformedName> {
        if self.static_particles
            || self.non_dropping_particle.is_some()
            || self.dropping_particle.is_some()
        {
            return Ok(());
        }
        if let Some(family) = self.family.as_mut() {
            self.non_dropping_particle = split_nondrop_family(family)?;
        }
        if let Some(given) = self.given.as_mut() {
            if self.suffix.is_none() {
                self.suffix = split_suffix(given);
            }
            self.dropping_particle = split_drop_given(given);
        }
        Ok(())
    }
}

impl Name {
    pub fn parse_particles(&mut self) -> Result<(), MalformedName> {
        match self {
            Name::Person(pn) => pn.parse_particles(),
            Name::Literal { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parsed(family: &str, given: &str) -> PersonName {
        let mut pn = PersonName {
            family: Some(family.into()),
            given: Some(given.into()),
            ..Default::default()
        };
        pn.parse_particles().expect("name should parse");
        pn
    }

    #[test]
    fn splits_nondropping_particle() {
        assert_eq!(
            parsed("van der Vlist", "Eric"),
            PersonName {
                family: Some("Vlist".into()),
                given: Some("Eric".into()),
                non_dropping_particle: Some("van der".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn particle_case_is_preserved() {
        let pn = parsed("de Familyname", "Eric");
        assert_eq!(pn.non_dropping_particle.as_deref(), Some("de"));
        assert_eq!(pn.family.as_deref(), Some("Familyname"));
    }

    #[test]
    fn splits_dropping_particle_from_given() {
        assert_eq!(
            parsed("Humboldt", "Alexander von"),
            PersonName {
                family: Some("Humboldt".into()),
                given: Some("Alexander".into()),
                dropping_particle: Some("von".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn splits_suffix_from_given() {
        let pn = parsed("King", "Martin Luther, Jr.");
        assert_eq!(pn.given.as_deref(), Some("Martin Luther"));
        assert_eq!(pn.suffix.as_deref(), Some("Jr."));
    }

    #[test]
    fn all_particle_family_is_malformed() {
        let mut pn = PersonName {
            family: Some("van der".into()),
            ..Default::default()
        };
        let err = pn.parse_particles().unwrap_err();
        assert_eq!(err.original, "van der");
        // fallback: the unparsed string is retained as the family name
        assert_eq!(pn.family.as_deref(), Some("van der"));
        assert_eq!(pn.non_dropping_particle, None);
    }

    #[test]
    fn static_particles_are_left_alone() {
        let mut pn = PersonName {
            family: Some("van Beethoven".into()),
            static_particles: true,
            ..Default::default()
        };
        pn.parse_particles().unwrap();
        assert_eq!(pn.family.as_deref(), Some("van Beethoven"));
        assert_eq!(pn.non_dropping_particle, None);
    }

    #[test]
    fn literal_deserializes_to_lone_family() {
        let name: Name = serde_json::from_str(r#"{ "literal": "UNESCO" }"#).unwrap();
        match name {
            Name::Person(pn) => {
                assert_eq!(pn.family.as_deref(), Some("UNESCO"));
                assert!(pn.static_particles);
            }
            other => panic!("expected a person, got {:?}", other),
        }
    }

    #[test]
    fn person_deserializes_kebab_case() {
        let name: Name = serde_json::from_str(
            r#"{ "family": "Vlist", "given": "Eric", "non-dropping-particle": "van der" }"#,
        )
        .unwrap();
        match name {
            Name::Person(pn) => {
                assert_eq!(pn.non_dropping_particle.as_deref(), Some("van der"));
            }
            other => panic!("expected a person, got {:?}", other),
        }
    }
}
