// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Given names reduce to tightly packed initials: "Mark A." -> "M.A.",
//! "Jean-Luc" -> "J.-L.". Never "M. A." — the style wants no space between
//! initials. Lowercase words ("de") survive whole, space-separated.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1, take_while_m_n},
    character::complete::char as nom_char,
    combinator::{map, opt, recognize, rest},
    sequence::{preceded, terminated, tuple},
    IResult,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum GivenToken<'n> {
    /// A spelled-out name word: "Mark", "ME"
    Word(&'n str),
    /// Already an initial: "M", or "Ph" cut from "Ph."
    Initial(&'n str),
    /// "Luc" from "Jean-Luc"
    Hyphenated(&'n str),
    /// A lowercase word ("de") or anything uninitializable; kept whole
    Small(&'n str),
}

fn upper(inp: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 1, |c: char| c.is_uppercase())(inp)
}

// "M.Ph" -> "M"; "Ph." -> "Ph"; "MA." -> "MA"
fn until_dot(inp: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((upper, take_while(|c: char| c != '.')))),
        upper,
    ))(inp)
}

fn initial_with_dot(inp: &str) -> IResult<&str, GivenToken<'_>> {
    map(terminated(until_dot, nom_char('.')), GivenToken::Initial)(inp)
}

fn initial_maybe_dot(inp: &str) -> IResult<&str, GivenToken<'_>> {
    map(
        terminated(until_dot, opt(nom_char('.'))),
        GivenToken::Initial,
    )(inp)
}

fn plain_word(c: char) -> bool {
    !(c == '.' || c == '-')
}

fn word(inp: &str) -> IResult<&str, GivenToken<'_>> {
    map(
        recognize(tuple((upper, take_while1(plain_word)))),
        GivenToken::Word,
    )(inp)
}

fn hyphenated(inp: &str) -> IResult<&str, GivenToken<'_>> {
    map(
        preceded(nom_char('-'), take_while1(plain_word)),
        GivenToken::Hyphenated,
    )(inp)
}

fn small(inp: &str) -> IResult<&str, GivenToken<'_>> {
    map(rest, GivenToken::Small)(inp)
}

#[derive(Copy, Clone)]
enum WordState {
    /// At the start of a whitespace-separated word, a dotted run like "M.A."
    /// outranks a spelled-out word.
    Fresh,
    Within,
}

fn token(inp: &str, state: WordState) -> IResult<&str, GivenToken<'_>> {
    match state {
        WordState::Fresh => alt((hyphenated, initial_with_dot, word, initial_maybe_dot, small))(inp),
        WordState::Within => alt((hyphenated, initial_maybe_dot, small))(inp),
    }
}

fn tokenize(given: &str) -> impl Iterator<Item = GivenToken<'_>> {
    struct TokenIter<'a> {
        state: WordState,
        remain: &'a str,
    }

    impl<'a> Iterator for TokenIter<'a> {
        type Item = GivenToken<'a>;
        fn next(&mut self) -> Option<Self::Item> {
            if self.remain.is_empty() {
                return None;
            }
            match token(self.remain, self.state) {
                Ok((remainder, tok)) => {
                    self.state = WordState::Within;
                    self.remain = remainder;
                    Some(tok)
                }
                Err(_) => None,
            }
        }
    }

    given
        .split(' ')
        .filter(|w| !w.is_empty())
        .flat_map(|word| TokenIter {
            state: WordState::Fresh,
            remain: word,
        })
}

/// "ME" -> "M", "Given" -> "G", "GIven" -> "Gi" (a long abbreviation keeps
/// its trailing uppercase letters, lowercased).
fn initial_of(word: &str) -> String {
    if !word.chars().any(|c| c.is_lowercase()) {
        return word.chars().take(1).collect();
    }
    let mut out = String::new();
    let mut seen_upper = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if seen_upper {
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
                seen_upper = true;
            }
        } else {
            if !seen_upper {
                out.push(c);
            }
            break;
        }
    }
    out
}

/// Initialize a given name with periods and no internal spaces.
pub fn initials(given: &str) -> String {
    let mut out = String::with_capacity(given.len());
    let mut after_small = false;
    for tok in tokenize(given) {
        match tok {
            GivenToken::Word(w) => {
                if after_small {
                    out.push(' ');
                }
                out.push_str(&initial_of(w));
                out.push('.');
                after_small = false;
            }
            GivenToken::Initial(i) => {
                if after_small {
                    out.push(' ');
                }
                out.push_str(i);
                out.push('.');
                after_small = false;
            }
            GivenToken::Hyphenated(h) => {
                // lowercase hyphen segments ("-luc") contribute nothing
                if h.chars().next().map_or(false, |c| c.is_uppercase()) {
                    out.push('-');
                    out.push_str(&initial_of(h));
                    out.push('.');
                    after_small = false;
                }
            }
            GivenToken::Small(w) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(w);
                after_small = true;
            }
        }
    }
    out.trim().to_string()
}
