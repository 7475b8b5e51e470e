// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

use chrono::NaiveDate;

/// A date as supplied by the data source: structured parts, or a literal
/// string ("in press", a malformed value) which passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Date {
    Parts {
        year: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        month: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        day: Option<u32>,
    },
    Literal(String),
}

/// Accepts a bare year, `{ "year": y, "month": m, "day": d }`, the CSL-JSON
/// `{ "date-parts": [[y, m, d]] }` array form, or a literal string.
#[derive(Deserialize)]
#[serde(untagged)]
enum DateInput {
    Year(i32),
    Parts {
        year: i32,
        #[serde(default)]
        month: Option<u32>,
        #[serde(default)]
        day: Option<u32>,
    },
    DateParts {
        #[serde(rename = "date-parts")]
        date_parts: Vec<Vec<i32>>,
    },
    Literal(String),
}

impl From<DateInput> for Date {
    fn from(input: DateInput) -> Self {
        match input {
            DateInput::Year(year) => Date::from_year(year),
            DateInput::Parts { year, month, day } => Date::Parts { year, month, day },
            DateInput::DateParts { date_parts } => {
                let first = date_parts.into_iter().next().unwrap_or_default();
                match first.get(0) {
                    Some(&year) => Date::Parts {
                        year,
                        month: first.get(1).map(|&m| m as u32),
                        day: first.get(2).map(|&d| d as u32),
                    },
                    None => Date::Literal(String::new()),
                }
            }
            DateInput::Literal(s) => Date::Literal(s),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        DateInput::deserialize(deserializer).map(Date::from)
    }
}

impl Date {
    pub fn from_year(year: i32) -> Self {
        Date::Parts {
            year,
            month: None,
            day: None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            Date::Parts { year, .. } => Some(*year),
            // a literal that is nothing but a year still sorts by it
            Date::Literal(s) => s.trim().parse().ok(),
        }
    }

    /// Display form for accessed dates: "3 Mar 2025", degrading to
    /// "Mar 2025" or "2025" as parts go missing. Literals are verbatim.
    pub fn accessed_display(&self) -> String {
        match self {
            Date::Literal(s) => s.clone(),
            Date::Parts { year, month, day } => match (month, day) {
                (Some(m), Some(d)) => match NaiveDate::from_ymd_opt(*year, *m, *d) {
                    Some(date) => date.format("%-d %b %Y").to_string(),
                    None => {
                        warn!("{}-{}-{} is not a calendar date; using the year", year, m, d);
                        year.to_string()
                    }
                },
                (Some(m), None) => match NaiveDate::from_ymd_opt(*year, *m, 1) {
                    Some(date) => date.format("%b %Y").to_string(),
                    None => year.to_string(),
                },
                _ => year.to_string(),
            },
        }
    }
}
