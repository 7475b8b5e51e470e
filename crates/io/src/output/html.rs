// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

use super::{Formatting, OutputFormat};

/// HTML output: text is escaped, the emphasis channel becomes `<i>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Html;

impl OutputFormat for Html {
    type Build = String;
    type Output = String;

    fn text_node(&self, s: &str, formatting: Option<Formatting>) -> Self::Build {
        let escaped = v_htmlescape::escape(s).to_string();
        match formatting {
            Some(Formatting::Italic) => format!("<i>{}</i>", escaped),
            None => escaped,
        }
    }

    fn group(&self, nodes: Vec<Self::Build>, delimiter: &str) -> Self::Build {
        let mut out = String::new();
        for node in nodes {
            if node.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push_str(delimiter);
            }
            out.push_str(&node);
        }
        out
    }

    fn join_delim(&self, mut a: Self::Build, delim: &str, b: Self::Build) -> Self::Build {
        a.push_str(delim);
        a.push_str(&b);
        a
    }

    #[inline]
    fn append(&self, build: &mut Self::Build, suffix: &str) {
        build.push_str(suffix)
    }

    #[inline]
    fn is_empty(&self, a: &Self::Build) -> bool {
        a.is_empty()
    }

    #[inline]
    fn output(&self, intermediate: Self::Build) -> Self::Output {
        intermediate
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn italic_channel_and_escaping() {
        let fmt = Html;
        assert_eq!(
            fmt.text_node("Soil Biology & Biochemistry", Some(Formatting::Italic)),
            "<i>Soil Biology &amp; Biochemistry</i>"
        );
        assert_eq!(fmt.plain("a < b"), "a &lt; b");
    }
}
