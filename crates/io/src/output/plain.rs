// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

use super::{Formatting, OutputFormat};

/// Formatting-free output; the emphasis channel is silently flattened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainText;

impl OutputFormat for PlainText {
    type Build = String;
    type Output = String;

    #[inline]
    fn text_node(&self, s: &str, _formatting: Option<Formatting>) -> Self::Build {
        s.to_owned()
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
