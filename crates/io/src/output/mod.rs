// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! The output seam: the renderer builds entries against this trait, so the
//! same rule table produces plain text for tests and HTML (with the italic
//! channel) for hosts that can display it.

mod html;
mod plain;

pub use self::html::Html;
pub use self::plain::PlainText;

/// The one bit of inline formatting this style uses: container titles go
/// through the emphasis channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatting {
    Italic,
}

pub trait OutputFormat: Send + Sync + Clone + Default + std::fmt::Debug {
    type Build: std::fmt::Debug + Default + Clone + PartialEq;
    type Output: Default + Clone;

    fn text_node(&self, s: &str, formatting: Option<Formatting>) -> Self::Build;

    fn plain(&self, s: &str) -> Self::Build {
        self.text_node(s, None)
    }

    /// Join the non-empty segments with `delimiter`; empty segments drop out
    /// so a missing field degrades to a shorter entry instead of doubled
    /// punctuation.
    fn group(&self, nodes: Vec<Self::Build>, delimiter: &str) -> Self::Build;

    fn join_delim(&self, a: Self::Build, delim: &str, b: Self::Build) -> Self::Build;

    fn append(&self, build: &mut Self::Build, suffix: &str);

    fn is_empty(&self, a: &Self::Build) -> bool;

    fn output(&self, intermediate: Self::Build) -> Self::Output;
}
