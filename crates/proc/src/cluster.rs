// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! In-text citation clusters: "Bradford and Keiser, 2022; Georgiou et al.,
//! 2022". Plain text — the emphasis channel never appears in-text, and the
//! caller decides whether the cluster sits in parentheses.

use crate::names;
use crate::renderer::year_label;
use crate::sort;
use crate::terms;
use itertools::Itertools;
use lexical_sort::natural_lexical_cmp;
use soilbio_io::{Cite, Locator, Reference};

/// One cite joined to its resolved reference and the year-suffix number the
/// whole-set pass computed for it.
pub struct CiteCtx<'a> {
    pub cite: &'a Cite,
    pub refr: &'a Reference,
    pub suffix: Option<u32>,
}

/// Cluster-internal order: year ascending with undated works last, then the
/// short-author string, then suffix letter.
pub fn cluster_order(ctxs: &mut [CiteCtx<'_>]) {
    ctxs.sort_by(|a, b| {
        sort::cmp_year(a.refr.year(), b.refr.year())
            .then_with(|| {
                natural_lexical_cmp(
                    &names::short_author(&a.refr.author),
                    &names::short_author(&b.refr.author),
                )
            })
            .then_with(|| a.suffix.unwrap_or(0).cmp(&b.suffix.unwrap_or(0)))
    });
}

fn locator_text(locator: &Locator) -> String {
    match terms::locator_term(locator.loc_type) {
        Some(label) => format!("{} {}", label, locator.locator),
        None => locator.locator.clone(),
    }
}

// "Bradford and Keiser, 2022" / "Smith, 2020a, p. 33"
fn rendered_cite(ctx: &CiteCtx<'_>) -> String {
    let mut s = names::short_author(&ctx.refr.author);
    let year = year_label(ctx.refr.year(), ctx.suffix);
    if s.is_empty() {
        s = year;
    } else {
        s.push_str(", ");
        s.push_str(&year);
    }
    if let Some(locator) = &ctx.cite.locator {
        s.push_str(", ");
        s.push_str(&locator_text(locator));
    }
    s
}

/// The whole cluster, members in cluster order, joined with "; ".
pub fn built_cluster(mut ctxs: Vec<CiteCtx<'_>>) -> String {
    cluster_order(&mut ctxs);
    ctxs.iter().map(rendered_cite).join("; ")
}
