// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

use crate::api::{BibliographyMeta, ConsistencyReport, Warning};
use fnv::FnvHashMap;
use indexmap::{IndexMap, IndexSet};
use soilbio_io::output::{Html, OutputFormat, PlainText};
use soilbio_io::{Cluster, ClusterId, Reference};
use soilbio_proc::cluster::{self, CiteCtx};
use soilbio_proc::renderer::Renderer;
use soilbio_proc::sort::{self, SortKey};
use soilbio_proc::disamb;

/// The batch processor. References and clusters go in (insertion order is
/// the final sort tiebreaker), formatted text comes out. One formatting run
/// sees the whole set: year-suffix letters depend on cross-record grouping,
/// so there is no per-record streaming mode.
pub struct Processor<O: OutputFormat = Html> {
    formatter: O,
    references: IndexMap<String, Reference>,
    clusters: IndexMap<ClusterId, Cluster>,
    warnings: Vec<Warning>,
}

impl Processor<Html> {
    pub fn html() -> Self {
        Processor::with_format(Html)
    }
}

impl Processor<PlainText> {
    pub fn plain() -> Self {
        Processor::with_format(PlainText)
    }
}

impl<O: OutputFormat> Processor<O> {
    pub fn with_format(formatter: O) -> Self {
        Processor {
            formatter,
            references: IndexMap::new(),
            clusters: IndexMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Normalize a record (name parts split, degradations noted) and store
    /// it. A re-inserted id replaces the earlier record.
    pub fn insert_reference(&mut self, mut refr: Reference) {
        for name in refr.author.iter_mut().chain(refr.editor.iter_mut()) {
            if let Err(err) = name.parse_particles() {
                warn!("{}", err);
                self.warnings.push(Warning::MalformedName {
                    ref_id: refr.id.clone(),
                    original: err.original,
                });
            }
        }
        if refr.year().is_none() {
            self.warnings.push(Warning::MissingYear {
                ref_id: refr.id.clone(),
                item_type: refr.item_type,
            });
        }
        if refr.title.is_none() {
            self.warnings.push(Warning::MissingTitle {
                ref_id: refr.id.clone(),
                item_type: refr.item_type,
            });
        }
        if refr.doi.is_none() && refr.url.is_some() && refr.accessed.is_none() {
            self.warnings.push(Warning::UrlWithoutAccessed {
                ref_id: refr.id.clone(),
            });
        }
        self.references.insert(refr.id.clone(), refr);
    }

    /// Replace the whole library. The previous pass's warnings go with it.
    pub fn set_references(&mut self, refs: Vec<Reference>) {
        self.references.clear();
        self.warnings.clear();
        for refr in refs {
            self.insert_reference(refr);
        }
    }

    pub fn insert_cluster(&mut self, cluster: Cluster) {
        self.clusters.insert(cluster.id, cluster);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Phase one of the pipeline, over the whole set: bibliography order and
    /// year-suffix numbers. Derived fresh on every call — letters are never
    /// persisted.
    pub fn sorted_refs(&self) -> (Vec<String>, FnvHashMap<String, u32>) {
        let keys: Vec<SortKey> = self.references.values().map(SortKey::of).collect();
        let order = sort::sorted_indices(&keys);
        let sorted_pairs: Vec<(&str, &SortKey)> = order
            .iter()
            .map(|&i| {
                let (id, _) = self
                    .references
                    .get_index(i)
                    .expect("sorted indices are in bounds of the reference store");
                (id.as_str(), &keys[i])
            })
            .collect();
        let suffixes = disamb::year_suffixes(sorted_pairs.iter().copied());
        let ids = sorted_pairs.iter().map(|&(id, _)| id.to_owned()).collect();
        (ids, suffixes)
    }

    /// Phase two: render every entry with its precomputed letter, in
    /// bibliography order.
    pub fn built_bibliography(&self) -> Vec<O::Output> {
        let (ids, suffixes) = self.sorted_refs();
        let renderer = Renderer::new(&self.formatter);
        ids.iter()
            .map(|id| {
                let refr = self
                    .references
                    .get(id)
                    .expect("sorted ids come from the reference store");
                let entry = renderer.bib_entry(refr, suffixes.get(id).copied());
                self.formatter.output(entry)
            })
            .collect()
    }

    /// One in-text cluster, members ordered and joined with "; ". A cite to
    /// an unknown reference is skipped so the rest of the cluster still
    /// renders; `consistency_report` lists such ids.
    pub fn built_cluster(&self, id: ClusterId) -> Option<String> {
        let cluster = self.clusters.get(&id)?;
        let (_, suffixes) = self.sorted_refs();
        let mut ctxs: Vec<CiteCtx<'_>> = Vec::with_capacity(cluster.cites.len());
        for cite in &cluster.cites {
            match self.references.get(&cite.ref_id) {
                Some(refr) => ctxs.push(CiteCtx {
                    cite,
                    refr,
                    suffix: suffixes.get(&cite.ref_id).copied(),
                }),
                None => warn!(
                    "cluster {} cites unknown reference {:?}; skipping that cite",
                    id, cite.ref_id
                ),
            }
        }
        Some(cluster::built_cluster(ctxs))
    }

    pub fn bibliography_meta(&self) -> BibliographyMeta {
        BibliographyMeta::default()
    }

    /// What the journal's checklist asks for: every in-text citation must
    /// have a reference entry, and unused entries are candidates for
    /// removal.
    pub fn consistency_report(&self) -> ConsistencyReport {
        let mut cited: IndexSet<&str> = IndexSet::new();
        for cluster in self.clusters.values() {
            for cite in &cluster.cites {
                cited.insert(cite.ref_id.as_str());
            }
        }
        let missing = cited
            .iter()
            .copied()
            .filter(|id| !self.references.contains_key(*id))
            .map(str::to_owned)
            .collect();
        let uncited = self
            .references
            .keys()
            .filter(|id| !cited.contains(id.as_str()))
            .cloned()
            .collect();
        ConsistencyReport { missing, uncited }
    }
}
