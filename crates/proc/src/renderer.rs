// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright © 2019 Corporation for Digital Scholarship

//! Bibliography entries. One pure function per record kind, dispatched on
//! the type tag; all of them share the access-info helper and the rule that
//! an entry ends with exactly one period. A missing field becomes an empty
//! segment and drops out of the join — a half-broken record still renders.

use crate::disamb;
use crate::names;
use crate::number;
use crate::prelude::*;
use crate::terms;

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// "2020" / "2020a" / "n.d." — the year as displayed, suffix letter attached.
pub fn year_label(year: Option<i32>, suffix: Option<u32>) -> String {
    let mut s = year
        .map(|y| y.to_string())
        .unwrap_or_else(|| terms::NO_DATE.to_owned());
    if let Some(n) = suffix {
        s.push_str(&disamb::suffix_letter(n));
    }
    s
}

/// DOI values are sometimes stored with a resolver prefix; the rendered form
/// is always `doi:10.xxxx/...`.
fn trim_doi(doi: &str) -> &str {
    let doi = doi.trim();
    let re = regex!(r"^(?:https?://)?(?:dx\.)?doi\.org/|^doi:\s*");
    match re.find(doi) {
        Some(m) => doi[m.end()..].trim_start(),
        None => doi,
    }
}

fn with_period(mut s: String) -> String {
    if !s.is_empty() && !s.ends_with(|c| matches!(c, '.' | '?' | '!')) {
        s.push('.');
    }
    s
}

fn nonempty(opt: &Option<String>) -> Option<&str> {
    opt.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub struct Renderer<'a, O: OutputFormat> {
    fmt: &'a O,
}

impl<'a, O: OutputFormat> Renderer<'a, O> {
    pub fn new(fmt: &'a O) -> Self {
        Renderer { fmt }
    }

    /// One formatted entry. `suffix` is the year-suffix number computed over
    /// the whole record set; rendering itself looks at nothing but this
    /// record.
    pub fn bib_entry(&self, refr: &Reference, suffix: Option<u32>) -> O::Build {
        let head = self.fmt.plain(&self.author_year(refr, suffix));
        let body = match refr.item_type {
            ItemType::ArticleJournal => self.article(refr),
            ItemType::Chapter => self.chapter(refr),
            ItemType::Book | ItemType::Report => self.monograph(refr),
            ItemType::Thesis => self.thesis(refr),
        };
        self.fmt.group(vec![head, body], " ")
    }

    // "Bradford, M.A., Keiser, A.D., 2022."
    fn author_year(&self, refr: &Reference, suffix: Option<u32>) -> String {
        let authors = names::name_list(&refr.author);
        let year = year_label(refr.year(), suffix);
        if authors.is_empty() {
            with_period(year)
        } else {
            with_period(format!("{}, {}", authors, year))
        }
    }

    // "Title. Container Volume, Pages. AccessInfo." — the container title is
    // the one thing that goes through the emphasis channel, verbatim.
    fn article(&self, refr: &Reference) -> O::Build {
        let title = self
            .fmt
            .plain(&with_period(refr.title.clone().unwrap_or_default()));
        let mut tail_parts: Vec<String> = Vec::new();
        if let Some(volume) = nonempty(&refr.volume) {
            tail_parts.push(volume.to_owned());
        }
        if let Some(page) = nonempty(&refr.page) {
            tail_parts.push(page.to_owned());
        }
        let tail = with_period(tail_parts.join(", "));
        let container = match nonempty(&refr.container_title) {
            Some(container) => {
                let node = self.fmt.text_node(container, Some(Formatting::Italic));
                if tail.is_empty() {
                    let mut node = node;
                    self.fmt.append(&mut node, ".");
                    node
                } else {
                    self.fmt.join_delim(node, " ", self.fmt.plain(&tail))
                }
            }
            None => self.fmt.plain(&tail),
        };
        let access = self.access_info(refr);
        self.fmt.group(vec![title, container, access], " ")
    }

    // "Title. In: Editor, C.D. (Eds.), Book Title. Publisher, Place,
    // pp. Pages. AccessInfo."
    fn chapter(&self, refr: &Reference) -> O::Build {
        let title = self
            .fmt
            .plain(&with_period(refr.title.clone().unwrap_or_default()));
        let editors = names::name_list(&refr.editor);
        let book = nonempty(&refr.container_title);
        let in_seg = if editors.is_empty() && book.is_none() {
            String::new()
        } else {
            let mut s = String::from(terms::IN);
            if !editors.is_empty() {
                s.push(' ');
                s.push_str(&editors);
                s.push(' ');
                s.push_str(terms::editor_term(refr.editor.len()));
            }
            if let Some(book) = book {
                if !editors.is_empty() {
                    s.push(',');
                }
                s.push(' ');
                s.push_str(book);
            }
            with_period(s)
        };
        let mut pub_parts: Vec<String> = Vec::new();
        if let Some(publisher) = nonempty(&refr.publisher) {
            pub_parts.push(publisher.to_owned());
        }
        if let Some(place) = nonempty(&refr.publisher_place) {
            pub_parts.push(place.to_owned());
        }
        if let Some(pages) = nonempty(&refr.page) {
            pub_parts.push(format!("{} {}", terms::PAGES, pages));
        }
        let pub_seg = with_period(pub_parts.join(", "));
        let access = self.access_info(refr);
        self.fmt.group(
            vec![
                title,
                self.fmt.plain(&in_seg),
                self.fmt.plain(&pub_seg),
                access,
            ],
            " ",
        )
    }

    // "Title[, Nth ed.]. Publisher, Place. AccessInfo." — books and reports
    // share this arm.
    fn monograph(&self, refr: &Reference) -> O::Build {
        let mut title = refr.title.clone().unwrap_or_default();
        if let Some(edition) = nonempty(&refr.edition) {
            if !title.is_empty() {
                title.push_str(", ");
            }
            title.push_str(&number::edition_label(edition));
        }
        let title = self.fmt.plain(&with_period(title));
        let mut pub_parts: Vec<String> = Vec::new();
        if let Some(publisher) = nonempty(&refr.publisher) {
            pub_parts.push(publisher.to_owned());
        }
        if let Some(place) = nonempty(&refr.publisher_place) {
            pub_parts.push(place.to_owned());
        }
        let pub_seg = self.fmt.plain(&with_period(pub_parts.join(", ")));
        let access = self.access_info(refr);
        self.fmt.group(vec![title, pub_seg, access], " ")
    }

    // "Title. Genre. University, City." — genre verbatim, never any access
    // info.
    fn thesis(&self, refr: &Reference) -> O::Build {
        let title = self
            .fmt
            .plain(&with_period(refr.title.clone().unwrap_or_default()));
        let genre = self
            .fmt
            .plain(&with_period(refr.genre.clone().unwrap_or_default()));
        let mut uni_parts: Vec<String> = Vec::new();
        if let Some(publisher) = nonempty(&refr.publisher) {
            uni_parts.push(publisher.to_owned());
        }
        if let Some(place) = nonempty(&refr.publisher_place) {
            uni_parts.push(place.to_owned());
        }
        let uni_seg = self.fmt.plain(&with_period(uni_parts.join(", ")));
        self.fmt.group(vec![title, genre, uni_seg], " ")
    }

    /// Shared by every arm except theses. DOI beats URL when both exist;
    /// a URL carries its accessed date.
    fn access_info(&self, refr: &Reference) -> O::Build {
        if let Some(doi) = nonempty(&refr.doi) {
            return self
                .fmt
                .plain(&with_period(format!("doi:{}", trim_doi(doi))));
        }
        if let Some(url) = nonempty(&refr.url) {
            let s = match &refr.accessed {
                Some(date) => format!(
                    "{} {} ({} {}).",
                    terms::URL,
                    url,
                    terms::ACCESSED,
                    date.accessed_display()
                ),
                None => {
                    warn!("reference {} has a URL but no accessed date", refr.id);
                    with_period(format!("{} {}", terms::URL, url))
                }
            };
            return self.fmt.plain(&s);
        }
        self.fmt.plain("")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use soilbio_io::output::PlainText;
    use soilbio_io::{Date, Name, PersonName};

    fn person(family: &str, given: &str) -> Name {
        Name::Person(PersonName {
            family: Some(family.into()),
            given: Some(given.into()),
            ..Default::default()
        })
    }

    fn render(refr: &Reference, suffix: Option<u32>) -> String {
        let fmt = PlainText;
        Renderer::new(&fmt).bib_entry(refr, suffix)
    }

    fn article() -> Reference {
        let mut refr = Reference::empty("bradford2022", ItemType::ArticleJournal);
        refr.author = vec![person("Bradford", "M.A."), person("Keiser", "A.D.")];
        refr.issued = Some(Date::from_year(2022));
        refr.title = Some("Soil carbon: a blind spot".into());
        refr.container_title = Some("Soil Biology and Biochemistry".into());
        refr.volume = Some("170".into());
        refr.page = Some("108778".into());
        refr.doi = Some("10.1016/j.soilbio.2022.108778".into());
        refr
    }

    #[test]
    fn article_entry() {
        assert_eq!(
            render(&article(), None),
            "Bradford, M.A., Keiser, A.D., 2022. Soil carbon: a blind spot. \
             Soil Biology and Biochemistry 170, 108778. \
             doi:10.1016/j.soilbio.2022.108778."
        );
    }

    #[test]
    fn doi_resolver_prefix_is_stripped() {
        let mut refr = article();
        refr.doi = Some("https://doi.org/10.1016/j.soilbio.2022.108778".into());
        assert!(render(&refr, None).ends_with("doi:10.1016/j.soilbio.2022.108778."));
        assert_eq!(trim_doi("https://dx.doi.org/10.1/x"), "10.1/x");
        assert_eq!(trim_doi("doi: 10.1/x"), "10.1/x");
        assert_eq!(trim_doi("10.1/x"), "10.1/x");
    }

    #[test]
    fn doi_beats_url() {
        let mut refr = article();
        refr.url = Some("https://example.org/x".into());
        refr.accessed = Some(Date::from_year(2025));
        let entry = render(&refr, None);
        assert!(entry.contains("doi:"));
        assert!(!entry.contains("URL"));
    }

    #[test]
    fn url_with_accessed_date() {
        let mut refr = article();
        refr.doi = None;
        refr.url = Some("https://example.org/x".into());
        refr.accessed = Some(Date::Parts {
            year: 2025,
            month: Some(3),
            day: Some(3),
        });
        assert!(render(&refr, None)
            .ends_with("URL https://example.org/x (accessed 3 Mar 2025)."));
    }

    #[test]
    fn year_suffix_letter_shows_in_the_entry() {
        let entry = render(&article(), Some(1));
        assert!(entry.starts_with("Bradford, M.A., Keiser, A.D., 2022a."));
    }

    #[test]
    fn missing_title_degrades_to_an_empty_segment() {
        let mut refr = article();
        refr.title = None;
        assert_eq!(
            render(&refr, None),
            "Bradford, M.A., Keiser, A.D., 2022. \
             Soil Biology and Biochemistry 170, 108778. \
             doi:10.1016/j.soilbio.2022.108778."
        );
    }

    #[test]
    fn missing_year_renders_nd() {
        let mut refr = article();
        refr.issued = None;
        assert!(render(&refr, None).starts_with("Bradford, M.A., Keiser, A.D., n.d. "));
    }

    #[test]
    fn chapter_entry() {
        let mut refr = Reference::empty("lavallee2020", ItemType::Chapter);
        refr.author = vec![person("Lavallee", "J.M.")];
        refr.editor = vec![person("Singh", "B."), person("Jones", "C.")];
        refr.issued = Some(Date::from_year(2020));
        refr.title = Some("Particulate organic matter".into());
        refr.container_title = Some("Soil Organic Matter Dynamics".into());
        refr.publisher = Some("Elsevier".into());
        refr.publisher_place = Some("Amsterdam".into());
        refr.page = Some("33\u{2013}56".into());
        assert_eq!(
            render(&refr, None),
            "Lavallee, J.M., 2020. Particulate organic matter. \
             In: Singh, B., Jones, C. (Eds.), Soil Organic Matter Dynamics. \
             Elsevier, Amsterdam, pp. 33\u{2013}56."
        );
    }

    #[test]
    fn single_editor_gets_ed() {
        let mut refr = Reference::empty("x", ItemType::Chapter);
        refr.editor = vec![person("Singh", "B.")];
        refr.container_title = Some("Book".into());
        let entry = render(&refr, None);
        assert!(entry.contains("Singh, B. (Ed.), Book."));
    }

    #[test]
    fn book_with_ordinal_edition() {
        let mut refr = Reference::empty("schlesinger2013", ItemType::Book);
        refr.author = vec![person("Schlesinger", "W.H.")];
        refr.issued = Some(Date::from_year(2013));
        refr.title = Some("Biogeochemistry: An Analysis of Global Change".into());
        refr.edition = Some("3".into());
        refr.publisher = Some("Academic Press".into());
        refr.publisher_place = Some("San Diego".into());
        assert_eq!(
            render(&refr, None),
            "Schlesinger, W.H., 2013. \
             Biogeochemistry: An Analysis of Global Change, 3rd ed. \
             Academic Press, San Diego."
        );
    }

    #[test]
    fn thesis_entry_has_no_access_info() {
        let mut refr = Reference::empty("keiser2014", ItemType::Thesis);
        refr.author = vec![person("Keiser", "A.D.")];
        refr.issued = Some(Date::from_year(2014));
        refr.title = Some("Microbial community function across gradients".into());
        refr.genre = Some("PhD thesis".into());
        refr.publisher = Some("Yale University".into());
        refr.publisher_place = Some("New Haven".into());
        refr.doi = Some("10.9999/ignored".into());
        assert_eq!(
            render(&refr, None),
            "Keiser, A.D., 2014. Microbial community function across gradients. \
             PhD thesis. Yale University, New Haven."
        );
    }

    #[test]
    fn entries_end_with_a_single_period() {
        for entry in [render(&article(), None), render(&article(), Some(2))].iter() {
            assert!(entry.ends_with('.'));
            assert!(!entry.ends_with(".."));
        }
    }
}
