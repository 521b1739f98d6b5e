// src/specs/verbs.rs
//! Parser for the conjugation table on the verb-table site.
//!
//! Each `.inflection-table` cell holds a `<p>` with a form label and the
//! inflected form, normally as two text lines:
//!
//! ```text
//! <td><p>past tense<br><a>ran</a></p></td>   →  ("past tense", "ran")
//! ```
//!
//! When the text does not split into two lines, the raw markup is cut at the
//! first `<br>` and both halves are stripped; a form is kept only if both
//! halves are non-empty.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::dom::{self, selector};
use crate::core::html::{split_first_break, strip_tags};
use crate::model::VerbForm;

static CELL: LazyLock<Selector> = LazyLock::new(|| selector(".inflection-table tr td"));
static PARA: LazyLock<Selector> = LazyLock::new(|| selector("p"));

pub fn parse(html: &str) -> Vec<VerbForm> {
    let doc = Html::parse_document(html);
    let mut verbs: Vec<VerbForm> = Vec::new();

    for cell in doc.select(&CELL) {
        if dom::text(cell).is_empty() {
            continue;
        }
        let Some(p) = dom::first(cell, &PARA) else { continue };

        let lines: Vec<&str> = p
            .text()
            .flat_map(|t| t.split('\n'))
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let pair = if lines.len() >= 2 {
            Some((s!(lines[0]), s!(lines[1])))
        } else {
            let inner = p.inner_html();
            split_first_break(&inner).map(|(label, form)| (strip_tags(label), strip_tags(form)))
        };

        if let Some((form_type, text)) = pair.filter(|(a, b)| !a.is_empty() && !b.is_empty()) {
            verbs.push(VerbForm { id: verbs.len(), form_type, text });
        }
    }
    verbs
}
