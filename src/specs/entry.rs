// src/specs/entry.rs
//! Parser for a single dictionary entry page.
//!
//! Every extraction step is optional: a missing block degrades the result
//! instead of failing the parse. Fallbacks only run when the primary
//! structure produced nothing:
//!
//! - headword: `.hw.dhw` → `<title>` before " in English" → the looked-up term
//! - definitions: `.def-block` blocks → loose `.def.ddef_d` scan (no pos/level/examples)
//! - pronunciations: per-pos header blocks → loose `.dpron` scan
//!
//! A page with no parts of speech, definitions or pronunciations is not an
//! entry (the site answers unknown words with a 200 search page), so `parse`
//! returns `None` for it.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::TITLE_SUFFIX;
use crate::core::dom::{self, selector};
use crate::core::sanitize::absolute_url;
use crate::model::{Definition, Entry, Example, Level, Pronunciation, push_unique};

static HEADWORD: LazyLock<Selector> = LazyLock::new(|| selector(".hw.dhw"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static POS: LazyLock<Selector> = LazyLock::new(|| selector(".pos.dpos"));

static POS_HEADER: LazyLock<Selector> = LazyLock::new(|| selector(".pos-header.dpos-h"));
static POS_GROUP: LazyLock<Selector> = LazyLock::new(|| selector(".dpos-g"));
static PRON_ITEM: LazyLock<Selector> = LazyLock::new(|| selector(".dpron-i"));
static PRON_TEXT: LazyLock<Selector> = LazyLock::new(|| selector(".pron.dpron"));
static PRON_LOOSE: LazyLock<Selector> = LazyLock::new(|| selector(".dpron"));
static REGION: LazyLock<Selector> = LazyLock::new(|| selector(".region.dreg"));
static AUDIO_SOURCE: LazyLock<Selector> = LazyLock::new(|| selector("audio source"));

static DEF_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector(".def-block.ddef_block"));
static DEF_TEXT: LazyLock<Selector> = LazyLock::new(|| selector(".def.ddef_d.db"));
static DEF_TEXT_LOOSE: LazyLock<Selector> = LazyLock::new(|| selector(".def.ddef_d"));
static DEF_TRANS: LazyLock<Selector> =
    LazyLock::new(|| selector(".def-body.ddef_b > span.trans.dtrans"));
static LEVEL_MARKER: LazyLock<Selector> = LazyLock::new(|| selector(".epp-xref, .cefr, .dxref"));
static EXAMPLE: LazyLock<Selector> = LazyLock::new(|| selector(".def-body.ddef_b > .examp.dexamp"));
static EXAMPLE_TEXT: LazyLock<Selector> = LazyLock::new(|| selector(".eg.deg"));
static TRANS: LazyLock<Selector> = LazyLock::new(|| selector(".trans.dtrans"));
static TRANS_SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span.trans.dtrans"));
static DICTIONARY: LazyLock<Selector> = LazyLock::new(|| selector(".dictionary"));

const ENTRY_CLASS: &str = "entry-body__el";
const DICTIONARY_CLASS: &str = "dictionary";

/// What the caller knows about a page before parsing it.
#[derive(Clone, Copy, Debug)]
pub struct PageHint<'a> {
    /// Term that was looked up; last-resort headword.
    pub entry: &'a str,
    /// Source tag used when the page names no dictionary.
    pub source: &'a str,
}

/// Parse one entry page. `origin` resolves relative audio links.
pub fn parse(html: &str, origin: &str, hint: PageHint<'_>) -> Option<Entry> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let mut word = dom::first(root, &HEADWORD).map(dom::text).unwrap_or_default();

    let mut parts_of_speech = Vec::new();
    for el in root.select(&POS) {
        let pos = dom::text(el);
        if !pos.is_empty() {
            push_unique(&mut parts_of_speech, &pos);
        }
    }

    let mut pronunciations = header_pronunciations(root, origin);
    let mut definitions = block_definitions(root, hint);

    if word.is_empty() {
        word = title_headword(root).unwrap_or_default();
    }
    if word.is_empty() {
        word = s!(hint.entry.trim());
    }

    if definitions.is_empty() {
        definitions = loose_definitions(root, hint);
    }
    if pronunciations.is_empty() {
        pronunciations = loose_pronunciations(root, origin);
    }

    let entry = Entry {
        word,
        parts_of_speech,
        pronunciations,
        definitions,
        verbs: Vec::new(),
        order: None,
    };

    if entry.is_empty() {
        logd!("no entry content on page for {:?}", hint.entry);
        return None;
    }
    Some(entry)
}

/* ---------- headword ---------- */

/// `"你好 in English - Cambridge Dictionary"` → `"你好"`
fn title_headword(root: ElementRef<'_>) -> Option<String> {
    let title = dom::text(dom::first(root, &TITLE)?);
    let (head, _) = title.split_once(TITLE_SUFFIX)?;
    nonempty(s!(head.trim()))
}

/* ---------- pronunciations ---------- */

fn header_pronunciations(root: ElementRef<'_>, origin: &str) -> Vec<Pronunciation> {
    let mut out = Vec::new();
    for header in root.select(&POS_HEADER) {
        let pos = dom::first(header, &POS_GROUP).map(dom::text).unwrap_or_default();
        for node in header.select(&PRON_ITEM) {
            let ipa = dom::first(node, &PRON_TEXT).map(dom::text).unwrap_or_default();
            out.extend(pronunciation(node, &pos, ipa, origin));
        }
    }
    out
}

/// Region and audio come from the phonetic node's immediate parent.
fn loose_pronunciations(root: ElementRef<'_>, origin: &str) -> Vec<Pronunciation> {
    let mut out = Vec::new();
    for pnode in root.select(&PRON_LOOSE) {
        let ipa = dom::text(pnode);
        match dom::parent_element(pnode) {
            Some(parent) => out.extend(pronunciation(parent, "", ipa, origin)),
            None => out.extend(nonempty(ipa).map(|ipa| Pronunciation {
                ipa: Some(ipa),
                ..Default::default()
            })),
        }
    }
    out
}

/// Region/audio read from `scope`; `None` when both audio and IPA are empty.
fn pronunciation(scope: ElementRef<'_>, pos: &str, ipa: String, origin: &str) -> Option<Pronunciation> {
    let audio_url = dom::first(scope, &AUDIO_SOURCE)
        .and_then(|src| dom::attr(src, "src"))
        .and_then(|src| absolute_url(origin, src));
    let ipa = nonempty(ipa);
    if audio_url.is_none() && ipa.is_none() {
        return None;
    }
    let region = dom::first(scope, &REGION).map(dom::text).and_then(nonempty);
    Some(Pronunciation { pos: s!(pos), region, audio_url, ipa, lemma: None })
}

/* ---------- definitions ---------- */

fn block_definitions(root: ElementRef<'_>, hint: PageHint<'_>) -> Vec<Definition> {
    root.select(&DEF_BLOCK)
        .enumerate()
        .map(|(id, block)| {
            let pos = dom::closest_with_class(block, ENTRY_CLASS)
                .and_then(|entry| dom::first(entry, &POS))
                .map(dom::text)
                .unwrap_or_default();
            let source = dom::closest_with_class(block, DICTIONARY_CLASS)
                .and_then(|d| dom::attr(d, "data-id"))
                .unwrap_or(hint.source);

            Definition {
                id,
                pos,
                source: s!(source),
                text: dom::first(block, &DEF_TEXT).map(|t| dom::text_joined(t, " ")).unwrap_or_default(),
                translation: dom::first(block, &DEF_TRANS)
                    .map(|t| dom::text_joined(t, " "))
                    .and_then(nonempty),
                level: infer_level(block),
                examples: examples(block),
                lemma: None,
            }
        })
        .collect()
}

fn examples(block: ElementRef<'_>) -> Vec<Example> {
    block
        .select(&EXAMPLE)
        .enumerate()
        .map(|(id, ex)| Example {
            id,
            text: dom::first(ex, &EXAMPLE_TEXT).map(|t| dom::text_joined(t, " ")).unwrap_or_default(),
            translation: dom::first(ex, &TRANS)
                .map(|t| dom::text_joined(t, " "))
                .and_then(nonempty),
        })
        .collect()
}

/// Level markers first (exact token), then a space-delimited token anywhere
/// in the block's flattened text.
fn infer_level(block: ElementRef<'_>) -> Option<Level> {
    block
        .select(&LEVEL_MARKER)
        .find_map(|marker| Level::from_token(&dom::text(marker)))
        .or_else(|| {
            let flat = format!(" {} ", dom::text_joined(block, " "));
            Level::ALL.into_iter().find(|l| flat.contains(&format!(" {l} ")))
        })
}

/// Pages without `.def-block` wrappers (some reverse-bilingual layouts).
/// Each loose definition takes the first translation span that follows it
/// in document order.
fn loose_definitions(root: ElementRef<'_>, hint: PageHint<'_>) -> Vec<Definition> {
    let source = dom::first(root, &DICTIONARY)
        .and_then(|d| dom::attr(d, "data-id"))
        .unwrap_or(hint.source);

    let defs: Vec<ElementRef<'_>> = root.select(&DEF_TEXT_LOOSE).collect();
    if defs.is_empty() {
        return Vec::new();
    }

    let index: HashMap<_, usize> = defs.iter().enumerate().map(|(i, d)| (d.id(), i)).collect();
    let mut translations: Vec<Option<String>> = vec![None; defs.len()];
    let mut pending: Vec<usize> = Vec::new();

    for node in root.descendants() {
        let Some(el) = ElementRef::wrap(node) else { continue };
        if !pending.is_empty() && TRANS_SPAN.matches(&el) {
            let t = nonempty(dom::text_joined(el, " "));
            for i in pending.drain(..) {
                translations[i] = t.clone();
            }
        }
        if let Some(&i) = index.get(&el.id()) {
            pending.push(i);
        }
    }

    defs.into_iter()
        .zip(translations)
        .enumerate()
        .map(|(id, (def, translation))| Definition {
            id,
            pos: s!(),
            source: s!(source),
            text: dom::text_joined(def, " "),
            translation,
            level: None,
            examples: Vec::new(),
            lemma: None,
        })
        .collect()
}

fn nonempty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
