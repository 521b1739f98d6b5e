// src/core/dom.rs
//
// Thin helpers over `scraper` for the lookups page specs keep repeating:
// stripped text, nearest ancestor by class, first match under a node.

use scraper::{ElementRef, Selector};

/// Compile a selector literal. Only meant for the `LazyLock` statics in
/// `specs`, where the CSS is a compile-time constant.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

/// Text of all descendant text nodes, each trimmed, empties dropped, glued
/// with nothing in between. `<span>/<b>hə</b>/</span>` → `/hə/`.
pub fn text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Like `text`, but pieces are joined with `sep`.
pub fn text_joined(el: ElementRef<'_>, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Nearest proper ancestor carrying `class`.
pub fn closest_with_class<'a>(el: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().classes().any(|c| c == class))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Attribute value, trimmed; `None` when missing or blank.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_variants() {
        let doc = Html::parse_fragment(r#"<p id="x"> /<b>hə</b>/ <i> two  words </i></p>"#);
        let p = doc.select(&selector("#x")).next().unwrap();
        assert_eq!(text(p), "/hə/two  words");
        assert_eq!(text_joined(p, " "), "/ hə / two  words");
    }

    #[test]
    fn closest_skips_self() {
        let doc = Html::parse_fragment(
            r#"<div class="dictionary" data-id="cald4"><div class="dictionary" id="inner"><span id="s"></span></div></div>"#,
        );
        let inner = doc.select(&selector("#inner")).next().unwrap();
        let outer = closest_with_class(inner, "dictionary").unwrap();
        assert_eq!(attr(outer, "data-id"), Some("cald4"));

        let s = doc.select(&selector("#s")).next().unwrap();
        assert_eq!(closest_with_class(s, "dictionary").unwrap().value().id(), Some("inner"));
        assert!(closest_with_class(s, "missing").is_none());
    }
}
