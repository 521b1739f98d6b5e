// src/model.rs
//
// Structured entry as returned to callers. Field names on the wire follow the
// public JSON shape (`pos`, `pronunciation`, `definition`, `example`, ...).
// Optional text fields are `Option` in Rust and serialize as `""` when absent,
// so the wire shape stays flat while code can tell "missing" from "present".

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(rename = "pos")]
    pub parts_of_speech: Vec<String>,
    #[serde(rename = "pronunciation")]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(rename = "definition")]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub verbs: Vec<VerbForm>,
    /// Lemma order, aggregate lookups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
}

impl Entry {
    /// No definitions, no pronunciations, no parts of speech: a "not found" page.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.pronunciations.is_empty() && self.parts_of_speech.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub pos: String,
    #[serde(rename = "lang", with = "blank")]
    pub region: Option<String>,
    #[serde(rename = "url", with = "blank")]
    pub audio_url: Option<String>,
    #[serde(rename = "pron", with = "blank")]
    pub ipa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: usize,
    pub pos: String,
    pub source: String,
    pub text: String,
    #[serde(with = "blank")]
    pub translation: Option<String>,
    #[serde(with = "blank_level")]
    pub level: Option<Level>,
    #[serde(rename = "example")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: usize,
    pub text: String,
    #[serde(with = "blank")]
    pub translation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForm {
    pub id: usize,
    #[serde(rename = "type")]
    pub form_type: String,
    pub text: String,
}

/// CEFR proficiency level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Level {
    pub const ALL: [Level; 6] = [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1, Level::C2];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    /// Exact token match only: `"B2"` yes, `"b2"` / `" B2"` no.
    pub fn from_token(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Push `item` unless already present. Keeps first-seen order.
pub fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|x| x == item) {
        list.push(s!(item));
    }
}

/// `Option<String>` <-> `""`-for-none.
mod blank {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<String>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(v.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(de)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

mod blank_level {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::Level;

    pub fn serialize<S: Serializer>(v: &Option<Level>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(v.map(Level::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Level>, D::Error> {
        let raw = Option::<String>::deserialize(de)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        Level::from_token(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown CEFR level {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Entry {
        Entry {
            word: s!("hello"),
            parts_of_speech: vec![s!("exclamation")],
            pronunciations: vec![Pronunciation {
                pos: s!("exclamation"),
                region: Some(s!("uk")),
                audio_url: None,
                ipa: Some(s!("/heˈləʊ/")),
                lemma: None,
            }],
            definitions: vec![Definition {
                id: 0,
                pos: s!("exclamation"),
                source: s!("cald4"),
                text: s!("used when meeting someone"),
                translation: None,
                level: Some(Level::A1),
                examples: vec![Example { id: 0, text: s!("Hello, Paul."), translation: None }],
                lemma: None,
            }],
            verbs: vec![VerbForm { id: 0, form_type: s!("past tense"), text: s!("helloed") }],
            order: None,
        }
    }

    #[test]
    fn wire_shape_uses_public_names_and_blanks() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["pos"], json!(["exclamation"]));
        assert_eq!(v["pronunciation"][0]["lang"], "uk");
        assert_eq!(v["pronunciation"][0]["url"], "");
        assert_eq!(v["definition"][0]["level"], "A1");
        assert_eq!(v["definition"][0]["translation"], "");
        assert_eq!(v["definition"][0]["example"][0]["id"], 0);
        assert_eq!(v["verbs"][0]["type"], "past tense");
        assert!(v.get("order").is_none());
        assert!(v["definition"][0].get("lemma").is_none());
    }

    #[test]
    fn stored_json_reads_back() {
        let e = sample();
        let text = serde_json::to_string(&e).unwrap();
        let back: Entry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let bad = json!({"id":0,"pos":"","source":"","text":"","translation":"","level":"D9","example":[]});
        assert!(serde_json::from_value::<Definition>(bad).is_err());
    }

    #[test]
    fn level_tokens_are_exact() {
        assert_eq!(Level::from_token("B2"), Some(Level::B2));
        assert_eq!(Level::from_token("b2"), None);
        assert_eq!(Level::from_token(" B2"), None);
    }

    #[test]
    fn push_unique_keeps_first_seen_order() {
        let mut v = Vec::new();
        for x in ["verb", "noun", "verb", "adjective", "noun"] {
            push_unique(&mut v, x);
        }
        assert_eq!(v, ["verb", "noun", "adjective"]);
    }

    #[test]
    fn empty_entry() {
        let mut e = Entry { word: s!("x"), ..Default::default() };
        assert!(e.is_empty());
        e.parts_of_speech.push(s!("noun"));
        assert!(!e.is_empty());
    }
}
