// src/palette.rs
// The consumer side of the saved JSON: look colors up by name, with numeric channels,
// and find the color words in a piece of text.

use std::collections::HashMap;

use serde::Serialize;

use crate::color::ColorRecord;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_rgba(self, alpha: u8) -> [u8; 4] {
        [self.0, self.1, self.2, alpha]
    }
}

/// A word of the text that names a palette color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    /// The word as it appears in the (lower-cased) text
    pub word: String,
    /// The palette name it resolved to
    pub norm: String,
    /// Hex code of that color
    pub color: String,
    #[serde(skip)]
    pub rgb: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    code: String,
    rgb: Rgb,
}

/// Name-indexed colors. A repeated name keeps its first position but the
/// last entry's values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    order: Vec<String>,
    by_name: HashMap<String, Entry>,
}

impl Palette {
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ColorRecord> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    pub fn from_records(records: &[ColorRecord]) -> Result<Self> {
        let mut pal = Palette::default();
        for rec in records {
            let [r, g, b] = &rec.rgb;
            let channel = |v: &str| parse_channel(&rec.name, v);
            let entry = Entry {
                code: rec.color.clone(),
                rgb: Rgb(channel(r.as_str())?, channel(g.as_str())?, channel(b.as_str())?),
            };

            if pal.by_name.insert(rec.name.clone(), entry).is_none() {
                pal.order.push(rec.name.clone());
            }
        }
        Ok(pal)
    }

    pub fn code(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|e| e.code.as_str())
    }

    pub fn rgb(&self, name: &str) -> Option<Rgb> {
        self.by_name.get(name).map(|e| e.rgb)
    }

    pub fn contains(&self, name: &str) -> bool { self.by_name.contains_key(name) }
    pub fn len(&self) -> usize { self.order.len() }
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// (name, code, rgb) in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Rgb)> + '_ {
        self.order.iter().filter_map(move |name| {
            self.by_name.get(name).map(|e| (name.as_str(), e.code.as_str(), e.rgb))
        })
    }

    pub fn colors(&self) -> Vec<Rgb> {
        self.iter().map(|(_, _, rgb)| rgb).collect()
    }

    /// Color words of `text`, in text order, repeats included.
    ///
    /// A word is a run of Latin or Cyrillic letters and hyphens. It matches
    /// when it is a palette name itself; failing that, a hyphenated word
    /// matches through its first part that is one (`dark-red` -> `red`).
    pub fn find_in_text(&self, text: &str) -> Vec<Match> {
        let lower = text.to_lowercase();
        let found: Vec<Match> = lower
            .split(|c: char| !is_word_char(c))
            .filter(|w| !w.is_empty())
            .filter_map(|word| {
                let norm = self.resolve(word)?;
                let entry = self.by_name.get(&norm)?;
                Some(Match { word: word.to_string(), norm, color: entry.code.clone(), rgb: entry.rgb })
            })
            .collect();
        logd!("text lookup: {} char(s), {} color word(s)", text.chars().count(), found.len());
        found
    }

    fn resolve(&self, word: &str) -> Option<String> {
        let norm = word.replace('ё', "е");
        if self.contains(&norm) {
            return Some(norm);
        }
        if norm.contains('-') {
            return norm
                .split('-')
                .filter(|part| !part.is_empty())
                .find(|part| self.contains(part))
                .map(str::to_string);
        }
        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || ('а'..='я').contains(&c) || c == 'ё' || c == '-'
}

fn parse_channel(name: &str, value: &str) -> Result<u8> {
    value.trim().parse::<u8>().map_err(|_| Error::InvalidChannel {
        name: name.to_string(),
        value: value.to_string(),
    })
}
