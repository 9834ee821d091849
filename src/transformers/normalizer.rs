/*! Generic text normalization.

Replaces urls, HTML-like tags, emojis, emails and telephone numbers.
Each category is configured independently with a [Replacement]:

- [Replacement::Skip] leaves matches untouched,
- [Replacement::ReplaceWith] replaces matches with a literal. An empty literal deletes them.

```
use textprep::transformers::{normalize, NormalizationConfig, Replacement};

let config = NormalizationConfig {
    url: Replacement::with("[URL]"),
    ..NormalizationConfig::markup_cleanup()
};
assert_eq!(normalize("see https://example.com", &config), "see [URL]");
```
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use super::transform::{replace_all_owned, Transform};
use crate::error::Error;

lazy_static! {
    static ref URL: Regex = Regex::new(r"(https?|ftp|www)\S+").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref EMOJI: Regex = Regex::new(
        r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{1F900}-\x{1F9FF}]+"
    )
    .unwrap();
    static ref EMAIL: Regex =
        Regex::new(r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+").unwrap();
    static ref TEL: Regex =
        Regex::new(r"[()+\d.\-]*[ ]?\d{2,4}[-. ]+\d{3,4}[-. ]+\d{3,4}").unwrap();
}

/// What to do with the matches of a normalization category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Replacement {
    /// Leave matches untouched.
    Skip,
    /// Replace matches with the given literal.
    ReplaceWith(String),
}

impl Replacement {
    pub fn with(literal: impl Into<String>) -> Self {
        Self::ReplaceWith(literal.into())
    }

    /// Replace matches with nothing.
    pub fn delete() -> Self {
        Self::ReplaceWith(String::new())
    }

    fn apply(&self, re: &Regex, text: String) -> String {
        match self {
            Self::Skip => text,
            Self::ReplaceWith(literal) => replace_all_owned(re, text, NoExpand(literal.as_str())),
        }
    }
}

/// Per-category normalization settings.
///
/// Missing fields in a JSON configuration fall back to [NormalizationConfig::default].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub url: Replacement,
    pub tag: Replacement,
    pub emoji: Replacement,
    pub email: Replacement,
    pub tel: Replacement,
}

impl Default for NormalizationConfig {
    /// Placeholders for every category.
    fn default() -> Self {
        Self {
            url: Replacement::with("[URL]"),
            tag: Replacement::with("[TAG]"),
            emoji: Replacement::with("[EMOJI]"),
            email: Replacement::with("[EMAIL]"),
            tel: Replacement::with("[TEL]"),
        }
    }
}

impl NormalizationConfig {
    /// Settings used after markup stripping: everything is deleted except emojis, which are kept.
    pub fn markup_cleanup() -> Self {
        Self {
            url: Replacement::delete(),
            tag: Replacement::delete(),
            emoji: Replacement::Skip,
            email: Replacement::delete(),
            tel: Replacement::delete(),
        }
    }

    /// Load settings from a JSON file.
    ///
    /// ```json
    /// {"url": {"replace_with": " "}, "emoji": "skip"}
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(f))?;
        debug!("normalization config from {:?}: {:?}", path, config);
        Ok(config)
    }
}

/// Applies url, tag, emoji, email and telephone substitutions, in that order.
pub fn normalize(text: &str, config: &NormalizationConfig) -> String {
    normalize_owned(text.to_string(), config)
}

fn normalize_owned(text: String, config: &NormalizationConfig) -> String {
    let text = config.url.apply(&URL, text);
    let text = config.tag.apply(&TAG, text);
    let text = config.emoji.apply(&EMOJI, text);
    let text = config.email.apply(&EMAIL, text);
    config.tel.apply(&TEL, text)
}

/// Owns a [NormalizationConfig] so that it can be used as a [Transform].
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizationConfig,
}

impl Normalizer {
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text, &self.config)
    }

    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, text: String) -> String {
        normalize_owned(text, &self.config)
    }
}
