/*! Local dataset readers.

Readers for already downloaded and extracted datasets:

- [WikiText] (WikiText-2 and WikiText-103) for language modeling,
- [nsmc] (Naver Sentiment Movie Corpus) and [imdb] for sentiment analysis.

Downloading and extraction are not handled here.
!*/
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

pub mod imdb;
pub mod nsmc;
mod wikitext;

pub use wikitext::WikiText;

/// A text along with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSample {
    pub text: String,
    pub label: String,
}

impl LabeledSample {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Train/test splits of a classification dataset.
#[derive(Debug, Clone, Default)]
pub struct LabeledSplits {
    pub train: Vec<LabeledSample>,
    pub test: Vec<LabeledSample>,
}

/// Classification datasets that can be loaded from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Nsmc,
    Imdb,
}

impl Classification {
    /// Load the dataset from its extracted directory
    /// (`nsmc-master` for NSMC, `aclImdb` for IMDb).
    pub fn load(&self, root: &Path) -> Result<LabeledSplits, Error> {
        match self {
            Self::Nsmc => nsmc::load(root),
            Self::Imdb => imdb::load(root),
        }
    }
}

impl FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nsmc" => Ok(Self::Nsmc),
            "imdb" => Ok(Self::Imdb),
            other => Err(Error::Custom(format!("unknown dataset: {}", other))),
        }
    }
}
