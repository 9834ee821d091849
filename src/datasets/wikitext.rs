//! WikiText word-level language modeling datasets.
//!
//! From [Salesforce](https://blog.einstein.ai/the-wikitext-long-term-dependency-language-modeling-dataset/),
//! under Creative Commons Attribution-ShareAlike.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Error;

const TRAIN: &str = "wiki.train.tokens";
const VALID: &str = "wiki.valid.tokens";
const TEST: &str = "wiki.test.tokens";

/// Trimmed lines of the three WikiText splits.
#[derive(Debug, Clone, Default)]
pub struct WikiText {
    pub train: Vec<String>,
    pub valid: Vec<String>,
    pub test: Vec<String>,
}

impl WikiText {
    /// Load from an extracted directory (`wikitext-2` or `wikitext-103`).
    ///
    /// Empty lines are kept (as empty samples) unless `skip_empty` is set.
    pub fn load(dir: &Path, skip_empty: bool) -> Result<Self, Error> {
        Ok(Self {
            train: read_split(&dir.join(TRAIN), skip_empty)?,
            valid: read_split(&dir.join(VALID), skip_empty)?,
            test: read_split(&dir.join(TEST), skip_empty)?,
        })
    }
}

fn read_split(path: &Path, skip_empty: bool) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if skip_empty && line.is_empty() {
            continue;
        }
        samples.push(line.to_string());
    }
    debug!("{:?}: {} samples", path, samples.len());
    Ok(samples)
}
