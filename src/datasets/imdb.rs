//! IMDb movie reviews.
//!
//! From <http://ai.stanford.edu/~amaas/data/sentiment/>.
//! Reviews are stored one per file, in `{train,test}/{pos,neg}/*.txt`.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::{LabeledSample, LabeledSplits};
use crate::error::Error;

const LABELS: [&str; 2] = ["pos", "neg"];

/// Load from the extracted `aclImdb` directory.
pub fn load(dir: &Path) -> Result<LabeledSplits, Error> {
    Ok(LabeledSplits {
        train: read_split(&dir.join("train"))?,
        test: read_split(&dir.join("test"))?,
    })
}

/// Reads the first line of each review, positive ones first.
fn read_split(dir: &Path) -> Result<Vec<LabeledSample>, Error> {
    let mut samples = Vec::new();
    for label in LABELS {
        let pattern = dir.join(label).join("*.txt");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("non UTF-8 path: {:?}", dir)))?;

        let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        paths.sort();

        for path in paths {
            let mut text = String::new();
            BufReader::new(File::open(&path)?).read_line(&mut text)?;
            samples.push(LabeledSample::new(text.trim(), label));
        }
    }
    debug!("{:?}: {} samples", dir, samples.len());
    Ok(samples)
}
