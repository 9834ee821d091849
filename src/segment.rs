//! Document segmentation.
//!
//! Cleaned documents are cut into samples, either one per non-empty line ([SegmentMode::Lines])
//! or one per document ([SegmentMode::Document]).
use itertools::Itertools;

/// Granularity of the produced samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// One sample per non-empty line.
    #[default]
    Lines,
    /// One sample per document, its non-empty lines joined by `\n`.
    Document,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    mode: SegmentMode,
}

impl Segmenter {
    pub fn new(mode: SegmentMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Split `text` into samples, keeping line order.
    ///
    /// Lines are trimmed and empty ones are discarded.
    /// In [SegmentMode::Document], a document with no remaining line yields no sample.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
        match self.mode {
            SegmentMode::Lines => lines.map(String::from).collect(),
            SegmentMode::Document => {
                let document = lines.join("\n");
                if document.is_empty() {
                    Vec::new()
                } else {
                    vec![document]
                }
            }
        }
    }
}

/// [Segmenter::segment] in [SegmentMode::Lines].
pub fn segment(text: &str) -> Vec<String> {
    Segmenter::default().segment(text)
}
