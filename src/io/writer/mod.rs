/*! Writing facilities

- [CorpusWriter] writes corpus files, sample by sample.
- [LabeledWriter] writes fastText-formatted classification data.
!*/
mod labeled;
mod textwriter;

pub use labeled::{fasttext_transform, LabeledWriter, DEFAULT_LABEL_PREFIX};
pub use textwriter::CorpusWriter;
