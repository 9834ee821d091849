/*! Reading facilities

[CorpusReader] implements [Iterator] over the samples of a corpus file.
!*/
mod textreader;

pub use textreader::{read_corpus, CorpusReader};
