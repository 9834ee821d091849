/*!
# IO utilities

Corpus files saving and loading, and fastText-formatted output.
!*/
pub mod reader;
pub mod writer;

pub use reader::{read_corpus, CorpusReader};
pub use writer::{fasttext_transform, CorpusWriter, LabeledWriter, DEFAULT_LABEL_PREFIX};
