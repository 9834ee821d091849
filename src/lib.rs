/*! # textprep

Preprocessing for natural language datasets.

The main entry point is the corpus pipeline ([pipelines::CorpusBuilder]), that turns wiki dumps
into flat, sample-per-line corpus files:

```no_run
use std::path::Path;
use textprep::pipelines::CorpusBuilder;

let samples = CorpusBuilder::with_defaults()?
    .build_or_load(Path::new("namuwiki.json"), Path::new("namuwiki.txt"))?;
# Ok::<(), textprep::error::Error>(())
```

Building blocks are available separately:

- [transformers]: normalization and markup stripping,
- [segment]: document to sample splitting,
- [sources]: streaming dump readers,
- [io]: corpus files and fastText-formatted output,
- [datasets]: readers for WikiText, NSMC and IMDb,
- [tokenizer]: word tokenization.
!*/
pub mod datasets;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod segment;
pub mod sources;
pub mod tokenizer;
pub mod transformers;
