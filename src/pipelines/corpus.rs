//! Wiki dump to flat corpus pipeline
//!
//! Turns a dump of markup-heavy documents into a corpus file suitable for language modeling.
//!
//! # Processing
//! 1. Records are streamed from the dump (see [crate::sources::Archive]).
//! 1. Each record goes through markup stripping then normalization ([MarkupCleaner]).
//! 1. The cleaned text is segmented into samples ([Segmenter]).
//! 1. Samples are appended to the corpus file as they come, keeping record order.
//!
//! The corpus file is authoritative: once it exists, it is loaded as is and the dump is never read again.
//! It is written under a temporary name and moved in place only when every record has been processed,
//! so an aborted run leaves nothing behind.
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::error::Error;
use crate::io::{read_corpus, CorpusWriter};
use crate::pipelines::Pipeline;
use crate::segment::{SegmentMode, Segmenter};
use crate::sources::{Archive, ArchiveFormat, RawRecord};
use crate::transformers::MarkupCleaner;

const PROGRESS_EVERY: usize = 100_000;

/// What to do with records that can't be parsed or have no `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMalformed {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Log and ignore the record.
    Skip,
}

/// Counters of a corpus build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorpusStats {
    pub records: usize,
    pub skipped: usize,
    pub samples: usize,
}

/// Builds (or loads) corpus files.
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    cleaner: MarkupCleaner,
    segmenter: Segmenter,
    on_malformed: OnMalformed,
    format: Option<ArchiveFormat>,
    remove_source: Option<PathBuf>,
}

impl CorpusBuilder {
    pub fn new(cleaner: MarkupCleaner) -> Self {
        Self {
            cleaner,
            segmenter: Segmenter::default(),
            on_malformed: OnMalformed::default(),
            format: None,
            remove_source: None,
        }
    }

    /// Default markup rules and normalization, one sample per line, abort on malformed records.
    pub fn with_defaults() -> Result<Self, Error> {
        Ok(Self::new(MarkupCleaner::with_defaults()?))
    }

    pub fn segment_mode(mut self, mode: SegmentMode) -> Self {
        self.segmenter = Segmenter::new(mode);
        self
    }

    pub fn on_malformed(mut self, on_malformed: OnMalformed) -> Self {
        self.on_malformed = on_malformed;
        self
    }

    /// Force the dump format instead of guessing it.
    pub fn format(mut self, format: Option<ArchiveFormat>) -> Self {
        self.format = format;
        self
    }

    /// Remove `path` (file or directory) once the corpus file is complete.
    pub fn remove_source(mut self, path: Option<PathBuf>) -> Self {
        self.remove_source = path;
        self
    }

    /// Clean and segment a single record.
    pub fn process_record(&self, record: &RawRecord) -> Vec<String> {
        self.segmenter.segment(&self.cleaner.clean(&record.text))
    }

    /// Load `cache` if it exists, build it from `archive` otherwise.
    pub fn build_or_load(&self, archive: &Path, cache: &Path) -> Result<Vec<String>, Error> {
        if cache.exists() {
            info!("loading existing corpus {:?}", cache);
            return read_corpus(cache, self.segmenter.mode());
        }

        let (samples, stats) = self.build(archive, cache)?;
        info!(
            "{:?}: {} records ({} skipped), {} samples",
            cache, stats.records, stats.skipped, stats.samples
        );
        Ok(samples)
    }

    /// Build `cache` from `archive`, overwriting an eventual existing file.
    pub fn build(&self, archive: &Path, cache: &Path) -> Result<(Vec<String>, CorpusStats), Error> {
        info!("building corpus {:?} from {:?}", cache, archive);
        let mut writer = CorpusWriter::create(cache, self.segmenter.mode())?;
        let mut samples = Vec::new();
        let mut stats = CorpusStats::default();

        // the corpus file may be written inside the archive directory
        Archive::new(archive)
            .with_format(self.format)
            .excluding(cache)
            .excluding(writer.partial())
            .for_each_record(|position, record| {
                let record = match (record, self.on_malformed) {
                    (Ok(record), _) => record,
                    (Err(e), OnMalformed::Abort) => {
                        error!("aborting on record {}: {}", position, e);
                        return Err(e);
                    }
                    (Err(e), OnMalformed::Skip) => {
                        warn!("skipping record {}: {}", position, e);
                        stats.skipped += 1;
                        return Ok(());
                    }
                };

                for sample in self.process_record(&record) {
                    writer.write_sample(&sample)?;
                    samples.push(sample);
                }

                stats.records += 1;
                if stats.records % PROGRESS_EVERY == 0 {
                    info!(
                        "{} records processed, {} samples",
                        stats.records,
                        samples.len()
                    );
                }
                Ok(())
            })?;

        stats.samples = writer.finish()?;

        if let Some(src) = &self.remove_source {
            remove_path(src)?;
        }

        Ok((samples, stats))
    }
}

fn remove_path(path: &Path) -> Result<(), Error> {
    if path.is_dir() {
        info!("removing consumed directory {:?}", path);
        std::fs::remove_dir_all(path)?;
    } else if path.exists() {
        info!("removing consumed file {:?}", path);
        std::fs::remove_file(path)?;
    } else {
        warn!("{:?} does not exist, nothing to remove", path);
    }
    Ok(())
}

/// [CorpusBuilder::build_or_load] bound to a dump and a corpus file.
pub struct CorpusPipeline {
    archive: PathBuf,
    cache: PathBuf,
    builder: CorpusBuilder,
}

impl CorpusPipeline {
    pub fn new(archive: PathBuf, cache: PathBuf, builder: CorpusBuilder) -> Self {
        Self {
            archive,
            cache,
            builder,
        }
    }
}

impl Pipeline<Vec<String>> for CorpusPipeline {
    fn run(&self) -> Result<Vec<String>, Error> {
        self.builder.build_or_load(&self.archive, &self.cache)
    }
}
