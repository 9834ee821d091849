//! # textprep
//!
//! Text preprocessing for natural language datasets.
//!
//! This project can be used both as a tool to prepare corpora and classification data,
//! or as a lib to integrate cleaning and normalization into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! textprep 0.1.0
//! text preprocessing for NLP datasets.
//!
//! USAGE:
//!     textprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     corpus       Build (or reuse) a clean corpus file from a wiki dump
//!     fasttext     Write a classification dataset in fastText format
//!     help         Prints this message or the help of the given subcommand(s)
//!     normalize    Normalize a text file line by line
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info textprep corpus dump.json corpus.txt`).
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use structopt::StructOpt;

use textprep::datasets::LabeledSample;
use textprep::error::Error;
use textprep::io::fasttext_transform;
use textprep::pipelines::{CorpusBuilder, CorpusPipeline, OnMalformed, Pipeline};
use textprep::segment::SegmentMode;
use textprep::tokenizer::{Tokenizer, WordTokenizer};
use textprep::transformers::{
    MarkupCleaner, MarkupStripper, NormalizationConfig, Normalizer, Replacement, Transform,
};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Textprep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Textprep::Corpus(c) => {
            let config = match &c.normalizer {
                Some(path) => NormalizationConfig::from_path(path)?,
                None => NormalizationConfig::markup_cleanup(),
            };
            let cleaner = MarkupCleaner::new(MarkupStripper::new()?, Normalizer::new(config));

            let mode = if c.documents {
                SegmentMode::Document
            } else {
                SegmentMode::Lines
            };
            let on_malformed = if c.skip_malformed {
                OnMalformed::Skip
            } else {
                OnMalformed::Abort
            };

            let builder = CorpusBuilder::new(cleaner)
                .segment_mode(mode)
                .on_malformed(on_malformed)
                .format(c.format)
                .remove_source(c.remove_source);

            let samples = CorpusPipeline::new(c.src, c.dst.clone(), builder).run()?;
            info!("{:?}: {} samples", c.dst, samples.len());
        }

        cli::Textprep::Normalize(n) => {
            let config = match &n.normalizer {
                Some(path) => NormalizationConfig::from_path(path)?,
                None => NormalizationConfig::default(),
            };
            let stripper = if n.strip_markup {
                Some(MarkupStripper::new()?)
            } else {
                None
            };
            let nb_lines = normalize_file(&n.src, &n.dst, stripper.as_ref(), &Normalizer::new(config))?;
            info!("{:?}: {} lines", n.dst, nb_lines);
        }

        cli::Textprep::Fasttext(f) => {
            let splits = f.dataset.load(&f.root)?;

            // separators rather than placeholders, since labels are learnt from words
            let normalizer = if f.normalize {
                Some(Normalizer::new(NormalizationConfig {
                    url: Replacement::with(" "),
                    tag: Replacement::with(" "),
                    emoji: Replacement::Skip,
                    email: Replacement::with(" "),
                    tel: Replacement::with(" "),
                }))
            } else {
                None
            };
            let tokenizer = if f.tokenize {
                Some(WordTokenizer)
            } else {
                None
            };

            for (split, samples) in [("train", &splits.train), ("test", &splits.test)] {
                let dst = with_suffix(&f.dst, split);
                let lines = samples.iter().map(|LabeledSample { text, label }| {
                    (prepare(text, normalizer.as_ref(), tokenizer.as_ref()), label)
                });
                let nb_lines = fasttext_transform(lines, &dst, &f.label_prefix)?;
                info!("{:?}: {} lines", dst, nb_lines);
            }
        }
    };
    Ok(())
}

/// Normalize `src` into `dst`, line by line, dropping lines that end up empty.
///
/// Markup can span lines, so when a `stripper` is given the whole file is stripped before being split.
fn normalize_file(
    src: &Path,
    dst: &Path,
    stripper: Option<&MarkupStripper>,
    normalizer: &Normalizer,
) -> Result<usize, Error> {
    match stripper {
        Some(stripper) => {
            let text = stripper.transform_own(std::fs::read_to_string(src)?);
            let writer = BufWriter::new(File::create(dst)?);
            let lines = text.lines().map(|line| Ok::<_, Error>(line.to_string()));
            write_normalized(lines, writer, normalizer)
        }
        None => {
            let reader = BufReader::new(File::open(src)?);
            let writer = BufWriter::new(File::create(dst)?);
            let lines = reader.lines().map(|line| line.map_err(Error::Io));
            write_normalized(lines, writer, normalizer)
        }
    }
}

fn write_normalized<I, W>(lines: I, mut writer: W, normalizer: &Normalizer) -> Result<usize, Error>
where
    I: Iterator<Item = Result<String, Error>>,
    W: Write,
{
    let mut nb_lines = 0;
    for line in lines {
        let line = normalizer.transform_own(line?);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        writeln!(writer, "{}", line)?;
        nb_lines += 1;
    }

    writer.flush()?;
    Ok(nb_lines)
}

fn prepare(text: &str, normalizer: Option<&Normalizer>, tokenizer: Option<&WordTokenizer>) -> String {
    let text = match normalizer {
        Some(n) => n.normalize(text.trim()),
        None => text.to_string(),
    };
    match tokenizer {
        Some(t) => t.tokenize(&text).join(" "),
        None => text,
    }
}

/// `path/prefix` -> `path/prefix.suffix`
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut p: OsString = path.as_os_str().to_os_string();
    p.push(".");
    p.push(suffix);
    PathBuf::from(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_with_markup_spanning_lines() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("page.txt");
        let dst = dir.path().join("page.norm.txt");
        std::fs::write(
            &src,
            "'''Intro''' see http://a.b\n{{{#!html\n<div>raw</div>\n}}}\n[[foo|bar]] end\n",
        )
        .unwrap();

        let stripper = MarkupStripper::new().unwrap();
        let normalizer = Normalizer::new(NormalizationConfig::markup_cleanup());
        let nb_lines = normalize_file(&src, &dst, Some(&stripper), &normalizer).unwrap();

        assert_eq!(nb_lines, 2);
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "Intro see\nbar end\n"
        );
    }

    #[test]
    fn normalize_without_stripping() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("page.txt");
        let dst = dir.path().join("page.norm.txt");
        std::fs::write(&src, "mail a@b.org\n\n  \n'''kept'''\n").unwrap();

        let nb_lines = normalize_file(&src, &dst, None, &Normalizer::default()).unwrap();

        assert_eq!(nb_lines, 2);
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "mail [EMAIL]\n'''kept'''\n"
        );
    }
}
