//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use textprep::datasets::Classification;
use textprep::sources::ArchiveFormat;

#[derive(Debug, StructOpt)]
#[structopt(name = "textprep", about = "text preprocessing for NLP datasets.")]
/// Holds every command that is callable by the `textprep` command.
pub enum Textprep {
    #[structopt(about = "Build (or reuse) a clean corpus file from a wiki dump")]
    Corpus(Corpus),
    #[structopt(about = "Normalize a text file line by line")]
    Normalize(Normalize),
    #[structopt(about = "Write a classification dataset in fastText format")]
    Fasttext(Fasttext),
}

#[derive(Debug, StructOpt)]
/// Corpus command and parameters.
///
/// ```sh
/// textprep-corpus 0.1.0
/// Build (or reuse) a clean corpus file from a wiki dump
///
/// USAGE:
///     textprep corpus [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -d, --documents         one sample per document instead of one per line
///     -s, --skip-malformed    skip malformed records instead of aborting
///
/// OPTIONS:
///     -f, --format <format>                    dump format (jsonl or json). Guessed if absent.
///     -n, --normalizer <normalizer>            normalizer configuration (JSON)
///         --remove-source <remove-source>      file or directory to delete once the corpus is written
///
/// ARGS:
///     <src>    dump file, or directory of dump files
///     <dst>    corpus file
/// ```
pub struct Corpus {
    #[structopt(parse(from_os_str), help = "dump file, or directory of dump files")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus file")]
    pub dst: PathBuf,
    #[structopt(
        short = "d",
        long = "documents",
        help = "one sample per document instead of one per line"
    )]
    pub documents: bool,
    #[structopt(
        short = "s",
        long = "skip-malformed",
        help = "skip malformed records instead of aborting"
    )]
    pub skip_malformed: bool,
    #[structopt(
        short = "f",
        long = "format",
        help = "dump format (jsonl or json). Guessed if absent."
    )]
    pub format: Option<ArchiveFormat>,
    #[structopt(
        short = "n",
        long = "normalizer",
        parse(from_os_str),
        help = "normalizer configuration (JSON)"
    )]
    pub normalizer: Option<PathBuf>,
    #[structopt(
        long = "remove-source",
        parse(from_os_str),
        help = "file or directory to delete once the corpus is written"
    )]
    pub remove_source: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Normalize command and parameters.
pub struct Normalize {
    #[structopt(parse(from_os_str), help = "source text file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination text file")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        long = "normalizer",
        parse(from_os_str),
        help = "normalizer configuration (JSON). Placeholders are used if absent."
    )]
    pub normalizer: Option<PathBuf>,
    #[structopt(
        short = "m",
        long = "strip-markup",
        help = "remove wiki markup first, over the whole file"
    )]
    pub strip_markup: bool,
}

#[derive(Debug, StructOpt)]
/// Fasttext command and parameters.
pub struct Fasttext {
    #[structopt(help = "dataset (nsmc or imdb)")]
    pub dataset: Classification,
    #[structopt(
        parse(from_os_str),
        help = "extracted dataset location (nsmc-master or aclImdb)"
    )]
    pub root: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination prefix (<dst>.train and <dst>.test are written)"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "label-prefix",
        default_value = "__label__",
        help = "label prefix"
    )]
    pub label_prefix: String,
    #[structopt(
        long = "normalize",
        help = "replace urls, tags, emails and phone numbers by spaces"
    )]
    pub normalize: bool,
    #[structopt(long = "tokenize", help = "split text on word boundaries")]
    pub tokenize: bool,
}
