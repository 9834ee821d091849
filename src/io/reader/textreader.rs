/*! Corpus file reading.

A corpus file holds either one sample per line ([SegmentMode::Lines]),
or documents separated by an empty line ([SegmentMode::Document]).
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use crate::error::Error;
use crate::segment::SegmentMode;

/// Reader that yields samples of a corpus file, in file order.
#[derive(Debug)]
pub struct CorpusReader<T> {
    path: PathBuf,
    lines: Lines<BufReader<T>>,
    mode: SegmentMode,
}

impl CorpusReader<File> {
    pub fn new(src: &Path, mode: SegmentMode) -> Result<Self, Error> {
        let f = File::open(src)?;
        Ok(Self::from_reader(src, f, mode))
    }
}

impl<T: Read> CorpusReader<T> {
    fn from_reader(path: &Path, reader: T, mode: SegmentMode) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: BufReader::new(reader).lines(),
            mode,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get next document (lines until an empty one).
    fn next_document(&mut self) -> Option<Result<String, Error>> {
        let mut doc: Vec<String> = Vec::new();
        for line in self.lines.by_ref() {
            match line {
                Err(e) => return Some(Err(Error::Io(e))),
                //cut at empty line
                Ok(line) if line.is_empty() => {
                    if !doc.is_empty() {
                        return Some(Ok(doc.join("\n")));
                    }
                }
                Ok(line) => doc.push(line),
            }
        }

        // close eventual last document
        if doc.is_empty() {
            None
        } else {
            Some(Ok(doc.join("\n")))
        }
    }
}

impl<T: Read> Iterator for CorpusReader<T> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.mode {
            SegmentMode::Lines => self.lines.next().map(|line| line.map_err(Error::Io)),
            SegmentMode::Document => self.next_document(),
        }
    }
}

/// Read a whole corpus file.
pub fn read_corpus(src: &Path, mode: SegmentMode) -> Result<Vec<String>, Error> {
    CorpusReader::new(src, mode)?.collect()
}
