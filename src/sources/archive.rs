//! Streaming archive reader.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::read::MultiGzDecoder;
use log::{debug, info};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::Error;

/// A single dump entry. Fields other than `text` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub text: String,
}

/// Layout of an archive file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// One JSON object per line.
    JsonLines,
    /// A single JSON array of objects, streamed item by item.
    JsonArray,
}

impl ArchiveFormat {
    /// Guess format from file extension, ignoring an eventual `.gz`.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let path = if is_gzip(path) {
            Path::new(path.file_stem()?)
        } else {
            path
        };
        match path.extension()?.to_str()? {
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            "json" => Some(Self::JsonArray),
            _ => None,
        }
    }

    /// Guess format from the first non-whitespace byte: `[` means [ArchiveFormat::JsonArray].
    ///
    /// Leading whitespace is consumed.
    fn sniff(reader: &mut dyn BufRead) -> Result<Self, Error> {
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(Self::JsonLines);
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(idx) if buf[idx] == b'[' => return Ok(Self::JsonArray),
                Some(_) => return Ok(Self::JsonLines),
                None => {
                    let len = buf.len();
                    reader.consume(len);
                }
            }
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonl" | "ndjson" | "lines" => Ok(Self::JsonLines),
            "json" | "array" => Ok(Self::JsonArray),
            other => Err(Error::Custom(format!("unknown archive format: {}", other))),
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// A file, or a directory of files, holding records.
///
/// Directory entries are read in sorted path order.
#[derive(Debug, Clone)]
pub struct Archive {
    path: PathBuf,
    format: Option<ArchiveFormat>,
    excluded: Vec<PathBuf>,
}

impl Archive {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            format: None,
            excluded: Vec::new(),
        }
    }

    /// Force format instead of guessing it.
    pub fn with_format(mut self, format: Option<ArchiveFormat>) -> Self {
        self.format = format;
        self
    }

    /// Never read `path`, even if it sits in the archive directory.
    pub fn excluding(mut self, path: &Path) -> Self {
        self.excluded.push(path.to_path_buf());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path = match path.canonicalize() {
            Ok(path) => path,
            Err(_) => return false,
        };
        self.excluded
            .iter()
            .filter_map(|excluded| excluded.canonicalize().ok())
            .any(|excluded| excluded == path)
    }

    /// files to read, in order.
    fn files(&self) -> Result<Vec<PathBuf>, Error> {
        if !self.path.is_dir() {
            return Ok(vec![self.path.clone()]);
        }

        let pattern = self.path.join("*");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("non UTF-8 path: {:?}", self.path)))?;

        let mut files = Vec::new();
        for entry in glob::glob(pattern)? {
            let entry = entry?;
            if !entry.is_file() {
                continue;
            }
            if self.is_excluded(&entry) {
                debug!("ignoring excluded {:?}", entry);
                continue;
            }
            files.push(entry);
        }
        files.sort();
        Ok(files)
    }

    fn open(path: &Path) -> Result<Box<dyn BufRead>, Error> {
        let f = File::open(path)?;
        if is_gzip(path) {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(
                f,
            )))))
        } else {
            Ok(Box::new(BufReader::new(f)))
        }
    }

    /// Calls `f` on each record, in archive order, with its 1-indexed position in its file.
    ///
    /// Records that can't be parsed (or lack a `text` field) are passed as [Error::MalformedRecord],
    /// letting `f` decide whether to abort (by returning the error) or to carry on.
    /// I/O errors and JSON syntax errors inside an array are always fatal.
    ///
    /// Returns the number of visited records.
    pub fn for_each_record<F>(&self, mut f: F) -> Result<usize, Error>
    where
        F: FnMut(usize, Result<RawRecord, Error>) -> Result<(), Error>,
    {
        let mut total = 0;
        for path in self.files()? {
            let mut reader = Self::open(&path)?;
            let format = match self.format.or_else(|| ArchiveFormat::from_extension(&path)) {
                Some(format) => format,
                None => ArchiveFormat::sniff(reader.as_mut())?,
            };
            info!("reading {:?} ({:?})", path, format);

            let nb_records = match format {
                ArchiveFormat::JsonLines => for_each_line(reader, &path, &mut f)?,
                ArchiveFormat::JsonArray => for_each_item(reader, &path, &mut f)?,
            };
            debug!("{:?}: {} records", path, nb_records);
            total += nb_records;
        }
        Ok(total)
    }
}

fn malformed(position: usize, path: &Path, e: serde_json::Error) -> Error {
    Error::MalformedRecord {
        position,
        reason: format!("{}: {}", path.display(), e),
    }
}

fn for_each_line<F>(reader: Box<dyn BufRead>, path: &Path, f: &mut F) -> Result<usize, Error>
where
    F: FnMut(usize, Result<RawRecord, Error>) -> Result<(), Error>,
{
    let mut nb_records = 0;
    // raw bytes: invalid UTF-8 makes a malformed record, not an I/O error
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        nb_records += 1;
        let record =
            serde_json::from_slice::<RawRecord>(&line).map_err(|e| malformed(idx + 1, path, e));
        f(idx + 1, record)?;
    }
    Ok(nb_records)
}

/// Feeds array items to the callback as they are parsed.
///
/// Items are first read as [serde_json::Value] so that an item missing `text`
/// does not break the array parsing.
struct ItemVisitor<'a, F> {
    path: &'a Path,
    f: &'a mut F,
    nb_records: usize,
    // error returned by the callback, that stopped the parsing
    aborted: Option<Error>,
}

impl<'de, 'a, 'b, F> Visitor<'de> for &'b mut ItemVisitor<'a, F>
where
    F: FnMut(usize, Result<RawRecord, Error>) -> Result<(), Error>,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(item) = seq.next_element::<serde_json::Value>()? {
            self.nb_records += 1;
            let position = self.nb_records;
            let path = self.path;
            let record = RawRecord::deserialize(item).map_err(|e| malformed(position, path, e));
            if let Err(e) = (self.f)(position, record) {
                self.aborted = Some(e);
                return Err(de::Error::custom("record processing aborted"));
            }
        }
        Ok(())
    }
}

fn for_each_item<F>(reader: Box<dyn BufRead>, path: &Path, f: &mut F) -> Result<usize, Error>
where
    F: FnMut(usize, Result<RawRecord, Error>) -> Result<(), Error>,
{
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let mut visitor = ItemVisitor {
        path,
        f,
        nb_records: 0,
        aborted: None,
    };

    let result = (&mut deserializer).deserialize_seq(&mut visitor);
    if let Some(e) = visitor.aborted.take() {
        return Err(e);
    }
    result?;
    deserializer.end()?;

    Ok(visitor.nb_records)
}
