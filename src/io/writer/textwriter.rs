//! Append-as-you-go corpus file writer.
use log::{debug, info, warn};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::segment::SegmentMode;

/// Writes samples into a `<dst>.partial` file, that is renamed into `dst` by [CorpusWriter::finish].
///
/// If the writer is dropped before being finished, the partial file is removed:
/// `dst` only ever exists complete.
///
/// Samples are followed by `\n` in [SegmentMode::Lines], and by `\n\n` in [SegmentMode::Document].
pub struct CorpusWriter {
    dst: PathBuf,
    partial: PathBuf,
    text: BufWriter<File>,
    mode: SegmentMode,
    nb_samples: usize,
    finished: bool,
}

impl CorpusWriter {
    pub fn create(dst: &Path, mode: SegmentMode) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("creating {:?}", parent);
                std::fs::create_dir_all(parent)?;
            }
        }

        let partial = partial_path(dst)?;
        info!("creating {:?}", partial);
        let text = BufWriter::new(File::create(&partial)?);

        Ok(Self {
            dst: dst.to_path_buf(),
            partial,
            text,
            mode,
            nb_samples: 0,
            finished: false,
        })
    }

    pub fn write_sample(&mut self, sample: &str) -> Result<(), Error> {
        self.text.write_all(sample.as_bytes())?;
        match self.mode {
            SegmentMode::Lines => self.text.write_all(b"\n")?,
            SegmentMode::Document => self.text.write_all(b"\n\n")?,
        }
        self.nb_samples += 1;
        Ok(())
    }

    /// Path of the file being written.
    pub fn partial(&self) -> &Path {
        &self.partial
    }

    pub fn nb_samples(&self) -> usize {
        self.nb_samples
    }

    /// Flush and move the partial file to its destination.
    ///
    /// Returns the number of written samples.
    pub fn finish(mut self) -> Result<usize, Error> {
        self.text.flush()?;
        self.text.get_ref().sync_all()?;
        debug!("renaming {:?} to {:?}", self.partial, self.dst);
        std::fs::rename(&self.partial, &self.dst)?;
        self.finished = true;
        Ok(self.nb_samples)
    }
}

impl Drop for CorpusWriter {
    fn drop(&mut self) {
        if !self.finished {
            warn!("removing unfinished corpus file {:?}", self.partial);
            if let Err(e) = std::fs::remove_file(&self.partial) {
                warn!("could not remove {:?}: {}", self.partial, e);
            }
        }
    }
}

fn partial_path(dst: &Path) -> Result<PathBuf, Error> {
    let mut filename: OsString = dst
        .file_name()
        .ok_or_else(|| Error::Custom(format!("no file name in {:?}", dst)))?
        .to_os_string();
    filename.push(".partial");
    Ok(dst.with_file_name(filename))
}
