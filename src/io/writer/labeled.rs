/*! fastText-style labeled writer.

Each `(text, label)` pair is written on its own line:

```text
__label__pos a very good movie
__label__neg boring
```
!*/
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Error;

/// Prefix fastText uses to recognize labels.
pub const DEFAULT_LABEL_PREFIX: &str = "__label__";

pub struct LabeledWriter<W: Write> {
    inner: W,
    label_prefix: String,
    nb_lines: usize,
}

impl LabeledWriter<BufWriter<File>> {
    pub fn create(dst: &Path, label_prefix: &str) -> Result<Self, Error> {
        info!("creating {:?}", dst);
        Ok(Self::new(BufWriter::new(File::create(dst)?), label_prefix))
    }
}

impl<W: Write> LabeledWriter<W> {
    pub fn new(inner: W, label_prefix: &str) -> Self {
        Self {
            inner,
            label_prefix: label_prefix.to_string(),
            nb_lines: 0,
        }
    }

    /// Write `<prefix><label> <text>`, `text` being trimmed.
    pub fn write<L: Display>(&mut self, text: &str, label: L) -> Result<(), Error> {
        writeln!(
            self.inner,
            "{}{} {}",
            self.label_prefix,
            label,
            text.trim()
        )?;
        self.nb_lines += 1;
        Ok(())
    }

    /// Flush and give back the inner writer.
    pub fn into_inner(mut self) -> Result<W, Error> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }
}

/// Write every `(text, label)` pair of `samples` into `dst`.
///
/// Returns the number of written lines.
pub fn fasttext_transform<I, T, L>(samples: I, dst: &Path, label_prefix: &str) -> Result<usize, Error>
where
    I: IntoIterator<Item = (T, L)>,
    T: AsRef<str>,
    L: Display,
{
    let mut writer = LabeledWriter::create(dst, label_prefix)?;
    for (text, label) in samples {
        writer.write(text.as_ref(), label)?;
    }
    let nb_lines = writer.nb_lines();
    writer.into_inner()?;
    Ok(nb_lines)
}
