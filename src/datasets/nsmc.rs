//! NSMC (Naver Sentiment Movie Corpus), Korean movie reviews.
//!
//! From <https://github.com/e9t/nsmc>.
//! Files are tab-separated (`id`, `document`, `label`) with a header line.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::{LabeledSample, LabeledSplits};
use crate::error::Error;

const TRAIN: &str = "ratings_train.txt";
const TEST: &str = "ratings_test.txt";

/// Load from the extracted `nsmc-master` directory.
pub fn load(dir: &Path) -> Result<LabeledSplits, Error> {
    Ok(LabeledSplits {
        train: read_split(&dir.join(TRAIN))?,
        test: read_split(&dir.join(TEST))?,
    })
}

fn read_split(path: &Path) -> Result<Vec<LabeledSample>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();

    // skip column names
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        samples.push(parse_line(&line).map_err(|reason| Error::MalformedRecord {
            position: idx + 1,
            reason: format!("{}: {}", path.display(), reason),
        })?);
    }

    debug!("{:?}: {} samples", path, samples.len());
    Ok(samples)
}

fn parse_line(line: &str) -> Result<LabeledSample, String> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    match fields.as_slice() {
        [_id, text, label, ..] => {
            let label: i64 = label
                .trim()
                .parse()
                .map_err(|e| format!("invalid label {:?}: {}", label, e))?;
            Ok(LabeledSample::new(*text, label.to_string()))
        }
        _ => Err(format!("expected 3 tab-separated fields, got {}", fields.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            parse_line("9976970\t아 더빙.. 진짜 짜증나네요 목소리\t0").unwrap(),
            LabeledSample::new("아 더빙.. 진짜 짜증나네요 목소리", "0")
        );
        assert!(parse_line("1\tno label").is_err());
        assert!(parse_line("1\ttext\tpositive").is_err());
    }

    #[test]
    fn load_splits() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TRAIN),
            "id\tdocument\tlabel\n1\tgood\t1\n2\tbad\t0\n",
        )
        .unwrap();
        std::fs::write(dir.path().join(TEST), "id\tdocument\tlabel\n3\tmeh\t0\n").unwrap();

        let splits = load(dir.path()).unwrap();
        assert_eq!(
            splits.train,
            vec![LabeledSample::new("good", "1"), LabeledSample::new("bad", "0")]
        );
        assert_eq!(splits.test, vec![LabeledSample::new("meh", "0")]);
    }

    #[test]
    fn malformed_line_position() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TRAIN), "id\tdocument\tlabel\n1\tok\t1\n2\tbroken\n").unwrap();
        std::fs::write(dir.path().join(TEST), "id\tdocument\tlabel\n").unwrap();

        assert!(matches!(
            load(dir.path()),
            Err(Error::MalformedRecord { position: 3, .. })
        ));
    }
}
