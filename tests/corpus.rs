use std::path::{Path, PathBuf};

use textprep::pipelines::{CorpusBuilder, CorpusPipeline, OnMalformed, Pipeline};
use textprep::segment::SegmentMode;

fn namu_dump(dir: &Path) -> PathBuf {
    let records = serde_json::json!([
        {"title": "Title", "text": "'''Title'''\nSome --deleted-- prose."},
        {"title": "Rust", "text": "[include(틀:언어)]\n'''Rust'''는 [[프로그래밍 언어|언어]]이다.[* 2015년 출시]\n * 목록\n||표||\n[[분류:언어]]"},
        {"title": "Links", "text": "> quoted [[page]]\nsee https://www.rust-lang.org or mail a@b.org 😀\n\n{{{#!html\n<div>raw</div>\n}}}"},
    ]);
    let path = dir.join("namuwiki.json");
    std::fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
    path
}

const EXPECTED: [&str; 5] = [
    "Title",
    "Some  prose.",
    "Rust는 언어이다.",
    "quoted page",
    "see  or mail  😀",
];

#[test]
fn end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let archive = namu_dump(dir.path());
    let cache = dir.path().join("namuwiki.txt");

    let samples = CorpusBuilder::with_defaults()
        .unwrap()
        .build_or_load(&archive, &cache)
        .unwrap();

    assert_eq!(samples, EXPECTED);
    assert_eq!(
        std::fs::read_to_string(&cache).unwrap(),
        EXPECTED.join("\n") + "\n"
    );
}

#[test]
fn second_run_does_not_read_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = namu_dump(dir.path());
    let cache = dir.path().join("namuwiki.txt");
    let builder = CorpusBuilder::with_defaults().unwrap();

    let first = builder.build_or_load(&archive, &cache).unwrap();
    let first_bytes = std::fs::read(&cache).unwrap();

    // the dump is gone: only the corpus file can be used
    std::fs::remove_file(&archive).unwrap();

    let second = builder.build_or_load(&archive, &cache).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_bytes, std::fs::read(&cache).unwrap());
}

#[test]
fn builds_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let archive = namu_dump(dir.path());
    let builder = CorpusBuilder::with_defaults().unwrap();

    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    builder.build_or_load(&archive, &a).unwrap();
    builder.build_or_load(&archive, &b).unwrap();

    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn records_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("dump.jsonl");
    let lines: Vec<String> = (0..50)
        .map(|i| serde_json::json!({ "text": format!("doc {}\nline {}", i, i) }).to_string())
        .collect();
    std::fs::write(&archive, lines.join("\n")).unwrap();

    let samples = CorpusBuilder::with_defaults()
        .unwrap()
        .build_or_load(&archive, &dir.path().join("corpus.txt"))
        .unwrap();

    let expected: Vec<String> = (0..50)
        .flat_map(|i| vec![format!("doc {}", i), format!("line {}", i)])
        .collect();
    assert_eq!(samples, expected);
}

#[test]
fn document_mode_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let archive = namu_dump(dir.path());
    let cache = dir.path().join("documents.txt");
    let builder = CorpusBuilder::with_defaults()
        .unwrap()
        .segment_mode(SegmentMode::Document);

    let built = builder.build_or_load(&archive, &cache).unwrap();
    assert_eq!(
        built,
        vec!["Title\nSome  prose.", "Rust는 언어이다.", "quoted page\nsee  or mail  😀"]
    );

    let loaded = builder.build_or_load(&archive, &cache).unwrap();
    assert_eq!(built, loaded);
}

#[test]
fn malformed_record_policies() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("dump.jsonl");
    std::fs::write(&archive, "{\"text\": \"a\"}\n{\"id\": 2}\n{\"text\": \"c\"}\n").unwrap();

    let abort = CorpusPipeline::new(
        archive.clone(),
        dir.path().join("abort.txt"),
        CorpusBuilder::with_defaults().unwrap(),
    );
    assert!(abort.run().is_err());
    assert!(!dir.path().join("abort.txt").exists());

    let skip = CorpusPipeline::new(
        archive,
        dir.path().join("skip.txt"),
        CorpusBuilder::with_defaults()
            .unwrap()
            .on_malformed(OnMalformed::Skip),
    );
    assert_eq!(skip.run().unwrap(), vec!["a", "c"]);
}
