use textprep::datasets::{Classification, LabeledSample};
use textprep::io::{fasttext_transform, DEFAULT_LABEL_PREFIX};
use textprep::tokenizer::{Tokenizer, WordTokenizer};
use textprep::transformers::{NormalizationConfig, Normalizer, Replacement};

#[test]
fn nsmc_to_fasttext() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nsmc-master");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(
        root.join("ratings_train.txt"),
        "id\tdocument\tlabel\n1\t최고의 영화! http://movie.example.com\t1\n2\t<b>별로</b>였다...\t0\n",
    )
    .unwrap();
    std::fs::write(root.join("ratings_test.txt"), "id\tdocument\tlabel\n3\t그냥 그래요 😀\t0\n").unwrap();

    let splits = Classification::Nsmc.load(&root).unwrap();
    let normalizer = Normalizer::new(NormalizationConfig {
        url: Replacement::with(" "),
        tag: Replacement::with(" "),
        emoji: Replacement::Skip,
        email: Replacement::with(" "),
        tel: Replacement::with(" "),
    });

    let prepare = |samples: &[LabeledSample]| -> Vec<(String, String)> {
        samples
            .iter()
            .map(|s| {
                let text = normalizer.normalize(s.text.trim());
                (WordTokenizer.tokenize(&text).join(" "), s.label.clone())
            })
            .collect()
    };

    let train = dir.path().join("nsmc.train");
    let test = dir.path().join("nsmc.test");
    assert_eq!(
        fasttext_transform(prepare(&splits.train), &train, DEFAULT_LABEL_PREFIX).unwrap(),
        2
    );
    fasttext_transform(prepare(&splits.test), &test, DEFAULT_LABEL_PREFIX).unwrap();

    assert_eq!(
        std::fs::read_to_string(&train).unwrap(),
        "__label__1 최고의 영화 !\n__label__0 별로 였다 . . .\n"
    );
    assert_eq!(
        std::fs::read_to_string(&test).unwrap(),
        "__label__0 그냥 그래요 😀\n"
    );
}
