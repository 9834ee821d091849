/*! Tokenizers.

[Tokenizer] is the interface the rest of the crate relies on to split text into tokens.
Subword models and morphological analyzers are external engines that can be plugged in by implementing it.

[WordTokenizer] splits on Unicode word boundaries ([UAX#29](https://www.unicode.org/reports/tr29/)),
so that punctuation ends up in its own tokens:

```
use textprep::tokenizer::{Tokenizer, WordTokenizer};

let tokens = WordTokenizer::default().tokenize("Time is the most valuable thing a man can spend.");
assert_eq!(tokens.last().map(String::as_str), Some("."));
```
!*/
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer {
    /// Split `text` into tokens, in order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Unicode word-boundary tokenizer. Whitespace is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .map(String::from)
            .collect()
    }
}
