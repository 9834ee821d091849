/*! Wiki markup removal.

Markup is removed by applying [MARKUP_RULES] in order, every pattern being compiled in multi-line mode
(`^` and `$` match at each line).

Order matters:

- the aliased hyperlink rule (`[[target|`) has to run before the bare `[[` rule,
  otherwise the target would be left in the text (`[[foo|bar]]` would become `foo|bar`).
- footnotes (`[* ...]`) are removed after hyperlinks, since they can contain links
  whose closing brackets would otherwise end the footnote early.
!*/
use log::debug;
use regex::Regex;

use super::transform::{replace_all_owned, Transform};
use super::{NormalizationConfig, Normalizer};
use crate::error::Error;

/// Ordered `(pattern, replacement)` table.
pub const MARKUP_RULES: [(&str, &str); 14] = [
    // macros and directives: [[category:..]], [[file:..]], [include(..)], [youtube(..)], [toc], [footnote].
    // Single bracket macros must not be the inside of a `[[` hyperlink: the preceding character is kept.
    (
        r"(?i)\[\[(?:category|file|분류|파일):[^\]]*\]\]|(?P<pre>^|[^\[])(?:\[(?:(?:include|youtube|kakaotv|nicovideo)\([^\]]*\)|toc|footnote|목차|각주)\])+",
        "${pre}",
    ),
    // redirects
    (r"(?i)#(?:redirect|넘겨주기)\b.*", ""),
    // bold
    (r"'''", ""),
    // deletion
    (r"~~.*?~~|--.*?--", ""),
    // table rows
    (r"\|\|.*\|\|", ""),
    // plain text blocks, with unclosed openers and lone closers at line start
    (r"\{\{\{(?s:.*?)\}\}\}|^\{\{\{.*|^\}\}\}", ""),
    // list lines
    (r"^[ \t]*\*.*$|^[ \t]*(?:\d+|[aAiI])\.(?:[ \t].*)?$", ""),
    // multi-part quotes
    (r"\{\{\||\|\}\}|\|\|", ""),
    // single-line quotes
    (r"^>+", ""),
    // layout
    (r"width=[\w%.]*", ""),
    // hyperlink alias
    (r"\[\[[^\[\]|]*\|", ""),
    // hyperlink open
    (r"\[\[", ""),
    // hyperlink close
    (r"\]\]", ""),
    // footnotes
    (r"\[\*[^\]]*\]", ""),
];

/// A compiled substitution.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compile `pattern` in multi-line mode.
    ///
    /// Named groups of `pattern` can be referred to in `replacement` (`${name}`).
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, Error> {
        Ok(Self {
            pattern: Regex::new(&format!("(?m){}", pattern))?,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn apply(&self, text: String) -> String {
        replace_all_owned(&self.pattern, text, self.replacement.as_str())
    }
}

/// Applies an ordered table of [Rule].
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    rules: Vec<Rule>,
}

impl MarkupStripper {
    /// Compile [MARKUP_RULES].
    pub fn new() -> Result<Self, Error> {
        Self::from_rules(&MARKUP_RULES)
    }

    /// Compile a custom table. Rules are applied in the provided order.
    pub fn from_rules(rules: &[(&str, &str)]) -> Result<Self, Error> {
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| Rule::new(pattern, replacement))
            .collect::<Result<Vec<_>, Error>>()?;
        debug!("compiled {} markup rules", rules.len());
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn strip(&self, text: &str) -> String {
        self.transform_own(text.to_string())
    }
}

impl Transform for MarkupStripper {
    fn transform_own(&self, text: String) -> String {
        self.rules.iter().fold(text, |text, rule| rule.apply(text))
    }
}

/// Markup stripping followed by normalization.
///
/// This is the per-record cleaning step of the corpus pipeline.
#[derive(Debug, Clone)]
pub struct MarkupCleaner {
    stripper: MarkupStripper,
    normalizer: Normalizer,
}

impl MarkupCleaner {
    pub fn new(stripper: MarkupStripper, normalizer: Normalizer) -> Self {
        Self {
            stripper,
            normalizer,
        }
    }

    /// Default rule table, followed by [NormalizationConfig::markup_cleanup].
    pub fn with_defaults() -> Result<Self, Error> {
        Ok(Self::new(
            MarkupStripper::new()?,
            Normalizer::new(NormalizationConfig::markup_cleanup()),
        ))
    }

    pub fn clean(&self, text: &str) -> String {
        self.transform_own(text.to_string())
    }
}

impl Transform for MarkupCleaner {
    fn transform_own(&self, text: String) -> String {
        let text = self.stripper.transform_own(text);
        self.normalizer.transform_own(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripper() -> MarkupStripper {
        MarkupStripper::new().unwrap()
    }

    /// default table with rules `a` and `b` swapped
    fn swapped(a: usize, b: usize) -> MarkupStripper {
        let mut rules = MARKUP_RULES;
        rules.swap(a, b);
        MarkupStripper::from_rules(&rules).unwrap()
    }

    #[test]
    fn all_rules_compile() {
        assert_eq!(stripper().rules().len(), MARKUP_RULES.len());
    }

    #[test]
    fn invalid_rule() {
        assert!(matches!(
            MarkupStripper::from_rules(&[(r"(unclosed", "")]),
            Err(Error::Regex(_))
        ));
    }

    #[test]
    fn alias_before_open() {
        assert_eq!(stripper().strip("[[foo|bar]]"), "bar");
        // running the bare open rule first leaves the target behind
        assert_eq!(swapped(10, 11).strip("[[foo|bar]]"), "foo|bar");
    }

    #[test]
    fn footnote_after_hyperlink() {
        // the link text stays: only brackets and the footnote are removed
        assert_eq!(stripper().strip("[[page]][*1]"), "page");

        let text = "text[*a [[b|c]] d] end";
        assert_eq!(stripper().strip(text), "text end");

        // footnote first: the link closing brackets end the footnote early
        let mut rules = MARKUP_RULES.to_vec();
        let footnote = rules.pop().unwrap();
        rules.insert(10, footnote);
        let early = MarkupStripper::from_rules(&rules).unwrap();
        assert_eq!(early.strip(text), "text] d] end");
    }

    #[test]
    fn macros() {
        let s = stripper();
        assert_eq!(s.strip("[include(틀:Foo)]Hello"), "Hello");
        assert_eq!(s.strip("a[[분류:가수]]b"), "ab");
        assert_eq!(s.strip("[[file:a.png|width=100]]x"), "x");
        assert_eq!(s.strip("[youtube(abc)] [목차] [각주]"), "  ");
        assert_eq!(s.strip("[[Category:Rust]]"), "");
        assert_eq!(s.strip("[목차][각주]x"), "x");
        // not a macro
        assert_eq!(s.strip("[[filesystem]]"), "filesystem");
    }

    #[test]
    fn links_named_like_macros() {
        let s = stripper();
        assert_eq!(
            s.strip("I like [[Category theory]] a lot."),
            "I like Category theory a lot."
        );
        assert_eq!(
            s.strip("see [[File system|filesystems]] here"),
            "see filesystems here"
        );
        assert_eq!(s.strip("[[Footnote]] styles"), "Footnote styles");
        assert_eq!(s.strip("[[목차]]"), "목차");
        assert_eq!(
            s.strip("[[Include]] and [[YouTube (company)]]"),
            "Include and YouTube (company)"
        );
    }

    #[test]
    fn redirect() {
        assert_eq!(stripper().strip("#redirect Foo\nbar"), "\nbar");
        assert_eq!(stripper().strip("#REDIRECT Foo"), "");
    }

    #[test]
    fn bold_and_deletion() {
        let s = stripper();
        assert_eq!(s.strip("'''Title'''"), "Title");
        assert_eq!(s.strip("a ~~b~~ c ~~d~~"), "a  c ");
        assert_eq!(s.strip("Some --deleted-- prose."), "Some  prose.");
        // deletions do not span lines
        assert_eq!(s.strip("a --b\nc-- d"), "a --b\nc-- d");
    }

    #[test]
    fn tables_and_quotes() {
        let s = stripper();
        assert_eq!(s.strip("before\n||a||b||\nafter"), "before\n\nafter");
        assert_eq!(s.strip("{{|quoted|}}"), "quoted");
        assert_eq!(s.strip("a || b"), "a  b");
        assert_eq!(s.strip("> quote\n>> nested"), " quote\n nested");
    }

    #[test]
    fn plain_text_blocks() {
        let s = stripper();
        assert_eq!(s.strip("a{{{+1 big}}}b"), "ab");
        assert_eq!(s.strip("a{{{#!html\n<div>\n}}}b"), "ab");
        assert_eq!(s.strip("{{{#!wiki style\ntext"), "\ntext");
        assert_eq!(s.strip("text\n}}}"), "text\n");
    }

    #[test]
    fn lists() {
        let s = stripper();
        assert_eq!(s.strip("intro\n * item\n1. first\nend"), "intro\n\n\nend");
        assert_eq!(s.strip("1.5 million"), "1.5 million");
    }

    #[test]
    fn layout() {
        assert_eq!(stripper().strip("img width=50% here"), "img  here");
    }

    #[test]
    fn no_match_is_noop() {
        let text = "plain prose, nothing to strip.";
        assert_eq!(stripper().strip(text), text);
    }

    #[test]
    fn cleaner_normalizes_after_stripping() {
        let cleaner = MarkupCleaner::with_defaults().unwrap();
        assert_eq!(
            cleaner.clean("'''[[a|b]]''' <br> see https://x.y 😀"),
            "b  see  😀"
        );
    }
}
