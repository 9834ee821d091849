//! Transform trait.
use regex::{Regex, Replacer};

pub trait Transform {
    /// Takes ownership of the text and returns the transformed one.
    fn transform_own(&self, text: String) -> String;
}

/// Replaces every match of `re` in `text` by `replacement`.
///
/// `text` is handed back untouched (no reallocation) when nothing matches.
/// Wrap `replacement` in [regex::NoExpand] to keep `$1` as is.
pub(crate) fn replace_all_owned<R: Replacer>(re: &Regex, text: String, replacement: R) -> String {
    let replaced = match re.replace_all(&text, replacement) {
        std::borrow::Cow::Owned(s) => Some(s),
        std::borrow::Cow::Borrowed(_) => None,
    };
    replaced.unwrap_or(text)
}
