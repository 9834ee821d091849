/*! Text transformers.

Transforms documents by removing or replacing content.

- [Normalizer] replaces generic entities (urls, tags, emojis, emails, phone numbers),
- [MarkupStripper] removes wiki markup through an ordered rule table,
- [MarkupCleaner] chains both, and is what the corpus pipeline runs on each record.
!*/

mod markup;
mod normalizer;
mod transform;

pub use markup::{MarkupCleaner, MarkupStripper, Rule, MARKUP_RULES};
pub use normalizer::{normalize, NormalizationConfig, Normalizer, Replacement};
pub use transform::Transform;
