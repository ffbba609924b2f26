use std::collections::HashMap;

use crate::catalog::{Category, WordCatalog};
use crate::collection::SEPARATOR;

/// Optional grammar gate applied to each candidate before it is accepted.
///
/// A `false` answer is handled like a collision with an already used phrase:
/// the candidate is discarded and another one is drawn.
pub trait PosVerifier {
    fn is_grammatically_distinct(&self, phrase: &str) -> bool;
}

impl<F> PosVerifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_grammatically_distinct(&self, phrase: &str) -> bool {
        self(phrase)
    }
}

/// Tags words with the categories they appear in and rejects pairs whose
/// two words can only carry the same tag.
#[derive(Debug, Clone, Default)]
pub struct LexiconVerifier {
    tags: HashMap<String, Vec<Category>>,
}

impl LexiconVerifier {
    pub fn new() -> Self {
        LexiconVerifier::default()
    }

    /// Tag every word of the catalog's four part-of-speech collections.
    pub fn from_catalog(catalog: &WordCatalog) -> Self {
        let mut verifier = LexiconVerifier::new();
        for category in Category::DEFAULTS {
            for word in catalog.collection(category).words() {
                verifier.tag(word, category);
            }
        }
        verifier
    }

    pub fn tag(&mut self, word: &str, category: Category) {
        let tags = self.tags.entry(word.to_string()).or_default();
        if !tags.contains(&category) {
            tags.push(category);
        }
    }

    pub fn tags(&self, word: &str) -> &[Category] {
        self.tags.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl PosVerifier for LexiconVerifier {
    fn is_grammatically_distinct(&self, phrase: &str) -> bool {
        let mut parts = phrase.split(SEPARATOR);
        let (first, second) = match (parts.next(), parts.next()) {
            (Some(a), Some(b)) => (self.tags(a), self.tags(b)),
            _ => return true,
        };
        // Untagged words never conflict.
        if first.is_empty() || second.is_empty() {
            return true;
        }
        first.iter().any(|a| second.iter().any(|b| a != b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSources;

    #[test]
    fn distinct_tags_pass() {
        let mut v = LexiconVerifier::new();
        v.tag("brave", Category::Adjective);
        v.tag("panda", Category::Noun);
        assert!(v.is_grammatically_distinct("brave-panda"));
    }

    #[test]
    fn same_single_tag_fails() {
        let mut v = LexiconVerifier::new();
        v.tag("panda", Category::Noun);
        v.tag("tiger", Category::Noun);
        assert!(!v.is_grammatically_distinct("panda-tiger"));
    }

    #[test]
    fn ambiguous_word_can_take_another_role() {
        let mut v = LexiconVerifier::new();
        v.tag("light", Category::Noun);
        v.tag("light", Category::Adjective);
        v.tag("tiger", Category::Noun);
        assert!(v.is_grammatically_distinct("light-tiger"));
    }

    #[test]
    fn untagged_words_and_third_word_are_ignored() {
        let mut v = LexiconVerifier::new();
        v.tag("panda", Category::Noun);
        assert!(v.is_grammatically_distinct("zorblax-panda"));
        v.tag("brave", Category::Adjective);
        assert!(v.is_grammatically_distinct("brave-panda-panda"));
    }

    #[test]
    fn from_catalog_tags_bundled_words() {
        let catalog = WordCatalog::load(&CatalogSources::default(), &[]);
        let v = LexiconVerifier::from_catalog(&catalog);
        assert_eq!(v.tags("panda"), &[Category::Noun]);
        assert_eq!(v.tags("quickly"), &[Category::Adverb]);
        assert!(v.tags("zorblax").is_empty());
    }

    #[test]
    fn closures_are_verifiers() {
        let reject_tigers = |phrase: &str| !phrase.contains("tiger");
        assert!(reject_tigers.is_grammatically_distinct("brave-panda"));
        assert!(!reject_tigers.is_grammatically_distinct("brave-tiger"));
    }
}
