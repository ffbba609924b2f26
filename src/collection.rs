use std::collections::HashSet;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

/// Separator placed between the words of a phrase.
pub const SEPARATOR: &str = "-";

/// Ordered, duplicate-free list of words for one category.
#[derive(Debug, Clone, Default)]
pub struct WordCollection {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordCollection {
    /// Build a collection from raw words, dropping anything listed in `exclude`.
    ///
    /// Words are trimmed. Empty words, repeats and words containing the phrase
    /// separator are dropped so that every phrase splits back into its words.
    pub fn new<I>(raw: I, exclude: &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut collection = WordCollection::default();
        for word in raw {
            let word = word.trim();
            if word.is_empty() || exclude.contains(word) {
                continue;
            }
            if word.contains(SEPARATOR) {
                warn!("Dropping word containing '{}': {}", SEPARATOR, word);
                continue;
            }
            if collection.index.insert(word.to_string()) {
                collection.words.push(word.to_string());
            }
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniform draw with replacement. `None` only when the collection is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}
