use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collection::{WordCollection, SEPARATOR};
use crate::error::{PhraseGenError, Result};
use crate::source::{BundledSource, WordSource};

/// Part-of-speech category a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Custom,
}

impl Category {
    pub const DEFAULTS: [Category; 4] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
    ];
}

/// Pairing rule: which two collections a phrase draws its words from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CombinationType {
    AdjectiveNoun,
    VerbNoun,
    AdverbVerb,
    AdverbAdjective,
    NounNoun,
    AdjectiveAdjective,
    CustomCustom,
}

impl CombinationType {
    pub const ALL: [CombinationType; 7] = [
        CombinationType::AdjectiveNoun,
        CombinationType::VerbNoun,
        CombinationType::AdverbVerb,
        CombinationType::AdverbAdjective,
        CombinationType::NounNoun,
        CombinationType::AdjectiveAdjective,
        CombinationType::CustomCustom,
    ];

    /// Categories of the first and second word.
    pub fn slots(self) -> (Category, Category) {
        match self {
            CombinationType::AdjectiveNoun => (Category::Adjective, Category::Noun),
            CombinationType::VerbNoun => (Category::Verb, Category::Noun),
            CombinationType::AdverbVerb => (Category::Adverb, Category::Verb),
            CombinationType::AdverbAdjective => (Category::Adverb, Category::Adjective),
            CombinationType::NounNoun => (Category::Noun, Category::Noun),
            CombinationType::AdjectiveAdjective => (Category::Adjective, Category::Adjective),
            CombinationType::CustomCustom => (Category::Custom, Category::Custom),
        }
    }

    /// Both slots draw from the same collection, so a word may not pair with itself.
    pub fn is_self_pairing(self) -> bool {
        let (a, b) = self.slots();
        a == b
    }

    pub fn is_custom(self) -> bool {
        self == CombinationType::CustomCustom
    }

    pub fn name(self) -> &'static str {
        match self {
            CombinationType::AdjectiveNoun => "adjective-noun",
            CombinationType::VerbNoun => "verb-noun",
            CombinationType::AdverbVerb => "adverb-verb",
            CombinationType::AdverbAdjective => "adverb-adjective",
            CombinationType::NounNoun => "noun-noun",
            CombinationType::AdjectiveAdjective => "adjective-adjective",
            CombinationType::CustomCustom => "custom-custom",
        }
    }
}

impl fmt::Display for CombinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of words in a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    Two,
    Three,
}

impl WordCount {
    pub fn len(self) -> usize {
        match self {
            WordCount::Two => 2,
            WordCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for WordCount {
    type Error = PhraseGenError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            2 => Ok(WordCount::Two),
            3 => Ok(WordCount::Three),
            other => Err(PhraseGenError::InvalidArgument(format!(
                "word count must be 2 or 3, got {}",
                other
            ))),
        }
    }
}

/// Where each collection's words come from.
///
/// A custom source replaces all four default categories; otherwise each
/// default category uses its override, falling back to the bundled list.
#[derive(Default)]
pub struct CatalogSources {
    pub overrides: HashMap<Category, Box<dyn WordSource>>,
    pub custom: Option<Box<dyn WordSource>>,
}

/// The word collections a generator draws from, keyed by category.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    nouns: WordCollection,
    verbs: WordCollection,
    adjectives: WordCollection,
    adverbs: WordCollection,
    custom: WordCollection,
    has_custom: bool,
}

impl WordCatalog {
    /// Load every collection once, applying the exclusion list to all of them.
    pub fn load(sources: &CatalogSources, exclude: &[String]) -> Self {
        let exclude: HashSet<String> = exclude.iter().map(|w| w.trim().to_string()).collect();
        let mut catalog = WordCatalog::default();

        if let Some(custom) = &sources.custom {
            catalog.custom = WordCollection::new(custom.load_words(), &exclude);
            catalog.has_custom = true;
            return catalog;
        }

        for category in Category::DEFAULTS {
            let raw = match sources.overrides.get(&category) {
                Some(source) => source.load_words(),
                None => BundledSource(category).load_words(),
            };
            *catalog.collection_mut(category) = WordCollection::new(raw, &exclude);
        }
        catalog
    }

    pub fn collection(&self, category: Category) -> &WordCollection {
        match category {
            Category::Noun => &self.nouns,
            Category::Verb => &self.verbs,
            Category::Adjective => &self.adjectives,
            Category::Adverb => &self.adverbs,
            Category::Custom => &self.custom,
        }
    }

    fn collection_mut(&mut self, category: Category) -> &mut WordCollection {
        match category {
            Category::Noun => &mut self.nouns,
            Category::Verb => &mut self.verbs,
            Category::Adjective => &mut self.adjectives,
            Category::Adverb => &mut self.adverbs,
            Category::Custom => &mut self.custom,
        }
    }

    pub fn has_custom(&self) -> bool {
        self.has_custom
    }

    /// Rule used when a caller asks for a count without naming one.
    pub fn default_type(&self) -> CombinationType {
        if self.has_custom {
            CombinationType::CustomCustom
        } else {
            CombinationType::AdjectiveNoun
        }
    }

    /// Rules a generator may pick from when none is requested.
    pub fn available_types(&self) -> Vec<CombinationType> {
        CombinationType::ALL
            .into_iter()
            .filter(|t| t.is_custom() == self.has_custom)
            .collect()
    }

    pub fn resolve(&self, combination: CombinationType) -> (&WordCollection, &WordCollection) {
        let (a, b) = combination.slots();
        (self.collection(a), self.collection(b))
    }

    /// Collection the appended third word is drawn from.
    pub fn third_slot(&self, combination: CombinationType) -> &WordCollection {
        if combination.is_custom() {
            &self.custom
        } else {
            &self.nouns
        }
    }

    /// Exact number of distinct phrases `combination` can produce.
    pub fn cardinality(&self, combination: CombinationType, words: WordCount) -> u64 {
        let (first, second) = self.resolve(combination);
        if first.is_empty() || second.is_empty() {
            return 0;
        }
        let n = first.len() as u64;
        let pairs = if combination.is_self_pairing() {
            n * (n - 1)
        } else {
            n * second.len() as u64
        };
        match words {
            WordCount::Two => pairs,
            WordCount::Three => pairs * self.third_slot(combination).len() as u64,
        }
    }

    /// Whether `phrase` is one of the outcomes `combination` can produce.
    pub fn contains_phrase(&self, combination: CombinationType, words: WordCount, phrase: &str) -> bool {
        let parts: Vec<&str> = phrase.split(SEPARATOR).collect();
        if parts.len() != words.len() {
            return false;
        }
        let (first, second) = self.resolve(combination);
        if !first.contains(parts[0]) || !second.contains(parts[1]) {
            return false;
        }
        if combination.is_self_pairing() && parts[0] == parts[1] {
            return false;
        }
        match words {
            WordCount::Two => true,
            WordCount::Three => self.third_slot(combination).contains(parts[2]),
        }
    }

    /// Draw one candidate phrase under `combination`.
    ///
    /// Returns `None` only when the rule's cardinality is zero.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        combination: CombinationType,
        words: WordCount,
        rng: &mut R,
    ) -> Option<String> {
        if self.cardinality(combination, words) == 0 {
            return None;
        }
        let (first, second) = self.resolve(combination);
        let mut parts: Vec<&str> = Vec::with_capacity(words.len());

        if combination.is_self_pairing() {
            let n = first.len();
            let i = rng.gen_range(0..n);
            let mut j = rng.gen_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            parts.push(first.get(i)?);
            parts.push(first.get(j)?);
        } else {
            parts.push(first.choose(rng)?);
            parts.push(second.choose(rng)?);
        }

        if words == WordCount::Three {
            parts.push(self.third_slot(combination).choose(rng)?);
        }
        Some(parts.join(SEPARATOR))
    }
}
