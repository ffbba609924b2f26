use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{CatalogSources, Category, CombinationType, WordCatalog, WordCount};
use crate::error::{PhraseGenError, Result};
use crate::source::WordSource;
use crate::verifier::{LexiconVerifier, PosVerifier};

/// Collects construction parameters for a [`PhraseGenerator`].
#[derive(Default)]
pub struct GeneratorBuilder {
    exclude: Vec<String>,
    sources: CatalogSources,
    verifier: Option<Box<dyn PosVerifier + Send>>,
    lexicon: bool,
    used: Vec<String>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        GeneratorBuilder::default()
    }

    /// Words removed from every collection before use.
    pub fn exclude<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replace the bundled list for one part-of-speech category.
    pub fn source(mut self, category: Category, source: impl WordSource + 'static) -> Self {
        self.sources.overrides.insert(category, Box::new(source));
        self
    }

    /// Use a single custom list instead of the four default collections.
    pub fn custom_source(mut self, source: impl WordSource + 'static) -> Self {
        self.sources.custom = Some(Box::new(source));
        self
    }

    pub fn verifier(mut self, verifier: impl PosVerifier + Send + 'static) -> Self {
        self.verifier = Some(Box::new(verifier));
        self.lexicon = false;
        self
    }

    /// Verify candidates against a lexicon built from the loaded collections.
    pub fn lexicon_verifier(mut self) -> Self {
        self.verifier = None;
        self.lexicon = true;
        self
    }

    /// Phrases already handed out, e.g. restored from a previous run.
    pub fn used<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.used.extend(phrases.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> PhraseGenerator<StdRng> {
        self.build_with_rng(StdRng::from_entropy())
    }

    pub fn build_seeded(self, seed: u64) -> PhraseGenerator<StdRng> {
        self.build_with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn build_with_rng<R: Rng>(self, rng: R) -> PhraseGenerator<R> {
        let catalog = WordCatalog::load(&self.sources, &self.exclude);
        let verifier: Option<Box<dyn PosVerifier + Send>> = if self.lexicon {
            Some(Box::new(LexiconVerifier::from_catalog(&catalog)))
        } else {
            self.verifier
        };
        debug!(
            "Loaded catalog: {} nouns, {} verbs, {} adjectives, {} adverbs, {} custom",
            catalog.collection(Category::Noun).len(),
            catalog.collection(Category::Verb).len(),
            catalog.collection(Category::Adjective).len(),
            catalog.collection(Category::Adverb).len(),
            catalog.collection(Category::Custom).len(),
        );
        PhraseGenerator {
            catalog,
            used: self.used.into_iter().collect(),
            verifier,
            rng,
        }
    }
}

/// Produces hyphen-joined phrases, never repeating one until [`reset`](Self::reset).
pub struct PhraseGenerator<R = StdRng> {
    catalog: WordCatalog,
    used: HashSet<String>,
    verifier: Option<Box<dyn PosVerifier + Send>>,
    rng: R,
}

impl PhraseGenerator<StdRng> {
    /// Generator over the bundled word lists.
    pub fn new() -> Self {
        GeneratorBuilder::new().build()
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }
}

impl Default for PhraseGenerator<StdRng> {
    fn default() -> Self {
        PhraseGenerator::new()
    }
}

impl<R: Rng> PhraseGenerator<R> {
    /// Draw a phrase that has not been returned before.
    ///
    /// A rule is exhausted once the used set holds at least as many phrases
    /// as the rule can produce; that check runs before any draw. With no
    /// `combination`, the rule is re-picked on every draw among the
    /// configured rules that are not exhausted. Returns `None` when no rule
    /// is left.
    pub fn generate(&mut self, words: WordCount, combination: Option<CombinationType>) -> Option<String> {
        let rules = match combination {
            Some(t) => vec![t],
            None => self.catalog.available_types(),
        };

        // Below capacity, at least one phrase of the rule's space is unused,
        // so the draw loop for that rule terminates.
        let used = self.used.len() as u64;
        let mut open: Vec<(CombinationType, u64)> = rules
            .into_iter()
            .filter_map(|t| {
                let total = self.catalog.cardinality(t, words);
                (used < total).then(|| (t, total - used))
            })
            .collect();

        let mut rejected: HashSet<String> = HashSet::new();
        while !open.is_empty() {
            let slot = self.rng.gen_range(0..open.len());
            let rule = open[slot].0;
            let candidate = match self.catalog.sample(rule, words, &mut self.rng) {
                Some(candidate) => candidate,
                None => {
                    open.swap_remove(slot);
                    continue;
                }
            };
            if self.used.contains(&candidate) || rejected.contains(&candidate) {
                continue;
            }

            if let Some(verifier) = &self.verifier {
                if !verifier.is_grammatically_distinct(&candidate) {
                    debug!("Verifier rejected {}", candidate);
                    for entry in open.iter_mut() {
                        if self.catalog.contains_phrase(entry.0, words, &candidate) {
                            entry.1 -= 1;
                        }
                    }
                    open.retain(|entry| entry.1 > 0);
                    rejected.insert(candidate);
                    continue;
                }
            }

            self.used.insert(candidate.clone());
            return Some(candidate);
        }

        debug!(
            "No unused {}-word phrases left for {}",
            words.len(),
            combination.map_or("any rule", CombinationType::name)
        );
        None
    }

    /// Like [`generate`](Self::generate), failing with
    /// [`PhraseGenError::AllCombinationsUsed`] on exhaustion.
    pub fn generate_or_err(&mut self, words: WordCount, combination: Option<CombinationType>) -> Result<String> {
        self.generate(words, combination)
            .ok_or(PhraseGenError::AllCombinationsUsed)
    }

    pub fn generate_or_default(
        &mut self,
        words: WordCount,
        combination: Option<CombinationType>,
        default: &str,
    ) -> String {
        self.generate(words, combination)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn generate_or_message(
        &mut self,
        words: WordCount,
        combination: Option<CombinationType>,
        message: &str,
    ) -> String {
        self.generate(words, combination)
            .unwrap_or_else(|| message.to_string())
    }

    /// Empty string on exhaustion.
    pub fn silent_generate(&mut self, words: WordCount, combination: Option<CombinationType>) -> String {
        self.generate(words, combination).unwrap_or_default()
    }
}

impl<R> PhraseGenerator<R> {
    /// Total phrases a rule can produce. Without a rule, the custom rule when
    /// a custom source is configured, else adjective-noun.
    pub fn combination_count(&self, words: WordCount, combination: Option<CombinationType>) -> u64 {
        let rule = combination.unwrap_or_else(|| self.catalog.default_type());
        self.catalog.cardinality(rule, words)
    }

    /// `combination_count` minus every phrase used so far, floored at zero.
    pub fn remaining_count(&self, words: WordCount, combination: Option<CombinationType>) -> u64 {
        self.combination_count(words, combination)
            .saturating_sub(self.used.len() as u64)
    }

    pub fn reset(&mut self) {
        self.used.clear();
    }

    pub fn used(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    pub fn used_len(&self) -> usize {
        self.used.len()
    }

}

/// A generator shared between threads. Each call holds the lock across the
/// exhaustion check, the draw and the insert.
pub struct SharedGenerator<R = StdRng> {
    inner: Arc<Mutex<PhraseGenerator<R>>>,
}

impl<R> Clone for SharedGenerator<R> {
    fn clone(&self) -> Self {
        SharedGenerator {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng> SharedGenerator<R> {
    pub fn new(generator: PhraseGenerator<R>) -> Self {
        SharedGenerator {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PhraseGenerator<R>> {
        // A panic while holding the lock cannot leave the used set half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn generate(&self, words: WordCount, combination: Option<CombinationType>) -> Option<String> {
        self.lock().generate(words, combination)
    }

    pub fn generate_or_err(&self, words: WordCount, combination: Option<CombinationType>) -> Result<String> {
        self.lock().generate_or_err(words, combination)
    }

    pub fn generate_or_default(&self, words: WordCount, combination: Option<CombinationType>, default: &str) -> String {
        self.lock().generate_or_default(words, combination, default)
    }

    pub fn generate_or_message(&self, words: WordCount, combination: Option<CombinationType>, message: &str) -> String {
        self.lock().generate_or_message(words, combination, message)
    }

    pub fn silent_generate(&self, words: WordCount, combination: Option<CombinationType>) -> String {
        self.lock().silent_generate(words, combination)
    }

    pub fn combination_count(&self, words: WordCount, combination: Option<CombinationType>) -> u64 {
        self.lock().combination_count(words, combination)
    }

    pub fn remaining_count(&self, words: WordCount, combination: Option<CombinationType>) -> u64 {
        self.lock().remaining_count(words, combination)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn used_len(&self) -> usize {
        self.lock().used_len()
    }
}
