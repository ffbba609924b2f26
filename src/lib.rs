//! Unique, hyphen-joined word phrases such as `brave-panda`.
//!
//! A [`PhraseGenerator`] pairs words from part-of-speech collections under a
//! [`CombinationType`] and never returns the same phrase twice until it is
//! reset. Once every reachable phrase has been used it reports exhaustion
//! instead of repeating itself.

pub mod catalog;
pub mod collection;
pub mod error;
pub mod generator;
pub mod source;
pub mod storage;
pub mod verifier;
pub mod words;

pub use catalog::{Category, CombinationType, WordCatalog, WordCount};
pub use collection::WordCollection;
pub use error::{PhraseGenError, Result};
pub use generator::{GeneratorBuilder, PhraseGenerator, SharedGenerator};
pub use source::{BundledSource, FileSource, WordSource};
pub use verifier::{LexiconVerifier, PosVerifier};
