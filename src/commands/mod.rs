pub mod count;
pub mod generate;
pub mod init;
pub mod remaining;
pub mod reset;
pub mod types;

use std::path::Path;

use phrase_gen::storage::config::Config;
use phrase_gen::storage::state;
use phrase_gen::{FileSource, PhraseGenerator, Result};

/// Build a generator from the merged config, restoring used phrases from `state_path`.
pub fn build_generator(config: &Config, state_path: Option<&Path>) -> Result<PhraseGenerator> {
    let mut builder = PhraseGenerator::builder().exclude(config.exclude.iter().cloned());
    if let Some(path) = &config.custom_words {
        builder = builder.custom_source(FileSource::new(path));
    }
    if config.verify {
        builder = builder.lexicon_verifier();
    }
    if let Some(path) = state_path {
        builder = builder.used(state::read_used(path)?);
    }
    Ok(match config.seed {
        Some(seed) => builder.build_seeded(seed),
        None => builder.build(),
    })
}
