use std::path::Path;

use log::info;
use phrase_gen::storage::config::{Config, ExhaustionPolicy};
use phrase_gen::storage::state;
use phrase_gen::{Result, WordCount};

use super::build_generator;

pub fn run(config: &Config, count: usize, state_path: Option<&Path>) -> Result<()> {
    let words = WordCount::try_from(config.words)?;
    let rule = config.combination;
    let _lock = state_path.map(state::StateLock::acquire).transpose()?;
    let mut generator = build_generator(config, state_path)?;

    let mut outcome = Ok(());
    for _ in 0..count {
        match config.on_exhausted {
            ExhaustionPolicy::Error => match generator.generate_or_err(words, rule) {
                Ok(phrase) => println!("{}", phrase),
                Err(e) => {
                    outcome = Err(e);
                    break;
                }
            },
            ExhaustionPolicy::Default => {
                println!("{}", generator.generate_or_default(words, rule, &config.fallback))
            }
            ExhaustionPolicy::Message => {
                println!("{}", generator.generate_or_message(words, rule, &config.fallback))
            }
            ExhaustionPolicy::Silent => {
                let phrase = generator.silent_generate(words, rule);
                if !phrase.is_empty() {
                    println!("{}", phrase);
                }
            }
        }
    }

    // Phrases printed before an exhaustion error still count as used.
    if let Some(path) = state_path {
        state::write_used(path, generator.used())?;
        info!("Saved {} used phrases to {}", generator.used_len(), path.display());
    }
    outcome
}
