use std::path::Path;

use phrase_gen::storage::config::Config;
use phrase_gen::{Result, WordCount};

use super::build_generator;

pub fn run(config: &Config, state_path: Option<&Path>) -> Result<()> {
    let words = WordCount::try_from(config.words)?;
    let generator = build_generator(config, state_path)?;
    println!("{}", generator.remaining_count(words, config.combination));
    Ok(())
}
