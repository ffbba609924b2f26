use phrase_gen::storage::config::Config;
use phrase_gen::{Result, WordCount};

use super::build_generator;

pub fn run(config: &Config) -> Result<()> {
    let words = WordCount::try_from(config.words)?;
    let generator = build_generator(config, None)?;
    println!("{}", generator.combination_count(words, config.combination));
    Ok(())
}
