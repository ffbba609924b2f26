use phrase_gen::storage::config::Config;
use phrase_gen::{CombinationType, Result, WordCount};

use crate::ui;

use super::build_generator;

pub fn run(config: &Config) -> Result<()> {
    let words = WordCount::try_from(config.words)?;
    let generator = build_generator(config, None)?;
    println!("{}", ui::table_header("TYPE", "PHRASES"));
    for rule in CombinationType::ALL {
        let count = generator.combination_count(words, Some(rule));
        println!("{}", ui::table_row(rule.name(), &count.to_string()));
    }
    Ok(())
}
