use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use phrase_gen::storage::config::{Config, ExhaustionPolicy};
use phrase_gen::CombinationType;

#[derive(Parser)]
#[command(name = "phrase-gen", about = "Unique hyphen-joined word phrases")]
pub struct Cli {
    /// Config file (defaults to ./phrase-gen.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a default phrase-gen.toml
    Init,

    /// Print unique phrases, one per line
    Generate {
        #[command(flatten)]
        engine: EngineArgs,
        /// Number of phrases
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// What to print once all combinations are used
        #[arg(long, value_enum)]
        on_exhausted: Option<ExhaustionPolicy>,
        /// Value printed by the default and message policies
        #[arg(long)]
        fallback: Option<String>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Reject pairs whose words share a single part of speech
        #[arg(long)]
        verify: bool,
        /// JSON file of used phrases, read before and written after
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Print how many phrases a combination type can produce
    Count {
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print how many phrases are left given a state file
    Remaining {
        #[command(flatten)]
        engine: EngineArgs,
        /// JSON file of used phrases
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Forget every used phrase in a state file
    Reset {
        /// JSON file of used phrases
        #[arg(long)]
        state: PathBuf,
    },

    /// List combination types and their sizes
    Types {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Options shared by every command that builds a generator.
#[derive(Args, Debug, Default)]
pub struct EngineArgs {
    /// Words per phrase
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=3))]
    pub words: Option<u8>,
    /// Combination type (random per draw when omitted)
    #[arg(short = 't', long = "type", value_enum)]
    pub combination: Option<CombinationType>,
    /// Word to leave out (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,
    /// Newline-separated custom word list, replacing the bundled lists
    #[arg(long)]
    pub custom: Option<PathBuf>,
}

impl EngineArgs {
    /// Overlay command-line values on the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(words) = self.words {
            config.words = words;
        }
        if self.combination.is_some() {
            config.combination = self.combination;
        }
        config.exclude.extend(self.exclude.iter().cloned());
        if let Some(custom) = &self.custom {
            config.custom_words = Some(custom.clone());
        }
    }
}
