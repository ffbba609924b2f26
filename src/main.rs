mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Command};
use log::debug;
use phrase_gen::storage::config;
use std::process;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|e| {
                eprintln!("Cannot determine current directory: {}", e);
                process::exit(1);
            });
            config::default_path(&cwd)
        }
    };

    if let Command::Init = cli.command {
        exit_on_error(commands::init::run(&config_path));
        return;
    }

    let mut config = match config::read_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", config_path.display(), e);
            process::exit(1);
        }
    };
    debug!("Loaded config from {}: {:?}", config_path.display(), config);

    let result = match cli.command {
        Command::Init => Ok(()),
        Command::Generate {
            engine,
            count,
            on_exhausted,
            fallback,
            seed,
            verify,
            state,
        } => {
            engine.apply(&mut config);
            if let Some(policy) = on_exhausted {
                config.on_exhausted = policy;
            }
            if let Some(fallback) = fallback {
                config.fallback = fallback;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.verify |= verify;
            commands::generate::run(&config, count, state.as_deref())
        }
        Command::Count { engine } => {
            engine.apply(&mut config);
            commands::count::run(&config)
        }
        Command::Remaining { engine, state } => {
            engine.apply(&mut config);
            commands::remaining::run(&config, state.as_deref())
        }
        Command::Reset { state } => commands::reset::run(&config, &state),
        Command::Types { engine } => {
            engine.apply(&mut config);
            commands::types::run(&config)
        }
    };

    exit_on_error(result);
}

fn exit_on_error(result: phrase_gen::Result<()>) {
    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
