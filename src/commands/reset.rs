use std::path::Path;

use phrase_gen::storage::config::Config;
use phrase_gen::storage::state;
use phrase_gen::Result;

use crate::ui;

use super::build_generator;

pub fn run(config: &Config, state_path: &Path) -> Result<()> {
    let _lock = state::StateLock::acquire(state_path)?;
    let mut generator = build_generator(config, Some(state_path))?;
    let cleared = generator.used_len();
    generator.reset();
    state::write_used(state_path, generator.used())?;
    println!(
        "{}",
        ui::success_line("Reset", &format!("{} ({} phrases cleared)", state_path.display(), cleared))
    );
    Ok(())
}
