use std::path::Path;

use phrase_gen::storage::config;
use phrase_gen::Result;

use crate::ui;

pub fn run(path: &Path) -> Result<()> {
    let shown = path.display().to_string();
    if path.exists() {
        println!("{}", ui::info_line("Exists", &shown));
        return Ok(());
    }
    config::write_default_config(path)?;
    println!("{}", ui::success_line("Created", &shown));
    Ok(())
}
