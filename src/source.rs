use std::fs;
use std::path::PathBuf;

use log::warn;

use crate::catalog::Category;
use crate::words;

/// Supplies the raw words for one collection.
///
/// No ordering or uniqueness is promised; the collection normalizes whatever
/// comes back. Loading happens once, at generator construction, and must not
/// fail: a source that cannot produce words returns an empty list.
pub trait WordSource {
    fn load_words(&self) -> Vec<String>;
}

/// One category of the bundled word lists.
#[derive(Debug, Clone, Copy)]
pub struct BundledSource(pub Category);

impl WordSource for BundledSource {
    fn load_words(&self) -> Vec<String> {
        let list: &[&str] = match self.0 {
            Category::Noun => words::NOUNS,
            Category::Verb => words::VERBS,
            Category::Adjective => words::ADJECTIVES,
            Category::Adverb => words::ADVERBS,
            Category::Custom => &[],
        };
        list.iter().map(|w| w.to_string()).collect()
    }
}

/// Newline-separated word file. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn load_words(&self) -> Vec<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect(),
            Err(e) => {
                warn!("Could not read word file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }
}

impl WordSource for Vec<String> {
    fn load_words(&self) -> Vec<String> {
        self.clone()
    }
}

impl WordSource for &[&str] {
    fn load_words(&self) -> Vec<String> {
        self.iter().map(|w| w.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_source_matches_word_lists() {
        assert_eq!(BundledSource(Category::Noun).load_words().len(), words::NOUNS.len());
        assert!(BundledSource(Category::Custom).load_words().is_empty());
    }

    #[test]
    fn file_source_skips_blanks_and_comments() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.txt");
        fs::write(&path, "# team names\nalpha\n\n  beta  \ngamma\n").unwrap();

        let words = FileSource::new(&path).load_words();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        let words = FileSource::new(tmp.path().join("missing.txt")).load_words();
        assert!(words.is_empty());
    }

    #[test]
    fn slice_source_copies_words() {
        let list: &[&str] = &["one", "two"];
        assert_eq!(list.load_words(), vec!["one".to_string(), "two".to_string()]);
    }
}
