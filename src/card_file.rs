//! Reading and writing card lists as plain text, one label per line.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::group::parse_card_lines;

/// Fallback group name when a file has no usable stem
pub const IMPORTED_NAME: &str = "Imported deck";

/// Cards read from a file, plus a group name suggested by its filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFile {
    pub suggested_name: String,
    pub cards: Vec<String>,
}

/// Expand `~` in a user-supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path.trim()).as_ref())
}

/// Group name derived from a file's stem
pub fn suggested_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(IMPORTED_NAME)
        .to_string()
}

/// Read a card list. Blank lines are dropped; the result may be empty.
pub fn read_card_file(path: &Path) -> Result<CardFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cards from {}", path.display()))?;

    let cards = parse_card_lines(content.lines());
    tracing::debug!("Read {} cards from {}", cards.len(), path.display());

    Ok(CardFile {
        suggested_name: suggested_name(path),
        cards,
    })
}

/// Write exported card text, creating parent directories as needed
pub fn write_card_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, text)
        .with_context(|| format!("Failed to write cards to {}", path.display()))?;

    tracing::info!("Exported {} cards to {}", text.lines().count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("carddraw-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_suggested_name() {
        assert_eq!(suggested_name(Path::new("/tmp/tarot.txt")), "tarot");
        assert_eq!(suggested_name(Path::new("names")), "names");
        assert_eq!(suggested_name(Path::new("/")), IMPORTED_NAME);
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("round.txt");
        write_card_file(&path, "A♦\n\n  K♠  \n").unwrap();

        let file = read_card_file(&path).unwrap();
        assert_eq!(file.cards, vec!["A♦", "K♠"]);
        assert_eq!(file.suggested_name, "round");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_card_file(&temp_path("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read cards"));
    }

    #[test]
    fn test_expand_path() {
        let home = dirs::home_dir().unwrap_or_default();
        if !home.as_os_str().is_empty() {
            assert_eq!(expand_path("~/deck.txt"), home.join("deck.txt"));
        }
        assert_eq!(expand_path(" /tmp/x.txt "), PathBuf::from("/tmp/x.txt"));
    }
}
