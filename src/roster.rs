//! The tracked-player list: one file of whitespace-separated FIDE IDs.

use std::path::Path;

use tracing::{error, info};

/// Read the identifier list. A missing or unreadable file logs and yields an
/// empty roster, so the page can still render its no-data notice.
pub fn load(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!(path = %path.display(), "failed to read roster file: {e}");
            return Vec::new();
        }
    };
    let fide_ids: Vec<String> = content.split_whitespace().map(str::to_string).collect();
    info!(count = fide_ids.len(), "loaded roster");
    fide_ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let mut path = std::env::temp_dir();
        path.push(format!("fide_ratings_test_{}_roster.txt", std::process::id()));
        std::fs::write(&path, "1503014 2020009\n\t14109603  \n").unwrap();
        assert_eq!(load(&path), vec!["1503014", "2020009", "14109603"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_yields_empty_roster() {
        let path = Path::new("/nonexistent/fide_roster.txt");
        assert!(load(path).is_empty());
    }
}
