//! Dictionary loading utilities
//!
//! Reads whitespace-separated word tokens from a file. Validation and length
//! filtering happen later, during pruning.

use std::fs;
use std::io;
use std::path::Path;

/// Load raw dictionary tokens from a file
///
/// Tokens are whitespace-separated; empty files yield an empty vector.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::loader::load_from_file;
///
/// let tokens = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} tokens", tokens.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .split_whitespace()
        .map(ToString::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dictionary(content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "absurdle-loader-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_splits_on_any_whitespace() {
        let path = temp_dictionary("cat dog\na\n  tree\t\tbee\n");
        let tokens = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(tokens, vec!["cat", "dog", "a", "tree", "bee"]);
    }

    #[test]
    fn load_empty_file() {
        let path = temp_dictionary("");
        let tokens = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(tokens.is_empty());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/nonexistent/absurdle-dictionary.txt").is_err());
    }
}
