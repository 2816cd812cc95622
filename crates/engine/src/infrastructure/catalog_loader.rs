//! File-backed greeting catalogs.
//!
//! A catalog file is a JSON array of strings:
//!
//! ```json
//! ["Hello world!", "Hi there!"]
//! ```
//!
//! Catalog invariants (non-empty, no blank entries) are enforced while
//! deserializing, so a file that parses always yields a usable catalog.

use std::path::{Path, PathBuf};

use greetbldr_domain::GreetingCatalog;
use thiserror::Error;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read greeting catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid greeting catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load and validate a catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<GreetingCatalog, CatalogLoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading greeting catalog");

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: GreetingCatalog =
        serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        entries = catalog.len(),
        "Loaded greeting catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_valid_catalog_in_order() {
        let file = catalog_file(r#"["Howdy!", "  Good morning  ", "Salut!"]"#);
        let catalog = load_catalog(file.path()).expect("catalog loads");

        let texts: Vec<&str> = catalog.iter().map(|g| g.as_str()).collect();
        assert_eq!(texts, vec!["Howdy!", "Good morning", "Salut!"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing.json");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = catalog_file(r#"["Hello", "#);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse { .. }));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let file = catalog_file("[]");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse { .. }));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn blank_entry_is_rejected() {
        let file = catalog_file(r#"["Hello", "   "]"#);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse { .. }));
    }
}
