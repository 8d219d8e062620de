use std::{fs, path::PathBuf};

use cadre_core::{Session, SessionBuilder};
use tempfile::TempDir;

/// Helper function to create a session from a catalog file written to a
/// temporary directory
pub fn session_with_catalog(json: &str) -> (TempDir, PathBuf, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, json).expect("Failed to write catalog");
    let session = SessionBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to create session");
    (temp_dir, path, session)
}
