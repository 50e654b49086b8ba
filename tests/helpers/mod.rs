use anyhow::{Context, Result};
use snapnotes::infrastructure::SqliteRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary note store
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_path: PathBuf,
}

impl TestStore {
    /// Create an empty store location in a fresh temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let store_path = temp_dir.path().join("store").join("snapnotes.db");

        Ok(Self {
            _temp_dir: temp_dir,
            store_path,
        })
    }

    /// Open a repository on this store; may be called repeatedly
    pub fn open_repository(&self) -> Result<SqliteRepository> {
        SqliteRepository::new(&self.store_path)
    }
}

/// Note bodies as they come out of a scan
#[allow(dead_code)]
pub mod scanned_notes {
    pub const GEOGRAPHY: &str = "Capital: Paris\nRiver - Seine\nMountain => Mont Blanc";

    pub const BIOLOGY: &str = "Mitochondria\n\
        Produces ATP via oxidative phosphorylation, a multi-step pathway.\n\
        Ribosome: protein synthesis";

    pub const PROSE: &str = "This page contains a long paragraph of running text.\n\
        It goes on for a while without any structure at all.";

    pub const BLANK: &str = "  \n\n\t \n";
}
