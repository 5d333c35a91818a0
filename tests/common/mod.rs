//! Helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

use catalog_api::db::{DbPool, establish_connection_pool, run_migrations};

/// Temporary database used in integration tests.
///
/// The SQLite file and its WAL companions live in a scratch directory that is
/// removed when the value is dropped.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create scratch directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Scratch path is not UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
