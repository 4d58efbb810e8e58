use std::{path::PathBuf, time::Duration};

use folio::{Catalog, ProjectId, ProjectRecord, SourceLink, SqliteStore};
use tempfile::TempDir;
use time::OffsetDateTime;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Creates a SqliteStore in a temporary directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (SqliteStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = SqliteStore::open(store_path(&dir), TEST_TIMEOUT)
        .await
        .expect("Failed to create test store");
    (store, dir)
}

pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("session.db")
}

/// Reopens the store in `dir` as if `elapsed` had passed since `start`.
pub async fn reopen_after(
    store: SqliteStore,
    dir: &TempDir,
    start: OffsetDateTime,
    elapsed: Duration,
) -> SqliteStore {
    store.close().await;
    SqliteStore::open_at(store_path(dir), TEST_TIMEOUT, start + elapsed)
        .await
        .expect("Failed to reopen test store")
}

/// Creates a minimal public project with the given id.
pub fn make_project(id: &str, title: &str) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: format!("{title} description"),
        tech_stack: vec!["Rust".to_string()],
        features: vec!["Fast".to_string(), "Small".to_string()],
        demo: Some(format!("https://example.com/{id}")),
        source: Some(SourceLink::Public(format!("https://github.com/example/{id}"))),
        image: format!("assets/projects/{id}.png"),
    }
}

/// Creates a catalog of `make_project` records, in the given order.
pub fn make_catalog(ids: &[&str]) -> Catalog {
    let projects = ids
        .iter()
        .map(|id| make_project(id, &format!("Project {id}")))
        .collect();
    Catalog::new(projects).expect("Test catalog ids must be unique")
}
