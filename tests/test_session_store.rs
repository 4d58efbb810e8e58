//! Integration tests for the SQLite session store.
//!
//! Tests cover:
//! - Reading and writing session and local keys
//! - Resuming a session across reopen within the idle timeout
//! - Session expiry dropping session keys but keeping local ones
//! - Ending a session explicitly
//! - Mirroring and rehydrating the catalog

mod common;

use std::time::Duration;

use time::OffsetDateTime;

use common::*;

#[tokio::test]
async fn test_set_and_get_keys() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    assert_eq!(store.get(Scope::Session, WELCOME_SEEN).await?, None);

    store
        .set(Scope::Session, WELCOME_SEEN, "true".to_string())
        .await?;
    store
        .set(Scope::Local, "theme", "dark".to_string())
        .await?;

    assert_eq!(
        store.get(Scope::Session, WELCOME_SEEN).await?,
        Some("true".to_string())
    );
    // scopes do not share keys
    assert_eq!(store.get(Scope::Local, WELCOME_SEEN).await?, None);
    assert_eq!(
        store.get(Scope::Local, "theme").await?,
        Some("dark".to_string())
    );

    // overwrite keeps one row
    store
        .set(Scope::Local, "theme", "light".to_string())
        .await?;
    assert_eq!(
        store.get(Scope::Local, "theme").await?,
        Some("light".to_string())
    );

    store.remove(Scope::Local, "theme").await?;
    assert_eq!(store.get(Scope::Local, "theme").await?, None);

    Ok(())
}

#[tokio::test]
async fn test_session_resumes_within_timeout() -> anyhow::Result<()> {
    let start = OffsetDateTime::now_utc();
    let (store, temp_dir) = create_test_store().await;
    let session = store.session_id().await;

    mark_welcome_seen(store.clone()).await?;
    save_last_section(store.clone(), folio::core::landing::Section::Portfolio).await?;

    let store = reopen_after(store, &temp_dir, start, Duration::from_secs(10 * 60)).await;
    assert_eq!(store.session_id().await, session);

    let snapshot = SessionSnapshot::load(&store).await?;
    assert!(snapshot.welcome_seen);
    assert_eq!(
        snapshot.last_section,
        Some(folio::core::landing::Section::Portfolio)
    );

    Ok(())
}

#[tokio::test]
async fn test_session_expires_after_idle_timeout() -> anyhow::Result<()> {
    let start = OffsetDateTime::now_utc();
    let (store, temp_dir) = create_test_store().await;
    let session = store.session_id().await;

    mark_welcome_seen(store.clone()).await?;
    store
        .set(Scope::Local, "kept", "yes".to_string())
        .await?;

    let store = reopen_after(store, &temp_dir, start, Duration::from_secs(45 * 60)).await;
    assert_ne!(store.session_id().await, session);

    // session keys are gone, local keys survive
    let snapshot = SessionSnapshot::load(&store).await?;
    assert!(!snapshot.welcome_seen);
    assert_eq!(snapshot.last_section, None);
    assert_eq!(
        store.get(Scope::Local, "kept").await?,
        Some("yes".to_string())
    );

    Ok(())
}

#[tokio::test]
async fn test_end_session() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let session = store.session_id().await;

    mark_welcome_seen(store.clone()).await?;
    mirror_catalog(store.clone(), Catalog::builtin()).await?;

    store.end_session().await?;

    assert_ne!(store.session_id().await, session);
    assert_eq!(store.get(Scope::Session, WELCOME_SEEN).await?, None);
    assert!(store.get(Scope::Local, PROJECTS).await?.is_some());

    Ok(())
}

#[tokio::test]
async fn test_catalog_mirror_round_trip() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    assert!(rehydrate_catalog(&store).await?.is_none());

    let catalog = Catalog::builtin();
    mirror_catalog(store.clone(), catalog.clone()).await?;

    let rehydrated = rehydrate_catalog(&store)
        .await?
        .expect("mirror should be present");
    assert_eq!(rehydrated, catalog);

    Ok(())
}

#[tokio::test]
async fn test_mirror_with_numeric_ids() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let json = r##"[
        {"id": 7, "Title": "Seven", "Description": "d", "Img": "seven.png", "Github": "Private"},
        {"id": "8", "Title": "Eight", "Description": "d", "Img": "eight.png", "Link": "#"}
    ]"##;
    store.set(Scope::Local, PROJECTS, json.to_string()).await?;

    let catalog = rehydrate_catalog(&store)
        .await?
        .expect("mirror should be present");
    assert_eq!(catalog.len(), 2);

    let seven = catalog.find("7").expect("numeric id resolves as text");
    assert_eq!(seven.source, Some(SourceLink::Private));
    assert!(seven.tech_stack.is_empty());

    let eight = catalog.find("8").expect("string id resolves");
    assert_eq!(eight.demo_url(), None);

    Ok(())
}

#[tokio::test]
async fn test_memory_store_matches_sqlite_semantics() -> anyhow::Result<()> {
    let memory = MemoryStore::default();
    let (sqlite, _temp_dir) = create_test_store().await;

    for store_result in [
        exercise(memory.clone()).await?,
        exercise(sqlite.clone()).await?,
    ] {
        assert_eq!(store_result, (Some("true".to_string()), None, Some("kept".to_string())));
    }

    Ok(())
}

async fn exercise<S: SessionStore>(
    store: S,
) -> anyhow::Result<(Option<String>, Option<String>, Option<String>)> {
    store
        .set(Scope::Session, WELCOME_SEEN, "true".to_string())
        .await?;
    store
        .set(Scope::Session, LAST_SECTION, "Contact".to_string())
        .await?;
    store
        .set(Scope::Local, "note", "kept".to_string())
        .await?;
    let seen = store.get(Scope::Session, WELCOME_SEEN).await?;

    store.end_session().await?;
    let section = store.get(Scope::Session, LAST_SECTION).await?;
    let note = store.get(Scope::Local, "note").await?;
    Ok((seen, section, note))
}
