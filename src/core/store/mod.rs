//! Client-local key/value state: session-scoped flags and the local catalog
//! mirror.
//!
//! Views only read through [`SessionSnapshot::load`] once at startup and
//! write on discrete events, so no locking beyond the backing store is needed.

mod memory;
mod sqlite;

use crate::catalog::Catalog;

use super::landing::Section;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub const WELCOME_SEEN: &str = "welcome_seen";
pub const LAST_SECTION: &str = "last_section";
pub const PROJECTS: &str = "projects";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Cleared when the session ends
    Session,
    /// Kept across sessions
    Local,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Session => "session",
            Scope::Local => "local",
        }
    }
}

pub trait SessionStore: Clone + Send + Sync + 'static {
    fn get(
        &self,
        scope: Scope,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
    fn set(
        &self,
        scope: Scope,
        key: &str,
        value: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn remove(&self, scope: Scope, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
    /// Drop every session-scoped key and start a fresh session.
    fn end_session(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// The store picked at startup.
#[derive(Debug, Clone)]
pub enum Store {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl SessionStore for Store {
    fn get(
        &self,
        scope: Scope,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send {
        async move {
            match self {
                Store::Sqlite(store) => store.get(scope, key).await,
                Store::Memory(store) => store.get(scope, key).await,
            }
        }
    }

    fn set(
        &self,
        scope: Scope,
        key: &str,
        value: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move {
            match self {
                Store::Sqlite(store) => store.set(scope, key, value).await,
                Store::Memory(store) => store.set(scope, key, value).await,
            }
        }
    }

    fn remove(&self, scope: Scope, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move {
            match self {
                Store::Sqlite(store) => store.remove(scope, key).await,
                Store::Memory(store) => store.remove(scope, key).await,
            }
        }
    }

    fn end_session(&self) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move {
            match self {
                Store::Sqlite(store) => store.end_session().await,
                Store::Memory(store) => store.end_session().await,
            }
        }
    }
}

/// Session flags as read once when the app starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub welcome_seen: bool,
    pub last_section: Option<Section>,
}

impl SessionSnapshot {
    pub async fn load<S: SessionStore>(store: &S) -> anyhow::Result<Self> {
        let welcome_seen = store
            .get(Scope::Session, WELCOME_SEEN)
            .await?
            .is_some_and(|v| v == "true");
        let last_section = match store.get(Scope::Session, LAST_SECTION).await? {
            Some(value) => {
                let section = Section::parse(&value);
                if section.is_none() {
                    tracing::warn!(value, "Ignoring unknown stored section");
                }
                section
            }
            None => None,
        };
        Ok(Self {
            welcome_seen,
            last_section,
        })
    }
}

pub async fn mark_welcome_seen<S: SessionStore>(store: S) -> anyhow::Result<()> {
    store.set(Scope::Session, WELCOME_SEEN, "true".to_string()).await
}

pub async fn save_last_section<S: SessionStore>(store: S, section: Section) -> anyhow::Result<()> {
    store
        .set(Scope::Session, LAST_SECTION, section.as_str().to_string())
        .await
}

/// Serialize the catalog into local storage so a view reached without shared
/// memory (a fresh process opened on a detail route) can re-resolve records.
pub async fn mirror_catalog<S: SessionStore>(store: S, catalog: Catalog) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    store.set(Scope::Local, PROJECTS, json).await
}

pub async fn rehydrate_catalog<S: SessionStore>(store: &S) -> anyhow::Result<Option<Catalog>> {
    let Some(json) = store.get(Scope::Local, PROJECTS).await? else {
        return Ok(None);
    };
    match Catalog::from_json(&json) {
        Ok(catalog) => Ok(Some(catalog)),
        Err(err) => {
            tracing::warn!(error = %err, "Discarding unreadable catalog mirror");
            store.remove(Scope::Local, PROJECTS).await?;
            Ok(None)
        }
    }
}
