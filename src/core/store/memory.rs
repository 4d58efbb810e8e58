use std::{
    collections::HashMap,
    future,
    sync::{Arc, Mutex, MutexGuard},
};

use super::{Scope, SessionStore};

type Entries = HashMap<(Scope, String), String>;

/// Process-lifetime store. Used by tests and by `--ephemeral` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<Entries>>,
}

impl MemoryStore {
    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))
    }
}

impl SessionStore for MemoryStore {
    fn get(
        &self,
        scope: Scope,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send {
        let result = self
            .lock()
            .map(|entries| entries.get(&(scope, key.to_string())).cloned());
        future::ready(result)
    }

    fn set(
        &self,
        scope: Scope,
        key: &str,
        value: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send {
        let result = self.lock().map(|mut entries| {
            entries.insert((scope, key.to_string()), value);
        });
        future::ready(result)
    }

    fn remove(&self, scope: Scope, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send {
        let result = self.lock().map(|mut entries| {
            entries.remove(&(scope, key.to_string()));
        });
        future::ready(result)
    }

    fn end_session(&self) -> impl Future<Output = anyhow::Result<()>> + Send {
        let result = self.lock().map(|mut entries| {
            entries.retain(|(scope, _), _| *scope != Scope::Session);
        });
        future::ready(result)
    }
}
