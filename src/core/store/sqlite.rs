use std::{path::Path, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Scope, SessionStore};

const SESSION_ID: &str = "session_id";
const SESSION_SEEN_AT: &str = "session_seen_at";
/// Session column value for local-scope rows
const NO_SESSION: &str = "";

/// SQLite-backed store. Session-scoped rows are keyed by the current session
/// id; a session expires after the idle timeout and its rows are dropped when
/// the next one starts.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    session: Arc<RwLock<Uuid>>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

fn now_string(now: OffsetDateTime) -> anyhow::Result<String> {
    Ok(now.format(&Rfc3339)?)
}

impl SqliteStore {
    pub async fn open<P: AsRef<Path>>(path: P, idle_timeout: Duration) -> anyhow::Result<Self> {
        Self::open_at(path, idle_timeout, OffsetDateTime::now_utc()).await
    }

    /// Open the store as if the current time were `now`.
    pub async fn open_at<P: AsRef<Path>>(
        path: P,
        idle_timeout: Duration,
        now: OffsetDateTime,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory {:?}", parent))?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open session store {:?}", path))?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        let session = resume_or_start(&pool, idle_timeout, now).await?;
        tracing::info!(path = %path.display(), %session, "Session store ready");
        Ok(Self {
            pool,
            session: Arc::new(RwLock::new(session)),
        })
    }

    pub async fn session_id(&self) -> Uuid {
        *self.session.read().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn session_column(&self, scope: Scope) -> String {
        match scope {
            Scope::Session => self.session.read().await.to_string(),
            Scope::Local => NO_SESSION.to_string(),
        }
    }
}

async fn read_local(pool: &SqlitePool, key: &str) -> anyhow::Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>(
        "SELECT value FROM kv WHERE scope = 'local' AND session_id = '' AND key = $1",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(value)
}

async fn write(
    pool: &SqlitePool,
    scope: Scope,
    session: &str,
    key: &str,
    value: &str,
    now: OffsetDateTime,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"INSERT INTO kv (scope, session_id, key, value, updated_at) VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (scope, session_id, key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at"#,
    )
    .bind(scope.as_str())
    .bind(session)
    .bind(key)
    .bind(value)
    .bind(now_string(now)?)
    .execute(pool)
    .await?;
    Ok(())
}

fn is_expired(seen_at: &str, idle_timeout: Duration, now: OffsetDateTime) -> bool {
    let Ok(seen_at) = OffsetDateTime::parse(seen_at, &Rfc3339) else {
        return true;
    };
    let idle = now - seen_at;
    idle.is_negative() || idle.unsigned_abs() > idle_timeout
}

async fn resume_or_start(
    pool: &SqlitePool,
    idle_timeout: Duration,
    now: OffsetDateTime,
) -> anyhow::Result<Uuid> {
    let current = read_local(pool, SESSION_ID)
        .await?
        .and_then(|id| Uuid::parse_str(&id).ok());
    let seen_at = read_local(pool, SESSION_SEEN_AT).await?;

    let session = match (current, seen_at) {
        (Some(id), Some(seen_at)) if !is_expired(&seen_at, idle_timeout, now) => {
            tracing::debug!(session = %id, "Resuming session");
            id
        }
        _ => start_session(pool, now).await?,
    };
    let stamp = now_string(now)?;
    write(pool, Scope::Local, NO_SESSION, SESSION_SEEN_AT, &stamp, now).await?;
    Ok(session)
}

async fn start_session(pool: &SqlitePool, now: OffsetDateTime) -> anyhow::Result<Uuid> {
    let session = Uuid::new_v4();
    let dropped = sqlx::query("DELETE FROM kv WHERE scope = 'session'")
        .execute(pool)
        .await?
        .rows_affected();
    write(pool, Scope::Local, NO_SESSION, SESSION_ID, &session.to_string(), now).await?;
    tracing::info!(%session, dropped, "Started new session");
    Ok(session)
}

impl SessionStore for SqliteStore {
    fn get(
        &self,
        scope: Scope,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Option<String>>> + Send {
        let key = key.to_string();
        async move {
            let session = self.session_column(scope).await;
            let value = sqlx::query_scalar::<_, String>(
                "SELECT value FROM kv WHERE scope = $1 AND session_id = $2 AND key = $3",
            )
            .bind(scope.as_str())
            .bind(&session)
            .bind(&key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read {key:?}"))?;
            Ok(value)
        }
    }

    fn set(
        &self,
        scope: Scope,
        key: &str,
        value: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send {
        let key = key.to_string();
        async move {
            let now = OffsetDateTime::now_utc();
            let session = self.session_column(scope).await;
            write(&self.pool, scope, &session, &key, &value, now)
                .await
                .with_context(|| format!("Failed to write {key:?}"))?;
            if scope == Scope::Session {
                let stamp = now_string(now)?;
                write(&self.pool, Scope::Local, NO_SESSION, SESSION_SEEN_AT, &stamp, now).await?;
            }
            Ok(())
        }
    }

    fn remove(&self, scope: Scope, key: &str) -> impl Future<Output = anyhow::Result<()>> + Send {
        let key = key.to_string();
        async move {
            let session = self.session_column(scope).await;
            sqlx::query("DELETE FROM kv WHERE scope = $1 AND session_id = $2 AND key = $3")
                .bind(scope.as_str())
                .bind(&session)
                .bind(&key)
                .execute(&self.pool)
                .await?;
            Ok(())
        }
    }

    fn end_session(&self) -> impl Future<Output = anyhow::Result<()>> + Send {
        async move {
            let mut session = self.session.write().await;
            *session = start_session(&self.pool, OffsetDateTime::now_utc()).await?;
            Ok(())
        }
    }
}
