mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from folio for tests
pub use folio::core::store::{
    LAST_SECTION, PROJECTS, Scope, WELCOME_SEEN, mark_welcome_seen, mirror_catalog,
    rehydrate_catalog, save_last_section,
};
pub use folio::{
    Catalog, Config, MemoryStore, ProjectId, ProjectRecord, SessionSnapshot, SessionStore,
    SourceLink, SqliteStore,
};
