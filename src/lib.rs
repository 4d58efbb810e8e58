pub mod catalog;
pub mod config;
pub mod core;
pub mod profile;

pub use catalog::{Catalog, CatalogError, ProjectId, ProjectRecord, SourceLink};
pub use config::Config;
pub use core::route::{Route, RouteError};
pub use core::store::{MemoryStore, SessionSnapshot, SessionStore, SqliteStore, Store};

#[cfg(feature = "gui")]
pub mod gui;
