use crate::{
    catalog::Catalog,
    config::Config,
    core::{
        layout::Viewport,
        portfolio::ViewportClass,
        route::{History, Route},
        store::{SessionSnapshot, Store},
    },
};

/// State shared by every screen.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub store: Store,
    pub config: Config,
    /// Session flags as loaded at startup, kept current by the writes this
    /// process makes.
    pub session: SessionSnapshot,
    pub viewport: Viewport,
    pub history: History,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        store: Store,
        config: Config,
        session: SessionSnapshot,
        initial: Route,
    ) -> Self {
        Self {
            catalog,
            store,
            config,
            session,
            viewport: Viewport::default(),
            history: History::new(initial),
        }
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport.class(self.config.narrow_breakpoint)
    }
}
