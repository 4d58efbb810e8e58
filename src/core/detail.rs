//! Resolution and link guarding for the per-project page.

use crate::catalog::{Catalog, ProjectId, ProjectRecord, SourceLink};

/// Informational message shown in place of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PRIVATE_SOURCE_NOTICE: Notice = Notice {
    title: "Code source privé",
    body: "Le code source de ce projet est privé.",
};

/// What following a link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Open(String),
    Notice(Notice),
    /// Rendered as text, not a control
    Disabled,
}

pub fn source_action(project: &ProjectRecord) -> LinkAction {
    match &project.source {
        Some(SourceLink::Public(url)) => LinkAction::Open(url.clone()),
        Some(SourceLink::Private) => LinkAction::Notice(PRIVATE_SOURCE_NOTICE),
        None => LinkAction::Disabled,
    }
}

pub fn demo_action(project: &ProjectRecord) -> LinkAction {
    match project.demo_url() {
        Some(url) => LinkAction::Open(url.to_string()),
        None => LinkAction::Disabled,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub technologies: usize,
    pub features: usize,
}

impl ProjectStats {
    pub fn of(project: &ProjectRecord) -> Self {
        Self {
            technologies: project.tech_stack.len(),
            features: project.features.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Found(ProjectRecord),
    /// Terminal for this navigation
    NotFound,
}

#[derive(Debug, Clone)]
pub struct DetailView {
    id: ProjectId,
    state: DetailState,
}

impl DetailView {
    pub fn resolve(catalog: &Catalog, id: ProjectId) -> Self {
        let state = match catalog.find(id.as_str()) {
            Some(project) => DetailState::Found(project.clone()),
            None => {
                tracing::info!(%id, "Project not found");
                DetailState::NotFound
            }
        };
        Self { id, state }
    }

    /// Show another project in place. Returns whether the scroll position
    /// must be reset, which is the case for every id change.
    pub fn navigate(&mut self, catalog: &Catalog, id: ProjectId) -> bool {
        if id == self.id {
            return false;
        }
        *self = Self::resolve(catalog, id);
        true
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn project(&self) -> Option<&ProjectRecord> {
        match &self.state {
            DetailState::Found(project) => Some(project),
            DetailState::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_id_resolves_exactly() {
        let catalog = Catalog::builtin();
        for project in catalog.projects() {
            let view = DetailView::resolve(&catalog, project.id.clone());
            assert_eq!(view.project(), Some(project));
        }
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let catalog = Catalog::builtin();
        let view = DetailView::resolve(&catalog, ProjectId::new("42"));
        assert_eq!(view.state(), &DetailState::NotFound);
        assert!(view.project().is_none());
    }

    #[test]
    fn test_navigate_resets_scroll_on_id_change() {
        let catalog = Catalog::builtin();
        let mut view = DetailView::resolve(&catalog, ProjectId::new("1"));
        assert!(!view.navigate(&catalog, ProjectId::new("1")));
        assert!(view.navigate(&catalog, ProjectId::new("2")));
        assert_eq!(view.project().unwrap().title, "Zoo Arcadia");
        assert!(view.navigate(&catalog, ProjectId::new("nope")));
        assert!(view.project().is_none());
    }

    #[test]
    fn test_private_source_is_guarded() {
        let catalog = Catalog::builtin();
        let private = catalog.find("2").unwrap();
        assert_eq!(
            source_action(private),
            LinkAction::Notice(PRIVATE_SOURCE_NOTICE)
        );

        let public = catalog.find("4").unwrap();
        assert_eq!(
            source_action(public),
            LinkAction::Open("https://github.com/rabaasourour/jeu-de-memoir".into())
        );
    }

    #[test]
    fn test_missing_demo_is_disabled() {
        let catalog = Catalog::builtin();
        assert_eq!(demo_action(catalog.find("3").unwrap()), LinkAction::Disabled);
        assert!(matches!(
            demo_action(catalog.find("2").unwrap()),
            LinkAction::Open(_)
        ));
        assert_eq!(source_action(catalog.find("6").unwrap()), LinkAction::Disabled);
    }

    #[test]
    fn test_stats() {
        let catalog = Catalog::builtin();
        let stats = ProjectStats::of(catalog.find("2").unwrap());
        assert_eq!(stats.technologies, 5);
        assert_eq!(stats.features, 4);
    }
}
