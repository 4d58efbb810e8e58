//! Integration tests for routing and the views reached through it.
//!
//! Tests cover:
//! - Route selection with and without the base path
//! - Landing → detail → detail → back navigation
//! - Detail resolution against a catalog loaded from the mirror
//! - The portfolio grid and its tab controller

mod common;

use folio::core::{
    detail::{
        DetailState, DetailView, LinkAction, PRIVATE_SOURCE_NOTICE, demo_action, source_action,
    },
    portfolio::{Pagination, SwipeDirection, SwipeTracker, Tab, TabController, ViewportClass},
    route::History,
};
use folio::{Route, RouteError};

use common::*;

const BASE: &str = "/my-portfolio";

#[test]
fn test_deep_links_under_base_path() {
    assert_eq!(Route::parse("/my-portfolio", BASE), Ok(Route::Landing));
    assert_eq!(Route::parse("/my-portfolio/", BASE), Ok(Route::Landing));
    assert_eq!(
        Route::parse("/my-portfolio/project/5", BASE),
        Ok(Route::ProjectDetail(ProjectId::new("5")))
    );
    // the base path is optional
    assert_eq!(
        Route::parse("/project/5", BASE),
        Ok(Route::ProjectDetail(ProjectId::new("5")))
    );
    assert!(matches!(
        Route::parse("/my-portfolio/about", BASE),
        Err(RouteError::Unmatched(_))
    ));
}

#[test]
fn test_route_paths_parse_back() {
    let catalog = Catalog::builtin();
    for project in catalog.projects() {
        let route = Route::ProjectDetail(project.id.clone());
        assert_eq!(Route::parse(&route.to_path(), ""), Ok(route));
    }
}

#[test]
fn test_browse_and_go_back() {
    let catalog = Catalog::builtin();
    let mut history = History::new(Route::Landing);

    // open a card from the grid
    let first = &catalog.projects()[0];
    history.push(Route::ProjectDetail(first.id.clone()));
    let mut detail = DetailView::resolve(&catalog, first.id.clone());
    assert_eq!(detail.project(), Some(first));

    // next project, in place
    let (_, next) = catalog.neighbours(first.id.as_str());
    let next = next.expect("catalog has a second project");
    history.push(Route::ProjectDetail(next.id.clone()));
    assert!(detail.navigate(&catalog, next.id.clone()));
    assert_eq!(detail.project(), Some(next));

    assert_eq!(history.back(), &Route::ProjectDetail(first.id.clone()));
    assert_eq!(history.back(), &Route::Landing);
    // nothing left: stay on the landing view
    assert_eq!(history.back(), &Route::Landing);
}

#[tokio::test]
async fn test_detail_resolves_from_mirror() -> anyhow::Result<()> {
    let store = MemoryStore::default();
    let catalog = make_catalog(&["10", "11"]);
    mirror_catalog(store.clone(), catalog.clone()).await?;

    let rehydrated = rehydrate_catalog(&store)
        .await?
        .expect("mirror should be present");
    let detail = DetailView::resolve(&rehydrated, ProjectId::new("11"));
    assert_eq!(detail.project(), catalog.find("11"));

    let missing = DetailView::resolve(&rehydrated, ProjectId::new("1"));
    assert_eq!(missing.state(), &DetailState::NotFound);

    Ok(())
}

#[test]
fn test_link_guards() {
    let mut project = make_project("1", "Guarded");
    assert!(matches!(demo_action(&project), LinkAction::Open(_)));
    assert!(matches!(source_action(&project), LinkAction::Open(_)));

    project.source = Some(SourceLink::Private);
    project.demo = Some(String::new());
    assert_eq!(
        source_action(&project),
        LinkAction::Notice(PRIVATE_SOURCE_NOTICE)
    );
    assert_eq!(demo_action(&project), LinkAction::Disabled);

    project.source = None;
    project.demo = None;
    assert_eq!(source_action(&project), LinkAction::Disabled);
    assert_eq!(demo_action(&project), LinkAction::Disabled);
}

#[test]
fn test_show_more_with_small_initial() {
    let catalog = make_catalog(&["1", "2", "3"]);
    let mut pagination = Pagination::new(2);
    let ids = |p: &Pagination| -> Vec<String> {
        p.displayed(&catalog)
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    };

    assert_eq!(ids(&pagination), ["1", "2"]);
    pagination.toggle();
    assert_eq!(ids(&pagination), ["1", "2", "3"]);
    pagination.toggle();
    assert_eq!(ids(&pagination), ["1", "2"]);
}

#[test]
fn test_initial_count_never_exceeds_catalog() {
    let small = make_catalog(&["1", "2"]);
    for class in [ViewportClass::Narrow, ViewportClass::Wide] {
        let tabs = TabController::new(class);
        assert_eq!(tabs.pagination().displayed(&small).len(), 2);
        assert!(!tabs.pagination().shows_toggle(small.len()));
    }

    let builtin = Catalog::builtin();
    assert_eq!(
        TabController::new(ViewportClass::Narrow)
            .pagination()
            .displayed(&builtin)
            .len(),
        3
    );
    assert_eq!(
        TabController::new(ViewportClass::Wide)
            .pagination()
            .displayed(&builtin)
            .len(),
        4
    );
}

#[test]
fn test_tab_switch_keeps_pagination() {
    let mut tabs = TabController::new(ViewportClass::Wide);
    tabs.toggle_projects();
    let before = *tabs.pagination();

    tabs.select(Tab::TechStack);
    tabs.select(Tab::Projects);
    assert_eq!(*tabs.pagination(), before);
}

#[test]
fn test_swipe_between_tabs() {
    let mut tabs = TabController::new(ViewportClass::Narrow);
    let mut swipe = SwipeTracker::default();

    // drag left past the threshold
    swipe.moved(300.0);
    swipe.pressed();
    swipe.moved(220.0);
    let direction = swipe.released(50.0);
    assert_eq!(direction, Some(SwipeDirection::Left));
    assert_eq!(tabs.swipe(SwipeDirection::Left), Tab::TechStack);
    // clamped at the last tab
    assert_eq!(tabs.swipe(SwipeDirection::Left), Tab::TechStack);

    // a short drag is a click
    swipe.pressed();
    swipe.moved(240.0);
    assert_eq!(swipe.released(50.0), None);

    assert_eq!(tabs.swipe(SwipeDirection::Right), Tab::Projects);
    assert_eq!(tabs.swipe(SwipeDirection::Right), Tab::Projects);
}

#[test]
fn test_swipe_starting_with_press() {
    let mut tabs = TabController::new(ViewportClass::Wide);
    let mut swipe = SwipeTracker::default();

    // no pointer position is known when the gesture begins
    swipe.pressed();
    swipe.moved(200.0);
    swipe.moved(120.0);
    let direction = swipe.released(50.0);
    assert_eq!(direction, Some(SwipeDirection::Left));
    assert_eq!(tabs.swipe(SwipeDirection::Left), Tab::TechStack);

    // leaving the panel forgets the position
    swipe.moved(400.0);
    swipe.cancel();
    swipe.pressed();
    swipe.moved(300.0);
    swipe.moved(380.0);
    assert_eq!(swipe.released(50.0), Some(SwipeDirection::Right));
}

#[test]
fn test_reopening_current_project_keeps_history() {
    let catalog = Catalog::builtin();
    let first = &catalog.projects()[0];
    let mut history = History::new(Route::Landing);

    history.push(Route::ProjectDetail(first.id.clone()));
    history.push(Route::ProjectDetail(first.id.clone()));

    assert_eq!(history.back(), &Route::Landing);
}
