//! State behind the "Projects" / "Tech Stack" panels.

use crate::catalog::{Catalog, ProjectRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Projects,
    TechStack,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Projects, Tab::TechStack];

    pub fn index(self) -> usize {
        match self {
            Tab::Projects => 0,
            Tab::TechStack => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "Projets",
            Tab::TechStack => "Stack Technique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    /// Projects shown before "show more".
    pub fn initial_count(self) -> usize {
        match self {
            ViewportClass::Narrow => 3,
            ViewportClass::Wide => 4,
        }
    }
}

/// Show a prefix of the catalog, or all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    initial: usize,
    expanded: bool,
}

impl Pagination {
    pub fn new(initial: usize) -> Self {
        Self {
            initial,
            expanded: false,
        }
    }

    pub fn for_viewport(class: ViewportClass) -> Self {
        Self::new(class.initial_count())
    }

    /// Change the collapsed size (viewport resize); expansion is kept.
    pub fn set_initial(&mut self, initial: usize) {
        self.initial = initial;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// The toggle is only offered when there is something to expand.
    pub fn shows_toggle(&self, total: usize) -> bool {
        total > self.initial
    }

    pub fn visible_count(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            self.initial.min(total)
        }
    }

    pub fn displayed<'a>(&self, catalog: &'a Catalog) -> &'a [ProjectRecord] {
        catalog.prefix(self.visible_count(catalog.len()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger/pointer moved left: show the next panel
    Left,
    Right,
}

/// Turns a horizontal drag into a swipe once it exceeds the threshold.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    held: bool,
    start: Option<f32>,
    last: Option<f32>,
}

impl SwipeTracker {
    pub fn moved(&mut self, x: f32) {
        // a press with no known position starts at the first move
        if self.held && self.start.is_none() {
            self.start = Some(x);
        }
        self.last = Some(x);
    }

    pub fn pressed(&mut self) {
        self.held = true;
        self.start = self.last;
    }

    pub fn released(&mut self, threshold: f32) -> Option<SwipeDirection> {
        self.held = false;
        let (start, end) = (self.start.take()?, self.last?);
        let dx = end - start;
        if dx <= -threshold {
            Some(SwipeDirection::Left)
        } else if dx >= threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.held = false;
        self.start = None;
        self.last = None;
    }
}

/// Active panel plus pagination. The tab bar and the swipe gesture both go
/// through here, so they always agree on the active index.
#[derive(Debug, Clone)]
pub struct TabController {
    active: Tab,
    pagination: Pagination,
}

impl TabController {
    pub fn new(class: ViewportClass) -> Self {
        Self {
            active: Tab::default(),
            pagination: Pagination::for_viewport(class),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Index reported by the swipeable view. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match Tab::from_index(index) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => false,
        }
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Tab {
        let index = self.active.index();
        let target = match direction {
            SwipeDirection::Left => index + 1,
            SwipeDirection::Right => index.saturating_sub(1),
        };
        self.select_index(target);
        self.active
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn toggle_projects(&mut self) {
        self.pagination.toggle();
    }

    pub fn set_viewport(&mut self, class: ViewportClass) {
        self.pagination.set_initial(class.initial_count());
    }
}
