//! Deterministic layout of the landing page.
//!
//! The landing view renders its sections with these fixed sizes, so section
//! tops can be computed here instead of being measured from the renderer.

use super::{
    landing::Section,
    portfolio::{Tab, TabController, ViewportClass},
};

pub const PORTFOLIO_HEADER_HEIGHT: f32 = 160.0;
pub const TAB_BAR_HEIGHT: f32 = 56.0;
pub const CARD_HEIGHT: f32 = 380.0;
pub const BADGE_HEIGHT: f32 = 120.0;
pub const GRID_SPACING: f32 = 20.0;
pub const TOGGLE_ROW_HEIGHT: f32 = 64.0;
pub const SECTION_PADDING: f32 = 40.0;

/// Viewports at least this wide get a third project column.
const WIDE_GRID_BREAKPOINT: f32 = 1536.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn class(&self, breakpoint: f32) -> ViewportClass {
        ViewportClass::from_width(self.width, breakpoint)
    }

    pub fn project_columns(&self, breakpoint: f32) -> usize {
        match self.class(breakpoint) {
            ViewportClass::Narrow => 1,
            ViewportClass::Wide if self.width >= WIDE_GRID_BREAKPOINT => 3,
            ViewportClass::Wide => 2,
        }
    }

    pub fn badge_columns(&self, breakpoint: f32) -> usize {
        match self.class(breakpoint) {
            ViewportClass::Narrow => 2,
            ViewportClass::Wide => 6,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

fn grid_height(items: usize, columns: usize, cell: f32) -> f32 {
    let rows = items.div_ceil(columns.max(1));
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * cell + (rows - 1) as f32 * GRID_SPACING
}

/// Top edge of each section, in scroll coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    tops: [f32; 3],
}

impl SectionLayout {
    pub fn measure(
        viewport: Viewport,
        breakpoint: f32,
        tabs: &TabController,
        project_count: usize,
        badge_count: usize,
    ) -> Self {
        let hero = viewport.height;
        let panel = match tabs.active() {
            Tab::Projects => {
                let pagination = tabs.pagination();
                let shown = pagination.visible_count(project_count);
                let toggle = if pagination.shows_toggle(project_count) {
                    TOGGLE_ROW_HEIGHT
                } else {
                    0.0
                };
                grid_height(shown, viewport.project_columns(breakpoint), CARD_HEIGHT) + toggle
            }
            Tab::TechStack => {
                grid_height(badge_count, viewport.badge_columns(breakpoint), BADGE_HEIGHT)
            }
        };
        let portfolio =
            PORTFOLIO_HEADER_HEIGHT + TAB_BAR_HEIGHT + panel + 2.0 * SECTION_PADDING;
        Self {
            tops: [0.0, hero, hero + portfolio],
        }
    }

    pub fn top(&self, section: Section) -> f32 {
        self.tops[section.index()]
    }

    pub fn tops(&self) -> impl Iterator<Item = (Section, f32)> + '_ {
        Section::ALL.into_iter().map(|section| (section, self.top(section)))
    }

    /// The last section whose top edge is at or above the viewport midpoint.
    pub fn section_at(&self, scroll_y: f32, viewport_height: f32) -> Section {
        let midpoint = scroll_y + viewport_height / 2.0;
        self.tops()
            .filter(|(_, top)| *top <= midpoint)
            .map(|(section, _)| section)
            .last()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tops_follow_pagination() {
        let viewport = Viewport {
            width: 1024.0,
            height: 800.0,
        };
        let mut tabs = TabController::new(viewport.class(768.0));
        let collapsed = SectionLayout::measure(viewport, 768.0, &tabs, 6, 14);
        assert_eq!(collapsed.top(Section::Home), 0.0);
        assert_eq!(collapsed.top(Section::Portfolio), 800.0);

        tabs.toggle_projects();
        let expanded = SectionLayout::measure(viewport, 768.0, &tabs, 6, 14);
        assert!(expanded.top(Section::Contact) > collapsed.top(Section::Contact));
    }

    #[test]
    fn test_section_at_midpoint() {
        let viewport = Viewport {
            width: 1024.0,
            height: 800.0,
        };
        let tabs = TabController::new(viewport.class(768.0));
        let layout = SectionLayout::measure(viewport, 768.0, &tabs, 6, 14);

        assert_eq!(layout.section_at(0.0, 800.0), Section::Home);
        assert_eq!(layout.section_at(399.0, 800.0), Section::Home);
        assert_eq!(layout.section_at(400.0, 800.0), Section::Portfolio);
        let contact = layout.top(Section::Contact);
        assert_eq!(layout.section_at(contact - 400.0, 800.0), Section::Contact);
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(0, 2, 100.0), 0.0);
        assert_eq!(grid_height(3, 2, 100.0), 220.0);
        assert_eq!(grid_height(4, 2, 100.0), 220.0);
    }
}
