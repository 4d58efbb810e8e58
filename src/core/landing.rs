//! Landing composition: welcome gating, section tracking and scroll
//! restoration, plus the content state mounted once the intro is over.

use std::time::Instant;

use crate::config::Config;

use super::{
    layout::{SectionLayout, Viewport},
    parallax::{ParallaxDriver, visible_blobs},
    portfolio::{TabController, ViewportClass},
    reveal::RevealTracker,
    store::SessionSnapshot,
    timer::OneShot,
    welcome::{Typewriter, WelcomeEvent, WelcomeSequence},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Portfolio, Section::Contact];

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Portfolio => 1,
            Section::Contact => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Side effects requested by the orchestrator; the view performs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingEffect {
    PersistWelcomeSeen,
    PersistSection(Section),
    ScrollTo(Section),
}

/// State that only exists once the landing content is revealed.
#[derive(Debug, Clone)]
pub struct LandingContent {
    pub tabs: TabController,
    pub parallax: ParallaxDriver,
    pub reveal: RevealTracker<Section>,
    pub tagline: Typewriter,
}

impl LandingContent {
    fn mount(class: ViewportClass, tagline: &str, config: &Config, now: Instant) -> Self {
        let narrow = class == ViewportClass::Narrow;
        // the hero fills the first viewport, so it is on screen from the start
        let mut reveal = RevealTracker::new(config.section_reveal);
        reveal.reveal_now(Section::Home);
        Self {
            tabs: TabController::new(class),
            parallax: ParallaxDriver::mount(
                visible_blobs(narrow),
                config.parallax_transition,
                now,
            ),
            reveal,
            tagline: Typewriter::start(tagline, config.tagline_typing_interval, now),
        }
    }

    pub fn set_viewport(&mut self, class: ViewportClass, now: Instant) {
        self.tabs.set_viewport(class);
        self.parallax
            .set_visible(visible_blobs(class == ViewportClass::Narrow), now);
    }
}

#[derive(Debug, Clone)]
pub struct LandingOrchestrator {
    welcome: WelcomeSequence,
    last_section: Section,
    restore: Option<(OneShot, Section)>,
    content: Option<LandingContent>,
    tagline: String,
    config: Config,
}

impl LandingOrchestrator {
    pub fn mount(
        session: &SessionSnapshot,
        name: &str,
        tagline: &str,
        class: ViewportClass,
        config: &Config,
        now: Instant,
    ) -> Self {
        let welcome = WelcomeSequence::mount(session.welcome_seen, name, config, now);
        let last_section = session.last_section.unwrap_or_default();
        let mut landing = Self {
            welcome,
            last_section,
            restore: None,
            content: None,
            tagline: tagline.to_string(),
            config: config.clone(),
        };
        if landing.welcome.is_revealed() {
            landing.content = Some(LandingContent::mount(class, tagline, config, now));
            if last_section != Section::Home {
                tracing::debug!(section = last_section.as_str(), "Scheduling scroll restore");
                landing.restore = Some((OneShot::start(now, config.restore_delay), last_section));
            }
        }
        landing
    }

    pub fn welcome(&self) -> &WelcomeSequence {
        &self.welcome
    }

    pub fn content(&self) -> Option<&LandingContent> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut LandingContent> {
        self.content.as_mut()
    }

    pub fn last_section(&self) -> Section {
        self.last_section
    }

    /// Whether a one-shot timer is pending and the view needs ticks.
    pub fn is_ticking(&self) -> bool {
        self.welcome.is_ticking() || self.restore.as_ref().is_some_and(|(t, _)| t.is_armed())
    }

    pub fn tick(&mut self, class: ViewportClass, now: Instant) -> Vec<LandingEffect> {
        let mut effects = Vec::new();
        if let Some(WelcomeEvent::Completed) = self.welcome.tick(now) {
            self.content = Some(LandingContent::mount(class, &self.tagline, &self.config, now));
            effects.push(LandingEffect::PersistWelcomeSeen);
        }
        if let Some((timer, section)) = self.restore.as_mut() {
            if timer.poll(now) {
                effects.push(LandingEffect::ScrollTo(*section));
                if let Some(content) = self.content.as_mut() {
                    content.reveal.reveal_now(*section);
                }
            }
        }
        effects
    }

    /// Track the section crossing the viewport midpoint. Only changes are
    /// reported, and nothing is tracked while a restore is still pending.
    pub fn on_scroll(
        &mut self,
        layout: &SectionLayout,
        scroll_y: f32,
        viewport: Viewport,
        now: Instant,
    ) -> Option<LandingEffect> {
        let content = self.content.as_mut()?;
        content.parallax.on_scroll(scroll_y);
        content
            .reveal
            .observe(layout.tops(), scroll_y, viewport.height, now);

        if self.restore.as_ref().is_some_and(|(t, _)| t.is_armed()) {
            return None;
        }
        let section = layout.section_at(scroll_y, viewport.height);
        if section == self.last_section {
            return None;
        }
        self.last_section = section;
        Some(LandingEffect::PersistSection(section))
    }

    /// Release timers and the frame loop; called when the view goes away.
    pub fn unmount(&mut self) {
        self.welcome.cancel();
        if let Some((timer, _)) = self.restore.as_mut() {
            timer.cancel();
        }
        if let Some(content) = self.content.as_mut() {
            content.parallax.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::portfolio::TabController;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn layout(viewport: Viewport) -> SectionLayout {
        let tabs = TabController::new(viewport.class(768.0));
        SectionLayout::measure(viewport, 768.0, &tabs, 6, 14)
    }

    #[test]
    fn test_section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
        assert_eq!(Section::parse("Footer"), None);
    }

    #[test]
    fn test_first_visit_reveals_after_intro() {
        let config = Config::default();
        let start = Instant::now();
        let mut landing = LandingOrchestrator::mount(
            &SessionSnapshot::default(),
            "Name",
            "Tagline",
            ViewportClass::Wide,
            &config,
            start,
        );
        assert!(landing.content().is_none());
        assert!(landing.is_ticking());

        assert!(landing.tick(ViewportClass::Wide, start + ms(3000)).is_empty());
        let effects = landing.tick(ViewportClass::Wide, start + ms(4000));
        assert_eq!(effects, [LandingEffect::PersistWelcomeSeen]);
        assert!(!landing.is_ticking());
        assert!(landing.tick(ViewportClass::Wide, start + ms(9000)).is_empty());

        let content = landing.content().unwrap();
        assert_eq!(content.reveal.opacity(Section::Home, start + ms(4000)), 1.0);
        assert_eq!(content.reveal.opacity(Section::Contact, start + ms(4000)), 0.0);
    }

    #[test]
    fn test_return_visit_restores_section() {
        let config = Config::default();
        let start = Instant::now();
        let session = SessionSnapshot {
            welcome_seen: true,
            last_section: Some(Section::Portfolio),
        };
        let mut landing = LandingOrchestrator::mount(
            &session,
            "Name",
            "Tagline",
            ViewportClass::Wide,
            &config,
            start,
        );
        assert!(landing.content().is_some());

        // scroll events during the settle delay do not overwrite the section
        let viewport = Viewport::default();
        assert_eq!(
            landing.on_scroll(&layout(viewport), 0.0, viewport, start),
            None
        );

        assert!(landing.tick(ViewportClass::Wide, start + ms(299)).is_empty());
        assert_eq!(
            landing.tick(ViewportClass::Wide, start + ms(300)),
            [LandingEffect::ScrollTo(Section::Portfolio)]
        );
        assert!(landing.tick(ViewportClass::Wide, start + ms(600)).is_empty());
    }

    #[test]
    fn test_home_section_is_not_restored() {
        let config = Config::default();
        let session = SessionSnapshot {
            welcome_seen: true,
            last_section: Some(Section::Home),
        };
        let start = Instant::now();
        let mut landing = LandingOrchestrator::mount(
            &session,
            "Name",
            "Tagline",
            ViewportClass::Wide,
            &config,
            start,
        );
        assert!(!landing.is_ticking());
        assert!(landing.tick(ViewportClass::Wide, start + ms(1000)).is_empty());
    }

    #[test]
    fn test_scroll_persists_only_changes() {
        let config = Config::default();
        let session = SessionSnapshot {
            welcome_seen: true,
            last_section: None,
        };
        let start = Instant::now();
        let viewport = Viewport::default();
        let layout = layout(viewport);
        let mut landing = LandingOrchestrator::mount(
            &session,
            "Name",
            "Tagline",
            viewport.class(768.0),
            &config,
            start,
        );

        assert_eq!(landing.on_scroll(&layout, 10.0, viewport, start), None);
        assert_eq!(
            landing.on_scroll(&layout, viewport.height, viewport, start),
            Some(LandingEffect::PersistSection(Section::Portfolio))
        );
        assert_eq!(
            landing.on_scroll(&layout, viewport.height + 5.0, viewport, start),
            None
        );
        assert_eq!(landing.last_section(), Section::Portfolio);
    }

    #[test]
    fn test_scroll_ignored_during_intro() {
        let config = Config::default();
        let start = Instant::now();
        let viewport = Viewport::default();
        let mut landing = LandingOrchestrator::mount(
            &SessionSnapshot::default(),
            "Name",
            "Tagline",
            ViewportClass::Wide,
            &config,
            start,
        );
        assert_eq!(
            landing.on_scroll(&layout(viewport), 2000.0, viewport, start),
            None
        );
    }

    #[test]
    fn test_unmount_before_intro_completes() {
        let config = Config::default();
        let start = Instant::now();
        let mut landing = LandingOrchestrator::mount(
            &SessionSnapshot::default(),
            "Name",
            "Tagline",
            ViewportClass::Wide,
            &config,
            start,
        );
        landing.unmount();
        assert!(!landing.is_ticking());
        assert!(landing.tick(ViewportClass::Wide, start + ms(60_000)).is_empty());
        assert!(landing.content().is_none());
    }
}
