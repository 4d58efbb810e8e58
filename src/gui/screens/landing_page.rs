use std::time::{Duration, Instant};

use iced::{
    Alignment::Center,
    Color, Element, Length, Point, Subscription, Task,
    widget::{
        Canvas, Column, Id, Row, button, column, container, mouse_area, operation, row,
        scrollable::{self, AbsoluteOffset},
        stack, text,
    },
};
use iced_aw::{TabBar, TabLabel};

use crate::{
    catalog::ProjectId,
    core::{
        detail::{self, LinkAction},
        landing::{LandingContent, LandingEffect, LandingOrchestrator, Section},
        layout::{
            GRID_SPACING, PORTFOLIO_HEADER_HEIGHT, SECTION_PADDING, SectionLayout, TAB_BAR_HEIGHT,
            TOGGLE_ROW_HEIGHT,
        },
        portfolio::{SwipeTracker, Tab},
        store,
    },
    gui::{
        AppState, links,
        screens::{Screen, ScreenMessage},
        widgets::{ACCENT, Blobs, faded, project_card, tech_badge},
    },
    profile::PROFILE,
};

/// Timer resolution for the intro, typewriters and section reveals.
const TICK: Duration = Duration::from_millis(16);

fn scroll_id() -> Id {
    Id::new("landing")
}

#[derive(Debug, Clone)]
pub struct LandingPageScreen {
    landing: LandingOrchestrator,
    swipe: SwipeTracker,
    /// Clock of the last processed event; views render against it.
    now: Instant,
}

#[derive(Debug, Clone)]
pub enum LandingPageMessage {
    Tick(Instant),
    Frame(Instant),
    Scrolled(scrollable::Viewport),
    JumpTo(Section),
    TabSelected(Tab),
    ToggleProjects,
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    OpenLink(LinkAction),
    Persisted(Result<(), String>),
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenProject(ProjectId),
}

fn local(message: LandingPageMessage) -> ScreenMessage<LandingPageScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn persisted(result: anyhow::Result<()>) -> ScreenMessage<LandingPageScreen> {
    local(LandingPageMessage::Persisted(
        result.map_err(|err| format!("{err:#}")),
    ))
}

impl LandingPageScreen {
    pub fn mount(state: &AppState) -> (Self, Task<ScreenMessage<Self>>) {
        let now = Instant::now();
        let landing = LandingOrchestrator::mount(
            &state.session,
            PROFILE.name,
            PROFILE.tagline,
            state.viewport_class(),
            &state.config,
            now,
        );
        let mirror = Task::perform(
            store::mirror_catalog(state.store.clone(), state.catalog.clone()),
            persisted,
        );
        (
            Self {
                landing,
                swipe: SwipeTracker::default(),
                now,
            },
            mirror,
        )
    }

    pub fn resize(&mut self, state: &AppState) {
        let class = state.viewport_class();
        if let Some(content) = self.landing.content_mut() {
            content.set_viewport(class, Instant::now());
        }
    }

    fn layout(&self, state: &AppState) -> Option<SectionLayout> {
        let content = self.landing.content()?;
        Some(SectionLayout::measure(
            state.viewport,
            state.config.narrow_breakpoint,
            &content.tabs,
            state.catalog.len(),
            PROFILE.tech_badges.len(),
        ))
    }

    fn scroll_to(&mut self, section: Section, state: &AppState) -> Task<ScreenMessage<Self>> {
        let Some(layout) = self.layout(state) else {
            return Task::none();
        };
        if let Some(content) = self.landing.content_mut() {
            content.reveal.reveal_now(section);
        }
        tracing::debug!(section = section.as_str(), "Scrolling to section");
        operation::scroll_to(
            scroll_id(),
            AbsoluteOffset {
                x: 0.0,
                y: layout.top(section),
            },
        )
    }

    fn apply(
        &mut self,
        effects: Vec<LandingEffect>,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let mut tasks = Vec::with_capacity(effects.len());
        for effect in effects {
            let task = match effect {
                LandingEffect::PersistWelcomeSeen => {
                    state.session.welcome_seen = true;
                    Task::perform(store::mark_welcome_seen(state.store.clone()), persisted)
                }
                LandingEffect::PersistSection(section) => {
                    state.session.last_section = Some(section);
                    Task::perform(
                        store::save_last_section(state.store.clone(), section),
                        persisted,
                    )
                }
                LandingEffect::ScrollTo(section) => self.scroll_to(section, state),
            };
            tasks.push(task);
        }
        Task::batch(tasks)
    }

    /// Whether anything drawn depends on the clock.
    fn is_animating(&self) -> bool {
        self.landing.is_ticking()
            || self.landing.content().is_some_and(|content| {
                !content.tagline.is_complete(self.now) || content.reveal.is_animating(self.now)
            })
            || self.landing.welcome().content_opacity(self.now) < 1.0
    }

    fn intro<'a>(&'a self) -> Element<'a, ScreenMessage<Self>> {
        let welcome = self.landing.welcome();
        let alpha = welcome.intro_opacity(self.now);
        let name = format!("{}|", welcome.typed_name(self.now));

        let icons = row!["</>", "@", "#"].spacing(24).align_y(Center);
        let content = column![
            icons,
            text("Welcome To My")
                .size(48)
                .color(faded(Color::WHITE, alpha)),
            text("Portfolio").size(64).color(faded(ACCENT, alpha)),
            button(text(name).size(22).color(faded(Color::WHITE, alpha)))
                .style(button::text)
                .on_press(local(LandingPageMessage::OpenLink(LinkAction::Open(
                    PROFILE.site.to_string()
                )))),
        ]
        .spacing(20)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn hero<'a>(
        &'a self,
        content: &'a LandingContent,
        state: &'a AppState,
        alpha: f32,
    ) -> Element<'a, ScreenMessage<Self>> {
        let alpha = alpha * content.reveal.opacity(Section::Home, self.now);
        let tagline = format!("{}|", content.tagline.visible(self.now));

        let tech = Column::with_children(PROFILE.tech_summary.iter().map(|line| {
            text(*line)
                .size(14)
                .color(faded(Color::WHITE, 0.6 * alpha))
                .into()
        }))
        .spacing(4);
        let actions = row![
            button(text("Projets")).on_press(local(LandingPageMessage::JumpTo(Section::Portfolio))),
            button(text("Contact"))
                .style(button::secondary)
                .on_press(local(LandingPageMessage::JumpTo(Section::Contact))),
        ]
        .spacing(16);
        let social = Row::with_children(PROFILE.social.iter().map(|link| {
            button(text(link.label))
                .style(button::text)
                .on_press(local(LandingPageMessage::OpenLink(LinkAction::Open(
                    link.url.to_string(),
                ))))
                .into()
        }))
        .spacing(12);

        let body = column![
            text(PROFILE.headline[0])
                .size(56)
                .color(faded(Color::WHITE, alpha)),
            text(PROFILE.headline[1]).size(56).color(faded(ACCENT, alpha)),
            text(tagline).size(22).color(faded(Color::WHITE, 0.8 * alpha)),
            text(PROFILE.summary)
                .size(16)
                .color(faded(Color::WHITE, 0.7 * alpha)),
            tech,
            actions,
            social,
        ]
        .spacing(20)
        .max_width(720);

        container(body)
            .padding(SECTION_PADDING)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(state.viewport.height))
            .into()
    }

    fn portfolio<'a>(
        &'a self,
        content: &'a LandingContent,
        state: &'a AppState,
        alpha: f32,
    ) -> Element<'a, ScreenMessage<Self>> {
        let alpha = alpha * content.reveal.opacity(Section::Portfolio, self.now);
        let breakpoint = state.config.narrow_breakpoint;

        let header = container(
            column![
                text("Mes Projets & Compétences")
                    .size(40)
                    .color(faded(ACCENT, alpha)),
                text(
                    "Découvrez mes réalisations concrètes et les technologies que je maîtrise \
                     à travers différents projets web."
                )
                .size(16)
                .color(faded(Color::WHITE, 0.6 * alpha)),
            ]
            .spacing(12)
            .align_x(Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PORTFOLIO_HEADER_HEIGHT));

        let tabs = Tab::ALL
            .into_iter()
            .fold(
                TabBar::new(|tab| local(LandingPageMessage::TabSelected(tab))),
                |bar, tab| bar.push(tab, TabLabel::Text(tab.label().to_string())),
            )
            .set_active_tab(&content.tabs.active())
            .width(Length::Fill)
            .height(Length::Fixed(TAB_BAR_HEIGHT));

        let panel: Element<'a, ScreenMessage<Self>> = match content.tabs.active() {
            Tab::Projects => {
                let pagination = content.tabs.pagination();
                let columns = state.viewport.project_columns(breakpoint);
                let mut grid = Column::new().spacing(GRID_SPACING);
                for chunk in pagination.displayed(&state.catalog).chunks(columns) {
                    let mut cells = Row::new().spacing(GRID_SPACING);
                    for project in chunk {
                        let demo = match detail::demo_action(project) {
                            action @ LinkAction::Open(_) => {
                                Some(local(LandingPageMessage::OpenLink(action)))
                            }
                            _ => None,
                        };
                        let details = ScreenMessage::ParentMessage(ParentMessage::OpenProject(
                            project.id.clone(),
                        ));
                        cells = cells.push(project_card(project, demo, details, alpha));
                    }
                    for _ in chunk.len()..columns {
                        cells = cells.push(container(Column::new()).width(Length::FillPortion(1)));
                    }
                    grid = grid.push(cells);
                }
                if pagination.shows_toggle(state.catalog.len()) {
                    let label = if pagination.is_expanded() {
                        "Voir moins"
                    } else {
                        "Voir plus"
                    };
                    column![
                        grid,
                        container(
                            button(text(label))
                                .style(button::secondary)
                                .on_press(local(LandingPageMessage::ToggleProjects))
                        )
                        .center_x(Length::Fill)
                        .center_y(Length::Fixed(TOGGLE_ROW_HEIGHT)),
                    ]
                    .into()
                } else {
                    grid.into()
                }
            }
            Tab::TechStack => {
                let columns = state.viewport.badge_columns(breakpoint);
                let mut grid = Column::new().spacing(GRID_SPACING);
                for chunk in PROFILE.tech_badges.chunks(columns) {
                    let mut cells = Row::new().spacing(GRID_SPACING);
                    for badge in chunk {
                        cells = cells.push(tech_badge(badge, alpha));
                    }
                    for _ in chunk.len()..columns {
                        cells = cells.push(container(Column::new()).width(Length::FillPortion(1)));
                    }
                    grid = grid.push(cells);
                }
                grid.into()
            }
        };

        let swipeable = mouse_area(panel)
            .on_move(|point| local(LandingPageMessage::PointerMoved(point)))
            .on_press(local(LandingPageMessage::PointerPressed))
            .on_release(local(LandingPageMessage::PointerReleased))
            .on_exit(local(LandingPageMessage::PointerLeft));

        column![header, tabs, swipeable]
            .padding(SECTION_PADDING)
            .into()
    }

    fn contact<'a>(
        &'a self,
        content: &'a LandingContent,
        state: &'a AppState,
        alpha: f32,
    ) -> Element<'a, ScreenMessage<Self>> {
        let alpha = alpha * content.reveal.opacity(Section::Contact, self.now);

        let links = Column::with_children(PROFILE.social.iter().map(|link| {
            button(
                container(text(link.label).size(18))
                    .center_x(Length::Fixed(240.0)),
            )
            .style(button::secondary)
            .padding(14)
            .on_press(local(LandingPageMessage::OpenLink(LinkAction::Open(
                link.url.to_string(),
            ))))
            .into()
        }))
        .spacing(16)
        .align_x(Center);

        let body = column![
            text("Restons en contact")
                .size(44)
                .color(faded(ACCENT, alpha)),
            text(
                "Vous souhaitez collaborer, poser une question ou simplement dire bonjour ? \
                 Voici comment me joindre."
            )
            .size(16)
            .color(faded(Color::WHITE, 0.6 * alpha)),
            links,
            text("Je réponds toujours avec plaisir")
                .size(14)
                .color(faded(Color::WHITE, 0.5 * alpha)),
            text(format!("© 2025 {}. All Rights Reserved.", PROFILE.name))
                .size(12)
                .color(faded(Color::WHITE, 0.4 * alpha)),
        ]
        .spacing(24)
        .align_x(Center);

        container(body)
            .padding(SECTION_PADDING)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(state.viewport.height))
            .into()
    }
}

impl Screen for LandingPageScreen {
    type Message = LandingPageMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(content) = self.landing.content() else {
            return self.intro();
        };
        let alpha = self.landing.welcome().content_opacity(self.now);

        let page = scrollable::Scrollable::new(column![
            self.hero(content, state, alpha),
            self.portfolio(content, state, alpha),
            self.contact(content, state, alpha),
        ])
        .id(scroll_id())
        .on_scroll(|viewport| local(LandingPageMessage::Scrolled(viewport)))
        .width(Length::Fill)
        .height(Length::Fill);

        let background = Canvas::new(Blobs::new(content.parallax.offsets(self.now)))
            .width(Length::Fill)
            .height(Length::Fill);

        stack![background, page].into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LandingPageMessage::Tick(now) => {
                self.now = now;
                let effects = self.landing.tick(state.viewport_class(), now);
                self.apply(effects, state)
            }
            LandingPageMessage::Frame(now) => {
                self.now = now;
                if let Some(content) = self.landing.content_mut() {
                    content.parallax.on_frame(now);
                }
                Task::none()
            }
            LandingPageMessage::Scrolled(viewport) => {
                self.now = Instant::now();
                let Some(layout) = self.layout(state) else {
                    return Task::none();
                };
                let scroll_y = viewport.absolute_offset().y;
                match self
                    .landing
                    .on_scroll(&layout, scroll_y, state.viewport, self.now)
                {
                    Some(effect) => self.apply(vec![effect], state),
                    None => Task::none(),
                }
            }
            LandingPageMessage::JumpTo(section) => self.scroll_to(section, state),
            LandingPageMessage::TabSelected(tab) => {
                if let Some(content) = self.landing.content_mut() {
                    content.tabs.select(tab);
                }
                Task::none()
            }
            LandingPageMessage::ToggleProjects => {
                if let Some(content) = self.landing.content_mut() {
                    content.tabs.toggle_projects();
                }
                Task::none()
            }
            LandingPageMessage::PointerMoved(point) => {
                self.swipe.moved(point.x);
                Task::none()
            }
            LandingPageMessage::PointerPressed => {
                self.swipe.pressed();
                Task::none()
            }
            LandingPageMessage::PointerReleased => {
                let direction = self.swipe.released(state.config.swipe_threshold);
                if let (Some(direction), Some(content)) = (direction, self.landing.content_mut()) {
                    let tab = content.tabs.swipe(direction);
                    tracing::debug!(?direction, ?tab, "Swiped tabs");
                }
                Task::none()
            }
            LandingPageMessage::PointerLeft => {
                self.swipe.cancel();
                Task::none()
            }
            LandingPageMessage::OpenLink(action) => {
                links::follow(action, local(LandingPageMessage::None))
            }
            LandingPageMessage::Persisted(Ok(())) => Task::none(),
            LandingPageMessage::Persisted(Err(err)) => {
                tracing::warn!(error = %err, "Failed to persist session state");
                Task::none()
            }
            LandingPageMessage::None => Task::none(),
        }
    }

    fn subscription(&self) -> Subscription<ScreenMessage<Self>> {
        let mut subscriptions = Vec::new();
        if self.is_animating() {
            subscriptions.push(
                iced::time::every(TICK).map(|now| local(LandingPageMessage::Tick(now))),
            );
        }
        if self
            .landing
            .content()
            .is_some_and(|content| content.parallax.is_running())
        {
            subscriptions.push(
                iced::window::frames().map(|now| local(LandingPageMessage::Frame(now))),
            );
        }
        Subscription::batch(subscriptions)
    }

    fn unmount(&mut self) {
        self.landing.unmount();
        self.swipe.cancel();
    }
}
