use iced::{
    Alignment::Center,
    Color, Element, Length, Task,
    widget::{
        Column, Id, Row, button, column, container, image, operation, row,
        scrollable::{AbsoluteOffset, Scrollable},
        text,
    },
};

use crate::{
    catalog::{ProjectId, ProjectRecord},
    core::{
        detail::{self, DetailState, DetailView, LinkAction, ProjectStats},
        layout::SECTION_PADDING,
        portfolio::ViewportClass,
    },
    gui::{
        AppState, links,
        screens::{Screen, ScreenMessage},
        widgets::{ACCENT, faded, layout, stat},
    },
    profile::PROFILE,
};

fn scroll_id() -> Id {
    Id::new("project-detail")
}

fn scroll_to_top<T>() -> Task<T> {
    operation::scroll_to(scroll_id(), AbsoluteOffset { x: 0.0, y: 0.0 })
}

#[derive(Debug, Clone)]
pub struct ProjectDetailScreen {
    view: DetailView,
}

#[derive(Debug, Clone)]
pub enum ProjectDetailMessage {
    OpenLink(LinkAction),
    NoticeClosed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Back,
    OpenProject(ProjectId),
}

fn local(message: ProjectDetailMessage) -> ScreenMessage<ProjectDetailScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn parent(message: ParentMessage) -> ScreenMessage<ProjectDetailScreen> {
    ScreenMessage::ParentMessage(message)
}

/// A link control, or plain text when the link leads nowhere.
fn link_button<'a>(
    label: &'a str,
    unavailable: &'a str,
    action: LinkAction,
) -> Element<'a, ScreenMessage<ProjectDetailScreen>> {
    match action {
        LinkAction::Disabled => text(unavailable)
            .size(14)
            .color(faded(Color::WHITE, 0.5))
            .into(),
        action => button(text(label))
            .style(button::secondary)
            .padding([12, 24])
            .on_press(local(ProjectDetailMessage::OpenLink(action)))
            .into(),
    }
}

impl ProjectDetailScreen {
    pub fn mount(id: ProjectId, state: &AppState) -> (Self, Task<ScreenMessage<Self>>) {
        let view = DetailView::resolve(&state.catalog, id);
        (Self { view }, scroll_to_top())
    }

    /// Switch to another project without leaving the screen.
    pub fn navigate(&mut self, id: ProjectId, state: &AppState) -> Task<ScreenMessage<Self>> {
        if self.view.navigate(&state.catalog, id) {
            scroll_to_top()
        } else {
            Task::none()
        }
    }

    pub fn title(&self) -> String {
        match self.view.project() {
            Some(project) => format!("{} - {}", project.title, PROFILE.name),
            None => format!("Projet introuvable - {}", PROFILE.name),
        }
    }

    fn found<'a>(
        &'a self,
        project: &'a ProjectRecord,
        state: &'a AppState,
    ) -> Element<'a, ScreenMessage<Self>> {
        let stats = ProjectStats::of(project);
        let narrow = state.viewport_class() == ViewportClass::Narrow;

        let tech = Row::with_children(project.tech_stack.iter().map(|tech| {
            container(text(tech.as_str()).size(13))
                .padding([6, 12])
                .style(container::bordered_box)
                .into()
        }))
        .spacing(8);

        let info = column![
            text(project.title.as_str()).size(48).color(ACCENT),
            text(project.description.as_str())
                .size(18)
                .color(faded(Color::WHITE, 0.8)),
            row![
                stat(stats.technologies, "Technologies"),
                stat(stats.features, "Fonctionnalités"),
            ]
            .spacing(16),
            row![
                link_button("Voir en ligne", "Démo indisponible", detail::demo_action(project)),
                link_button("Github", "Code source indisponible", detail::source_action(project)),
            ]
            .spacing(16)
            .align_y(Center),
            text("Technologies utilisées").size(20),
            tech,
        ]
        .spacing(24);

        let features = Column::with_children(project.features.iter().map(|feature| {
            text(format!("• {feature}"))
                .size(15)
                .color(faded(Color::WHITE, 0.8))
                .into()
        }))
        .spacing(8);

        let media = column![
            image(image::Handle::from_path(&project.image)).width(Length::Fill),
            container(column![text("Fonctionnalités clés").size(20), features].spacing(12))
                .padding(20)
                .width(Length::Fill)
                .style(container::bordered_box),
        ]
        .spacing(24);

        let (previous, next) = state.catalog.neighbours(project.id.as_str());
        let mut neighbours = Row::new().spacing(16);
        if let Some(previous) = previous {
            neighbours = neighbours.push(
                button(text(format!("← {}", previous.title)))
                    .style(button::text)
                    .on_press(parent(ParentMessage::OpenProject(previous.id.clone()))),
            );
        }
        if let Some(next) = next {
            neighbours = neighbours.push(
                button(text(format!("{} →", next.title)))
                    .style(button::text)
                    .on_press(parent(ParentMessage::OpenProject(next.id.clone()))),
            );
        }

        column![layout(info, media, narrow), neighbours]
            .spacing(40)
            .into()
    }

    fn not_found<'a>(&'a self) -> Element<'a, ScreenMessage<Self>> {
        container(
            column![
                text("Projet introuvable").size(32),
                text(format!("Aucun projet ne correspond à « {} ».", self.view.id()))
                    .color(faded(Color::WHITE, 0.6)),
            ]
            .spacing(16)
            .align_x(Center),
        )
        .center_x(Length::Fill)
        .padding(SECTION_PADDING)
        .into()
    }
}

impl Screen for ProjectDetailScreen {
    type Message = ProjectDetailMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let body = match self.view.state() {
            DetailState::Found(project) => self.found(project, state),
            DetailState::NotFound => self.not_found(),
        };
        let content = column![
            button(text("← Retour"))
                .style(button::secondary)
                .on_press(parent(ParentMessage::Back)),
            body,
        ]
        .spacing(40)
        .padding(SECTION_PADDING)
        .max_width(1280);

        Scrollable::new(container(content).center_x(Length::Fill))
            .id(scroll_id())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectDetailMessage::OpenLink(action) => {
                links::follow(action, local(ProjectDetailMessage::NoticeClosed))
            }
            ProjectDetailMessage::NoticeClosed => Task::none(),
        }
    }
}
