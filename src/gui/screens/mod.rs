pub mod landing_page;
pub mod project_detail;

use iced::{Element, Subscription, Task};

use crate::{
    core::{layout::Viewport, route::Route},
    gui::{AppState, Message},
    profile::PROFILE,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
    /// Timers and frame loops only run while the screen is mounted.
    fn subscription(&self) -> Subscription<ScreenMessage<Self>> {
        Subscription::none()
    }
    fn unmount(&mut self) {}
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(landing_page::LandingPageScreen),
    ProjectDetail(project_detail::ProjectDetailScreen),
}

impl ScreenData {
    pub fn mount(route: Route, state: &AppState) -> (Self, Task<ScreenMessage<Self>>) {
        tracing::debug!(%route, "Mounting screen");
        match route {
            Route::Landing => {
                let (screen, task) = landing_page::LandingPageScreen::mount(state);
                (
                    ScreenData::LandingPage(screen),
                    task.map(Message::LandingPage)
                        .map(ScreenMessage::ScreenMessage),
                )
            }
            Route::ProjectDetail(id) => {
                let (screen, task) = project_detail::ProjectDetailScreen::mount(id, state);
                (
                    ScreenData::ProjectDetail(screen),
                    task.map(Message::ProjectDetail)
                        .map(ScreenMessage::ScreenMessage),
                )
            }
        }
    }

    pub fn title(&self) -> String {
        match self {
            ScreenData::LandingPage(_) => format!("{} - Portfolio", PROFILE.name),
            ScreenData::ProjectDetail(screen) => screen.title(),
        }
    }

    /// Show `route`, reusing the detail screen when only the id changes.
    fn show(&mut self, route: Route, state: &AppState) -> Task<ScreenMessage<Self>> {
        if let (ScreenData::ProjectDetail(page), Route::ProjectDetail(id)) = (&mut *self, &route) {
            return page
                .navigate(id.clone(), state)
                .map(Message::ProjectDetail)
                .map(ScreenMessage::ScreenMessage);
        }
        self.unmount();
        let (screen, task) = Self::mount(route, state);
        *self = screen;
        task
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view(state).map(Message::LandingPage),
            ScreenData::ProjectDetail(screen) => screen.view(state).map(Message::ProjectDetail),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(route)) => {
                let route = state.history.push(route).clone();
                x.show(route, state)
            }
            (x, Message::Back) => {
                let route = state.history.back().clone();
                x.show(route, state)
            }
            (x, Message::WindowResized(size)) => {
                state.viewport = Viewport {
                    width: size.width,
                    height: size.height,
                };
                if let ScreenData::LandingPage(page) = x {
                    page.resize(state);
                }
                Task::none()
            }
            (ScreenData::LandingPage(page), Message::LandingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::LandingPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    landing_page::ParentMessage::OpenProject(id) => Task::done(
                        ScreenMessage::ScreenMessage(Message::Navigate(Route::ProjectDetail(id))),
                    ),
                },
            },
            (ScreenData::ProjectDetail(page), Message::ProjectDetail(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ProjectDetail)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    project_detail::ParentMessage::Back => {
                        Task::done(ScreenMessage::ScreenMessage(Message::Back))
                    }
                    project_detail::ParentMessage::OpenProject(id) => Task::done(
                        ScreenMessage::ScreenMessage(Message::Navigate(Route::ProjectDetail(id))),
                    ),
                },
            },
            // late messages from a screen that is no longer mounted
            (_, message) => {
                tracing::debug!(?message, "Dropping message for unmounted screen");
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.subscription().map(Message::LandingPage),
            ScreenData::ProjectDetail(screen) => {
                screen.subscription().map(Message::ProjectDetail)
            }
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn unmount(&mut self) {
        match self {
            ScreenData::LandingPage(screen) => screen.unmount(),
            ScreenData::ProjectDetail(screen) => screen.unmount(),
        }
    }
}
