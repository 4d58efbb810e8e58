use iced::Size;

use crate::{
    core::route::Route,
    gui::screens::{
        ScreenMessage, landing_page::LandingPageScreen, project_detail::ProjectDetailScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    ProjectDetail(ScreenMessage<ProjectDetailScreen>),
    Navigate(Route),
    Back,
    WindowResized(Size),
}
