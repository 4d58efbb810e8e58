use iced::{Element, Size, Subscription, Task, Theme};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
};

const WINDOW_SIZE: Size = Size {
    width: 1280.0,
    height: 800.0,
};

pub struct FolioApp {
    screen: ScreenData,
    state: AppState,
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl FolioApp {
    pub fn new(mut state: AppState) -> (Self, Task<Message>) {
        state.viewport.width = WINDOW_SIZE.width;
        state.viewport.height = WINDOW_SIZE.height;
        let route = state.history.current().clone();
        let (screen, task) = ScreenData::mount(route, &state);
        (Self { screen, state }, task.map(unwrap_screen_message))
    }

    pub fn title(&self) -> String {
        self.screen.title()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(unwrap_screen_message)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.screen.subscription().map(unwrap_screen_message),
            iced::window::resize_events().map(|(_, size)| Message::WindowResized(size)),
        ])
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Open the window and block until it is closed.
    pub fn run(state: AppState) -> iced::Result {
        tracing::info!(route = %state.history.current(), "Launching window");
        iced::application(
            move || FolioApp::new(state.clone()),
            FolioApp::update,
            FolioApp::view,
        )
        .title(FolioApp::title)
        .subscription(FolioApp::subscription)
        .theme(FolioApp::theme)
        .window_size(WINDOW_SIZE)
        .centered()
        .run()
    }
}
