use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::core::detail::LinkAction;

/// Follow a link: external URLs open in the system handler, guarded links
/// show their notice. `done` is emitted once a notice is dismissed.
pub fn follow<M: Send + 'static>(action: LinkAction, done: M) -> Task<M> {
    match action {
        LinkAction::Open(url) => {
            tracing::info!(%url, "Opening link");
            if let Err(err) = open::that_detached(&url) {
                tracing::warn!(%url, error = %err, "Failed to open link");
            }
            Task::none()
        }
        LinkAction::Notice(notice) => {
            tracing::debug!(title = notice.title, "Showing notice");
            Task::perform(
                AsyncMessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title(notice.title)
                    .set_description(notice.body)
                    .set_buttons(MessageButtons::Ok)
                    .show(),
                move |_| done,
            )
        }
        LinkAction::Disabled => Task::none(),
    }
}
