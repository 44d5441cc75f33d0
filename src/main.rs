use iced::widget::{button, checkbox, column, container, progress_bar, text, Column};
use iced::{event, font, window, Event, Font, Subscription};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod favicon;
mod state;
mod ui;

use favicon::export::ExportRequest;
use favicon::sizes::ACCEPTED_EXTENSIONS;
use favicon::worker::{self, ExportEvent};
use state::session::{Notice, Session};
use ui::preview::Previews;

/// Main application state
struct FaviconGenerator {
    /// Toggle, running export, progress and status
    session: Session,
    /// Decoded images for the preview area
    previews: Previews,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Upload Image" button
    UploadImage,
    /// User toggled "Save in original location"
    SaveLocationToggled(bool),
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Progress or outcome of the running export
    Export(ExportEvent),
}

impl FaviconGenerator {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        info!("Favicon Generator started");

        (
            FaviconGenerator {
                session: Session::new(),
                previews: Previews::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UploadImage => {
                // Show the native file picker
                let file = FileDialog::new()
                    .set_title("Select Image")
                    .add_filter("Image Files", &ACCEPTED_EXTENSIONS)
                    .pick_file();

                match file.and_then(|path| self.session.on_file_selected(path)) {
                    Some(request) => start_export(request),
                    None => Task::none(),
                }
            }
            Message::SaveLocationToggled(checked) => {
                self.session.save_in_original_location = checked;
                Task::none()
            }
            Message::FileDropped(path) => {
                // Each dropped file arrives on its own; after the first accepted
                // one starts an export the rest are rejected as busy
                match self.session.on_files_dropped([path]) {
                    Some(request) => start_export(request),
                    None => Task::none(),
                }
            }
            Message::Export(ExportEvent::Progressed(progress)) => {
                self.session.record_progress(progress);
                Task::none()
            }
            Message::Export(ExportEvent::Finished(outcome)) => {
                let succeeded = outcome.is_ok();
                if let Some(notice) = self.session.finish(outcome) {
                    if succeeded {
                        self.previews.replace(
                            self.session.source_preview(),
                            self.session.preview_paths(),
                        );
                    }
                    show_notice(&notice);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let busy = self.session.is_busy();

        let mut content: Column<Message> = column![
            text("Favicon Generator")
                .size(28)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),

            button("Upload Image")
                .on_press_maybe((!busy).then_some(Message::UploadImage))
                .padding(10),

            checkbox("Save in original location", self.session.save_in_original_location)
                .on_toggle(Message::SaveLocationToggled),

            self.previews.source_view(),

            self.previews.strip_view(),
        ]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center);

        if busy {
            content = content.push(progress_bar(0.0..=100.0, self.session.progress()).height(18.0));
        }

        content = content.push(text(self.session.status()).size(14));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Listen for files dropped onto the window
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(dropped_file)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::favicon_theme()
    }
}

fn dropped_file(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

/// Run the export in the background, feeding its events back as messages
fn start_export(request: ExportRequest) -> Task<Message> {
    Task::run(worker::export_stream(request), Message::Export)
}

/// Show the modal success or error dialog
fn show_notice(notice: &Notice) {
    let level = match notice {
        Notice::Success { .. } => MessageLevel::Info,
        Notice::Failure { .. } => MessageLevel::Error,
    };

    MessageDialog::new()
        .set_level(level)
        .set_title(notice.title())
        .set_description(notice.body())
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("favicon_generator=info")),
        )
        .with_target(false)
        .init();

    iced::application(
        "Favicon Generator",
        FaviconGenerator::update,
        FaviconGenerator::view,
    )
    .subscription(FaviconGenerator::subscription)
    .theme(FaviconGenerator::theme)
    .window_size((600.0, 720.0))
    .centered()
    .run_with(FaviconGenerator::new)
}
