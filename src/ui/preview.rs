/// Source preview and generated-icon thumbnail strip
use iced::widget::{container, image, scrollable, text, tooltip, Row};
use iced::{ContentFit, Element, Length};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::Message;

/// Bounding square of the main preview (fit, aspect preserved)
pub const SOURCE_PREVIEW_SIZE: f32 = 300.0;
/// Bounding square of each thumbnail in the strip
pub const THUMBNAIL_SIZE: f32 = 100.0;

/// A rendered thumbnail: the file it came from and its pixels
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub path: PathBuf,
    handle: image::Handle,
}

impl Thumbnail {
    fn load(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            handle: load_handle(path),
        }
    }

    /// Filename shown on hover
    pub fn label(&self) -> String {
        file_label(&self.path)
    }
}

/// Everything the preview area draws
#[derive(Debug, Default)]
pub struct Previews {
    source: Option<image::Handle>,
    strip: Vec<Thumbnail>,
}

impl Previews {
    /// Replace the main preview and the thumbnail strip.
    /// The previous thumbnails are discarded.
    pub fn replace(&mut self, source: Option<&Path>, paths: &[PathBuf]) {
        self.source = source.map(load_handle);
        self.strip = paths.iter().map(|p| Thumbnail::load(p)).collect();
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.strip
    }

    /// Original image, scaled to fit the preview frame
    pub fn source_view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.source {
            Some(handle) => image(handle.clone())
                .width(SOURCE_PREVIEW_SIZE)
                .height(SOURCE_PREVIEW_SIZE)
                .content_fit(ContentFit::Contain)
                .into(),
            None => text("Drop an image here or use Upload Image").size(14).into(),
        };

        container(content)
            .width(Length::Fill)
            .height(SOURCE_PREVIEW_SIZE + 20.0)
            .center_x(Length::Fill)
            .center_y(SOURCE_PREVIEW_SIZE + 20.0)
            .style(container::bordered_box)
            .into()
    }

    /// Horizontally scrollable row of generated icons
    pub fn strip_view(&self) -> Element<'_, Message> {
        let thumbnails: Vec<Element<'_, Message>> = self
            .thumbnails()
            .iter()
            .map(|thumb| {
                let picture = image(thumb.handle.clone())
                    .width(THUMBNAIL_SIZE)
                    .height(THUMBNAIL_SIZE)
                    .content_fit(ContentFit::Contain);

                tooltip(
                    picture,
                    container(text(thumb.label()).size(12))
                        .padding(4)
                        .style(container::rounded_box),
                    tooltip::Position::Bottom,
                )
                .into()
            })
            .collect();

        let strip = Row::with_children(thumbnails).spacing(10).padding(5);

        scrollable(strip)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            ))
            .width(Length::Fill)
            .into()
    }
}

/// Read the file into memory so a rewritten file with the same path
/// is not served from the renderer's image cache
fn load_handle(path: &Path) -> image::Handle {
    match std::fs::read(path) {
        Ok(bytes) => image::Handle::from_bytes(bytes),
        Err(e) => {
            warn!("Could not read preview {}: {}", path.display(), e);
            image::Handle::from_path(path)
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
