use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::favicon::export::{ExportError, ExportRequest, Progress};
use crate::favicon::sizes;

/// Status line shown before the first export
pub const STATUS_READY: &str = "Ready to generate favicons";
pub const STATUS_WORKING: &str = "Generating favicons...";
pub const STATUS_DONE: &str = "Favicons generated successfully!";
pub const STATUS_FAILED: &str = "Error occurred during favicon generation";

/// Outcome of an export, shown to the user as a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success { output_dir: PathBuf },
    Failure { message: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Success { .. } => "Success",
            Notice::Failure { .. } => "Error",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notice::Success { output_dir } => {
                format!("Favicons generated and saved in {}!", output_dir.display())
            }
            Notice::Failure { message } => format!("An error occurred: {}", message),
        }
    }
}

/// UI state of the favicon window
///
/// Owns the save-location toggle, the in-flight export (if any), progress,
/// status text, and the paths shown in the previews. Only one export runs
/// at a time; requests arriving while busy are rejected.
#[derive(Debug)]
pub struct Session {
    /// Save icons next to the source instead of in `generated_favicons`
    pub save_in_original_location: bool,
    in_flight: Option<ExportRequest>,
    progress: f32,
    status: String,
    last_preview_paths: Vec<PathBuf>,
    source_preview: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            save_in_original_location: true,
            in_flight: None,
            progress: 0.0,
            status: STATUS_READY.to_string(),
            last_preview_paths: Vec::new(),
            source_preview: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file was picked in the open dialog (already filtered by type)
    pub fn on_file_selected(&mut self, path: PathBuf) -> Option<ExportRequest> {
        self.begin_export(path)
    }

    /// Files were dropped on the window.
    /// Only the first accepted image is processed; everything else is ignored.
    pub fn on_files_dropped(
        &mut self,
        paths: impl IntoIterator<Item = PathBuf>,
    ) -> Option<ExportRequest> {
        let Some(path) = paths.into_iter().find(|p| sizes::is_accepted(p)) else {
            debug!("Ignoring drop without a supported image");
            return None;
        };
        self.begin_export(path)
    }

    /// Mark an export as started and return where it should write.
    /// Returns `None` while another export is still running.
    pub fn begin_export(&mut self, path: PathBuf) -> Option<ExportRequest> {
        if let Some(current) = &self.in_flight {
            warn!(
                "Export of {} still running, ignoring {}",
                current.source_path.display(),
                path.display()
            );
            return None;
        }

        let request = ExportRequest::new(path, self.save_in_original_location);
        info!(
            "Starting export of {} into {}",
            request.source_path.display(),
            request.output_dir.display()
        );

        self.progress = 0.0;
        self.status = STATUS_WORKING.to_string();
        self.in_flight = Some(request.clone());
        Some(request)
    }

    pub fn record_progress(&mut self, progress: Progress) {
        if self.in_flight.is_some() {
            self.progress = progress.percent();
        }
    }

    /// Apply the result of the running export and return the notice to show.
    /// Busy state and progress are reset whatever the outcome.
    pub fn finish(&mut self, outcome: Result<Vec<PathBuf>, Arc<ExportError>>) -> Option<Notice> {
        let Some(request) = self.in_flight.take() else {
            warn!("Export finished but none was running");
            return None;
        };
        self.progress = 0.0;

        match outcome {
            Ok(paths) => {
                self.last_preview_paths = paths;
                self.source_preview = Some(request.source_path);
                self.status = STATUS_DONE.to_string();
                Some(Notice::Success {
                    output_dir: request.output_dir,
                })
            }
            Err(err) => {
                error!("Export of {} failed: {}", request.source_path.display(), err);
                self.status = STATUS_FAILED.to_string();
                Some(Notice::Failure {
                    message: err.to_string(),
                })
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Progress of the running export in percent
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Icons written by the last successful export, in size order
    pub fn preview_paths(&self) -> &[PathBuf] {
        &self.last_preview_paths
    }

    /// Source image of the last successful export
    pub fn source_preview(&self) -> Option<&Path> {
        self.source_preview.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::export::GENERATED_DIR_NAME;
    use std::io;

    fn progress(completed: usize) -> Progress {
        Progress {
            completed,
            total: 4,
        }
    }

    fn icon_paths(dir: &str) -> Vec<PathBuf> {
        sizes::SIZES
            .iter()
            .map(|s| Path::new(dir).join(s.file_name(".png")))
            .collect()
    }

    #[test]
    fn test_default_state() {
        let session = Session::new();
        assert!(session.save_in_original_location);
        assert!(!session.is_busy());
        assert_eq!(session.status(), STATUS_READY);
        assert!(session.preview_paths().is_empty());
        assert!(session.source_preview().is_none());
    }

    #[test]
    fn test_selected_file_starts_export() {
        let mut session = Session::new();
        let request = session
            .on_file_selected(PathBuf::from("/pics/photo.png"))
            .unwrap();

        assert_eq!(request.output_dir, PathBuf::from("/pics"));
        assert!(session.is_busy());
        assert_eq!(session.status(), STATUS_WORKING);
    }

    #[test]
    fn test_toggle_off_targets_generated_folder() {
        let mut session = Session::new();
        session.save_in_original_location = false;

        let request = session
            .on_file_selected(PathBuf::from("/pics/photo.png"))
            .unwrap();

        assert_eq!(request.output_dir, Path::new("/pics").join(GENERATED_DIR_NAME));
    }

    #[test]
    fn test_drop_of_text_file_is_ignored() {
        let mut session = Session::new();

        let request = session.on_files_dropped([PathBuf::from("/pics/readme.txt")]);

        assert!(request.is_none());
        assert!(!session.is_busy());
        assert_eq!(session.status(), STATUS_READY);
    }

    #[test]
    fn test_drop_uses_first_accepted_file() {
        let mut session = Session::new();

        let request = session.on_files_dropped([
            PathBuf::from("/pics/readme.txt"),
            PathBuf::from("/pics/logo.JPEG"),
            PathBuf::from("/pics/other.png"),
        ]);

        assert_eq!(request.unwrap().source_path, PathBuf::from("/pics/logo.JPEG"));
    }

    #[test]
    fn test_second_export_rejected_while_busy() {
        let mut session = Session::new();
        session.on_file_selected(PathBuf::from("/pics/a.png")).unwrap();

        assert!(session.on_file_selected(PathBuf::from("/pics/b.png")).is_none());
        assert!(session.on_files_dropped([PathBuf::from("/pics/c.png")]).is_none());
        assert!(session.is_busy());
    }

    #[test]
    fn test_progress_steps() {
        let mut session = Session::new();
        session.on_file_selected(PathBuf::from("/pics/photo.png"));

        let mut seen = Vec::new();
        for step in 1..=4 {
            session.record_progress(progress(step));
            seen.push(session.progress());
        }
        assert_eq!(seen, [25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_progress_ignored_when_idle() {
        let mut session = Session::new();
        session.record_progress(progress(2));
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_success_updates_previews() {
        let mut session = Session::new();
        session.on_file_selected(PathBuf::from("/pics/photo.png"));
        session.record_progress(progress(4));

        let notice = session.finish(Ok(icon_paths("/pics"))).unwrap();

        assert_eq!(
            notice,
            Notice::Success {
                output_dir: PathBuf::from("/pics")
            }
        );
        assert_eq!(notice.body(), "Favicons generated and saved in /pics!");
        assert_eq!(session.preview_paths().len(), 4);
        assert_eq!(session.source_preview(), Some(Path::new("/pics/photo.png")));
        assert!(!session.is_busy());
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.status(), STATUS_DONE);
    }

    #[test]
    fn test_failure_keeps_previous_previews() {
        let mut session = Session::new();
        session.on_file_selected(PathBuf::from("/pics/first.png"));
        session.finish(Ok(icon_paths("/pics")));

        session.on_file_selected(PathBuf::from("/locked/photo.png"));
        session.record_progress(progress(1));
        let err = ExportError::Io {
            path: PathBuf::from("/locked/Icon-512.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let notice = session.finish(Err(Arc::new(err))).unwrap();

        assert_eq!(notice.title(), "Error");
        assert!(notice.body().starts_with("An error occurred: "));
        assert!(notice.body().contains("Permission denied"));
        assert_eq!(session.preview_paths(), icon_paths("/pics").as_slice());
        assert_eq!(session.source_preview(), Some(Path::new("/pics/first.png")));
        assert!(!session.is_busy());
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.status(), STATUS_FAILED);
    }

    #[test]
    fn test_idle_again_after_finish() {
        let mut session = Session::new();
        session.on_file_selected(PathBuf::from("/pics/a.png"));
        session.finish(Ok(icon_paths("/pics")));

        assert!(session.on_file_selected(PathBuf::from("/pics/b.png")).is_some());
    }

    #[test]
    fn test_finish_without_export_is_ignored() {
        let mut session = Session::new();
        assert!(session.finish(Ok(Vec::new())).is_none());
        assert_eq!(session.status(), STATUS_READY);
    }
}
