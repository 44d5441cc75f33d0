/// Favicon export pipeline
///
/// Decodes the source image once and writes one resized copy per entry in
/// [`SIZES`], encoded in the container format named by the source's file
/// extension. Decoding sniffs the actual content, so a PNG saved as `.jpg`
/// still loads and produces JPEG icons.
use image::{imageops::FilterType, ImageError, ImageFormat, ImageReader};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::sizes::SIZES;

/// Subfolder used when icons are not saved next to the source
pub const GENERATED_DIR_NAME: &str = "generated_favicons";

/// Errors raised while exporting icons
#[derive(Error, Debug)]
pub enum ExportError {
    /// The source could not be opened or decoded as an image
    #[error("cannot read {} as an image: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    /// A directory could not be created or an icon could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    fn decode(path: &Path, source: ImageError) -> Self {
        ExportError::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    fn io(path: &Path, source: io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Encoder failures count as write failures
    fn write(path: &Path, source: ImageError) -> Self {
        let source = match source {
            ImageError::IoError(e) => e,
            other => io::Error::other(other),
        };
        Self::io(path, source)
    }
}

/// Progress after a finished resize step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion in percent (0.0 - 100.0)
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f32 * 100.0 / self.total as f32
    }
}

/// Where one source image gets its icons written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
}

impl ExportRequest {
    /// Derive the output directory from the save-location toggle:
    /// the source's own folder, or `generated_favicons` inside it
    pub fn new(source_path: PathBuf, save_in_original_location: bool) -> Self {
        let parent = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let output_dir = if save_in_original_location {
            parent
        } else {
            parent.join(GENERATED_DIR_NAME)
        };

        Self {
            source_path,
            output_dir,
        }
    }

    /// Create the output directory if missing, then export into it
    pub fn run(&self, on_progress: impl FnMut(Progress)) -> Result<Vec<PathBuf>, ExportError> {
        if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)
                .map_err(|e| ExportError::io(&self.output_dir, e))?;
            debug!("Created output folder {}", self.output_dir.display());
        }

        export(&self.source_path, &self.output_dir, on_progress)
    }
}

/// Write every icon size for `source` into `output_dir`.
///
/// Returns the written paths in [`SIZES`] order. `on_progress` is called
/// after each file is saved. Existing files with the same name are
/// overwritten. On failure, icons already written stay on disk.
pub fn export(
    source: &Path,
    output_dir: &Path,
    mut on_progress: impl FnMut(Progress),
) -> Result<Vec<PathBuf>, ExportError> {
    let format = ImageFormat::from_path(source).map_err(|e| ExportError::decode(source, e))?;
    // from_path succeeded, so there is an extension
    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let img = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ExportError::decode(source, ImageError::IoError(e)))?
        .decode()
        .map_err(|e| ExportError::decode(source, e))?;
    info!(
        "Generating favicons from {} ({}x{})",
        source.display(),
        img.width(),
        img.height()
    );

    let total = SIZES.len();
    let mut written = Vec::with_capacity(total);

    for (i, spec) in SIZES.iter().enumerate() {
        let resized = img.resize_exact(spec.width, spec.height, FilterType::Lanczos3);
        let output_path = output_dir.join(spec.file_name(&extension));

        resized
            .save_with_format(&output_path, format)
            .map_err(|e| ExportError::write(&output_path, e))?;

        debug!("Wrote {}", output_path.display());
        written.push(output_path);

        on_progress(Progress {
            completed: i + 1,
            total,
        });
    }

    info!("Saved {} favicons in {}", written.len(), output_dir.display());
    Ok(written)
}
