/// UI widgets
///
/// - Main preview of the source image and the generated-icon strip (preview.rs)
/// - Green-accented light theme (theme.rs)

pub mod preview;
pub mod theme;
