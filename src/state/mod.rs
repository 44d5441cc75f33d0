/// State management module
///
/// This module handles all application state:
/// - The favicon session: save-location toggle, running export,
///   progress, status text and preview paths (session.rs)

pub mod session;
