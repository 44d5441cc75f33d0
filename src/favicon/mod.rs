/// Favicon export module
///
/// This module handles:
/// - The fixed table of icon sizes and file names
/// - Resolving where generated icons are written
/// - Decoding the source once and writing every resized copy
/// - Running an export off the UI thread while reporting progress

pub mod sizes;
pub mod export;
pub mod worker;
