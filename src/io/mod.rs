/// Command-line interface and batch file processing
pub mod cli;
/// Compile-time constants and limits
pub mod configuration;
/// Error types and constructors
pub mod error;
/// PNG export of rasters
pub mod image;
/// Tile text format parsing and rendering
pub mod input;
/// Terminal progress display
pub mod progress;
