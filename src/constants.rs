//! Configuration constants for depviz
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while the external resolver runs
    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

/// Output naming and rendering configuration
pub mod output {
    /// Basename used when no package specification file is named
    pub const DEFAULT_BASENAME: &str = "dependencies";

    /// File extension for Graphviz DOT output
    pub const DOT_EXTENSION: &str = "gv";

    /// File extension for rasterized output
    pub const IMAGE_EXTENSION: &str = "png";

    /// External executable that converts DOT text to a raster image
    pub const RENDERER_PROGRAM: &str = "dot";
}
