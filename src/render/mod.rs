//! # Serialization module
//!
//! Output formats for one built graph model:
//!
//! - **dot**: Graphviz DOT text ([`DotRenderer`])
//! - **raster**: PNG export delegated to the external renderer
//!   ([`RasterExporter`])
//! - **text**: YAML dumps of the resolved view

mod dot;
mod raster;
pub mod text;

pub use dot::DotRenderer;
pub use raster::RasterExporter;
