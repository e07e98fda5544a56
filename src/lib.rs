//! # Depviz - Render Resolved Dependency Graphs
//!
//! Depviz turns the resolved dependency analysis of a package manager into a
//! structured data dump and a visual graph. It consumes the output of an
//! external resolver (targets → specs → their dependencies) and produces a
//! deduplicated, clustered, deterministically-colored graph model, then
//! serializes it as YAML text, Graphviz DOT, or a PNG rasterized by the
//! external `dot` executable.
//!
//! ## Main Components
//!
//! - **Resolver seam**: the [`resolver::DependencyResolver`] trait and the
//!   [`resolver::ResolvedView`] data model consumed from the external
//!   analyzer
//! - **Graph**: [`graph::DependencyGraphBuilder`] builds the
//!   [`graph::GraphModel`] with idempotent node upserts, edge deduplication,
//!   and source-repository clusters
//! - **Render**: DOT emission, PNG export, and YAML dumps
//! - **Executor**: orchestrates validation, resolution, building, and output
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use depviz::common::ConfigBuilder;
//! use depviz::config::RenderOptions;
//! use depviz::executor::RenderExecutor;
//! use depviz::resolver::{AnalysisFileResolver, ResolveOptions};
//!
//! # fn main() -> miette::Result<()> {
//! let resolver = AnalysisFileResolver::new("dependencies.yaml");
//! let options = RenderOptions::builder()
//!     .with_graphviz(true)
//!     .with_output_dir(PathBuf::from("."))
//!     .build()?;
//!
//! RenderExecutor::execute(&resolver, options, ResolveOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: building and rendering a graph directly
//!
//! ```
//! use depviz::graph::DependencyGraphBuilder;
//! use depviz::render::DotRenderer;
//! use depviz::resolver::ResolvedView;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let view = ResolvedView::default();
//!
//! let mut builder = DependencyGraphBuilder::new();
//! builder.build_from_view(&view)?;
//!
//! let dot = DotRenderer::new().render_to_string(builder.model())?;
//! assert!(dot.contains("digraph"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;

// Public modules
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod executor;
pub mod graph;
pub mod render;
pub mod resolver;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::common::ConfigBuilder;
    use crate::config::RenderOptions;
    use crate::executor::RenderExecutor;
    use crate::resolver::{AnalysisFileResolver, ResolveOptions};

    let args = cli::Cli::parse();

    let resolver = AnalysisFileResolver::new(&args.analysis);
    let resolve_options = ResolveOptions {
        ignore_lockfile: args.ignore_lockfile,
        update_sources: args.update_sources,
        spec: args.spec.clone(),
    };
    let render_options = RenderOptions::builder()
        .with_graphviz(args.graphviz)
        .with_image(args.image)
        .with_flat(args.flat)
        .with_output_dir(args.output_dir)
        .with_spec(args.spec)
        .build()?;

    RenderExecutor::execute(&resolver, render_options, resolve_options)
}
