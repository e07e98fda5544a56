//! Render run orchestration
//!
//! Validates the configuration, invokes the resolver once, builds the graph
//! once, then runs each requested serializer against it. A failure at any
//! stage aborts the remaining output steps; already-written outputs are not
//! rolled back.

use std::fs::File;
use std::io::BufWriter;

use console::style;
use miette::{Result, WrapErr};

use crate::config::RenderOptions;
use crate::error::DepvizError;
use crate::graph::DependencyGraphBuilder;
use crate::progress::ProgressReporter;
use crate::render::{DotRenderer, RasterExporter, text};
use crate::resolver::{DependencyResolver, ResolveOptions};

pub struct RenderExecutor;

impl RenderExecutor {
    pub fn execute(
        resolver: &dyn DependencyResolver,
        options: RenderOptions,
        resolve_options: ResolveOptions,
    ) -> Result<()> {
        // Renderer availability is a configuration concern: check it before
        // any resolution work so a missing executable fails cheaply with no
        // partial output.
        let exporter = if options.graphviz || options.image {
            Some(RasterExporter::locate()?)
        } else {
            None
        };

        let mut progress = ProgressReporter::new();
        progress.start_resolving();
        let view = match resolver.resolve(&resolve_options) {
            Ok(view) => view,
            Err(err) => {
                progress.abort();
                return Err(err);
            }
        };
        progress.finish_resolving(view.targets.len());

        let mut builder = DependencyGraphBuilder::new();
        builder
            .build_from_view(&view)
            .wrap_err("Failed to build dependency graph")?;
        let model = builder.into_model();

        let dump = if options.flat {
            text::to_flat_yaml(&view)
        } else {
            text::to_yaml(&view)
        };
        let dump = dump.wrap_err("Failed to serialize dependency dump")?;
        println!("{}", style("Dependencies").cyan().bold());
        println!();
        print!("{dump}");

        if options.graphviz {
            let dot_path = options.dot_path();
            let file = File::create(&dot_path).map_err(|source| DepvizError::FileWriteError {
                path: dot_path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            DotRenderer::new()
                .render(&model, &mut writer)
                .wrap_err("Failed to render DOT graph")?;
            progress.file_written(&dot_path);
        }

        if options.image
            && let Some(exporter) = &exporter
        {
            let image_path = options.image_path();
            exporter
                .export(&model, &image_path)
                .wrap_err("Failed to rasterize graph")?;
            progress.file_written(&image_path);
        }

        Ok(())
    }
}
