//! Graphviz DOT serialization
//!
//! Emits the graph model as a `digraph` laid out left-to-right: every node
//! with its label and style attributes, every cluster as a named subgraph
//! listing its member nodes, every edge with its optional label and color.
//! Node and edge existence and styling are stable for identical models;
//! attribute text is produced in model insertion order.

use std::io::Write;

use petgraph::visit::EdgeRef;

use crate::error::DepvizError;
use crate::graph::{GraphModel, NodeStyle};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepvizError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepvizError::from)
    };
}

pub struct DotRenderer;

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, model: &GraphModel, output: &mut dyn Write) -> Result<(), DepvizError> {
        let graph = model.graph();

        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output)?;

        for idx in graph.node_indices() {
            let node = &graph[idx];
            let label = escape(&node.label);
            match &node.style {
                NodeStyle::Target => {
                    writeln_out!(
                        output,
                        r#"    "{}" [label="{}", shape=box];"#,
                        node.id,
                        label
                    )?;
                }
                NodeStyle::Spec { fill } => {
                    writeln_out!(
                        output,
                        r#"    "{}" [label="{}", style=filled, fillcolor="{}"];"#,
                        node.id,
                        label,
                        fill
                    )?;
                }
                NodeStyle::Dependency { color } => {
                    writeln_out!(
                        output,
                        r#"    "{}" [label="{}", color="{}"];"#,
                        node.id,
                        label,
                        color
                    )?;
                }
            }
        }

        for (position, cluster) in model.clusters().iter().enumerate() {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph cluster_{position} {{")?;
            writeln_out!(output, r#"        label="{}";"#, escape(&cluster.key))?;
            for &member in cluster.members() {
                writeln_out!(output, r#"        "{}";"#, graph[member].id)?;
            }
            writeln_out!(output, "    }}")?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let source = &graph[edge.source()].id;
            let target = &graph[edge.target()].id;
            let style = edge.weight();

            let mut attributes = Vec::new();
            if let Some(label) = &style.label {
                attributes.push(format!(r#"label="{}""#, escape(label)));
            }
            if let Some(color) = &style.color {
                attributes.push(format!(r#"color="{color}""#));
            }
            if !style.constraint {
                attributes.push("constraint=false".to_string());
            }

            if attributes.is_empty() {
                writeln_out!(output, r#"    "{source}" -> "{target}";"#)?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{source}" -> "{target}" [{}];"#,
                    attributes.join(", ")
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Render to an owned string.
    pub fn render_to_string(&self, model: &GraphModel) -> Result<String, DepvizError> {
        let mut buffer = Vec::new();
        self.render(model, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| DepvizError::ConfigurationError {
            message: format!("DOT output was not valid UTF-8: {e}"),
        })
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
