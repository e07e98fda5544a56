use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "depviz",
    about = "Render a resolved dependency graph as YAML, Graphviz DOT, or PNG",
    long_about = "depviz consumes the resolved dependency analysis produced by an external \
                  resolver and renders it three ways: a YAML dump of the target → spec → \
                  dependency mapping (always, to stdout), a Graphviz DOT file, and a PNG \
                  rasterized by the Graphviz 'dot' executable.",
    version
)]
pub struct Cli {
    /// Package specification file to analyze in isolation instead of the
    /// project-wide manifest; its stem names the output files
    #[arg(value_name = "SPEC")]
    pub spec: Option<PathBuf>,

    /// Resolved-view dump produced by the external analyzer
    #[arg(
        long,
        value_name = "FILE",
        default_value = "dependencies.yaml",
        env = "DEPVIZ_ANALYSIS"
    )]
    pub analysis: PathBuf,

    /// Resolve from scratch, ignoring the previously-locked resolution
    #[arg(long, env = "DEPVIZ_IGNORE_LOCKFILE")]
    pub ignore_lockfile: bool,

    /// Refresh remote source metadata before resolving
    #[arg(long, env = "DEPVIZ_UPDATE_SOURCES")]
    pub update_sources: bool,

    /// Also write the graph as a Graphviz DOT file (<basename>.gv)
    #[arg(long, env = "DEPVIZ_GRAPHVIZ")]
    pub graphviz: bool,

    /// Also write the graph as a PNG image (<basename>.png)
    #[arg(long, env = "DEPVIZ_IMAGE")]
    pub image: bool,

    /// Print the flattened spec → dependency-list dump instead of the nested
    /// per-target dump
    #[arg(long, env = "DEPVIZ_FLAT")]
    pub flat: bool,

    /// Directory for generated files
    #[arg(long, value_name = "DIR", default_value = ".", env = "DEPVIZ_OUTPUT_DIR")]
    pub output_dir: PathBuf,
}
