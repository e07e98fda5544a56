//! Raster export via the external Graphviz renderer
//!
//! depviz does not implement graph layout. The DOT text is handed to the
//! `dot` executable found on the process search path, which writes the PNG.
//! Locating the executable happens at validation time so a missing renderer
//! aborts the run before any resolution work starts.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::output::RENDERER_PROGRAM;
use crate::error::DepvizError;
use crate::graph::GraphModel;
use crate::render::DotRenderer;

pub struct RasterExporter {
    program: PathBuf,
}

impl RasterExporter {
    /// Locate the renderer executable on the search path.
    pub fn locate() -> Result<Self, DepvizError> {
        let program =
            which::which(RENDERER_PROGRAM).map_err(|_| DepvizError::RendererNotFound {
                program: RENDERER_PROGRAM.to_string(),
            })?;
        Ok(Self { program })
    }

    /// Path of the located renderer executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Render the model to a PNG at `path`, feeding the DOT text to the
    /// renderer on stdin and waiting for it to finish.
    pub fn export(&self, model: &GraphModel, path: &Path) -> Result<(), DepvizError> {
        let dot_text = DotRenderer::new().render_to_string(model)?;

        let mut child = Command::new(&self.program)
            .arg("-Tpng")
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(dot_text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(DepvizError::RenderFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
