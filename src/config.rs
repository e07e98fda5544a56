//! Render run configuration
//!
//! Output selection and naming for one invocation, built with the crate's
//! builder pattern.

use std::path::{Path, PathBuf};

use crate::constants::output::{DEFAULT_BASENAME, DOT_EXTENSION, IMAGE_EXTENSION};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Write `<basename>.gv`
    pub graphviz: bool,
    /// Write `<basename>.png` via the external renderer
    pub image: bool,
    /// Print the flattened spec → dependency-list dump instead of the nested
    /// per-target dump
    pub flat: bool,
    /// Directory for generated files
    pub output_dir: PathBuf,
    /// Package specification file analyzed in isolation; its stem names the
    /// output files
    pub spec: Option<PathBuf>,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Basename for generated files: the spec file's stem when one was
    /// named, else the fixed default.
    pub fn basename(&self) -> String {
        self.spec
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_BASENAME.to_string())
    }

    pub fn dot_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{DOT_EXTENSION}", self.basename()))
    }

    pub fn image_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{IMAGE_EXTENSION}", self.basename()))
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    graphviz: Option<bool>,
    image: Option<bool>,
    flat: Option<bool>,
    output_dir: Option<PathBuf>,
    spec: Option<Option<PathBuf>>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graphviz(mut self, graphviz: bool) -> Self {
        self.graphviz = Some(graphviz);
        self
    }

    pub fn with_image(mut self, image: bool) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = Some(flat);
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    pub fn with_spec(mut self, spec: Option<PathBuf>) -> Self {
        self.spec = Some(spec);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, crate::error::DepvizError> {
        Ok(RenderOptions {
            graphviz: self.graphviz.unwrap_or(false),
            image: self.image.unwrap_or(false),
            flat: self.flat.unwrap_or(false),
            output_dir: self.output_dir.ok_or_else(|| {
                crate::error::DepvizError::ConfigurationError {
                    message: "Missing required field: output_dir".to_string(),
                }
            })?,
            spec: self.spec.unwrap_or(None),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_default_basename() {
        let options = RenderOptions::builder()
            .with_output_dir(PathBuf::from("."))
            .build()
            .unwrap();

        assert_eq!(options.basename(), "dependencies");
        assert_eq!(options.dot_path(), PathBuf::from("./dependencies.gv"));
        assert_eq!(options.image_path(), PathBuf::from("./dependencies.png"));
    }

    #[test]
    fn test_basename_strips_spec_extension() {
        let options = RenderOptions::builder()
            .with_output_dir(PathBuf::from("out"))
            .with_spec(Some(PathBuf::from("specs/AFNetworking.podspec")))
            .build()
            .unwrap();

        assert_eq!(options.basename(), "AFNetworking");
        assert_eq!(options.dot_path(), PathBuf::from("out/AFNetworking.gv"));
    }

    #[test]
    fn test_output_dir_is_required() {
        let err = RenderOptions::builder().build().unwrap_err();
        assert!(err.to_string().contains("output_dir"));
    }
}
