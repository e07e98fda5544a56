use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DepvizError {
    #[error("Graph renderer '{program}' not found on PATH")]
    #[diagnostic(
        code(depviz::renderer_not_found),
        help("Install Graphviz so the '{program}' executable is available, or drop --graphviz/--image")
    )]
    RendererNotFound { program: String },

    #[error("Graph renderer exited with {status}")]
    #[diagnostic(
        code(depviz::render_failed),
        help("Inspect the renderer diagnostics below for the cause")
    )]
    RenderFailed { status: String, stderr: String },

    #[error("Target '{target}' declares parent '{parent}' which is not present in the resolved view")]
    #[diagnostic(
        code(depviz::missing_parent),
        help("This indicates malformed analyzer output - please report it upstream")
    )]
    MissingParent { target: String, parent: String },

    #[error("Failed to read analysis file '{path}'")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}'")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check file permissions and disk space")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error")]
    #[diagnostic(
        code(depviz::yaml_error),
        help("This is likely an internal error - please report it")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depviz::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_renderer_not_found_display() {
        let error = DepvizError::RendererNotFound {
            program: "dot".to_string(),
        };

        assert_eq!(error.to_string(), "Graph renderer 'dot' not found on PATH");
    }

    #[test]
    fn test_missing_parent_display() {
        let error = DepvizError::MissingParent {
            target: "Tests".to_string(),
            parent: "Pods".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Target 'Tests' declares parent 'Pods' which is not present in the resolved view"
        );
    }

    #[test]
    fn test_file_write_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error = DepvizError::FileWriteError {
            path: PathBuf::from("/tmp/out.gv"),
            source: io_err,
        };

        assert_eq!(
            error.to_string(),
            "Failed to write output file '/tmp/out.gv'"
        );
    }

    #[test]
    fn test_error_codes() {
        let error = DepvizError::RendererNotFound {
            program: "dot".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DepvizError = io_err.into();

        match err {
            DepvizError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
