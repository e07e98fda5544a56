//! Resolved-dependency view and the resolver seam
//!
//! Dependency resolution itself is an external concern: an analyzer consumes
//! the project manifest, lockfile, and source repositories and produces the
//! resolved specs per build target. This module defines the shape of that
//! output ([`ResolvedView`]) and the trait boundary ([`DependencyResolver`])
//! through which depviz consumes it.
//!
//! Resolver behavior is controlled exclusively through an explicit
//! [`ResolveOptions`] value passed into each call. No process-wide state is
//! mutated around the resolver, so nothing has to be restored afterwards.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::DepvizError;

/// Options forwarded to the external resolver for a single resolution run.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Resolve from scratch, ignoring any previously-locked resolution
    pub ignore_lockfile: bool,
    /// Refresh remote source metadata before resolving
    pub update_sources: bool,
    /// Analyze a single package specification instead of the project manifest
    pub spec: Option<PathBuf>,
}

/// Boundary to the external dependency analyzer.
///
/// Implementations may hit the network or take arbitrarily long; depviz calls
/// this exactly once per invocation and never retries. Errors are surfaced
/// verbatim to the caller.
pub trait DependencyResolver {
    fn resolve(&self, options: &ResolveOptions) -> miette::Result<ResolvedView>;
}

/// Origin of a resolved spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecSource {
    /// Local or unknown origin
    Local,
    /// A named remote source repository
    Remote(String),
}

impl Default for SpecSource {
    fn default() -> Self {
        SpecSource::Local
    }
}

/// A declared dependency reference: a name plus an optional version
/// requirement. The name may reference a subcomponent via a `/` delimiter
/// (e.g. `"A/Subspec"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

impl DependencyRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: None,
        }
    }

    pub fn with_requirement(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: Some(requirement.into()),
        }
    }

    /// Top-level package name: the text before the first `/`.
    pub fn root_name(&self) -> &str {
        root_of(&self.name)
    }
}

/// A resolved package (or subcomponent) description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecInfo {
    /// Full spec name, `/`-delimited for subcomponents
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub source: SpecSource,
}

impl SpecInfo {
    /// Top-level package name shared by all subcomponents of this spec.
    pub fn root_name(&self) -> &str {
        root_of(&self.name)
    }

    /// Display string used as the node label (name plus version when known).
    pub fn display_string(&self) -> String {
        match &self.version {
            Some(version) => format!("{} ({})", self.name, version),
            None => self.name.clone(),
        }
    }
}

/// A named build configuration that declares direct dependencies and may
/// inherit from a parent target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub name: String,
    /// Name of the parent target; root targets have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Whether this target does NOT inherit dependencies from its parent
    #[serde(default)]
    pub exclusive: bool,
    /// Directly-declared (non-inherited) dependency references, in
    /// declaration order
    #[serde(default)]
    pub dependencies: Vec<DependencyRef>,
}

/// Specs and their declared dependencies chosen for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecResolution {
    pub spec: SpecInfo,
    #[serde(default)]
    pub dependencies: Vec<DependencyRef>,
}

/// One target together with its resolved specs, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResolution {
    pub target: TargetInfo,
    #[serde(default)]
    pub specs: Vec<SpecResolution>,
}

/// The complete output of external dependency resolution: targets mapped to
/// the specs and dependencies chosen to satisfy them. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedView {
    pub targets: Vec<TargetResolution>,
}

impl ResolvedView {
    /// Look up a target by name.
    pub fn target(&self, name: &str) -> Option<&TargetInfo> {
        self.targets
            .iter()
            .map(|resolution| &resolution.target)
            .find(|target| target.name == name)
    }
}

fn root_of(name: &str) -> &str {
    name.split('/').next().unwrap_or(name)
}

/// Resolver adapter that deserializes a previously-produced analysis dump.
///
/// The external analyzer writes its resolved view as YAML; this adapter reads
/// it back so the graph engine can run without invoking the analyzer itself.
/// The lockfile/update options have already been honored by whoever produced
/// the file, so they are accepted but have no further effect here.
pub struct AnalysisFileResolver {
    path: PathBuf,
}

impl AnalysisFileResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DependencyResolver for AnalysisFileResolver {
    fn resolve(&self, _options: &ResolveOptions) -> miette::Result<ResolvedView> {
        let raw = fs::read_to_string(&self.path).map_err(|source| DepvizError::FileReadError {
            path: self.path.clone(),
            source,
        })?;
        let view: ResolvedView = serde_yaml::from_str(&raw).map_err(DepvizError::from)?;
        Ok(view)
    }
}
