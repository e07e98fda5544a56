//! YAML text serialization of the resolved view
//!
//! Pure formatting: a human-readable nested dump of the
//! target → spec → dependency-names mapping, plus a lockfile-oriented variant
//! flattening the same view to a spec-name → dependency-names mapping.

use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::error::DepvizError;
use crate::resolver::ResolvedView;

/// Nested dump in resolution order: target name → spec display string →
/// dependency names.
pub fn to_yaml(view: &ResolvedView) -> Result<String, DepvizError> {
    let mut targets = Mapping::new();

    for resolution in &view.targets {
        let mut specs = Mapping::new();
        for spec_resolution in &resolution.specs {
            let dependencies: Vec<Value> = spec_resolution
                .dependencies
                .iter()
                .map(|dep| Value::String(dep.name.clone()))
                .collect();
            specs.insert(
                Value::String(spec_resolution.spec.display_string()),
                Value::Sequence(dependencies),
            );
        }
        targets.insert(
            Value::String(resolution.target.name.clone()),
            Value::Mapping(specs),
        );
    }

    Ok(serde_yaml::to_string(&Value::Mapping(targets))?)
}

/// Flattened lockfile-style dump: spec name → sorted unique dependency names,
/// synthesized across all targets.
pub fn to_flat_yaml(view: &ResolvedView) -> Result<String, DepvizError> {
    let mut pods: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for resolution in &view.targets {
        for spec_resolution in &resolution.specs {
            let entry = pods
                .entry(spec_resolution.spec.name.clone())
                .or_default();
            for dep in &spec_resolution.dependencies {
                if !entry.contains(&dep.name) {
                    entry.push(dep.name.clone());
                }
            }
            entry.sort();
        }
    }

    Ok(serde_yaml::to_string(&pods)?)
}
