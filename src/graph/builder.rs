//! Builder for constructing the dependency graph model
//!
//! Walks a [`ResolvedView`] in its resolution order and produces the
//! deduplicated, clustered [`GraphModel`]: one node per target, per declared
//! target dependency, and per resolved spec, with spec nodes grouped into
//! clusters by originating source repository.

use petgraph::graph::NodeIndex;

use super::color::color_for;
use super::model::{EdgeStyle, GraphModel, NodeStyle};
use crate::error::DepvizError;
use crate::resolver::{ResolvedView, SpecResolution, SpecSource, TargetResolution};

/// Graphviz color list for de-emphasized target edges.
const MUTED_EDGE_COLOR: &str = "gray";

pub struct DependencyGraphBuilder {
    model: GraphModel,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            model: GraphModel::new(),
        }
    }

    /// Build the graph from a resolved view.
    ///
    /// Fails fast when a non-root target names a parent that is absent from
    /// the view: that is a contract violation of the analyzer output, not a
    /// condition to skip silently.
    pub fn build_from_view(&mut self, view: &ResolvedView) -> Result<(), DepvizError> {
        for resolution in &view.targets {
            self.add_target(view, resolution)?;
        }
        Ok(())
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn into_model(self) -> GraphModel {
        self.model
    }

    fn add_target(
        &mut self,
        view: &ResolvedView,
        resolution: &TargetResolution,
    ) -> Result<(), DepvizError> {
        let target = &resolution.target;
        let target_idx = self
            .model
            .upsert_node(&target.name, &target.name, NodeStyle::Target);

        if let Some(parent_name) = &target.parent {
            let parent = view
                .target(parent_name)
                .ok_or_else(|| DepvizError::MissingParent {
                    target: target.name.clone(),
                    parent: parent_name.clone(),
                })?;
            let parent_idx = self
                .model
                .upsert_node(&parent.name, &parent.name, NodeStyle::Target);
            // Hints at ranking without forcing layout ordering.
            self.model.add_edge(
                target_idx,
                parent_idx,
                EdgeStyle {
                    label: None,
                    color: Some(MUTED_EDGE_COLOR.to_string()),
                    constraint: false,
                },
            );
        }

        for dependency in &target.dependencies {
            let root = dependency.root_name();
            let dep_idx = self.model.upsert_node(
                root,
                root,
                NodeStyle::Dependency {
                    color: color_for(root),
                },
            );
            self.model.add_edge(
                target_idx,
                dep_idx,
                EdgeStyle {
                    label: None,
                    color: Some(MUTED_EDGE_COLOR.to_string()),
                    constraint: true,
                },
            );
        }

        for spec_resolution in &resolution.specs {
            self.add_spec(resolution, spec_resolution);
        }

        Ok(())
    }

    fn add_spec(&mut self, owner: &TargetResolution, resolution: &SpecResolution) {
        let spec = &resolution.spec;
        let fill = color_for(spec.root_name());

        let spec_idx = self.model.upsert_node(
            &spec.name,
            &spec.display_string(),
            NodeStyle::Spec { fill },
        );
        let cluster_key = cluster_key_for(owner, resolution);
        self.model.add_to_cluster(&cluster_key, spec_idx);

        for dependency in &resolution.dependencies {
            let dep_idx = self.add_dependency_node(&dependency.name, dependency.root_name());
            // Two-stop blend from black to the spec's own color marks the
            // edge as owned by this spec.
            self.model.add_edge(
                spec_idx,
                dep_idx,
                EdgeStyle {
                    label: dependency.requirement.clone(),
                    color: Some(format!("black:{fill}")),
                    constraint: true,
                },
            );
        }
    }

    fn add_dependency_node(&mut self, name: &str, root: &str) -> NodeIndex {
        self.model.upsert_node(
            name,
            name,
            NodeStyle::Dependency {
                color: color_for(root),
            },
        )
    }
}

/// Cluster key for a spec: the remote source name marked as a repo origin,
/// or `"local"` when the origin is local/unknown.
///
/// Fallback heuristic: a spec with an ambiguous source borrows the source of
/// a sibling spec in the same target that shares its root name and does carry
/// source information. This is best-effort inference for subcomponents whose
/// own source attribution is missing, not a strict guarantee.
fn cluster_key_for(owner: &TargetResolution, resolution: &SpecResolution) -> String {
    match &resolution.spec.source {
        SpecSource::Remote(name) => repo_key(name),
        SpecSource::Local => owner
            .specs
            .iter()
            .find_map(|sibling| {
                if sibling.spec.root_name() != resolution.spec.root_name() {
                    return None;
                }
                match &sibling.spec.source {
                    SpecSource::Remote(name) => Some(repo_key(name)),
                    SpecSource::Local => None,
                }
            })
            .unwrap_or_else(|| "local".to_string()),
    }
}

fn repo_key(source_name: &str) -> String {
    format!("{source_name} repo")
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::model::NodeId;
    use crate::resolver::{DependencyRef, SpecInfo, TargetInfo};

    fn target(name: &str, parent: Option<&str>, deps: Vec<DependencyRef>) -> TargetInfo {
        TargetInfo {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            exclusive: false,
            dependencies: deps,
        }
    }

    fn spec(name: &str, source: SpecSource, deps: Vec<DependencyRef>) -> SpecResolution {
        SpecResolution {
            spec: SpecInfo {
                name: name.to_string(),
                version: None,
                source,
            },
            dependencies: deps,
        }
    }

    fn build(view: &ResolvedView) -> GraphModel {
        let mut builder = DependencyGraphBuilder::new();
        builder.build_from_view(view).unwrap();
        builder.into_model()
    }

    #[test]
    fn test_single_target_with_local_specs() {
        // Root target "Pods" declaring A, with specs A -> B, both local.
        let view = ResolvedView {
            targets: vec![TargetResolution {
                target: target("Pods", None, vec![DependencyRef::new("A")]),
                specs: vec![
                    spec("A", SpecSource::Local, vec![DependencyRef::new("B")]),
                    spec("B", SpecSource::Local, vec![]),
                ],
            }],
        };

        let model = build(&view);

        assert_eq!(model.node_count(), 3);
        assert_eq!(model.edge_count(), 2);

        for id in ["Pods", "A", "B"] {
            assert!(
                model.node_index(&NodeId::from_name(id)).is_some(),
                "missing node {id}"
            );
        }

        let a = model.node_index(&NodeId::from_name("A")).unwrap();
        let b = model.node_index(&NodeId::from_name("B")).unwrap();
        assert!(
            model
                .graph()
                .edge_references()
                .any(|e| e.source() == a && e.target() == b)
        );

        // Both A and B sit in the single "local" cluster.
        assert_eq!(model.clusters().len(), 1);
        assert_eq!(model.clusters()[0].key, "local");
        assert_eq!(model.clusters()[0].members().len(), 2);
    }

    #[test]
    fn test_subspec_dependencies_share_root_color() {
        let view = ResolvedView {
            targets: vec![TargetResolution {
                target: target("Pods", None, vec![]),
                specs: vec![spec(
                    "A/Subspec",
                    SpecSource::Remote("master".to_string()),
                    vec![
                        DependencyRef::new("A/Other"),
                        DependencyRef::new("A/Helpers"),
                    ],
                )],
            }],
        };

        let model = build(&view);
        let expected = color_for("A");

        for name in ["A/Other", "A/Helpers"] {
            let idx = model.node_index(&NodeId::from_name(name)).unwrap();
            match &model.node(idx).style {
                NodeStyle::Dependency { color } => assert_eq!(*color, expected, "node {name}"),
                other => panic!("expected dependency style for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_shared_dependency_deduplicates_across_targets() {
        // Two specs in different targets both depending on C: one C node,
        // one incoming edge per depending spec.
        let view = ResolvedView {
            targets: vec![
                TargetResolution {
                    target: target("App", None, vec![]),
                    specs: vec![spec(
                        "A",
                        SpecSource::Remote("master".to_string()),
                        vec![DependencyRef::new("C")],
                    )],
                },
                TargetResolution {
                    target: target("Tests", None, vec![]),
                    specs: vec![spec(
                        "B",
                        SpecSource::Remote("master".to_string()),
                        vec![DependencyRef::new("C")],
                    )],
                },
            ],
        };

        let model = build(&view);

        let c = model.node_index(&NodeId::from_name("C")).unwrap();
        let incoming: Vec<_> = model
            .graph()
            .edge_references()
            .filter(|e| e.target() == c)
            .collect();
        assert_eq!(incoming.len(), 2);
    }

    #[test]
    fn test_repeated_dependency_path_is_single_edge() {
        // The same spec resolved under two targets produces the A -> C edge
        // twice; only one survives.
        let a_spec = spec(
            "A",
            SpecSource::Remote("master".to_string()),
            vec![DependencyRef::new("C")],
        );
        let view = ResolvedView {
            targets: vec![
                TargetResolution {
                    target: target("App", None, vec![]),
                    specs: vec![a_spec.clone()],
                },
                TargetResolution {
                    target: target("Tests", None, vec![]),
                    specs: vec![a_spec],
                },
            ],
        };

        let model = build(&view);
        // App, Tests, A, C
        assert_eq!(model.node_count(), 4);
        assert_eq!(model.edge_count(), 1);
    }

    #[test]
    fn test_child_target_links_to_parent_without_constraint() {
        let view = ResolvedView {
            targets: vec![
                TargetResolution {
                    target: target("Pods", None, vec![]),
                    specs: vec![],
                },
                TargetResolution {
                    target: target("Tests", Some("Pods"), vec![]),
                    specs: vec![],
                },
            ],
        };

        let model = build(&view);

        let tests = model.node_index(&NodeId::from_name("Tests")).unwrap();
        let pods = model.node_index(&NodeId::from_name("Pods")).unwrap();
        let edge = model
            .graph()
            .edge_references()
            .find(|e| e.source() == tests && e.target() == pods)
            .expect("parent edge missing");
        assert!(!edge.weight().constraint);
        assert_eq!(edge.weight().color.as_deref(), Some("gray"));
    }

    #[test]
    fn test_missing_parent_fails_fast() {
        let view = ResolvedView {
            targets: vec![TargetResolution {
                target: target("Tests", Some("Pods"), vec![]),
                specs: vec![],
            }],
        };

        let mut builder = DependencyGraphBuilder::new();
        let err = builder.build_from_view(&view).unwrap_err();
        match err {
            DepvizError::MissingParent { target, parent } => {
                assert_eq!(target, "Tests");
                assert_eq!(parent, "Pods");
            }
            other => panic!("expected MissingParent, got {other:?}"),
        }
    }

    #[test]
    fn test_spec_cluster_uses_remote_source_name() {
        let view = ResolvedView {
            targets: vec![TargetResolution {
                target: target("Pods", None, vec![]),
                specs: vec![spec("A", SpecSource::Remote("trunk".to_string()), vec![])],
            }],
        };

        let model = build(&view);
        assert_eq!(model.clusters().len(), 1);
        assert_eq!(model.clusters()[0].key, "trunk repo");
    }

    #[test]
    fn test_ambiguous_source_borrows_from_sibling_with_same_root() {
        // A/Subspec lacks source info; sibling A carries the remote source,
        // so the subspec lands in the same cluster.
        let view = ResolvedView {
            targets: vec![TargetResolution {
                target: target("Pods", None, vec![]),
                specs: vec![
                    spec("A", SpecSource::Remote("trunk".to_string()), vec![]),
                    spec("A/Subspec", SpecSource::Local, vec![]),
                    spec("B", SpecSource::Local, vec![]),
                ],
            }],
        };

        let model = build(&view);

        let keys: Vec<_> = model.clusters().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["trunk repo", "local"]);

        let subspec = model.node_index(&NodeId::from_name("A/Subspec")).unwrap();
        assert!(model.clusters()[0].members().contains(&subspec));
    }

    #[test]
    fn test_spec_edge_carries_requirement_label_and_owner_blend() {
        let view = ResolvedView {
            targets: vec![TargetResolution {
                target: target("Pods", None, vec![]),
                specs: vec![spec(
                    "A",
                    SpecSource::Remote("master".to_string()),
                    vec![DependencyRef::with_requirement("B", "~> 2.0")],
                )],
            }],
        };

        let model = build(&view);
        let edge = model.graph().edge_references().next().unwrap();
        assert_eq!(edge.weight().label.as_deref(), Some("~> 2.0"));
        assert_eq!(
            edge.weight().color.as_deref(),
            Some(format!("black:{}", color_for("A")).as_str())
        );
    }
}
