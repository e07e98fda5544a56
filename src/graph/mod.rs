//! # Graph construction module
//!
//! Transforms a resolved dependency analysis into the in-memory graph model
//! that the serializers consume.
//!
//! ## Components
//!
//! - **color**: deterministic hash-based color derivation for package names
//! - **model**: the deduplicated, clustered [`GraphModel`] with stable string
//!   node identities
//! - **builder**: [`DependencyGraphBuilder`], which walks a resolved view and
//!   populates the model

mod builder;
mod color;
mod model;

pub use builder::DependencyGraphBuilder;
pub use color::{RgbColor, color_for};
pub use model::{Cluster, EdgeStyle, GraphModel, GraphNode, NodeId, NodeStyle};
