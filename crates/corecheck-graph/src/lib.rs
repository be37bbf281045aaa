//! Artifact coordinates and resolved dependency trees.
//!
//! Produces the inputs the corecheck pipeline validates: [`Artifact`]
//! coordinates and [`DependencyNode`] trees, with a JSON file form for
//! exchanging resolved graphs.
//!
//! # Example
//! ```
//! use corecheck_graph::DependencyNode;
//!
//! let root = DependencyNode::from_json(
//!     r#"{ "artifact": "com.example:app:1.0",
//!          "children": [{ "artifact": "org.apache.maven:maven-core:3.1" }] }"#,
//! )
//! .unwrap();
//! assert_eq!(root.node_count(), 2);
//! ```

pub mod artifact;
pub mod node;

pub use artifact::Artifact;
pub use node::DependencyNode;
