use std::path::Path;

use serde::{Deserialize, Serialize};

use corecheck_types::Result;
use corecheck_version::Version;

use crate::artifact::Artifact;

/// A node in a resolved dependency tree: one [`Artifact`], its resolved
/// [`Version`], and an ordered sequence of direct dependencies.
///
/// The tree is owned by the calling pipeline; transformation steps only
/// borrow it.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    artifact: Artifact,
    version: Version,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Create a leaf node. The resolved version is taken from the artifact's
    /// version value (generic version parsing never fails).
    pub fn new(artifact: Artifact) -> Self {
        let version = Version::parse(artifact.version());
        Self {
            artifact,
            version,
            children: Vec::new(),
        }
    }

    /// Create a node with the given direct dependencies, in order.
    pub fn with_children(artifact: Artifact, children: Vec<DependencyNode>) -> Self {
        let mut node = Self::new(artifact);
        node.children = children;
        node
    }

    /// Append a direct dependency. Child order is significant: traversals
    /// visit children left to right in insertion order.
    pub fn add_child(&mut self, child: DependencyNode) {
        self.children.push(child);
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DependencyNode::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::depth)
            .max()
            .unwrap_or(0)
    }

    // -- JSON graph files -------------------------------------------------

    /// Build a tree from its JSON form:
    /// `{ "artifact": "<coordinates>", "children": [ ... ] }`.
    pub fn from_json(json: &str) -> Result<DependencyNode> {
        let raw: RawNode = serde_json::from_str(json)?;
        raw.into_node()
    }

    /// Serialize this tree to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&RawNode::from_node(self))?)
    }

    /// Read a dependency tree from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<DependencyNode> {
        let data = std::fs::read_to_string(path)?;
        let node = Self::from_json(&data)?;
        tracing::debug!(
            path = %path.display(),
            nodes = node.node_count(),
            "loaded dependency graph"
        );
        Ok(node)
    }

    /// Write this tree as JSON to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Raw serde form of a dependency tree.
#[derive(Debug, Serialize, Deserialize)]
struct RawNode {
    artifact: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<RawNode>,
}

impl RawNode {
    fn into_node(self) -> Result<DependencyNode> {
        let artifact = Artifact::parse(&self.artifact)?;
        let children = self
            .children
            .into_iter()
            .map(RawNode::into_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(DependencyNode::with_children(artifact, children))
    }

    fn from_node(node: &DependencyNode) -> RawNode {
        RawNode {
            artifact: node.artifact.to_string(),
            children: node.children.iter().map(RawNode::from_node).collect(),
        }
    }
}
