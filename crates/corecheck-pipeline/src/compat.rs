//! Core-compatibility validation of resolved dependency graphs.
//!
//! Ensures that no dependency bundles a copy of the host's own core
//! libraries with a version outside the required compatibility range.

use corecheck_graph::{Artifact, DependencyNode};
use corecheck_types::{CorecheckError, Result, TransformContext};
use corecheck_version::VersionRange;

use crate::transformer::GraphTransformer;

/// Group id owned by the host's core libraries.
const CORE_GROUP_ID: &str = "org.apache.maven";

/// Artifact id prefix of the host's core libraries.
const CORE_ARTIFACT_PREFIX: &str = "maven-";

/// Returns `true` if the artifact belongs to the host's own core libraries.
///
/// Case-sensitive, literal test: the artifact id must start with `maven-`
/// and the group id must equal `org.apache.maven` exactly.
pub fn is_core_artifact(artifact: &Artifact) -> bool {
    artifact.artifact_id().starts_with(CORE_ARTIFACT_PREFIX)
        && artifact.group_id() == CORE_GROUP_ID
}

/// Validates that every core artifact in a dependency graph satisfies the
/// configured version range.
///
/// The graph is walked depth-first in pre-order, children left to right; the
/// first incompatible core artifact aborts the walk. The diagnostic always
/// names the traversal root and the offending node, however deep the
/// violation sits — not the offender's immediate parent.
pub struct CompatibilityChecker {
    range: VersionRange,
}

impl CompatibilityChecker {
    /// Create a checker for the given range. The range is assumed well-formed
    /// by its producer and is reused across validation calls.
    pub fn new(range: VersionRange) -> Self {
        Self { range }
    }

    /// Pre-order search for the first core artifact outside the range.
    fn find_violation<'g>(&self, node: &'g DependencyNode) -> Option<&'g DependencyNode> {
        if is_core_artifact(node.artifact()) && !self.range.contains(node.version()) {
            return Some(node);
        }
        node.children()
            .iter()
            .find_map(|child| self.find_violation(child))
    }
}

impl GraphTransformer for CompatibilityChecker {
    fn name(&self) -> &str {
        "compatibility_checker"
    }

    fn transform<'g>(
        &self,
        root: &'g DependencyNode,
        _context: &TransformContext,
    ) -> Result<&'g DependencyNode> {
        if let Some(offender) = self.find_violation(root) {
            return Err(CorecheckError::IncompatibleVersion {
                root: root.artifact().to_string(),
                dependency: offender.artifact().to_string(),
                range: self.range.to_string(),
            });
        }
        tracing::debug!(root = %root.artifact(), range = %self.range, "no incompatible core artifacts");
        Ok(root)
    }
}
