//! Graph transformer contract and the ordered transformation pipeline.

use corecheck_graph::DependencyNode;
use corecheck_types::{Result, TransformContext};

// ---------------------------------------------------------------------------
// GraphTransformer trait
// ---------------------------------------------------------------------------

/// A single transformation step over a resolved dependency graph.
///
/// Transformers receive the graph root and the shared pipeline context and
/// either hand a graph on to the next step or fail the whole pipeline.
/// Pure validation steps return the root they were given, so callers can
/// observe pass-through identity.
pub trait GraphTransformer: Send + Sync {
    /// The transformer identifier used in pipeline logs.
    fn name(&self) -> &str;

    /// Inspect or transform the graph rooted at `root`.
    fn transform<'g>(
        &self,
        root: &'g DependencyNode,
        context: &TransformContext,
    ) -> Result<&'g DependencyNode>;
}

// ---------------------------------------------------------------------------
// TransformPipeline
// ---------------------------------------------------------------------------

/// Applies a sequence of graph transformers in registration order.
///
/// The first failing transformer aborts the pipeline; later steps never see
/// the graph.
#[derive(Default)]
pub struct TransformPipeline {
    transformers: Vec<Box<dyn GraphTransformer>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformation step.
    pub fn with(mut self, transformer: impl GraphTransformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Run every registered transformer against `root`, feeding each step the
    /// result of the previous one.
    pub fn run<'g>(
        &self,
        root: &'g DependencyNode,
        context: &TransformContext,
    ) -> Result<&'g DependencyNode> {
        let mut current = root;
        for transformer in &self.transformers {
            tracing::debug!(transformer = transformer.name(), "applying graph transformer");
            current = transformer.transform(current, context)?;
        }
        Ok(current)
    }
}
