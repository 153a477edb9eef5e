//! The full pipeline: walk, resolve, plan.

use crate::error::{AnnotateError, TypeResolutionError};
use crate::model::VisitedFunction;
use crate::options::AnnotateOptions;
use crate::oracle::TypeOracle;
use crate::planner::plan_insertion;
use crate::report::{AnnotationReport, SkippedFunction};
use crate::resolver::resolve_signatures;
use crate::walker::{FunctionNodes, function_nodes};
use retype_syntax::{NodeIndex, SourceFile, SyntaxKind};
use tracing::{debug, warn};

/// Annotates one source file against the oracle bound to it.
pub struct ReturnTypeAnnotator<'a, O: TypeOracle> {
    file: &'a SourceFile,
    oracle: &'a O,
    options: AnnotateOptions,
}

impl<'a, O: TypeOracle> ReturnTypeAnnotator<'a, O> {
    pub fn new(file: &'a SourceFile, oracle: &'a O) -> Self {
        Self::with_options(file, oracle, AnnotateOptions::default())
    }

    pub fn with_options(file: &'a SourceFile, oracle: &'a O, options: AnnotateOptions) -> Self {
        ReturnTypeAnnotator {
            file,
            oracle,
            options,
        }
    }

    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// Function-like nodes of the whole file, in walk order.
    pub fn function_nodes(&self) -> FunctionNodes<'a> {
        function_nodes(self.file.arena(), self.file.root())
    }

    /// One record per call signature of `node`.
    pub fn enrich_function_node(&self, node: NodeIndex) -> Result<Vec<VisitedFunction>, AnnotateError> {
        let signatures = resolve_signatures(self.file, node, self.oracle)
            .map_err(|source| self.resolution_error(node, source))?;

        Ok(signatures
            .into_iter()
            .map(|signature| {
                let text_to_insert =
                    plan_insertion(self.file, node, &signature.inferred_return_type);
                VisitedFunction {
                    name: signature.name,
                    inferred_return_type: signature.inferred_return_type,
                    text_to_insert,
                }
            })
            .collect())
    }

    /// Records for every node, in order. Stops at the first failure.
    pub fn enrich_function_nodes(
        &self,
        nodes: &[NodeIndex],
    ) -> Result<Vec<VisitedFunction>, AnnotateError> {
        let mut visited = Vec::with_capacity(nodes.len());
        for &node in nodes {
            visited.extend(self.enrich_function_node(node)?);
        }
        Ok(visited)
    }

    /// Walk the whole file and build a report, honouring the options.
    ///
    /// With `isolate_failures` set, a function the oracle cannot resolve is
    /// listed under `skipped` and the walk continues; otherwise its error is
    /// returned.
    #[tracing::instrument(level = "debug", skip(self), fields(file = %self.file.file_name()))]
    pub fn annotate(&self) -> Result<AnnotationReport, AnnotateError> {
        let mut report = AnnotationReport::new(self.file.file_name());

        for node in self.function_nodes() {
            match self.enrich_function_node(node) {
                Ok(visited) => report.functions.extend(
                    visited
                        .into_iter()
                        .filter(|visited| self.options.keeps(visited)),
                ),
                Err(AnnotateError::Resolution {
                    kind,
                    position,
                    source,
                    ..
                }) if self.options.isolate_failures => {
                    warn!(%kind, %position, error = %source, "skipping function");
                    report.skipped.push(SkippedFunction {
                        kind,
                        position,
                        message: source.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            functions = report.functions.len(),
            insertions = report.insertion_count(),
            skipped = report.skipped.len(),
            "annotation finished"
        );
        Ok(report)
    }

    fn resolution_error(
        &self,
        node: NodeIndex,
        source: TypeResolutionError,
    ) -> AnnotateError {
        let (kind, pos) = self
            .file
            .arena()
            .get(node)
            .map_or((SyntaxKind::Unknown, 0), |n| (n.kind, n.pos));
        AnnotateError::Resolution {
            function: node,
            kind,
            position: self.file.position_of(pos),
            source,
        }
    }
}

/// Every function-like node of `file`, enriched. Fails on the first function
/// the oracle cannot resolve.
pub fn annotate_file<O: TypeOracle>(
    file: &SourceFile,
    oracle: &O,
) -> Result<Vec<VisitedFunction>, AnnotateError> {
    let annotator = ReturnTypeAnnotator::new(file, oracle);
    let nodes: Vec<NodeIndex> = annotator.function_nodes().collect();
    annotator.enrich_function_nodes(&nodes)
}

#[cfg(test)]
#[path = "../tests/annotator_tests.rs"]
mod tests;
