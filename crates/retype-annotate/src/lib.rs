//! Return-type annotation planning for TypeScript functions.
//!
//! The pipeline is three steps, leaf first:
//!
//! 1. [`walker`] finds every function-like node under a root, depth-first.
//! 2. [`resolver`] asks a [`TypeOracle`] for each node's call signatures and
//!    renders their return types.
//! 3. [`planner`] decides whether a `: Type` annotation is missing and where
//!    it would go.
//!
//! [`ReturnTypeAnnotator`] strings the steps together. Nothing here edits
//! source text: the output is a list of [`VisitedFunction`] records whose
//! optional [`TextToInsert`] a caller may apply.

pub mod annotator;
pub use annotator::{ReturnTypeAnnotator, annotate_file};

pub mod error;
pub use error::{AnnotateError, TypeResolutionError};

pub mod model;
pub use model::{TextToInsert, VisitedFunction};

pub mod options;
pub use options::AnnotateOptions;

pub mod oracle;
pub use oracle::TypeOracle;

pub mod planner;
pub use planner::{InsertionPlan, plan, plan_insertion};

pub mod report;
pub use report::{AnnotationReport, SkippedFunction};

pub mod resolver;
pub use resolver::{ResolvedSignature, resolve_signatures};

pub mod walker;
pub use walker::{FunctionNodes, discover_function_nodes, function_nodes};

#[cfg(test)]
pub(crate) mod test_fixtures;
