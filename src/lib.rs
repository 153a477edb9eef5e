//! Infer missing TypeScript return types and plan their annotations.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`common`]: positions and the line map
//! - [`syntax`]: the syntax tree a host parser hands over
//! - [`annotate`]: the walk / resolve / plan pipeline
//!
//! ```ignore
//! use retype::annotate::{ReturnTypeAnnotator, TypeOracle};
//!
//! retype::tracing_config::init_tracing();
//! let file = my_parser::parse("app.ts", source)?;      // -> retype::syntax::SourceFile
//! let oracle = my_checker::oracle_for(&file);          // -> impl TypeOracle
//! let report = ReturnTypeAnnotator::new(&file, &oracle).annotate()?;
//! for visited in &report.functions {
//!     if let Some(edit) = &visited.text_to_insert {
//!         println!("{} -> insert {:?} at {}", visited.inferred_return_type, edit.text, edit.position);
//!     }
//! }
//! ```

pub use retype_annotate as annotate;
pub use retype_common as common;
pub use retype_syntax as syntax;

pub use retype_annotate::{
    AnnotateError, AnnotateOptions, AnnotationReport, ReturnTypeAnnotator, TextToInsert,
    TypeOracle, VisitedFunction, annotate_file,
};
pub use retype_common::Position;
pub use retype_syntax::{SourceFile, SyntaxKind, TreeBuilder};

pub mod tracing_config;
