//! Return types of a function's call signatures.

use crate::error::TypeResolutionError;
use crate::oracle::TypeOracle;
use retype_syntax::{NodeIndex, SourceFile};

/// A visited function before insertion planning: name and rendered return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSignature {
    pub name: Option<String>,
    pub inferred_return_type: String,
}

/// Resolve one entry per call signature of `node`'s type, in signature order.
///
/// Every entry carries the same `name`: the symbol behind the node's name
/// sub-node, or `None` for anonymous functions and names the oracle cannot
/// bind. Any oracle failure aborts the whole node. Partial results are never
/// returned.
pub fn resolve_signatures<O: TypeOracle>(
    file: &SourceFile,
    node: NodeIndex,
    oracle: &O,
) -> Result<Vec<ResolvedSignature>, TypeResolutionError> {
    let function_type = oracle.type_at_location(node)?;
    let name = declared_name(file, node, oracle);

    oracle
        .call_signatures(&function_type)
        .iter()
        .map(|signature| {
            let return_type = oracle.return_type(signature)?;
            Ok(ResolvedSignature {
                name: name.clone(),
                inferred_return_type: oracle.type_to_string(&return_type)?,
            })
        })
        .collect()
}

fn declared_name<O: TypeOracle>(file: &SourceFile, node: NodeIndex, oracle: &O) -> Option<String> {
    let name_node = file.arena().name_of(node)?;
    let symbol = oracle.symbol_at_location(name_node)?;
    Some(oracle.symbol_name(&symbol))
}
