//! The type-resolution oracle seam.

use crate::error::TypeResolutionError;
use retype_syntax::NodeIndex;

/// Type information for one source file.
///
/// An oracle is bound to the file whose nodes it is asked about; node handles
/// from any other tree are meaningless to it. A real implementation wraps a
/// type checker. Tests substitute canned answers.
pub trait TypeOracle {
    type Type;
    type Signature;
    type Symbol;

    /// The type of the expression or declaration at `node`.
    fn type_at_location(&self, node: NodeIndex) -> Result<Self::Type, TypeResolutionError>;

    /// Call signatures of `ty`, in declaration order.
    ///
    /// Ordinary functions have one. Overloaded declarations have one per
    /// overload.
    fn call_signatures(&self, ty: &Self::Type) -> Vec<Self::Signature>;

    fn return_type(&self, signature: &Self::Signature) -> Result<Self::Type, TypeResolutionError>;

    /// Canonical display string for `ty`, exactly as the checker prints it.
    fn type_to_string(&self, ty: &Self::Type) -> Result<String, TypeResolutionError>;

    /// The symbol a name node refers to, if any.
    fn symbol_at_location(&self, name: NodeIndex) -> Option<Self::Symbol>;

    fn symbol_name(&self, symbol: &Self::Symbol) -> String;
}
