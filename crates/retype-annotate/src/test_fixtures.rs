//! Shared test fixtures: hand-built TypeScript trees and a canned oracle.
//!
//! Trees are built with `TreeBuilder::token_text`, so every offset points at
//! the real lexeme in the fixture's source text. Function-like nodes are
//! recorded in the order they are opened, which is exactly pre-order.

use crate::error::TypeResolutionError;
use crate::oracle::TypeOracle;
use retype_syntax::{NodeIndex, SourceFile, SyntaxKind, TreeBuildError, TreeBuilder};
use rustc_hash::{FxHashMap, FxHashSet};

pub(crate) struct Fixture {
    pub file: SourceFile,
    /// Function-like nodes in pre-order.
    pub functions: Vec<NodeIndex>,
    /// Every name token placed via `name`, with its text.
    pub names: Vec<(NodeIndex, String)>,
}

impl Fixture {
    /// Byte offset just past the `nth` occurrence of `needle`.
    pub fn offset_after(&self, needle: &str, nth: usize) -> u32 {
        let (idx, _) = self
            .file
            .text()
            .match_indices(needle)
            .nth(nth)
            .expect("needle present in fixture text");
        (idx + needle.len()) as u32
    }

    /// Canned oracle that knows every recorded name.
    pub fn oracle(&self) -> CannedOracle {
        let mut oracle = CannedOracle::new();
        for (node, text) in &self.names {
            oracle = oracle.named(*node, text);
        }
        oracle
    }
}

struct Recorder {
    b: TreeBuilder,
    functions: Vec<NodeIndex>,
    names: Vec<(NodeIndex, String)>,
}

impl Recorder {
    fn new(source: &str) -> Self {
        Recorder {
            b: TreeBuilder::new("test.ts", source),
            functions: Vec::new(),
            names: Vec::new(),
        }
    }

    fn open(&mut self, kind: SyntaxKind) -> Result<NodeIndex, TreeBuildError> {
        let index = self.b.start_node(kind)?;
        if kind.is_function_like() {
            self.functions.push(index);
        }
        Ok(index)
    }

    fn close(&mut self) -> Result<NodeIndex, TreeBuildError> {
        self.b.finish_node()
    }

    fn tok(&mut self, kind: SyntaxKind, text: &str) -> Result<NodeIndex, TreeBuildError> {
        self.b.token_text(kind, text)
    }

    fn name(&mut self, text: &str) -> Result<NodeIndex, TreeBuildError> {
        let index = self.b.name_token(text)?;
        self.names.push((index, text.to_string()));
        Ok(index)
    }

    /// `(` SyntaxList[Parameter, `,`, Parameter ...] `)`
    fn params(&mut self, names: &[&str]) -> Result<(), TreeBuildError> {
        self.tok(SyntaxKind::OpenParenToken, "(")?;
        self.open(SyntaxKind::SyntaxList)?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.tok(SyntaxKind::CommaToken, ",")?;
            }
            self.open(SyntaxKind::Parameter)?;
            self.name(name)?;
            self.close()?;
        }
        self.close()?;
        self.tok(SyntaxKind::CloseParenToken, ")")?;
        Ok(())
    }

    /// Parameter `name: <keyword>`
    fn typed_param(&mut self, name: &str, keyword: SyntaxKind, text: &str) -> Result<(), TreeBuildError> {
        self.open(SyntaxKind::Parameter)?;
        self.name(name)?;
        self.tok(SyntaxKind::ColonToken, ":")?;
        self.tok(keyword, text)?;
        self.close()?;
        Ok(())
    }

    fn empty_block(&mut self) -> Result<(), TreeBuildError> {
        self.open(SyntaxKind::Block)?;
        self.tok(SyntaxKind::OpenBraceToken, "{")?;
        self.open(SyntaxKind::SyntaxList)?;
        self.close()?;
        self.tok(SyntaxKind::CloseBraceToken, "}")?;
        self.close()?;
        Ok(())
    }

    /// `{ return <expr>; }` where the expression is a single token.
    fn return_block(&mut self, kind: SyntaxKind, expr: &str) -> Result<(), TreeBuildError> {
        self.open(SyntaxKind::Block)?;
        self.tok(SyntaxKind::OpenBraceToken, "{")?;
        self.open(SyntaxKind::SyntaxList)?;
        self.open(SyntaxKind::ReturnStatement)?;
        self.tok(SyntaxKind::ReturnKeyword, "return")?;
        self.tok(kind, expr)?;
        self.tok(SyntaxKind::SemicolonToken, ";")?;
        self.close()?;
        self.close()?;
        self.tok(SyntaxKind::CloseBraceToken, "}")?;
        self.close()?;
        Ok(())
    }

    fn finish(mut self) -> Result<Fixture, TreeBuildError> {
        self.close()?;
        Ok(Fixture {
            file: self.b.finish()?,
            functions: self.functions,
            names: self.names,
        })
    }
}

/// `function f(a, b) {}`
pub(crate) fn simple_function() -> Fixture {
    build_simple_function().expect("fixture builds")
}

fn build_simple_function() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new("function f(a, b) {}");
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::FunctionDeclaration)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.name("f")?;
    r.params(&["a", "b"])?;
    r.empty_block()?;
    r.close()?;
    r.finish()
}

/// `function f(): number {}`
pub(crate) fn annotated_function() -> Fixture {
    build_annotated_function().expect("fixture builds")
}

fn build_annotated_function() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new("function f(): number {}");
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::FunctionDeclaration)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.name("f")?;
    r.params(&[])?;
    r.tok(SyntaxKind::ColonToken, ":")?;
    r.tok(SyntaxKind::NumberKeyword, "number")?;
    r.empty_block()?;
    r.close()?;
    r.finish()
}

/// `function f(cb: (x: number) => void) {}`
pub(crate) fn callback_parameter() -> Fixture {
    build_callback_parameter().expect("fixture builds")
}

fn build_callback_parameter() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new("function f(cb: (x: number) => void) {}");
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::FunctionDeclaration)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.name("f")?;
    r.tok(SyntaxKind::OpenParenToken, "(")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::Parameter)?;
    r.name("cb")?;
    r.tok(SyntaxKind::ColonToken, ":")?;
    r.open(SyntaxKind::FunctionType)?;
    r.tok(SyntaxKind::OpenParenToken, "(")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.typed_param("x", SyntaxKind::NumberKeyword, "number")?;
    r.close()?;
    r.tok(SyntaxKind::CloseParenToken, ")")?;
    r.tok(SyntaxKind::EqualsGreaterThanToken, "=>")?;
    r.tok(SyntaxKind::VoidKeyword, "void")?;
    r.close()?; // FunctionType
    r.close()?; // Parameter
    r.close()?; // SyntaxList
    r.tok(SyntaxKind::CloseParenToken, ")")?;
    r.empty_block()?;
    r.close()?;
    r.finish()
}

/// `const o = { run: (x) => x };`
pub(crate) fn object_property_arrow() -> Fixture {
    build_object_property_arrow().expect("fixture builds")
}

fn build_object_property_arrow() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new("const o = { run: (x) => x };");
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::VariableStatement)?;
    r.open(SyntaxKind::VariableDeclarationList)?;
    r.tok(SyntaxKind::ConstKeyword, "const")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::VariableDeclaration)?;
    r.name("o")?;
    r.tok(SyntaxKind::EqualsToken, "=")?;
    r.open(SyntaxKind::ObjectLiteralExpression)?;
    r.tok(SyntaxKind::OpenBraceToken, "{")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::PropertyAssignment)?;
    r.name("run")?;
    r.tok(SyntaxKind::ColonToken, ":")?;
    r.open(SyntaxKind::ArrowFunction)?;
    r.params(&["x"])?;
    r.tok(SyntaxKind::EqualsGreaterThanToken, "=>")?;
    r.tok(SyntaxKind::Identifier, "x")?;
    r.close()?; // ArrowFunction
    r.close()?; // PropertyAssignment
    r.close()?; // SyntaxList
    r.tok(SyntaxKind::CloseBraceToken, "}")?;
    r.close()?; // ObjectLiteralExpression
    r.close()?; // VariableDeclaration
    r.close()?; // SyntaxList
    r.close()?; // VariableDeclarationList
    r.tok(SyntaxKind::SemicolonToken, ";")?;
    r.close()?; // VariableStatement
    r.finish()
}

pub(crate) const NESTED_SOURCE: &str = "\
function outer() {
  const inner = function () {
    return () => 1;
  };
  return inner;
}
function after() {}
";

/// Functions nested three deep, followed by a sibling declaration.
pub(crate) fn nested_functions() -> Fixture {
    build_nested_functions().expect("fixture builds")
}

fn build_nested_functions() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new(NESTED_SOURCE);
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::SyntaxList)?;

    r.open(SyntaxKind::FunctionDeclaration)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.name("outer")?;
    r.params(&[])?;
    r.open(SyntaxKind::Block)?;
    r.tok(SyntaxKind::OpenBraceToken, "{")?;
    r.open(SyntaxKind::SyntaxList)?;

    r.open(SyntaxKind::VariableStatement)?;
    r.open(SyntaxKind::VariableDeclarationList)?;
    r.tok(SyntaxKind::ConstKeyword, "const")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::VariableDeclaration)?;
    r.name("inner")?;
    r.tok(SyntaxKind::EqualsToken, "=")?;
    r.open(SyntaxKind::FunctionExpression)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.params(&[])?;
    r.open(SyntaxKind::Block)?;
    r.tok(SyntaxKind::OpenBraceToken, "{")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::ReturnStatement)?;
    r.tok(SyntaxKind::ReturnKeyword, "return")?;
    r.open(SyntaxKind::ArrowFunction)?;
    r.params(&[])?;
    r.tok(SyntaxKind::EqualsGreaterThanToken, "=>")?;
    r.tok(SyntaxKind::NumericLiteral, "1")?;
    r.close()?; // ArrowFunction
    r.tok(SyntaxKind::SemicolonToken, ";")?;
    r.close()?; // ReturnStatement
    r.close()?; // SyntaxList
    r.tok(SyntaxKind::CloseBraceToken, "}")?;
    r.close()?; // Block
    r.close()?; // FunctionExpression
    r.close()?; // VariableDeclaration
    r.close()?; // SyntaxList
    r.close()?; // VariableDeclarationList
    r.tok(SyntaxKind::SemicolonToken, ";")?;
    r.close()?; // VariableStatement

    r.open(SyntaxKind::ReturnStatement)?;
    r.tok(SyntaxKind::ReturnKeyword, "return")?;
    r.tok(SyntaxKind::Identifier, "inner")?;
    r.tok(SyntaxKind::SemicolonToken, ";")?;
    r.close()?;

    r.close()?; // SyntaxList
    r.tok(SyntaxKind::CloseBraceToken, "}")?;
    r.close()?; // Block
    r.close()?; // FunctionDeclaration outer

    r.open(SyntaxKind::FunctionDeclaration)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.name("after")?;
    r.params(&[])?;
    r.empty_block()?;
    r.close()?;

    r.close()?; // SyntaxList
    r.finish()
}

pub(crate) const CLASS_SOURCE: &str = "\
class Point {
  constructor(x) {}
  get size() { return 1; }
  set size(v) {}
  norm(): number { return 0; }
}
";

/// A class with a constructor, both accessors and an annotated method.
pub(crate) fn class_members() -> Fixture {
    build_class_members().expect("fixture builds")
}

fn build_class_members() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new(CLASS_SOURCE);
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::ClassDeclaration)?;
    r.tok(SyntaxKind::ClassKeyword, "class")?;
    r.name("Point")?;
    r.tok(SyntaxKind::OpenBraceToken, "{")?;
    r.open(SyntaxKind::SyntaxList)?;

    r.open(SyntaxKind::Constructor)?;
    r.tok(SyntaxKind::ConstructorKeyword, "constructor")?;
    r.params(&["x"])?;
    r.empty_block()?;
    r.close()?;

    r.open(SyntaxKind::GetAccessor)?;
    r.tok(SyntaxKind::GetKeyword, "get")?;
    r.name("size")?;
    r.params(&[])?;
    r.return_block(SyntaxKind::NumericLiteral, "1")?;
    r.close()?;

    r.open(SyntaxKind::SetAccessor)?;
    r.tok(SyntaxKind::SetKeyword, "set")?;
    r.name("size")?;
    r.params(&["v"])?;
    r.empty_block()?;
    r.close()?;

    r.open(SyntaxKind::MethodDeclaration)?;
    r.name("norm")?;
    r.params(&[])?;
    r.tok(SyntaxKind::ColonToken, ":")?;
    r.tok(SyntaxKind::NumberKeyword, "number")?;
    r.return_block(SyntaxKind::NumericLiteral, "0")?;
    r.close()?;

    r.close()?; // SyntaxList
    r.tok(SyntaxKind::CloseBraceToken, "}")?;
    r.close()?; // ClassDeclaration
    r.finish()
}

pub(crate) const OVERLOAD_SOURCE: &str = "\
function pick(x: string): string;
function pick(x: number): number;
function pick(x) { return x; }
";

/// Two overload signatures and an unannotated implementation.
pub(crate) fn overloads() -> Fixture {
    build_overloads().expect("fixture builds")
}

fn build_overloads() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new(OVERLOAD_SOURCE);
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::SyntaxList)?;

    for (keyword, text) in [
        (SyntaxKind::StringKeyword, "string"),
        (SyntaxKind::NumberKeyword, "number"),
    ] {
        r.open(SyntaxKind::FunctionDeclaration)?;
        r.tok(SyntaxKind::FunctionKeyword, "function")?;
        r.name("pick")?;
        r.tok(SyntaxKind::OpenParenToken, "(")?;
        r.open(SyntaxKind::SyntaxList)?;
        r.typed_param("x", keyword, text)?;
        r.close()?;
        r.tok(SyntaxKind::CloseParenToken, ")")?;
        r.tok(SyntaxKind::ColonToken, ":")?;
        r.tok(keyword, text)?;
        r.tok(SyntaxKind::SemicolonToken, ";")?;
        r.close()?;
    }

    r.open(SyntaxKind::FunctionDeclaration)?;
    r.tok(SyntaxKind::FunctionKeyword, "function")?;
    r.name("pick")?;
    r.params(&["x"])?;
    r.return_block(SyntaxKind::Identifier, "x")?;
    r.close()?;

    r.close()?; // SyntaxList
    r.finish()
}

/// `const double = x => x * 2;` (arrow with an unparenthesized parameter)
pub(crate) fn bare_arrow() -> Fixture {
    build_bare_arrow().expect("fixture builds")
}

fn build_bare_arrow() -> Result<Fixture, TreeBuildError> {
    let mut r = Recorder::new("const double = x => x * 2;");
    r.open(SyntaxKind::SourceFile)?;
    r.open(SyntaxKind::VariableStatement)?;
    r.open(SyntaxKind::VariableDeclarationList)?;
    r.tok(SyntaxKind::ConstKeyword, "const")?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::VariableDeclaration)?;
    r.name("double")?;
    r.tok(SyntaxKind::EqualsToken, "=")?;
    r.open(SyntaxKind::ArrowFunction)?;
    r.open(SyntaxKind::SyntaxList)?;
    r.open(SyntaxKind::Parameter)?;
    r.name("x")?;
    r.close()?;
    r.close()?;
    r.tok(SyntaxKind::EqualsGreaterThanToken, "=>")?;
    r.open(SyntaxKind::BinaryExpression)?;
    r.tok(SyntaxKind::Identifier, "x")?;
    r.tok(SyntaxKind::AsteriskToken, "*")?;
    r.tok(SyntaxKind::NumericLiteral, "2")?;
    r.close()?;
    r.close()?; // ArrowFunction
    r.close()?; // VariableDeclaration
    r.close()?; // SyntaxList
    r.close()?; // VariableDeclarationList
    r.tok(SyntaxKind::SemicolonToken, ";")?;
    r.close()?; // VariableStatement
    r.finish()
}

// =============================================================================
// Canned oracle
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CannedType {
    /// The type of a function node; its signatures come from the table.
    Function(NodeIndex),
    /// An already-rendered return type.
    Rendered(String),
}

/// Oracle double answering from fixed tables.
///
/// A canned signature is just its rendered return type. Nodes without an
/// entry have no type, which surfaces as `UnresolvedType`.
#[derive(Default)]
pub(crate) struct CannedOracle {
    signatures: FxHashMap<NodeIndex, Vec<String>>,
    names: FxHashMap<NodeIndex, String>,
    unrenderable: FxHashSet<String>,
}

impl CannedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// `node` has one call signature per entry of `return_types`.
    pub fn returns(mut self, node: NodeIndex, return_types: &[&str]) -> Self {
        self.signatures
            .insert(node, return_types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn named(mut self, name_node: NodeIndex, name: &str) -> Self {
        self.names.insert(name_node, name.to_string());
        self
    }

    /// Rendering `return_type` fails.
    pub fn unrenderable(mut self, return_type: &str) -> Self {
        self.unrenderable.insert(return_type.to_string());
        self
    }
}

impl TypeOracle for CannedOracle {
    type Type = CannedType;
    type Signature = String;
    type Symbol = String;

    fn type_at_location(&self, node: NodeIndex) -> Result<CannedType, TypeResolutionError> {
        if self.signatures.contains_key(&node) {
            Ok(CannedType::Function(node))
        } else {
            Err(TypeResolutionError::UnresolvedType { node })
        }
    }

    fn call_signatures(&self, ty: &CannedType) -> Vec<String> {
        match ty {
            CannedType::Function(node) => self.signatures.get(node).cloned().unwrap_or_default(),
            CannedType::Rendered(_) => Vec::new(),
        }
    }

    fn return_type(&self, signature: &String) -> Result<CannedType, TypeResolutionError> {
        Ok(CannedType::Rendered(signature.clone()))
    }

    fn type_to_string(&self, ty: &CannedType) -> Result<String, TypeResolutionError> {
        match ty {
            CannedType::Rendered(text) if self.unrenderable.contains(text) => {
                Err(TypeResolutionError::Render(text.clone()))
            }
            CannedType::Rendered(text) => Ok(text.clone()),
            CannedType::Function(node) => Err(TypeResolutionError::Render(format!(
                "function type of {node:?}"
            ))),
        }
    }

    fn symbol_at_location(&self, name: NodeIndex) -> Option<String> {
        self.names.get(&name).cloned()
    }

    fn symbol_name(&self, symbol: &String) -> String {
        symbol.clone()
    }
}
