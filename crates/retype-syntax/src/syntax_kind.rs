//! Syntax kinds understood by the annotator.
//!
//! This is the subset of TypeScript's `SyntaxKind` that shows up around
//! function shapes. Hosts map anything else onto [`SyntaxKind::Unknown`];
//! the annotator only ever looks at punctuation and function-like kinds.

use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    LessThanToken,
    GreaterThanToken,
    EqualsToken,
    EqualsGreaterThanToken,
    QuestionToken,
    ColonToken,
    BarToken,
    PlusToken,
    AsteriskToken,

    // Names and literals
    Identifier,
    NumericLiteral,
    StringLiteral,

    // Keywords
    AsyncKeyword,
    ClassKeyword,
    ConstKeyword,
    ConstructorKeyword,
    ExportKeyword,
    FunctionKeyword,
    GetKeyword,
    LetKeyword,
    ReturnKeyword,
    SetKeyword,
    StaticKeyword,
    AnyKeyword,
    BooleanKeyword,
    NumberKeyword,
    StringKeyword,
    VoidKeyword,

    // Lists and containers
    SyntaxList,
    SourceFile,
    Block,

    // Declarations and members
    Parameter,
    TypeParameter,
    FunctionDeclaration,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    ClassDeclaration,
    PropertyDeclaration,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,

    // Expressions
    ArrowFunction,
    FunctionExpression,
    CallExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    BinaryExpression,
    ParenthesizedExpression,

    // Statements
    ExpressionStatement,
    ReturnStatement,

    // Types
    TypeReference,
    FunctionType,
    UnionType,
    ArrayType,
}

impl SyntaxKind {
    /// Whether this kind introduces a callable signature of its own.
    ///
    /// Signature-only members (call signatures, method signatures, function
    /// types) are deliberately excluded: they have no body to infer from.
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::ArrowFunction
                | SyntaxKind::FunctionExpression
                | SyntaxKind::Constructor
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
        )
    }

    /// Whether this kind is a leaf token (punctuation, keyword, name or literal).
    pub fn is_token(self) -> bool {
        self >= SyntaxKind::OpenBraceToken && self <= SyntaxKind::VoidKeyword
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::Unknown => "Unknown",
            SyntaxKind::OpenBraceToken => "OpenBraceToken",
            SyntaxKind::CloseBraceToken => "CloseBraceToken",
            SyntaxKind::OpenParenToken => "OpenParenToken",
            SyntaxKind::CloseParenToken => "CloseParenToken",
            SyntaxKind::OpenBracketToken => "OpenBracketToken",
            SyntaxKind::CloseBracketToken => "CloseBracketToken",
            SyntaxKind::DotToken => "DotToken",
            SyntaxKind::DotDotDotToken => "DotDotDotToken",
            SyntaxKind::SemicolonToken => "SemicolonToken",
            SyntaxKind::CommaToken => "CommaToken",
            SyntaxKind::LessThanToken => "LessThanToken",
            SyntaxKind::GreaterThanToken => "GreaterThanToken",
            SyntaxKind::EqualsToken => "EqualsToken",
            SyntaxKind::EqualsGreaterThanToken => "EqualsGreaterThanToken",
            SyntaxKind::QuestionToken => "QuestionToken",
            SyntaxKind::ColonToken => "ColonToken",
            SyntaxKind::BarToken => "BarToken",
            SyntaxKind::PlusToken => "PlusToken",
            SyntaxKind::AsteriskToken => "AsteriskToken",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::AsyncKeyword => "AsyncKeyword",
            SyntaxKind::ClassKeyword => "ClassKeyword",
            SyntaxKind::ConstKeyword => "ConstKeyword",
            SyntaxKind::ConstructorKeyword => "ConstructorKeyword",
            SyntaxKind::ExportKeyword => "ExportKeyword",
            SyntaxKind::FunctionKeyword => "FunctionKeyword",
            SyntaxKind::GetKeyword => "GetKeyword",
            SyntaxKind::LetKeyword => "LetKeyword",
            SyntaxKind::ReturnKeyword => "ReturnKeyword",
            SyntaxKind::SetKeyword => "SetKeyword",
            SyntaxKind::StaticKeyword => "StaticKeyword",
            SyntaxKind::AnyKeyword => "AnyKeyword",
            SyntaxKind::BooleanKeyword => "BooleanKeyword",
            SyntaxKind::NumberKeyword => "NumberKeyword",
            SyntaxKind::StringKeyword => "StringKeyword",
            SyntaxKind::VoidKeyword => "VoidKeyword",
            SyntaxKind::SyntaxList => "SyntaxList",
            SyntaxKind::SourceFile => "SourceFile",
            SyntaxKind::Block => "Block",
            SyntaxKind::Parameter => "Parameter",
            SyntaxKind::TypeParameter => "TypeParameter",
            SyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            SyntaxKind::MethodDeclaration => "MethodDeclaration",
            SyntaxKind::Constructor => "Constructor",
            SyntaxKind::GetAccessor => "GetAccessor",
            SyntaxKind::SetAccessor => "SetAccessor",
            SyntaxKind::ClassDeclaration => "ClassDeclaration",
            SyntaxKind::PropertyDeclaration => "PropertyDeclaration",
            SyntaxKind::VariableStatement => "VariableStatement",
            SyntaxKind::VariableDeclarationList => "VariableDeclarationList",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::ArrowFunction => "ArrowFunction",
            SyntaxKind::FunctionExpression => "FunctionExpression",
            SyntaxKind::CallExpression => "CallExpression",
            SyntaxKind::ObjectLiteralExpression => "ObjectLiteralExpression",
            SyntaxKind::PropertyAssignment => "PropertyAssignment",
            SyntaxKind::BinaryExpression => "BinaryExpression",
            SyntaxKind::ParenthesizedExpression => "ParenthesizedExpression",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::ReturnStatement => "ReturnStatement",
            SyntaxKind::TypeReference => "TypeReference",
            SyntaxKind::FunctionType => "FunctionType",
            SyntaxKind::UnionType => "UnionType",
            SyntaxKind::ArrayType => "ArrayType",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
