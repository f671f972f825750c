//! Node definitions.

use corvid_core::{BinaryOp, UnaryOp};

/// A syntax tree node.
///
/// The set of kinds is closed; consumers are expected to match on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'ast> {
    /// Whole program
    Program(&'ast Program<'ast>),
    /// `let name = initializer`
    VariableDeclaration(&'ast VariableDeclaration<'ast>),
    /// Variable read
    Variable(&'ast str),
    /// `function name(params) { body }`
    FunctionDeclaration(&'ast FunctionDeclaration<'ast>),
    /// A function named as a value
    FunctionReference(&'ast str),
    /// `print argument`
    PrintStatement(&'ast Node<'ast>),
    /// `target = source`
    Assignment(&'ast Assignment<'ast>),
    /// `while test { body }`
    WhileStatement(&'ast WhileStatement<'ast>),
    /// `callee(args...)`
    Call(&'ast Call<'ast>),
    /// Expression-valued `test ? consequent : alternate`
    Conditional(&'ast Conditional<'ast>),
    /// Binary operation
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Numeric literal
    Number(f64),
    /// Boolean literal
    Boolean(bool),
    /// Ordered block of nodes
    Sequence(&'ast [Node<'ast>]),
}

impl Node<'_> {
    /// Stable name of this node's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::Variable(_) => "Variable",
            Node::FunctionDeclaration(_) => "FunctionDeclaration",
            Node::FunctionReference(_) => "FunctionReference",
            Node::PrintStatement(_) => "PrintStatement",
            Node::Assignment(_) => "Assignment",
            Node::WhileStatement(_) => "WhileStatement",
            Node::Call(_) => "Call",
            Node::Conditional(_) => "Conditional",
            Node::Binary(_) => "BinaryExpression",
            Node::Unary(_) => "UnaryExpression",
            Node::Number(_) => "NumberLiteral",
            Node::Boolean(_) => "BooleanLiteral",
            Node::Sequence(_) => "Sequence",
        }
    }
}

/// Top-level program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'ast> {
    /// Statements in source order
    pub statements: &'ast [Node<'ast>],
}

/// A variable declaration with its initializer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableDeclaration<'ast> {
    pub name: &'ast str,
    pub initializer: Node<'ast>,
}

/// A function declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDeclaration<'ast> {
    pub name: &'ast str,
    /// Parameter names in declaration order
    pub params: &'ast [&'ast str],
    pub body: Node<'ast>,
}

/// An assignment to an existing variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'ast> {
    pub target: &'ast str,
    pub source: Node<'ast>,
}

/// A while loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStatement<'ast> {
    pub test: Node<'ast>,
    pub body: Node<'ast>,
}

/// A call of a named function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Call<'ast> {
    pub callee: &'ast str,
    /// Arguments, evaluated left to right
    pub args: &'ast [Node<'ast>],
}

/// An expression-valued if/else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditional<'ast> {
    pub test: Node<'ast>,
    pub consequent: Node<'ast>,
    pub alternate: Node<'ast>,
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub op: BinaryOp,
    pub left: Node<'ast>,
    pub right: Node<'ast>,
}

/// A unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: Node<'ast>,
}
