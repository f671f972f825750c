//! Corvid syntax tree.
//!
//! Nodes are allocated in a [`bumpalo::Bump`] arena and borrow from it, so a
//! whole tree is freed at once when the arena is dropped. The code generator
//! only ever reads a tree; producing one (lexing, parsing, validation) happens
//! upstream.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use corvid_ast::AstBuilder;
//! use corvid_core::BinaryOp;
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//!
//! // let x = 1 + 2; print x;
//! let program = ast.program([
//!     ast.var_decl("x", ast.binary(BinaryOp::Add, ast.number(1.0), ast.number(2.0))),
//!     ast.print(ast.variable("x")),
//! ]);
//! assert_eq!(program.kind_name(), "Program");
//! ```

mod builder;
mod node;

pub use builder::AstBuilder;
pub use node::{
    Assignment, BinaryExpr, Call, Conditional, FunctionDeclaration, Node, Program, UnaryExpr,
    VariableDeclaration, WhileStatement,
};
