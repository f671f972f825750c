//! Corvid
//!
//! Lowers a syntax tree for a small imperative language (declarations,
//! assignment, while loops, conditionals, functions, calls, arithmetic and
//! boolean expressions, `print`) into a flat instruction sequence for a stack
//! machine.
//!
//! ## Crates
//!
//! - [`core`]: Operator codes, standard-library table and errors
//! - [`ast`]: The arena-allocated syntax tree
//! - [`compiler`]: The code generator
//!
//! # Example
//!
//! ```
//! use corvid::{AstBuilder, BinaryOp, Bump, OpCode, generate};
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//!
//! // let x = 0; while (x < 3) { x = x + 1 }
//! let program = ast.program([
//!     ast.var_decl("x", ast.number(0.0)),
//!     ast.while_loop(
//!         ast.binary(BinaryOp::Less, ast.variable("x"), ast.number(3.0)),
//!         ast.sequence([ast.assign(
//!             "x",
//!             ast.binary(BinaryOp::Add, ast.variable("x"), ast.number(1.0)),
//!         )]),
//!     ),
//! ]);
//!
//! let code = generate(&program).unwrap();
//! assert_eq!(code.last().map(|i| i.opcode), Some(OpCode::Jump));
//! ```

pub use corvid_ast as ast;
pub use corvid_compiler as compiler;
pub use corvid_core as core;

pub use bumpalo::Bump;
pub use corvid_ast::{AstBuilder, Node};
pub use corvid_compiler::{
    CodeGenerator, CompiledProgram, Constant, Instruction, OpCode, generate, generate_program,
};
pub use corvid_core::{BinaryOp, CodegenError, Result, StdLib, UnaryOp};
