//! Corvid Compiler
//!
//! A single-pass code generator that lowers a Corvid syntax tree into a flat
//! sequence of stack-machine instructions.
//!
//! ## Architecture
//!
//! The tree is walked once, depth first. Every instruction is appended to one
//! growing buffer and its address is the buffer length at the moment it is
//! emitted. Control flow whose target is not yet known reserves a placeholder
//! jump and patches it in place once the target address exists, so addresses
//! never shift after they are handed out.
//!
//! ## Modules
//!
//! - [`bytecode`]: Instruction record, opcode set and constant pool
//! - [`emit`]: Instruction emitter with jump reservation and backpatching
//! - [`intern`]: Dense id assignment for names and constants
//! - [`scope`]: Parameter scope for the function body being generated
//! - [`expr`] / [`stmt`]: Generation rules per node kind
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use corvid_ast::AstBuilder;
//! use corvid_compiler::{OpCode, generate};
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//! let program = ast.program([ast.var_decl("x", ast.number(42.0))]);
//!
//! let code = generate(&program).unwrap();
//! assert_eq!(code[0].opcode, OpCode::LoadConst);
//! assert_eq!(code[1].opcode, OpCode::StoreName);
//! ```

pub mod bytecode;
pub mod emit;
pub mod expr;
mod generator;
pub mod intern;
pub mod scope;
pub mod stmt;

pub use bytecode::{CompiledProgram, Constant, ConstantPool, Instruction, OpCode};
pub use emit::{Emitter, JumpLabel};
pub use generator::CodeGenerator;
pub use intern::{Names, SymbolTable};
pub use scope::{ParamScope, VarLookup};

pub use corvid_core::{CodegenError, Result};

use corvid_ast::Node;

/// Generate the instruction sequence for a program.
///
/// Addresses in the result are `0..len` in order. Names and constants are
/// interned per call, so two calls on equal trees yield equal sequences.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn generate(program: &Node<'_>) -> Result<Vec<Instruction>> {
    generate_program(program).map(|compiled| compiled.instructions)
}

/// Generate a program together with the name and constant tables its
/// operands index into.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn generate_program(program: &Node<'_>) -> Result<CompiledProgram> {
    let mut generator = CodeGenerator::new();
    generator.compile(program)?;
    generator.finish()
}

#[cfg(test)]
mod test_utils;
