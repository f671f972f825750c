//! Bytecode types for the Corvid code generator.
//!
//! - [`OpCode`] - The instruction set of the target stack machine
//! - [`Instruction`] - One addressed instruction in the output sequence
//! - [`Constant`] and [`ConstantPool`] - Literal values referenced by `LOAD_CONST`
//! - [`CompiledProgram`] - Instructions plus the tables their operands index

mod constant;
mod instruction;
mod opcode;
mod program;

pub use constant::{Constant, ConstantPool};
pub use instruction::Instruction;
pub use opcode::OpCode;
pub use program::CompiledProgram;
