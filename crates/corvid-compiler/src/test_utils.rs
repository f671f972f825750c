//! Helpers shared by generator unit tests.

use corvid_ast::Node;

use crate::bytecode::{CompiledProgram, Instruction, OpCode};
use crate::generator::CodeGenerator;

/// Generate `node` with a fresh generator, panicking on error.
pub fn compile(node: Node<'_>) -> CompiledProgram {
    let mut generator = CodeGenerator::new();
    generator
        .compile(&node)
        .unwrap_or_else(|e| panic!("generation failed for {}: {e}", node.kind_name()));
    generator
        .finish()
        .unwrap_or_else(|e| panic!("finish failed: {e}"))
}

/// `(opcode, operand)` pairs of a generated program.
pub fn ops(program: &CompiledProgram) -> Vec<(OpCode, Option<u32>)> {
    program
        .instructions
        .iter()
        .map(|i: &Instruction| (i.opcode, i.operand))
        .collect()
}

/// Assert that addresses are exactly `0..len`.
pub fn assert_contiguous(program: &CompiledProgram) {
    for (i, insn) in program.instructions.iter().enumerate() {
        assert_eq!(
            insn.address as usize,
            i,
            "address gap at index {i}:\n{program}"
        );
    }
}
