//! Generated program with its operand tables.

use std::fmt;

use super::{Constant, Instruction};

/// The output of one generation pass.
///
/// `LOAD_NAME`/`STORE_NAME` operands index `names`; `LOAD_CONST` operands
/// index `constants`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledProgram {
    /// Instructions, addressed `0..len`.
    pub instructions: Vec<Instruction>,
    /// Global names by id.
    pub names: Vec<String>,
    /// Constants by id.
    pub constants: Vec<Constant>,
}

impl CompiledProgram {
    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if no instructions were generated.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Look up a global name by id.
    pub fn name(&self, id: u32) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// Look up a constant by id.
    pub fn constant(&self, id: u32) -> Option<Constant> {
        self.constants.get(id as usize).copied()
    }

    /// Opcodes in order, ignoring operands.
    pub fn opcodes(&self) -> Vec<super::OpCode> {
        self.instructions.iter().map(|i| i.opcode).collect()
    }

    /// Render a listing, one instruction per line.
    pub fn disassemble(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompiledProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for insn in &self.instructions {
            writeln!(f, "{insn}")?;
        }
        Ok(())
    }
}
