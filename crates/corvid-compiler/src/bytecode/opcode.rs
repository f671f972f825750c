//! Operation codes.
//!
//! The target is a stack machine: operands are popped from and results pushed
//! to an implicit value stack. Instructions are fixed records rather than
//! packed bytes, so each opcode carries at most one integer operand.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Instruction opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OpCode {
    // =========================================================================
    // Names and Constants
    // =========================================================================
    /// Push a global by name id.
    /// Operand: name id
    LoadName = 0,
    /// Pop into a global by name id.
    /// Operand: name id
    StoreName,
    /// Push a parameter of the current function.
    /// Operand: parameter slot
    LoadFast,
    /// Push a constant.
    /// Operand: constant id
    LoadConst,

    // =========================================================================
    // Functions
    // =========================================================================
    /// Marks the start of a function body in the flat stream.
    MakeFunction,
    /// Call the function below the arguments on the stack.
    Call,
    /// Call a standard-library function.
    /// Operand: standard-library id
    CallStdlib,

    // =========================================================================
    // Operators
    // =========================================================================
    /// Pop two values, push the result.
    /// Operand: binary operator code
    BinaryOp,
    /// Logical negation of the top of stack.
    UnaryNot,
    /// Arithmetic negation of the top of stack.
    UnaryNegative,

    // =========================================================================
    // Control Flow
    // =========================================================================
    /// Unconditional jump.
    /// Operand: target address
    Jump,
    /// Pop the top of stack and jump if it is false.
    /// Operand: target address
    JumpIfFalse,
}

impl OpCode {
    /// Whether instructions with this opcode carry an operand.
    pub fn has_operand(&self) -> bool {
        !matches!(
            self,
            OpCode::MakeFunction | OpCode::Call | OpCode::UnaryNot | OpCode::UnaryNegative
        )
    }

    /// Whether the operand is an instruction address.
    pub fn is_jump(&self) -> bool {
        matches!(self, OpCode::Jump | OpCode::JumpIfFalse)
    }

    /// Get the mnemonic of this opcode.
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::LoadName => "LOAD_NAME",
            OpCode::StoreName => "STORE_NAME",
            OpCode::LoadFast => "LOAD_FAST",
            OpCode::LoadConst => "LOAD_CONST",
            OpCode::MakeFunction => "MAKE_FUNCTION",
            OpCode::Call => "CALL",
            OpCode::CallStdlib => "CALL_STDLIB",
            OpCode::BinaryOp => "BINARY_OP",
            OpCode::UnaryNot => "UNARY_NOT",
            OpCode::UnaryNegative => "UNARY_NEGATIVE",
            OpCode::Jump => "JUMP",
            OpCode::JumpIfFalse => "JUMP_IF_FALSE",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
