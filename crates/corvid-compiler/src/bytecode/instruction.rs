//! The instruction record.

use std::fmt;

use super::OpCode;

/// One instruction of the output sequence.
///
/// `address` always equals the instruction's index in the sequence it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Position in the instruction sequence.
    pub address: u32,
    /// The operation.
    pub opcode: OpCode,
    /// Name id, constant id, slot, operator code or jump target.
    pub operand: Option<u32>,
    /// Human-readable source name or value, for listings.
    pub display: Option<String>,
}

impl Instruction {
    /// An instruction with no operand.
    pub fn new(address: u32, opcode: OpCode) -> Self {
        Self {
            address,
            opcode,
            operand: None,
            display: None,
        }
    }

    /// Set the operand.
    pub fn with_operand(mut self, operand: u32) -> Self {
        self.operand = Some(operand);
        self
    }

    /// Set the display text.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Jump target, for `JUMP` and `JUMP_IF_FALSE`.
    pub fn target(&self) -> Option<u32> {
        if self.opcode.is_jump() {
            self.operand
        } else {
            None
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {}", self.address, self.opcode)?;
        if let Some(operand) = self.operand {
            write!(f, " {operand}")?;
        }
        if let Some(display) = &self.display {
            write!(f, " ({display})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_line() {
        let insn = Instruction::new(3, OpCode::LoadName)
            .with_operand(0)
            .with_display("x");
        assert_eq!(insn.to_string(), "   3 LOAD_NAME 0 (x)");
    }

    #[test]
    fn listing_line_without_operand() {
        assert_eq!(
            Instruction::new(12, OpCode::MakeFunction).to_string(),
            "  12 MAKE_FUNCTION"
        );
    }

    #[test]
    fn target_only_for_jumps() {
        assert_eq!(
            Instruction::new(0, OpCode::Jump).with_operand(5).target(),
            Some(5)
        );
        assert_eq!(
            Instruction::new(0, OpCode::LoadConst)
                .with_operand(5)
                .target(),
            None
        );
    }
}
