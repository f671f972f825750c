//! Instruction emitter.
//!
//! The [`Emitter`] owns the output sequence. Its length is the program
//! counter: every instruction is stamped with the length at the moment it is
//! appended. Forward jumps are appended as placeholders with no target and
//! overwritten in place once the target is known, so no instruction ever
//! moves after its address has been assigned.
//!
//! # Example
//!
//! ```
//! use corvid_compiler::{Emitter, OpCode};
//!
//! let mut emitter = Emitter::new();
//! let exit = emitter.emit_jump(OpCode::JumpIfFalse).unwrap();
//! emitter.emit(OpCode::UnaryNot).unwrap();
//! emitter.patch_jump(exit).unwrap();
//!
//! let code = emitter.finish().unwrap();
//! assert_eq!(code[0].operand, Some(2));
//! ```

mod jumps;

use corvid_core::{CodegenError, Result};
use tracing::trace;

use crate::bytecode::{Instruction, OpCode};
use jumps::JumpManager;

/// A reserved forward jump awaiting its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpLabel(pub(crate) u32);

impl JumpLabel {
    /// Address of the placeholder instruction.
    pub fn address(&self) -> u32 {
        self.0
    }
}

/// Appends instructions and backpatches jumps.
#[derive(Debug, Default)]
pub struct Emitter {
    /// The output sequence; index equals address
    code: Vec<Instruction>,
    /// Placeholders still waiting for a target
    jumps: JumpManager,
}

impl Emitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Address the next instruction will receive.
    pub fn current_address(&self) -> Result<u32> {
        u32::try_from(self.code.len()).map_err(|_| CodegenError::ProgramTooLarge {
            len: self.code.len(),
        })
    }

    fn push(&mut self, insn: Instruction) -> u32 {
        let address = insn.address;
        self.code.push(insn);
        address
    }

    // ==========================================================================
    // Basic Emission
    // ==========================================================================

    /// Emit an instruction with no operand.
    pub fn emit(&mut self, op: OpCode) -> Result<u32> {
        let address = self.current_address()?;
        Ok(self.push(Instruction::new(address, op)))
    }

    /// Emit an instruction with an operand.
    pub fn emit_arg(&mut self, op: OpCode, operand: u32) -> Result<u32> {
        let address = self.current_address()?;
        Ok(self.push(Instruction::new(address, op).with_operand(operand)))
    }

    /// Emit an instruction with an operand and display text.
    pub fn emit_named(
        &mut self,
        op: OpCode,
        operand: u32,
        display: impl Into<String>,
    ) -> Result<u32> {
        let address = self.current_address()?;
        Ok(self.push(
            Instruction::new(address, op)
                .with_operand(operand)
                .with_display(display),
        ))
    }

    // ==========================================================================
    // Jumps and Control Flow
    // ==========================================================================

    /// Emit a forward jump whose target is not known yet.
    ///
    /// The placeholder occupies its address immediately. It must be given a
    /// target with [`patch_jump`](Self::patch_jump) before [`finish`](Self::finish).
    pub fn emit_jump(&mut self, op: OpCode) -> Result<JumpLabel> {
        debug_assert!(op.is_jump(), "{op} is not a jump");
        let address = self.emit(op)?;
        Ok(self.jumps.reserve(address))
    }

    /// Patch a forward jump to target the current address.
    pub fn patch_jump(&mut self, label: JumpLabel) -> Result<()> {
        let target = self.current_address()?;
        self.patch_jump_to(label, target)
    }

    /// Patch a forward jump to target `target`.
    pub fn patch_jump_to(&mut self, label: JumpLabel, target: u32) -> Result<()> {
        self.jumps.resolve(label)?;
        let Some(slot) = self.code.get_mut(label.0 as usize) else {
            return Err(CodegenError::InvalidPatch { address: label.0 });
        };
        slot.operand = Some(target);
        trace!(
            address = label.0,
            target,
            op = slot.opcode.name(),
            "patched jump"
        );
        Ok(())
    }

    /// Emit an unconditional jump back to `target`.
    pub fn emit_loop(&mut self, target: u32) -> Result<u32> {
        self.emit_arg(OpCode::Jump, target)
    }

    // ==========================================================================
    // Output
    // ==========================================================================

    /// Instructions emitted so far.
    pub fn code(&self) -> &[Instruction] {
        &self.code
    }

    /// Number of instructions emitted so far.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Check if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Finish emission and return the instruction sequence.
    ///
    /// Fails if any reserved jump was never patched.
    pub fn finish(self) -> Result<Vec<Instruction>> {
        if let Some(address) = self.jumps.first_pending() {
            return Err(CodegenError::UnpatchedJump { address });
        }
        Ok(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_follow_emission_order() {
        let mut emitter = Emitter::new();
        assert_eq!(emitter.emit_arg(OpCode::LoadConst, 0), Ok(0));
        assert_eq!(emitter.emit_named(OpCode::StoreName, 0, "x"), Ok(1));
        assert_eq!(emitter.emit(OpCode::Call), Ok(2));
        assert_eq!(emitter.current_address(), Ok(3));

        let code = emitter.finish().unwrap();
        for (i, insn) in code.iter().enumerate() {
            assert_eq!(insn.address as usize, i);
        }
        assert_eq!(code[1].display.as_deref(), Some("x"));
    }

    #[test]
    fn placeholder_holds_its_address() {
        let mut emitter = Emitter::new();
        emitter.emit_arg(OpCode::LoadConst, 0).unwrap();
        let label = emitter.emit_jump(OpCode::JumpIfFalse).unwrap();
        emitter.emit_arg(OpCode::LoadConst, 1).unwrap();

        assert_eq!(label.address(), 1);
        assert_eq!(emitter.code()[1].opcode, OpCode::JumpIfFalse);
        assert_eq!(emitter.code()[1].operand, None);
        assert_eq!(emitter.code()[2].address, 2);
    }

    #[test]
    fn patch_targets_current_address() {
        let mut emitter = Emitter::new();
        let label = emitter.emit_jump(OpCode::Jump).unwrap();
        emitter.emit_arg(OpCode::LoadConst, 0).unwrap();
        emitter.emit_arg(OpCode::LoadConst, 1).unwrap();
        emitter.patch_jump(label).unwrap();

        let code = emitter.finish().unwrap();
        assert_eq!(code[0].target(), Some(3));
    }

    #[test]
    fn patch_to_explicit_target() {
        let mut emitter = Emitter::new();
        let label = emitter.emit_jump(OpCode::Jump).unwrap();
        emitter.patch_jump_to(label, 9).unwrap();
        assert_eq!(emitter.code()[0].operand, Some(9));
    }

    #[test]
    fn emit_loop_jumps_backwards() {
        let mut emitter = Emitter::new();
        emitter.emit_arg(OpCode::LoadName, 0).unwrap();
        emitter.emit_loop(0).unwrap();

        let code = emitter.finish().unwrap();
        assert_eq!(code[1].opcode, OpCode::Jump);
        assert_eq!(code[1].target(), Some(0));
    }

    #[test]
    fn unpatched_jump_fails_finish() {
        let mut emitter = Emitter::new();
        emitter.emit_arg(OpCode::LoadConst, 0).unwrap();
        emitter.emit_jump(OpCode::JumpIfFalse).unwrap();

        assert_eq!(
            emitter.finish(),
            Err(CodegenError::UnpatchedJump { address: 1 })
        );
    }

    #[test]
    fn patching_twice_fails() {
        let mut emitter = Emitter::new();
        let label = emitter.emit_jump(OpCode::Jump).unwrap();
        emitter.patch_jump(label).unwrap();

        assert_eq!(
            emitter.patch_jump(label),
            Err(CodegenError::InvalidPatch { address: 0 })
        );
    }
}
