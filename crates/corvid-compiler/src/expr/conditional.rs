//! Expression-valued if/else.

use corvid_ast::Conditional;
use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile `test ? consequent : alternate`.
    ///
    /// Only one branch runs per evaluation.
    ///
    /// Bytecode layout:
    /// ```text
    /// [test]
    /// JUMP_IF_FALSE -> alternate
    /// [consequent]
    /// JUMP -> end
    /// alternate:
    /// [alternate]
    /// end:
    /// ```
    pub(crate) fn compile_conditional(&mut self, cond: &Conditional<'_>) -> Result<()> {
        self.compile(&cond.test)?;

        let jump_to_alternate = self.emitter.emit_jump(OpCode::JumpIfFalse)?;
        self.compile(&cond.consequent)?;

        let jump_to_end = self.emitter.emit_jump(OpCode::Jump)?;

        // Alternate starts right after the consequent's exit jump.
        self.emitter.patch_jump(jump_to_alternate)?;
        self.compile(&cond.alternate)?;

        self.emitter.patch_jump(jump_to_end)?;
        Ok(())
    }
}
