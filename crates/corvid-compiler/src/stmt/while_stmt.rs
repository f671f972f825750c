//! While loop compilation.

use corvid_ast::WhileStatement;
use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile a while loop.
    ///
    /// Bytecode layout:
    /// ```text
    /// loop_start:
    /// [test]
    /// JUMP_IF_FALSE -> exit
    /// [body]
    /// JUMP -> loop_start
    /// exit:
    /// ```
    pub(crate) fn compile_while(&mut self, while_stmt: &WhileStatement<'_>) -> Result<()> {
        // Re-entry point for each iteration
        let loop_start = self.emitter.current_address()?;
        self.compile(&while_stmt.test)?;

        let exit_jump = self.emitter.emit_jump(OpCode::JumpIfFalse)?;
        self.compile(&while_stmt.body)?;
        self.emitter.emit_loop(loop_start)?;

        self.emitter.patch_jump(exit_jump)
    }
}
