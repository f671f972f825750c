//! Binary operators.

use corvid_ast::BinaryExpr;
use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile `left op right`: both operands in order, then `BINARY_OP`
    /// with the operator code.
    pub(crate) fn compile_binary(&mut self, expr: &BinaryExpr<'_>) -> Result<()> {
        self.compile(&expr.left)?;
        self.compile(&expr.right)?;
        self.emitter.emit_named(
            OpCode::BinaryOp,
            u32::from(expr.op.code()),
            expr.op.symbol(),
        )?;
        Ok(())
    }
}
