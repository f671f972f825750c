//! Unary operators.

use corvid_ast::UnaryExpr;
use corvid_core::{Result, UnaryOp};

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile a unary operation: the operand, then `UNARY_NOT` for `!` or
    /// `UNARY_NEGATIVE` for `-`.
    pub(crate) fn compile_unary(&mut self, expr: &UnaryExpr<'_>) -> Result<()> {
        self.compile(&expr.operand)?;
        let op = match expr.op {
            UnaryOp::Not => OpCode::UnaryNot,
            UnaryOp::Negate => OpCode::UnaryNegative,
        };
        self.emitter.emit(op)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use corvid_ast::AstBuilder;

    use super::*;
    use crate::test_utils::{compile, ops};

    #[test]
    fn logical_not() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = compile(ast.unary(UnaryOp::Not, ast.boolean(true)));
        assert_eq!(
            ops(&program),
            vec![(OpCode::LoadConst, Some(0)), (OpCode::UnaryNot, None)]
        );
    }

    #[test]
    fn negation() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = compile(ast.unary(UnaryOp::Negate, ast.variable("n")));
        assert_eq!(
            program.opcodes(),
            vec![OpCode::LoadName, OpCode::UnaryNegative]
        );
        assert_eq!(program.instructions[1].display, None);
    }

    #[test]
    fn double_negation() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let inner = ast.unary(UnaryOp::Not, ast.boolean(false));
        let program = compile(ast.unary(UnaryOp::Not, inner));
        assert_eq!(
            program.opcodes(),
            vec![OpCode::LoadConst, OpCode::UnaryNot, OpCode::UnaryNot]
        );
    }
}
