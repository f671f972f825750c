//! Literal constants.

use corvid_core::Result;

use crate::bytecode::{Constant, OpCode};
use crate::generator::CodeGenerator;

impl CodeGenerator {
    pub(crate) fn compile_number(&mut self, value: f64) -> Result<()> {
        self.compile_constant(Constant::Number(value))
    }

    pub(crate) fn compile_boolean(&mut self, value: bool) -> Result<()> {
        self.compile_constant(Constant::Boolean(value))
    }

    /// Emit `LOAD_CONST` for `constant`, reusing the id of an equal literal.
    fn compile_constant(&mut self, constant: Constant) -> Result<()> {
        let id = self.constants.add(constant)?;
        self.emitter
            .emit_named(OpCode::LoadConst, id, constant.to_string())?;
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
    fn repeated_literal_shares_id() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let literals = [ast.number(2.0), ast.number(5.0), ast.number(2.0)];
        let program = compile(ast.sequence(literals));

        assert_eq!(
            ops(&program),
            vec![
                (OpCode::LoadConst, Some(0)),
                (OpCode::LoadConst, Some(1)),
                (OpCode::LoadConst, Some(0)),
            ]
        );
        assert_eq!(
            program.constants,
            vec![Constant::Number(2.0), Constant::Number(5.0)]
        );
    }

    #[test]
    fn display_is_literal_value() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = compile(ast.sequence([ast.number(3.0), ast.number(0.5), ast.boolean(true)]));

        let displays: Vec<_> = program
            .instructions
            .iter()
            .map(|i| i.display.as_deref())
            .collect();
        assert_eq!(displays, vec![Some("3"), Some("0.5"), Some("true")]);
    }

    #[test]
    fn constants_independent_of_names() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = compile(ast.sequence([ast.variable("0"), ast.number(0.0)]));

        assert_eq!(
            ops(&program),
            vec![(OpCode::LoadName, Some(0)), (OpCode::LoadConst, Some(0))]
        );
    }
}
