//! Programs and statement blocks.

use corvid_ast::Node;
use corvid_core::Result;

use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile each node in order. Blocks emit nothing of their own.
    pub(crate) fn compile_sequence(&mut self, nodes: &[Node<'_>]) -> Result<()> {
        for node in nodes {
            self.compile(node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use corvid_ast::AstBuilder;

    use crate::bytecode::OpCode;
    use crate::test_utils::compile;

    #[test]
    fn empty_program() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = compile(ast.program([]));
        assert!(program.is_empty());
        assert!(program.names.is_empty());
        assert!(program.constants.is_empty());
    }

    #[test]
    fn nested_blocks_flatten() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = compile(ast.program([
            ast.sequence([ast.print(ast.number(1.0))]),
            ast.sequence([ast.sequence([]), ast.print(ast.number(2.0))]),
        ]));

        assert_eq!(
            program.opcodes(),
            vec![
                OpCode::LoadConst,
                OpCode::CallStdlib,
                OpCode::LoadConst,
                OpCode::CallStdlib,
            ]
        );
    }
}
