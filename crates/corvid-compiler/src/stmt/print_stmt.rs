//! Print statements.

use corvid_ast::Node;
use corvid_core::{Result, StdLib};

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile `print argument` as a standard-library call.
    pub(crate) fn compile_print(&mut self, argument: &Node<'_>) -> Result<()> {
        self.compile(argument)?;
        let print = StdLib::Print;
        self.emitter
            .emit_named(OpCode::CallStdlib, u32::from(print.id()), print.name())?;
        Ok(())
    }
}
