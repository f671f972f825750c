//! Variable declarations and assignments.
//!
//! Both evaluate their right-hand side and store it into a global by name id.
//! Neither consults the parameter scope: stores always go to globals.

use corvid_ast::{Assignment, VariableDeclaration};
use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile `let name = initializer`.
    pub(crate) fn compile_var_decl(&mut self, decl: &VariableDeclaration<'_>) -> Result<()> {
        self.compile(&decl.initializer)?;
        self.compile_store(decl.name)
    }

    /// Compile `target = source`.
    pub(crate) fn compile_assignment(&mut self, assign: &Assignment<'_>) -> Result<()> {
        self.compile(&assign.source)?;
        self.compile_store(assign.target)
    }

    /// Pop the top of stack into global `name`.
    pub(crate) fn compile_store(&mut self, name: &str) -> Result<()> {
        let id = self.names.intern(name)?;
        self.emitter.emit_named(OpCode::StoreName, id, name)?;
        Ok(())
    }
}
