//! Identifier resolution.

use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;
use crate::scope::VarLookup;

impl CodeGenerator {
    /// Resolve `name` against the parameter scope, then the global names.
    ///
    /// Interns `name` as a global when it is not a parameter.
    pub fn resolve(&mut self, name: &str) -> Result<VarLookup> {
        match self.params.slot_of(name) {
            Some(slot) => Ok(VarLookup::Fast(slot)),
            None => Ok(VarLookup::Name(self.names.intern(name)?)),
        }
    }

    /// Push the value of `name`.
    pub(crate) fn compile_load(&mut self, name: &str) -> Result<()> {
        match self.resolve(name)? {
            VarLookup::Fast(slot) => self.emitter.emit_named(OpCode::LoadFast, slot, name)?,
            VarLookup::Name(id) => self.emitter.emit_named(OpCode::LoadName, id, name)?,
        };
        Ok(())
    }
}
