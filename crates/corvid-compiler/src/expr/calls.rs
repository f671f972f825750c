//! Function calls.

use corvid_ast::Call;
use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile a call.
    ///
    /// Bytecode layout:
    /// ```text
    /// LOAD_FAST | LOAD_NAME callee
    /// [arg 0]
    /// ...
    /// [arg n-1]
    /// CALL
    /// ```
    ///
    /// `CALL` carries no arity; the consumer knows the callee's parameter count.
    pub(crate) fn compile_call(&mut self, call: &Call<'_>) -> Result<()> {
        self.compile_load(call.callee)?;
        for arg in call.args {
            self.compile(arg)?;
        }
        self.emitter.emit(OpCode::Call)?;
        Ok(())
    }
}
