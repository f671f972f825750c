//! Function declarations.

use corvid_ast::FunctionDeclaration;
use corvid_core::Result;

use crate::bytecode::OpCode;
use crate::generator::CodeGenerator;

impl CodeGenerator {
    /// Compile a function declaration.
    ///
    /// Bytecode layout:
    /// ```text
    /// MAKE_FUNCTION
    /// [body]            parameters read via LOAD_FAST
    /// STORE_NAME name
    /// ```
    ///
    /// The function name is interned after the body, so globals first used in
    /// the body get lower ids than the function itself.
    pub(crate) fn compile_function_decl(&mut self, decl: &FunctionDeclaration<'_>) -> Result<()> {
        self.emitter.emit(OpCode::MakeFunction)?;
        self.params.enter(decl.name, decl.params)?;

        let result = self
            .compile(&decl.body)
            .and_then(|()| self.compile_store(decl.name));

        self.params.exit();
        result
    }
}
