//! Per-pass generation state and node dispatch.

use corvid_ast::Node;
use corvid_core::Result;
use tracing::debug;

use crate::bytecode::{CompiledProgram, ConstantPool};
use crate::emit::Emitter;
use crate::intern::Names;
use crate::scope::ParamScope;

/// State of one generation pass.
///
/// Everything here is created fresh by [`new`](Self::new) and consumed by
/// [`finish`](Self::finish); nothing carries over between passes.
#[derive(Debug, Default)]
pub struct CodeGenerator {
    /// Output sequence and program counter
    pub(crate) emitter: Emitter,
    /// Global variable and function names
    pub(crate) names: Names,
    /// Literal constants
    pub(crate) constants: ConstantPool,
    /// Parameters of the function body being generated
    pub(crate) params: ParamScope,
}

impl CodeGenerator {
    /// Create a generator with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate code for `node` and everything below it.
    pub fn compile(&mut self, node: &Node<'_>) -> Result<()> {
        match node {
            Node::Program(program) => self.compile_sequence(program.statements),
            Node::Sequence(nodes) => self.compile_sequence(nodes),
            Node::VariableDeclaration(decl) => self.compile_var_decl(decl),
            Node::FunctionDeclaration(decl) => self.compile_function_decl(decl),
            Node::PrintStatement(argument) => self.compile_print(argument),
            Node::Assignment(assign) => self.compile_assignment(assign),
            Node::WhileStatement(while_stmt) => self.compile_while(while_stmt),

            Node::Variable(name) | Node::FunctionReference(name) => self.compile_load(name),
            Node::Call(call) => self.compile_call(call),
            Node::Conditional(cond) => self.compile_conditional(cond),
            Node::Binary(bin) => self.compile_binary(bin),
            Node::Unary(un) => self.compile_unary(un),
            Node::Number(value) => self.compile_number(*value),
            Node::Boolean(value) => self.compile_boolean(*value),
        }
    }

    /// Finish the pass, returning the program and its tables.
    pub fn finish(self) -> Result<CompiledProgram> {
        let instructions = self.emitter.finish()?;
        let program = CompiledProgram {
            instructions,
            names: self.names.into_keys(),
            constants: self.constants.into_constants(),
        };
        debug!(
            instructions = program.instructions.len(),
            names = program.names.len(),
            constants = program.constants.len(),
            "generated program"
        );
        Ok(program)
    }
}
