//! Arena-backed tree construction.

use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use corvid_core::{BinaryOp, UnaryOp};

use crate::node::{
    Assignment, BinaryExpr, Call, Conditional, FunctionDeclaration, Node, Program, UnaryExpr,
    VariableDeclaration, WhileStatement,
};

/// Builds [`Node`]s inside an arena.
///
/// Names are copied into the arena, so callers may pass temporaries.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder allocating into `arena`.
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    /// The arena nodes are allocated in.
    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    fn name(&self, name: &str) -> &'ast str {
        self.arena.alloc_str(name)
    }

    fn nodes(&self, nodes: impl IntoIterator<Item = Node<'ast>>) -> &'ast [Node<'ast>] {
        BumpVec::from_iter_in(nodes, self.arena).into_bump_slice()
    }

    pub fn program(&self, statements: impl IntoIterator<Item = Node<'ast>>) -> Node<'ast> {
        let statements = self.nodes(statements);
        Node::Program(self.arena.alloc(Program { statements }))
    }

    pub fn sequence(&self, nodes: impl IntoIterator<Item = Node<'ast>>) -> Node<'ast> {
        Node::Sequence(self.nodes(nodes))
    }

    pub fn var_decl(&self, name: &str, initializer: Node<'ast>) -> Node<'ast> {
        Node::VariableDeclaration(self.arena.alloc(VariableDeclaration {
            name: self.name(name),
            initializer,
        }))
    }

    pub fn variable(&self, name: &str) -> Node<'ast> {
        Node::Variable(self.name(name))
    }

    pub fn function(&self, name: &str, params: &[&str], body: Node<'ast>) -> Node<'ast> {
        let params = BumpVec::from_iter_in(params.iter().map(|p| self.name(p)), self.arena)
            .into_bump_slice();
        Node::FunctionDeclaration(self.arena.alloc(FunctionDeclaration {
            name: self.name(name),
            params,
            body,
        }))
    }

    pub fn function_ref(&self, name: &str) -> Node<'ast> {
        Node::FunctionReference(self.name(name))
    }

    pub fn print(&self, argument: Node<'ast>) -> Node<'ast> {
        Node::PrintStatement(self.arena.alloc(argument))
    }

    pub fn assign(&self, target: &str, source: Node<'ast>) -> Node<'ast> {
        Node::Assignment(self.arena.alloc(Assignment {
            target: self.name(target),
            source,
        }))
    }

    pub fn while_loop(&self, test: Node<'ast>, body: Node<'ast>) -> Node<'ast> {
        Node::WhileStatement(self.arena.alloc(WhileStatement { test, body }))
    }

    pub fn call(&self, callee: &str, args: impl IntoIterator<Item = Node<'ast>>) -> Node<'ast> {
        let args = self.nodes(args);
        Node::Call(self.arena.alloc(Call {
            callee: self.name(callee),
            args,
        }))
    }

    pub fn conditional(
        &self,
        test: Node<'ast>,
        consequent: Node<'ast>,
        alternate: Node<'ast>,
    ) -> Node<'ast> {
        Node::Conditional(self.arena.alloc(Conditional {
            test,
            consequent,
            alternate,
        }))
    }

    pub fn binary(&self, op: BinaryOp, left: Node<'ast>, right: Node<'ast>) -> Node<'ast> {
        Node::Binary(self.arena.alloc(BinaryExpr { op, left, right }))
    }

    pub fn unary(&self, op: UnaryOp, operand: Node<'ast>) -> Node<'ast> {
        Node::Unary(self.arena.alloc(UnaryExpr { op, operand }))
    }

    pub fn number(&self, value: f64) -> Node<'ast> {
        Node::Number(value)
    }

    pub fn boolean(&self, value: bool) -> Node<'ast> {
        Node::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_program() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = ast.program([ast.var_decl("x", ast.number(1.0))]);

        let Node::Program(p) = program else {
            panic!("expected program, got {}", program.kind_name());
        };
        assert_eq!(p.statements.len(), 1);
        assert!(matches!(
            p.statements[0],
            Node::VariableDeclaration(&VariableDeclaration { name: "x", .. })
        ));
    }

    #[test]
    fn names_are_copied_into_arena() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let owned = String::from("counter");
        let node = ast.variable(&owned);
        drop(owned);
        assert_eq!(node, Node::Variable("counter"));
    }

    #[test]
    fn function_params_keep_order() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let f = ast.function("add", &["x", "y"], ast.sequence([]));

        let Node::FunctionDeclaration(decl) = f else {
            panic!("expected function declaration");
        };
        assert_eq!(decl.name, "add");
        assert_eq!(decl.params, &["x", "y"]);
        assert_eq!(decl.body, Node::Sequence(&[]));
    }

    #[test]
    fn kind_names() {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        assert_eq!(ast.number(1.0).kind_name(), "NumberLiteral");
        assert_eq!(ast.boolean(true).kind_name(), "BooleanLiteral");
        assert_eq!(
            ast.unary(UnaryOp::Not, ast.boolean(false)).kind_name(),
            "UnaryExpression"
        );
        assert_eq!(ast.call("f", []).kind_name(), "Call");
    }
}
