//! Operator definitions.
//!
//! [`BinaryOp`] codes are emitted as the operand of `BINARY_OP`, so their
//! numbering is fixed and must never be reordered.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Binary operators and their instruction codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum BinaryOp {
    /// `||`
    Or = 0,
    /// `&&`
    And = 1,
    /// `<=`
    LessEqual = 2,
    /// `<`
    Less = 3,
    /// `==`
    Equal = 4,
    /// `!=`
    NotEqual = 5,
    /// `>=`
    GreaterEqual = 6,
    /// `>`
    Greater = 7,
    /// `+`
    Add = 8,
    /// `-`
    Sub = 9,
    /// `*`
    Mul = 10,
    /// `/`
    Div = 11,
    /// `%`
    Mod = 12,
    /// `**`
    Pow = 13,
}

impl BinaryOp {
    /// All operators, in code order.
    pub const ALL: [BinaryOp; 14] = [
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::LessEqual,
        BinaryOp::Less,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::GreaterEqual,
        BinaryOp::Greater,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Pow,
    ];

    /// The instruction code for this operator.
    pub fn code(self) -> u8 {
        self.into()
    }

    /// The source symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Less => "<",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Greater => ">",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
        }
    }

    /// Look up an operator by its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!` (logical negation)
    Not,
    /// `-` (arithmetic negation)
    Negate,
}

impl UnaryOp {
    /// The source symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
        }
    }

    /// Look up an operator by its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(UnaryOp::Not),
            "-" => Some(UnaryOp::Negate),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
