//! Standard-library function table.
//!
//! `CALL_STDLIB` carries one of these ids as its operand.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Built-in functions a stack machine provides natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum StdLib {
    Print = 0,
    Sqrt = 1,
    Sin = 2,
    Cos = 3,
    Exp = 4,
    Ln = 5,
    Hypot = 6,
}

impl StdLib {
    /// All functions, in id order.
    pub const ALL: [StdLib; 7] = [
        StdLib::Print,
        StdLib::Sqrt,
        StdLib::Sin,
        StdLib::Cos,
        StdLib::Exp,
        StdLib::Ln,
        StdLib::Hypot,
    ];

    /// The id emitted as the `CALL_STDLIB` operand.
    pub fn id(self) -> u8 {
        self.into()
    }

    /// Name of the function as written in source.
    pub fn name(self) -> &'static str {
        match self {
            StdLib::Print => "print",
            StdLib::Sqrt => "sqrt",
            StdLib::Sin => "sin",
            StdLib::Cos => "cos",
            StdLib::Exp => "exp",
            StdLib::Ln => "ln",
            StdLib::Hypot => "hypot",
        }
    }

    /// Number of arguments the function consumes from the stack.
    pub fn arity(self) -> usize {
        match self {
            StdLib::Hypot => 2,
            _ => 1,
        }
    }

    /// Look up a function by its source name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for StdLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
