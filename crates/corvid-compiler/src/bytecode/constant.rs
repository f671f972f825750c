//! Constant pool.
//!
//! Literal values are deduplicated: equal literals share one id. Numbers are
//! compared by value through [`OrderedFloat`], so `0` and `-0` share an id and
//! `NaN` is equal to itself.

use std::fmt;

use corvid_core::Result;
use ordered_float::OrderedFloat;

use crate::intern::SymbolTable;

/// A literal value referenced by `LOAD_CONST`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral values print without a fractional part.
            Constant::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            Constant::Number(v) => write!(f, "{v}"),
            Constant::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Hashable form of [`Constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ConstantKey {
    Number(OrderedFloat<f64>),
    Boolean(bool),
}

impl From<Constant> for ConstantKey {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::Number(v) => ConstantKey::Number(OrderedFloat(v)),
            Constant::Boolean(b) => ConstantKey::Boolean(b),
        }
    }
}

/// Deduplicating constant pool, ids dense from 0 in first-use order.
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    index: SymbolTable<ConstantKey>,
    constants: Vec<Constant>,
}

impl ConstantPool {
    /// Create a new empty constant pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or get existing constant, returns its id.
    pub fn add(&mut self, constant: Constant) -> Result<u32> {
        let id = self.index.intern(&ConstantKey::from(constant))?;
        if id as usize == self.constants.len() {
            self.constants.push(constant);
        }
        Ok(id)
    }

    /// Consume the pool, returning constants indexed by id.
    pub fn into_constants(self) -> Vec<Constant> {
        self.constants
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
