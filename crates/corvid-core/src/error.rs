//! Error type for code generation.
//!
//! Generation is a total transformation over a well-formed tree, so every
//! variant here describes a broken precondition or an internal invariant,
//! never a condition a caller is expected to recover from.

use thiserror::Error;

/// Result alias used throughout the generator.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors raised while lowering a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A function declaration was found inside another function's body.
    ///
    /// Parameter scopes do not stack, so this input cannot be lowered.
    #[error("function '{inner}' is declared inside the body of '{outer}'")]
    NestedFunction {
        /// The function whose body is currently being generated.
        outer: String,
        /// The function declared inside it.
        inner: String,
    },

    /// A reserved jump slot was never given a target.
    #[error("jump at address {address} was never patched")]
    UnpatchedJump {
        /// Address of the placeholder instruction.
        address: u32,
    },

    /// A patch was applied to a slot that is not an open placeholder.
    #[error("address {address} is not an open jump placeholder")]
    InvalidPatch {
        /// Address the patch targeted.
        address: u32,
    },

    /// The instruction sequence outgrew the 32-bit address space.
    #[error("program has {len} instructions, exceeding the addressable range")]
    ProgramTooLarge {
        /// Number of instructions at the point of failure.
        len: usize,
    },

    /// A name, constant or parameter table outgrew the 32-bit id space.
    #[error("symbol table has {len} entries, exceeding the addressable range")]
    TooManySymbols {
        /// Number of entries at the point of failure.
        len: usize,
    },
}
