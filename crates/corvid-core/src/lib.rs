//! Corvid Core
//!
//! Definitions shared by the code generator and any stack machine that runs
//! its output. The numeric codes here are part of the instruction format: a
//! consumer must decode them exactly as they are encoded.
//!
//! ## Modules
//!
//! - [`error`]: The [`CodegenError`] type returned by the generator
//! - [`ops`]: Binary and unary operators with their fixed codes
//! - [`stdlib`]: The standard-library function table

pub mod error;
pub mod ops;
pub mod stdlib;

pub use error::{CodegenError, Result};
pub use ops::{BinaryOp, UnaryOp};
pub use stdlib::StdLib;
