//! Statement generation rules.
//!
//! - Programs and blocks with their children in order
//! - Variable declarations and assignments storing by global name
//! - `print` through the standard library
//! - While loops with a backpatched exit jump
//! - Function declarations with their parameter scope

mod block;
mod function_decl;
mod print_stmt;
mod var_decl;
mod while_stmt;
