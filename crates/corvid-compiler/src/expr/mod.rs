//! Expression generation rules.
//!
//! Every expression leaves exactly one value on the stack. Identifier reads
//! (variables, function references and call callees) share one resolution
//! rule: a parameter of the current function loads from its slot with
//! `LOAD_FAST`, anything else loads by global name id with `LOAD_NAME`.

mod binary;
mod calls;
mod conditional;
mod identifiers;
mod literals;
mod unary;
