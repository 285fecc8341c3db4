//! Binary-operator boilerplate generator for the tree-walking interpreter.
//!
//! Operator tables live in [`spec::table`]. They are validated, fed through
//! the evaluator and parser-chain emitters, and the resulting blocks are
//! written to a single text artifact by the [`driver`].

pub mod diagnostics;
pub mod driver;
pub mod emit;
pub mod spec;

pub type Result<T> = anyhow::Result<T>;

pub use driver::{GenerateOptions, Summary, render, run};
pub use spec::{OperatorTables, default_tables};
