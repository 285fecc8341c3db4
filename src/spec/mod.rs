//! Spec layer: operator tables and their validated in-memory form.
//!
//! This module knows nothing about the generated text. It owns:
//! - the literal operator tables
//! - identifier rules for anything spliced into output
//! - validation from raw records to emitter input

pub mod ident;
pub mod ops;
pub mod table;

pub use ident::IdentRules;
pub use ops::{
    ComparisonSpec, OperatorSpec, OperatorTables, ParserOperatorSpec, Predicate,
    RawParserOperator, Tier, ValidatedTables,
};
pub use table::default_tables;
