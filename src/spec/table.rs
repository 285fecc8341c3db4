//! The interpreter's operator tables. Edit here and rerun `generate`.

use crate::spec::{OperatorSpec, OperatorTables, RawParserOperator};

pub fn default_tables() -> OperatorTables {
    let comparisons = [("lt", "<"), ("gt", ">"), ("leq", "<="), ("geq", ">=")];
    let arithmetic = [("add", "+"), ("minus", "-"), ("mul", "*"), ("div", "/")];
    let parser = [
        ("Eq", "eq", "equality"),
        ("Neq", "neq", "equality"),
        ("Gt", "gt", "comparison"),
        ("Geq", "geq", "comparison"),
        ("Lt", "lt", "comparison"),
        ("Leq", "leq", "comparison"),
        ("Plus", "add", "additive"),
        ("Minus", "minus", "additive"),
        ("Star", "mul", "multiplicative"),
        ("Slash", "div", "multiplicative"),
    ];

    OperatorTables {
        comparisons: comparisons
            .into_iter()
            .map(|(name, symbol)| OperatorSpec::new(name, symbol))
            .collect(),
        arithmetic: arithmetic
            .into_iter()
            .map(|(name, symbol)| OperatorSpec::new(name, symbol))
            .collect(),
        parser: parser
            .into_iter()
            .map(|(token, ctor, tier)| RawParserOperator::new(token, ctor, tier))
            .collect(),
    }
}
