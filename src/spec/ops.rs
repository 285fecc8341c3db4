//! Operator tables: raw hand-authored records plus their validated form.
//!
//! Shape of the tables:
//!   comparisons: [{ name: "lt",  symbol: "<" }, ...]
//!   arithmetic:  [{ name: "add", symbol: "+" }, ...]
//!   parser:      [{ token_variant: "Plus", constructor: "add", tier: "additive" }, ...]
//!
//! `validate_and_build` checks every record before anything is emitted: names,
//! symbols, identifiers and tier text. Duplicates are errors, never merged.

use crate::Result;
use crate::diagnostics;
use crate::spec::IdentRules;

use anyhow::bail;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One evaluator to generate: `eval_<name>` computing `left <symbol> right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorSpec {
    pub name: String,
    pub symbol: String,
}

impl OperatorSpec {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Parser operator as written in the table; `tier` is still free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParserOperator {
    pub token_variant: String,
    pub constructor: String,
    pub tier: String,
}

impl RawParserOperator {
    pub fn new(
        token_variant: impl Into<String>,
        constructor: impl Into<String>,
        tier: impl Into<String>,
    ) -> Self {
        Self {
            token_variant: token_variant.into(),
            constructor: constructor.into(),
            tier: tier.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperatorTables {
    pub comparisons: Vec<OperatorSpec>,
    pub arithmetic: Vec<OperatorSpec>,
    pub parser: Vec<RawParserOperator>,
}

/// Precedence tier, declared loosest first. The derived `Ord` is the emission
/// order; reordering the variants changes the precedence of the generated parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Equality,
    Comparison,
    Additive,
    Multiplicative,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Equality,
        Tier::Comparison,
        Tier::Additive,
        Tier::Multiplicative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Equality => "equality",
            Tier::Comparison => "comparison",
            Tier::Additive => "additive",
            Tier::Multiplicative => "multiplicative",
        }
    }

    /// Parser entry point for this tier.
    pub fn entry_point(self) -> &'static str {
        match self {
            Tier::Equality => "parse_equality",
            Tier::Comparison => "parse_comparison",
            Tier::Additive => "parse_add",
            Tier::Multiplicative => "parse_mul",
        }
    }

    /// Parser for the right operand: always the adjacent tighter-binding tier.
    /// Multiplicative operands come from the unary layer of the parser.
    pub fn operand_parser(self) -> &'static str {
        match self {
            Tier::Equality => Tier::Comparison.entry_point(),
            Tier::Comparison => Tier::Additive.entry_point(),
            Tier::Additive => Tier::Multiplicative.entry_point(),
            Tier::Multiplicative => "parse_unary",
        }
    }

    /// Loop flag set by every branch that matched in this tier.
    pub fn loop_flag(self) -> &'static str {
        match self {
            Tier::Equality => "eq_continue",
            Tier::Comparison => "cmp_continue",
            Tier::Additive => "add_continue",
            Tier::Multiplicative => "mul_continue",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "equality" => Ok(Tier::Equality),
            "comparison" => Ok(Tier::Comparison),
            "additive" => Ok(Tier::Additive),
            "multiplicative" => Ok(Tier::Multiplicative),
            other => bail!(
                "unknown tier {:?} (expected one of: equality, comparison, additive, multiplicative)",
                other
            ),
        }
    }
}

/// Named predicate applied to the three-way ordering of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    Lt,
    Gt,
    Leq,
    Geq,
}

impl Predicate {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Predicate::Lt),
            ">" => Some(Predicate::Gt),
            "<=" => Some(Predicate::Leq),
            ">=" => Some(Predicate::Geq),
            _ => None,
        }
    }

    /// Method name on the interpreter's ordering type.
    pub fn method(self) -> &'static str {
        match self {
            Predicate::Lt => "lt",
            Predicate::Gt => "gt",
            Predicate::Leq => "leq",
            Predicate::Geq => "geq",
        }
    }
}

const ARITHMETIC_SYMBOLS: &[&str] = &["+", "-", "*", "/", "%"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSpec {
    pub name: String,
    pub symbol: String,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserOperatorSpec {
    pub token_variant: String,
    pub constructor: String,
    pub tier: Tier,
}

/// Tables that passed validation. Parser operators are grouped by tier, every
/// tier present (possibly empty), table order kept inside a tier.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedTables {
    pub comparisons: Vec<ComparisonSpec>,
    pub arithmetic: Vec<OperatorSpec>,
    pub tiers: BTreeMap<Tier, Vec<ParserOperatorSpec>>,
}

impl OperatorTables {
    /// Check every record and build the emitter input. The first malformed
    /// record aborts the whole run.
    pub fn validate_and_build(&self) -> Result<ValidatedTables> {
        let rules = IdentRules::new()?;

        // 1) Comparisons: unique fragments, symbol picks the predicate.
        let mut seen = BTreeSet::new();
        let mut comparisons = Vec::with_capacity(self.comparisons.len());
        for (idx, spec) in self.comparisons.iter().enumerate() {
            check_name(&rules, "comparison", idx, &spec.name, &mut seen)?;
            let Some(predicate) = Predicate::from_symbol(&spec.symbol) else {
                bail!(
                    "comparison #{} ({}): {:?} is not a comparison operator (expected <, >, <= or >=)",
                    idx,
                    spec.name,
                    spec.symbol
                );
            };
            if spec.name != predicate.method() {
                diagnostics::warn(format!(
                    "comparison '{}' uses {:?}, which evaluates the '{}' predicate",
                    spec.name,
                    spec.symbol,
                    predicate.method()
                ));
            }
            comparisons.push(ComparisonSpec {
                name: spec.name.clone(),
                symbol: spec.symbol.clone(),
                predicate,
            });
        }

        // 2) Arithmetic: unique fragments, symbol must be a numeric infix op.
        let mut seen = BTreeSet::new();
        for (idx, spec) in self.arithmetic.iter().enumerate() {
            check_name(&rules, "arithmetic", idx, &spec.name, &mut seen)?;
            if !ARITHMETIC_SYMBOLS.contains(&spec.symbol.as_str()) {
                bail!(
                    "arithmetic #{} ({}): {:?} is not an arithmetic operator (expected one of {})",
                    idx,
                    spec.name,
                    spec.symbol,
                    ARITHMETIC_SYMBOLS.join(" ")
                );
            }
        }

        // 3) Parser operators: identifiers, known tier, one branch per token per tier.
        let mut tiers: BTreeMap<Tier, Vec<ParserOperatorSpec>> =
            Tier::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for (idx, raw) in self.parser.iter().enumerate() {
            if !rules.is_ident(&raw.token_variant) {
                bail!(
                    "parser #{}: token variant {:?} is not an identifier",
                    idx,
                    raw.token_variant
                );
            }
            if !rules.is_ident(&raw.constructor) {
                bail!(
                    "parser #{} ({}): constructor {:?} is not an identifier",
                    idx,
                    raw.token_variant,
                    raw.constructor
                );
            }
            let tier: Tier = match raw.tier.parse() {
                Ok(tier) => tier,
                Err(err) => bail!("parser #{} ({}): {}", idx, raw.token_variant, err),
            };

            let bucket = tiers.entry(tier).or_default();
            if bucket.iter().any(|s| s.token_variant == raw.token_variant) {
                bail!(
                    "parser #{}: token {} appears twice in the {} tier",
                    idx,
                    raw.token_variant,
                    tier
                );
            }
            bucket.push(ParserOperatorSpec {
                token_variant: raw.token_variant.clone(),
                constructor: raw.constructor.clone(),
                tier,
            });
        }

        Ok(ValidatedTables {
            comparisons,
            arithmetic: self.arithmetic.clone(),
            tiers,
        })
    }
}

fn check_name(
    rules: &IdentRules,
    family: &str,
    idx: usize,
    name: &str,
    seen: &mut BTreeSet<String>,
) -> Result<()> {
    if name.is_empty() {
        bail!("{} #{}: empty name", family, idx);
    }
    if !rules.is_fragment(name) {
        bail!("{} #{}: {:?} is not a valid function-name fragment", family, idx, name);
    }
    if !seen.insert(name.to_string()) {
        bail!("{} #{}: duplicate name '{}'", family, idx, name);
    }
    Ok(())
}
