//! Emitters: validated tables in, source-text blocks out.
//!
//! Both emitters are pure. Templates are plain strings with `__KEY__`
//! placeholders filled by `fill`, because the emitted Rust is full of
//! braces that would fight `format!`.

pub mod eval;
pub mod parser;

pub use eval::{emit_arithmetic, emit_comparisons};
pub use parser::{emit_branches, emit_tier_functions};

use crate::spec::Tier;

/// Where a block sits in the output. The derived order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Comparison,
    Arithmetic,
    Branch(Tier),
    ParseFn(Tier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    pub section: Section,
    /// Operator name, token variant or tier the block was generated for.
    pub label: String,
    pub text: String,
}

/// Fill every `(key, value)` placeholder in `template`.
///
/// The template is scanned once; inserted values are never scanned again, so a
/// table entry that happens to spell a placeholder is emitted verbatim.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(at) = rest.find("__") {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match vars.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                out.push('_');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Indent every non-empty line by `width` spaces.
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fill_replaces_every_occurrence() {
        let out = fill("__A__ + __A__ = __B__", &[("__A__", "x"), ("__B__", "2x")]);
        assert_eq!(out, "x + x = 2x");
    }

    #[test]
    fn fill_does_not_rescan_inserted_values() {
        let out = fill(
            "fn eval___FN__(a __SYMBOL__ b) __CTOR__",
            &[("__FN__", "__SYMBOL__"), ("__SYMBOL__", "+"), ("__CTOR__", "__FN__")],
        );
        assert_eq!(out, "fn eval___SYMBOL__(a + b) __FN__");
    }

    #[test]
    fn fill_keeps_unknown_underscores() {
        let out = fill("a__b ___X__ _", &[("__X__", "x")]);
        assert_eq!(out, "a__b _x _");
    }

    #[test]
    fn indent_leaves_blank_lines_empty() {
        assert_eq!(indent("a {\n\n    b\n}", 4), "    a {\n\n        b\n    }");
    }

    #[test]
    fn sections_sort_in_output_order() {
        let mut sections = vec![
            Section::Branch(Tier::Multiplicative),
            Section::Arithmetic,
            Section::Branch(Tier::Equality),
            Section::Comparison,
            Section::Branch(Tier::Additive),
        ];
        sections.sort();
        assert_eq!(
            sections,
            vec![
                Section::Comparison,
                Section::Arithmetic,
                Section::Branch(Tier::Equality),
                Section::Branch(Tier::Additive),
                Section::Branch(Tier::Multiplicative),
            ]
        );
    }
}
