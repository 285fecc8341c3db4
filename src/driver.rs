//! Run the emitters in fixed order and write the artifact.

use crate::Result;
use crate::diagnostics;
use crate::emit::{self, GeneratedBlock};
use crate::spec::OperatorTables;

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUT: &str = "code_generated.txt";

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Emit complete `parse_<tier>` functions instead of bare branch blocks.
    pub wrap_tiers: bool,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub path: PathBuf,
    pub blocks: usize,
    pub bytes: usize,
}

/// Validate the tables and build every block, in output order:
/// comparisons, arithmetic, then parser tiers loosest to tightest.
pub fn build_blocks(tables: &OperatorTables, opts: &GenerateOptions) -> Result<Vec<GeneratedBlock>> {
    let validated = tables.validate_and_build()?;

    let mut blocks = emit::emit_comparisons(&validated.comparisons);
    blocks.extend(emit::emit_arithmetic(&validated.arithmetic));
    if opts.wrap_tiers {
        blocks.extend(emit::emit_tier_functions(&validated.tiers));
    } else {
        blocks.extend(emit::emit_branches(&validated.tiers));
    }

    // Stable: keeps table order inside a section.
    blocks.sort_by_key(|b| b.section);
    Ok(blocks)
}

/// The full artifact text, blocks separated by one blank line.
pub fn render(tables: &OperatorTables, opts: &GenerateOptions) -> Result<String> {
    let blocks = build_blocks(tables, opts)?;
    Ok(concat(&blocks))
}

fn concat(blocks: &[GeneratedBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate and write `out`. Nothing is touched unless every block was built.
pub fn run(tables: &OperatorTables, opts: &GenerateOptions, out: &Path) -> Result<Summary> {
    let blocks = build_blocks(tables, opts)
        .with_context(|| diagnostics::error_message("operator tables rejected; no output written"))?;
    let text = concat(&blocks);

    write_replacing(out, &text)?;
    diagnostics::info(format!("{} blocks, {} bytes", blocks.len(), text.len()));

    Ok(Summary {
        path: out.to_path_buf(),
        blocks: blocks.len(),
        bytes: text.len(),
    })
}

/// Write next to the target and rename over it, so readers never see a
/// half-written artifact.
fn write_replacing(out: &Path, text: &str) -> Result<()> {
    let mut tmp = out.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, text)
        .with_context(|| diagnostics::error_message(format!("write {}", tmp.display())))?;
    fs::rename(&tmp, out).with_context(|| {
        diagnostics::error_message(format!("move {} to {}", tmp.display(), out.display()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Section;
    use crate::spec::{Tier, default_tables};
    use pretty_assertions::assert_eq;

    #[test]
    fn blocks_come_out_in_section_order() {
        let blocks = build_blocks(&default_tables(), &GenerateOptions::default()).unwrap();
        let sections: Vec<Section> = blocks.iter().map(|b| b.section).collect();

        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
        assert_eq!(sections.first(), Some(&Section::Comparison));
        assert_eq!(sections.last(), Some(&Section::Branch(Tier::Multiplicative)));
    }

    #[test]
    fn concat_separates_with_blank_line() {
        let block = |text: &str| GeneratedBlock {
            section: Section::Comparison,
            label: String::new(),
            text: text.to_string(),
        };
        assert_eq!(concat(&[block("a\n"), block("b\n")]), "a\n\nb\n");
    }

    #[test]
    fn wrapped_output_has_one_function_per_tier() {
        let opts = GenerateOptions { wrap_tiers: true };
        let blocks = build_blocks(&default_tables(), &opts).unwrap();
        let labels: Vec<&str> = blocks
            .iter()
            .filter(|b| matches!(b.section, Section::ParseFn(_)))
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["equality", "comparison", "additive", "multiplicative"]);
    }

    #[test]
    fn failures_carry_tagged_context() {
        let mut tables = default_tables();
        tables.arithmetic.push(crate::spec::OperatorSpec::new("", "+"));
        let out = std::env::temp_dir().join("binop-gen-never-written.txt");
        let err = run(&tables, &GenerateOptions::default(), &out).unwrap_err();
        assert_eq!(
            err.to_string(),
            "binop-gen: operator tables rejected; no output written"
        );
        assert!(format!("{:#}", err).contains("empty name"));

        let missing_dir = std::env::temp_dir()
            .join(format!("binop-gen-missing-{}", std::process::id()))
            .join("out.txt");
        let err = run(&default_tables(), &GenerateOptions::default(), &missing_dir).unwrap_err();
        assert!(err.to_string().starts_with("binop-gen: write "));
    }
}
