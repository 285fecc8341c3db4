//! Precedence-climbing branches for the expression parser.
//!
//! Every branch of a tier parses its right operand with the next tighter tier,
//! so operators bind by tier and fold left inside the tier's loop.

use crate::diagnostics;
use crate::emit::{GeneratedBlock, Section, fill, indent};
use crate::spec::{ParserOperatorSpec, Tier};
use std::collections::BTreeMap;

const BRANCH_TEMPLATE: &str = r#"if let Token::__TOKEN__ = self.current() {
    __FLAG__ = true;
    self.cur += 1;
    let right = self.__OPERAND__()?;
    left = ExprNode::__CTOR__(left, right);
    continue;
}
"#;

const TIER_FN_TEMPLATE: &str = r#"pub fn __ENTRY__(&mut self) -> ParserResult<ExprNode> {
    let mut left = self.__OPERAND__()?;

    let mut __FLAG__ = true;
    while __FLAG__ {
        if self.is_terminal() {
            return Ok(left);
        }
        __FLAG__ = false;

__BRANCHES__
    }

    Ok(left)
}
"#;

fn branch(spec: &ParserOperatorSpec) -> String {
    fill(
        BRANCH_TEMPLATE,
        &[
            ("__TOKEN__", spec.token_variant.as_str()),
            ("__FLAG__", spec.tier.loop_flag()),
            ("__OPERAND__", spec.tier.operand_parser()),
            ("__CTOR__", spec.constructor.as_str()),
        ],
    )
}

/// One branch block per parser operator, tiers in precedence order.
pub fn emit_branches(tiers: &BTreeMap<Tier, Vec<ParserOperatorSpec>>) -> Vec<GeneratedBlock> {
    tiers
        .iter()
        .flat_map(|(tier, specs)| {
            specs.iter().map(move |spec| GeneratedBlock {
                section: Section::Branch(*tier),
                label: spec.token_variant.clone(),
                text: branch(spec),
            })
        })
        .collect()
}

/// One complete `parse_<tier>` function per tier, branches inlined in its loop.
pub fn emit_tier_functions(tiers: &BTreeMap<Tier, Vec<ParserOperatorSpec>>) -> Vec<GeneratedBlock> {
    tiers
        .iter()
        .map(|(tier, specs)| {
            if specs.is_empty() {
                diagnostics::warn(format!(
                    "tier {} has no operators; {} only forwards to {}",
                    tier,
                    tier.entry_point(),
                    tier.operand_parser()
                ));
            }

            let branches = specs
                .iter()
                .map(|spec| indent(&branch(spec), 8))
                .collect::<Vec<_>>()
                .join("\n\n");

            GeneratedBlock {
                section: Section::ParseFn(*tier),
                label: tier.to_string(),
                text: fill(
                    TIER_FN_TEMPLATE,
                    &[
                        ("__ENTRY__", tier.entry_point()),
                        ("__OPERAND__", tier.operand_parser()),
                        ("__FLAG__", tier.loop_flag()),
                        ("__BRANCHES__", branches.as_str()),
                    ],
                ),
            }
        })
        .collect()
}
