//! Evaluator methods for comparison and arithmetic operators.
//!
//! Generated functions are `impl Runtime` members of the interpreter. They
//! rely on its `eval`, `heap.get_value`, `alloc` and `_order` helpers.

use crate::emit::{GeneratedBlock, Section, fill};
use crate::spec::{ComparisonSpec, OperatorSpec};

const COMPARISON_TEMPLATE: &str = r#"/// Evaluates `left __SYMBOL__ right`.
pub(crate) fn __FN__(&mut self, left: ExprNode, right: ExprNode) -> TwiResult<Object> {
    let ord = self._order(left, right)?;
    Ok(self.alloc(ObjectInner::Bool(ord.__PREDICATE__())))
}
"#;

// Only Int/Int and Float/Float are accepted; there is no int -> float promotion.
const ARITHMETIC_TEMPLATE: &str = r#"/// Evaluates `left __SYMBOL__ right`.
pub(crate) fn __FN__(&mut self, left: ExprNode, right: ExprNode) -> TwiResult<Object> {
    let lobj = self.eval(left)?;
    let robj = self.eval(right)?;

    let lval = self.heap.get_value(lobj);
    let rval = self.heap.get_value(robj);

    match (lval, rval) {
        (Value::Int(i1), Value::Int(i2)) => Ok(self.alloc(ObjectInner::Int(i1 __SYMBOL__ i2))),
        (Value::Float(f1), Value::Float(f2)) => {
            Ok(self.alloc(ObjectInner::Float(f1 __SYMBOL__ f2)))
        }
        (l, r) => Err(TwiError::IncompatibleBinopType {
            left: l.to_string(),
            right: r.to_string(),
        }),
    }
}
"#;

fn evaluator_name(name: &str) -> String {
    format!("eval_{}", name)
}

/// One evaluator per comparison, in table order.
pub fn emit_comparisons(specs: &[ComparisonSpec]) -> Vec<GeneratedBlock> {
    specs
        .iter()
        .map(|spec| GeneratedBlock {
            section: Section::Comparison,
            label: spec.name.clone(),
            text: fill(
                COMPARISON_TEMPLATE,
                &[
                    ("__FN__", evaluator_name(&spec.name).as_str()),
                    ("__SYMBOL__", spec.symbol.as_str()),
                    ("__PREDICATE__", spec.predicate.method()),
                ],
            ),
        })
        .collect()
}

/// One evaluator per arithmetic operator, in table order.
pub fn emit_arithmetic(specs: &[OperatorSpec]) -> Vec<GeneratedBlock> {
    specs
        .iter()
        .map(|spec| GeneratedBlock {
            section: Section::Arithmetic,
            label: spec.name.clone(),
            text: fill(
                ARITHMETIC_TEMPLATE,
                &[
                    ("__FN__", evaluator_name(&spec.name).as_str()),
                    ("__SYMBOL__", spec.symbol.as_str()),
                ],
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Predicate;
    use pretty_assertions::assert_eq;

    #[test]
    fn comparison_delegates_to_shared_ordering() {
        let blocks = emit_comparisons(&[ComparisonSpec {
            name: "leq".into(),
            symbol: "<=".into(),
            predicate: Predicate::Leq,
        }]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].text,
            "/// Evaluates `left <= right`.
pub(crate) fn eval_leq(&mut self, left: ExprNode, right: ExprNode) -> TwiResult<Object> {
    let ord = self._order(left, right)?;
    Ok(self.alloc(ObjectInner::Bool(ord.leq())))
}
"
        );
    }

    #[test]
    fn comparison_predicate_follows_symbol_not_name() {
        let blocks = emit_comparisons(&[ComparisonSpec {
            name: "before".into(),
            symbol: "<".into(),
            predicate: Predicate::Lt,
        }]);
        assert!(blocks[0].text.contains("fn eval_before("));
        assert!(blocks[0].text.contains("ord.lt()"));
    }

    #[test]
    fn add_and_minus_produce_two_blocks() {
        let blocks = emit_arithmetic(&[OperatorSpec::new("add", "+"), OperatorSpec::new("minus", "-")]);

        let labels: Vec<&str> = blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["add", "minus"]);
        assert!(blocks[0].text.contains("pub(crate) fn eval_add("));
        assert!(blocks[1].text.contains("pub(crate) fn eval_minus("));

        for block in &blocks {
            assert_eq!(block.section, Section::Arithmetic);
            assert_eq!(block.text.matches("=> ").count(), 3, "two matching arms and one mismatch arm");
        }
    }

    #[test]
    fn arithmetic_accepts_only_matching_numeric_tags() {
        let block = &emit_arithmetic(&[OperatorSpec::new("mul", "*")])[0];

        assert!(block.text.contains("(Value::Int(i1), Value::Int(i2)) => Ok(self.alloc(ObjectInner::Int(i1 * i2)))"));
        assert!(block.text.contains("Ok(self.alloc(ObjectInner::Float(f1 * f2)))"));
        assert!(block.text.contains("(Value::Float(f1), Value::Float(f2)) =>"));
        // Mixed pairs fall through to the catch-all error arm.
        assert!(!block.text.contains("(Value::Int(i1), Value::Float"));
        assert!(!block.text.contains("(Value::Float(f1), Value::Int"));
        assert!(block.text.contains("(l, r) => Err(TwiError::IncompatibleBinopType {"));
        assert!(block.text.contains("left: l.to_string(),"));
        assert!(block.text.contains("right: r.to_string(),"));
    }

    #[test]
    fn operand_failures_propagate() {
        let block = &emit_arithmetic(&[OperatorSpec::new("div", "/")])[0];
        assert!(block.text.contains("let lobj = self.eval(left)?;"));
        assert!(block.text.contains("let robj = self.eval(right)?;"));
    }
}
