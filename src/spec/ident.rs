//! Identifier checks for names spliced into generated source.
//!
//! Two shapes are accepted:
//! - fragments (`[A-Za-z0-9_]+`), appended to a fixed prefix such as `eval_`
//! - identifiers (`[A-Za-z_][A-Za-z0-9_]*`), used verbatim as paths like
//!   `Token::Plus` or `ExprNode::add`; `_` and keywords are refused

use crate::Result;
use regex::Regex;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "try", "type", "unsafe", "use", "where", "while",
    // reserved
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized",
    "virtual", "yield",
];

#[derive(Debug, Clone)]
pub struct IdentRules {
    fragment: Regex,
    ident: Regex,
}

impl IdentRules {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fragment: Regex::new(r"^[A-Za-z0-9_]+$")?,
            ident: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?,
        })
    }

    pub fn is_fragment(&self, s: &str) -> bool {
        self.fragment.is_match(s)
    }

    pub fn is_ident(&self, s: &str) -> bool {
        s != "_" && self.ident.is_match(s) && !KEYWORDS.contains(&s)
    }
}
