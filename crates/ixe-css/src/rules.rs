//! Lowered rule tree and its text form.

use ixe_style::{AtRuleKind, Combinator, PseudoKind};
use std::fmt;

/// One `property:value;` line. Both parts are already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}:{};", self.property, self.value)
    }
}

/// Which step of the walk produced a style rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A top-level class entry.
    Base,
    Combinator(Combinator),
    Pseudo(PseudoKind),
}

/// A compiled rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// `selector{ declarations }`
    Style {
        origin: Origin,
        selector: String,
        declarations: Vec<Declaration>,
    },
    /// `selector @kind (condition){ rules }`
    At {
        selector: String,
        kind: AtRuleKind,
        condition: String,
        rules: Vec<Rule>,
    },
}

impl Rule {
    pub fn selector(&self) -> &str {
        match self {
            Rule::Style { selector, .. } | Rule::At { selector, .. } => selector,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Style {
                selector,
                declarations,
                ..
            } => {
                writeln!(f, "{selector}{{")?;
                for declaration in declarations {
                    writeln!(f, "{declaration}")?;
                }
                f.write_str("}")
            }
            Rule::At {
                selector,
                kind,
                condition,
                rules,
            } => {
                writeln!(f, "{selector} @{} ({condition}){{", kind.name())?;
                f.write_str(&render(rules))?;
                f.write_str("\n}")
            }
        }
    }
}

/// Join rules with newlines, in order.
pub fn render(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(|rule| rule.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
