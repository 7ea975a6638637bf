//! Selector algebra.
//!
//! Every function takes the accumulated parent selector and returns the
//! selector for one nested step.

use crate::format::kebab_case;
use ixe_style::{Combinator, PseudoKind};

/// Literal token joining parent and child for each combinator map.
///
/// `children` is a space and `descendant` is `>`. This reads inverted next
/// to CSS terminology but existing stylesheets depend on it.
pub fn combinator_token(combinator: Combinator) -> &'static str {
    match combinator {
        Combinator::Children => " ",
        Combinator::Descendant => ">",
        Combinator::Siblings => "~",
        Combinator::Next => "+",
    }
}

/// `(".", "btnPrimary")` → `.btn-primary`.
pub fn class_selector(prefix: &str, name: &str) -> String {
    format!("{prefix}{}", kebab_case(name))
}

pub fn combine(parent: &str, combinator: Combinator, prefix: &str, name: &str) -> String {
    format!(
        "{parent}{}{}",
        combinator_token(combinator),
        class_selector(prefix, name)
    )
}

/// Selector for a block pseudo entry. Unknown names leave the parent as is.
pub fn pseudo_selector(parent: &str, name: &str, kind: PseudoKind) -> String {
    match kind {
        PseudoKind::Class => format!("{parent}:{}", kebab_case(name)),
        PseudoKind::Element => format!("{parent}::{}", kebab_case(name)),
        PseudoKind::Nth | PseudoKind::Unknown => parent.to_string(),
    }
}

/// `(".a", "nthChild", "2n")` → `.a :nth-child(2n)`.
pub fn nth_selector(parent: &str, name: &str, label: &str) -> String {
    format!("{parent} :{}({label})", kebab_case(name))
}
