//! Lowers a class map into a rule tree.
//!
//! The walk is pre-order with an explicit selector accumulator. For each
//! style object it emits, in order:
//!
//! 1. the object's own rule,
//! 2. each combinator map (`children`, `descendant`, `siblings`, `next`),
//!    every entry followed by its whole subtree,
//! 3. pseudo entries in insertion order,
//! 4. at-rules (`keyframes`, `media`, `supports`), whose payload is lowered
//!    as an independent class map.

use crate::format::{format_value, kebab_case, raw_value};
use crate::rules::{Declaration, Origin, Rule};
use crate::selector::{class_selector, combine, nth_selector, pseudo_selector};
use ixe_style::{AtRuleKind, Classes, Combinator, PseudoKind, PseudoRule, StyleObject};

/// Lower a class map into rules in emission order.
pub fn lower(classes: &Classes) -> Vec<Rule> {
    let mut walker = Walker::default();
    walker.classes(classes);
    walker.rules
}

#[derive(Default)]
struct Walker {
    rules: Vec<Rule>,
}

impl Walker {
    fn classes(&mut self, classes: &Classes) {
        for (name, style) in classes.iter() {
            let selector = class_selector(style.prefix(), name);
            self.node(Origin::Base, selector, style);
        }
    }

    fn node(&mut self, origin: Origin, selector: String, style: &StyleObject) {
        self.rules.push(Rule::Style {
            origin,
            selector: selector.clone(),
            declarations: declarations(style),
        });

        for combinator in Combinator::ALL {
            for (name, child) in style.combinator(combinator).iter() {
                let child_selector = combine(&selector, combinator, child.prefix(), name);
                self.node(Origin::Combinator(combinator), child_selector, child);
            }
        }

        for (name, rule) in &style.pseudo {
            self.pseudo(&selector, name, rule);
        }

        for kind in AtRuleKind::ALL {
            for (condition, nested) in style.at_rules(kind) {
                self.rules.push(Rule::At {
                    selector: selector.clone(),
                    kind,
                    condition: condition.clone(),
                    rules: lower(nested),
                });
            }
        }
    }

    fn pseudo(&mut self, parent: &str, name: &str, rule: &PseudoRule) {
        match (PseudoKind::classify(name), rule) {
            (PseudoKind::Nth, PseudoRule::Labeled(labels)) => {
                for (label, style) in labels {
                    let selector = nth_selector(parent, name, label);
                    self.node(Origin::Pseudo(PseudoKind::Nth), selector, style);
                }
            }
            (PseudoKind::Nth, PseudoRule::Block(_)) | (_, PseudoRule::Labeled(_)) => {
                log::debug!("skipping pseudo `{name}` under `{parent}`: shape does not match its kind");
            }
            (kind, PseudoRule::Block(style)) => {
                let selector = pseudo_selector(parent, name, kind);
                self.node(Origin::Pseudo(kind), selector, style);
            }
        }
    }
}

/// Declarations first, then custom properties.
fn declarations(style: &StyleObject) -> Vec<Declaration> {
    let plain = style.declarations.iter().map(|(property, value)| Declaration {
        property: kebab_case(property),
        value: format_value(property, value),
    });
    let vars = style.vars.iter().map(|(name, value)| Declaration {
        property: format!("--{}", kebab_case(name)),
        value: raw_value(value),
    });
    plain.chain(vars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ixe_style::SelectorKind;
    use pretty_assertions::assert_eq;

    fn selectors(rules: &[Rule]) -> Vec<&str> {
        rules.iter().map(Rule::selector).collect()
    }

    fn origins(rules: &[Rule]) -> Vec<Origin> {
        rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::Style { origin, .. } => Some(*origin),
                Rule::At { .. } => None,
            })
            .collect()
    }

    // =========================================================================
    // Walk order
    // =========================================================================

    #[test]
    fn test_empty_classes() {
        assert!(lower(&Classes::new()).is_empty());
    }

    #[test]
    fn test_node_order() {
        let classes = Classes::new().class(
            "a",
            StyleObject::new()
                .media("print", Classes::new().class("p", StyleObject::new()))
                .pseudo("hover", StyleObject::new())
                .next_to("n", StyleObject::new())
                .child("c", StyleObject::new().child("d", StyleObject::new())),
        );
        let rules = lower(&classes);
        assert_eq!(
            selectors(&rules),
            vec![".a", ".a .c", ".a .c .d", ".a+.n", ".a:hover", ".a"]
        );
        assert!(matches!(&rules[5], Rule::At { kind: AtRuleKind::Media, .. }));
    }

    #[test]
    fn test_entries_followed_by_subtree() {
        let classes = Classes::new()
            .class("a", StyleObject::new().child("x", StyleObject::new()))
            .class("b", StyleObject::new());
        assert_eq!(selectors(&lower(&classes)), vec![".a", ".a .x", ".b"]);
    }

    #[test]
    fn test_combinator_order_is_fixed() {
        let classes = Classes::new().class(
            "a",
            StyleObject::new()
                .next_to("n", StyleObject::new())
                .sibling("s", StyleObject::new())
                .descendant("d", StyleObject::new())
                .child("c", StyleObject::new()),
        );
        let rules = lower(&classes);
        assert_eq!(selectors(&rules), vec![".a", ".a .c", ".a>.d", ".a~.s", ".a+.n"]);
        assert_eq!(
            origins(&rules),
            vec![
                Origin::Base,
                Origin::Combinator(Combinator::Children),
                Origin::Combinator(Combinator::Descendant),
                Origin::Combinator(Combinator::Siblings),
                Origin::Combinator(Combinator::Next),
            ]
        );
    }

    #[test]
    fn test_at_rule_order_is_fixed() {
        let classes = Classes::new().class(
            "a",
            StyleObject::new()
                .supports("display: grid", Classes::new())
                .media("print", Classes::new())
                .keyframes("spin", Classes::new()),
        );
        let kinds: Vec<AtRuleKind> = lower(&classes)
            .iter()
            .filter_map(|rule| match rule {
                Rule::At { kind, .. } => Some(*kind),
                Rule::Style { .. } => None,
            })
            .collect();
        assert_eq!(kinds, AtRuleKind::ALL.to_vec());
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    #[test]
    fn test_same_combinator_at_depth() {
        let mut style = StyleObject::new();
        for name in ["e", "d", "c", "b"] {
            style = StyleObject::new().descendant(name, style);
        }
        let rules = lower(&Classes::new().class("a", style));
        assert_eq!(rules.last().map(Rule::selector), Some(".a>.b>.c>.d>.e"));
    }

    #[test]
    fn test_child_kind_prefix() {
        let classes = Classes::new().class(
            "nav",
            StyleObject::new()
                .kind(SelectorKind::Id)
                .child("li", StyleObject::new().kind(SelectorKind::Element)),
        );
        assert_eq!(selectors(&lower(&classes)), vec!["#nav", "#nav li"]);
    }

    #[test]
    fn test_nth_labels_ignore_nested_kind() {
        let classes = Classes::new().class(
            "list",
            StyleObject::new()
                .nth("nthChild", "odd", StyleObject::new().kind(SelectorKind::Id))
                .nth("nthChild", "3", StyleObject::new()),
        );
        let rules = lower(&classes);
        assert_eq!(
            selectors(&rules),
            vec![".list", ".list :nth-child(odd)", ".list :nth-child(3)"]
        );
        assert_eq!(origins(&rules)[1], Origin::Pseudo(PseudoKind::Nth));
    }

    #[test]
    fn test_pseudo_nests_further() {
        let classes = Classes::new().class(
            "a",
            StyleObject::new().pseudo("hover", StyleObject::new().child("icon", StyleObject::new())),
        );
        assert_eq!(selectors(&lower(&classes)), vec![".a", ".a:hover", ".a:hover .icon"]);
    }

    #[test]
    fn test_mismatched_pseudo_shapes_are_skipped() {
        let classes = Classes::new().class(
            "a",
            StyleObject::new()
                .pseudo("nthChild", StyleObject::new())
                .nth("hover", "1", StyleObject::new()),
        );
        assert_eq!(selectors(&lower(&classes)), vec![".a"]);
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    #[test]
    fn test_declarations_then_vars() {
        let style = StyleObject::new()
            .var("mainGap", 10)
            .decl("marginTop", 4)
            .decl("zIndex", 3);
        let lines: Vec<String> = declarations(&style).iter().map(|d| d.to_string()).collect();
        assert_eq!(
            lines,
            vec!["  margin-top:4px;", "  z-index:3;", "  --main-gap:10;"]
        );
    }
}
