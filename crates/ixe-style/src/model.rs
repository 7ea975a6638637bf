//! Style object model types.
//!
//! A [`Classes`] value maps class names to [`StyleObject`]s in insertion
//! order. Every nested map (combinators, pseudo rules, at-rule payloads)
//! holds full style objects again, so trees nest to any depth.

/// A declaration value. Numbers are subject to unit inference at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

/// Goes through the shortest decimal form so `0.1f32` stays `0.1`.
impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        let widened = value.to_string().parse().unwrap_or(f64::from(value));
        StyleValue::Number(widened)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Number(value as f64)
    }
}

/// Leading token of a generated selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorKind {
    /// `.name`
    #[default]
    Class,
    /// `#name`
    Id,
    /// `name`
    Element,
}

impl SelectorKind {
    pub fn prefix(self) -> &'static str {
        match self {
            SelectorKind::Class => ".",
            SelectorKind::Id => "#",
            SelectorKind::Element => "",
        }
    }

    /// Parse a `type` marker: either the prefix itself or its name.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "." | "class" => Some(SelectorKind::Class),
            "#" | "id" => Some(SelectorKind::Id),
            "" | "element" => Some(SelectorKind::Element),
            _ => None,
        }
    }
}

/// The four combinator maps a style object may carry.
///
/// The key names do not follow CSS terminology: `children` joins with a
/// space and `descendant` with `>`. Output depends on this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    Children,
    Descendant,
    Siblings,
    Next,
}

impl Combinator {
    /// Compilation order.
    pub const ALL: [Combinator; 4] = [
        Combinator::Children,
        Combinator::Descendant,
        Combinator::Siblings,
        Combinator::Next,
    ];

    /// Reserved key naming this map in a style object.
    pub fn key(self) -> &'static str {
        match self {
            Combinator::Children => "children",
            Combinator::Descendant => "descendant",
            Combinator::Siblings => "siblings",
            Combinator::Next => "next",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Combinator::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// At-rules whose payload is compiled as a nested class map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtRuleKind {
    Keyframes,
    Media,
    Supports,
}

impl AtRuleKind {
    /// Compilation order.
    pub const ALL: [AtRuleKind; 3] = [AtRuleKind::Keyframes, AtRuleKind::Media, AtRuleKind::Supports];

    /// Name after the `@`, also the reserved key in a style object.
    pub fn name(self) -> &'static str {
        match self {
            AtRuleKind::Keyframes => "keyframes",
            AtRuleKind::Media => "media",
            AtRuleKind::Supports => "supports",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AtRuleKind::ALL.into_iter().find(|k| k.name() == key)
    }
}

/// Body of a `pseudo` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoRule {
    /// `hover`, `before`, ... : one nested style object.
    Block(StyleObject),
    /// `nthChild`, `not`, ... : label (index or condition) to style object.
    Labeled(Vec<(String, StyleObject)>),
}

/// Ordered class name to style object map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classes {
    entries: Vec<(String, StyleObject)>,
}

impl Classes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Classes::insert`].
    pub fn class(mut self, name: impl Into<String>, style: StyleObject) -> Self {
        self.insert(name, style);
        self
    }

    /// Insert a class. An existing name keeps its position and gets the new style.
    pub fn insert(&mut self, name: impl Into<String>, style: StyleObject) {
        upsert(&mut self.entries, name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&StyleObject> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleObject)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, StyleObject)> for Classes {
    fn from_iter<I: IntoIterator<Item = (K, StyleObject)>>(iter: I) -> Self {
        let mut classes = Classes::new();
        for (name, style) in iter {
            classes.insert(name, style);
        }
        classes
    }
}

/// One selector's worth of styling plus everything nested under it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    /// Selector kind marker; `None` means class.
    pub kind: Option<SelectorKind>,
    pub declarations: Vec<(String, StyleValue)>,
    /// Custom properties, emitted as `--name` and never unit-inferred.
    pub vars: Vec<(String, StyleValue)>,
    pub pseudo: Vec<(String, PseudoRule)>,
    pub children: Classes,
    pub descendant: Classes,
    pub siblings: Classes,
    pub next: Classes,
    pub keyframes: Vec<(String, Classes)>,
    pub media: Vec<(String, Classes)>,
    pub supports: Vec<(String, Classes)>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: SelectorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Selector prefix for this object, defaulting to class.
    pub fn prefix(&self) -> &'static str {
        self.kind.unwrap_or_default().prefix()
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        upsert(&mut self.declarations, property.into(), value.into());
        self
    }

    pub fn var(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        upsert(&mut self.vars, name.into(), value.into());
        self
    }

    /// Add a pseudo-class or pseudo-element block.
    pub fn pseudo(mut self, name: impl Into<String>, style: StyleObject) -> Self {
        upsert(&mut self.pseudo, name.into(), PseudoRule::Block(style));
        self
    }

    /// Add a labeled entry under an nth-style pseudo (`nthChild`, `not`, ...).
    pub fn nth(mut self, name: impl Into<String>, label: impl Into<String>, style: StyleObject) -> Self {
        let name = name.into();
        let label = label.into();
        match self.pseudo.iter_mut().find(|(k, _)| *k == name) {
            Some((_, PseudoRule::Labeled(labels))) => upsert(labels, label, style),
            Some((_, rule)) => *rule = PseudoRule::Labeled(vec![(label, style)]),
            None => self.pseudo.push((name, PseudoRule::Labeled(vec![(label, style)]))),
        }
        self
    }

    /// Nest a class under the given combinator map.
    pub fn nest(mut self, combinator: Combinator, name: impl Into<String>, style: StyleObject) -> Self {
        self.combinator_mut(combinator).insert(name, style);
        self
    }

    pub fn child(self, name: impl Into<String>, style: StyleObject) -> Self {
        self.nest(Combinator::Children, name, style)
    }

    pub fn descendant(self, name: impl Into<String>, style: StyleObject) -> Self {
        self.nest(Combinator::Descendant, name, style)
    }

    pub fn sibling(self, name: impl Into<String>, style: StyleObject) -> Self {
        self.nest(Combinator::Siblings, name, style)
    }

    pub fn next_to(self, name: impl Into<String>, style: StyleObject) -> Self {
        self.nest(Combinator::Next, name, style)
    }

    pub fn combinator(&self, combinator: Combinator) -> &Classes {
        match combinator {
            Combinator::Children => &self.children,
            Combinator::Descendant => &self.descendant,
            Combinator::Siblings => &self.siblings,
            Combinator::Next => &self.next,
        }
    }

    pub fn combinator_mut(&mut self, combinator: Combinator) -> &mut Classes {
        match combinator {
            Combinator::Children => &mut self.children,
            Combinator::Descendant => &mut self.descendant,
            Combinator::Siblings => &mut self.siblings,
            Combinator::Next => &mut self.next,
        }
    }

    pub fn at_rule(mut self, kind: AtRuleKind, condition: impl Into<String>, classes: Classes) -> Self {
        upsert(self.at_rules_mut(kind), condition.into(), classes);
        self
    }

    pub fn media(self, condition: impl Into<String>, classes: Classes) -> Self {
        self.at_rule(AtRuleKind::Media, condition, classes)
    }

    pub fn supports(self, condition: impl Into<String>, classes: Classes) -> Self {
        self.at_rule(AtRuleKind::Supports, condition, classes)
    }

    pub fn keyframes(self, name: impl Into<String>, classes: Classes) -> Self {
        self.at_rule(AtRuleKind::Keyframes, name, classes)
    }

    pub fn at_rules(&self, kind: AtRuleKind) -> &[(String, Classes)] {
        match kind {
            AtRuleKind::Keyframes => &self.keyframes,
            AtRuleKind::Media => &self.media,
            AtRuleKind::Supports => &self.supports,
        }
    }

    pub fn at_rules_mut(&mut self, kind: AtRuleKind) -> &mut Vec<(String, Classes)> {
        match kind {
            AtRuleKind::Keyframes => &mut self.keyframes,
            AtRuleKind::Media => &mut self.media,
            AtRuleKind::Supports => &mut self.supports,
        }
    }
}

/// Insert or replace by key, keeping the first insertion position.
pub(crate) fn upsert<T>(entries: &mut Vec<(String, T)>, key: String, value: T) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Classes
    // =========================================================================

    #[test]
    fn test_classes_keep_insertion_order() {
        let classes = Classes::new()
            .class("b", StyleObject::new())
            .class("a", StyleObject::new())
            .class("c", StyleObject::new());
        let names: Vec<&str> = classes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_classes_reinsert_replaces_in_place() {
        let mut classes = Classes::new()
            .class("a", StyleObject::new())
            .class("b", StyleObject::new());
        classes.insert("a", StyleObject::new().decl("color", "red"));

        assert_eq!(classes.len(), 2);
        let (first, style) = classes.iter().next().unwrap();
        assert_eq!(first, "a");
        assert_eq!(style.declarations, vec![("color".to_string(), StyleValue::from("red"))]);
    }

    #[test]
    fn test_classes_from_iterator() {
        let classes: Classes = vec![("x", StyleObject::new()), ("y", StyleObject::new())]
            .into_iter()
            .collect();
        assert!(classes.get("x").is_some());
        assert!(classes.get("z").is_none());
    }

    // =========================================================================
    // StyleObject builder
    // =========================================================================

    #[test]
    fn test_default_prefix_is_class() {
        assert_eq!(StyleObject::new().prefix(), ".");
        assert_eq!(StyleObject::new().kind(SelectorKind::Id).prefix(), "#");
        assert_eq!(StyleObject::new().kind(SelectorKind::Element).prefix(), "");
    }

    #[test]
    fn test_decl_values() {
        let style = StyleObject::new().decl("padding", 10).decl("opacity", 0.5).decl("color", "red");
        assert_eq!(
            style.declarations,
            vec![
                ("padding".to_string(), StyleValue::Number(10.0)),
                ("opacity".to_string(), StyleValue::Number(0.5)),
                ("color".to_string(), StyleValue::Text("red".into())),
            ]
        );
    }

    #[test]
    fn test_f32_keeps_its_decimal_digits() {
        assert_eq!(StyleValue::from(0.1f32), StyleValue::Number(0.1));
        assert_eq!(StyleValue::from(2.5f32), StyleValue::Number(2.5));
    }

    #[test]
    fn test_nth_collects_labels() {
        let style = StyleObject::new()
            .nth("nthChild", "1", StyleObject::new())
            .nth("nthChild", "2n", StyleObject::new());
        match &style.pseudo[0].1 {
            PseudoRule::Labeled(labels) => {
                let names: Vec<&str> = labels.iter().map(|(l, _)| l.as_str()).collect();
                assert_eq!(names, vec!["1", "2n"]);
            }
            other => panic!("Expected Labeled, got {other:?}"),
        }
    }

    #[test]
    fn test_nest_routes_to_combinator_map() {
        let style = StyleObject::new()
            .child("a", StyleObject::new())
            .descendant("b", StyleObject::new())
            .sibling("c", StyleObject::new())
            .next_to("d", StyleObject::new());
        assert!(style.children.get("a").is_some());
        assert!(style.descendant.get("b").is_some());
        assert!(style.siblings.get("c").is_some());
        assert!(style.next.get("d").is_some());
    }

    #[test]
    fn test_at_rules_by_kind() {
        let style = StyleObject::new()
            .media("max-width: 600px", Classes::new())
            .keyframes("spin", Classes::new());
        assert_eq!(style.at_rules(AtRuleKind::Media).len(), 1);
        assert_eq!(style.at_rules(AtRuleKind::Keyframes)[0].0, "spin");
        assert!(style.at_rules(AtRuleKind::Supports).is_empty());
    }

    // =========================================================================
    // Vocabulary enums
    // =========================================================================

    #[test]
    fn test_selector_kind_markers() {
        assert_eq!(SelectorKind::from_marker("#"), Some(SelectorKind::Id));
        assert_eq!(SelectorKind::from_marker("element"), Some(SelectorKind::Element));
        assert_eq!(SelectorKind::from_marker(""), Some(SelectorKind::Element));
        assert_eq!(SelectorKind::from_marker("bogus"), None);
    }

    #[test]
    fn test_reserved_keys_round_trip() {
        for c in Combinator::ALL {
            assert_eq!(Combinator::from_key(c.key()), Some(c));
        }
        for k in AtRuleKind::ALL {
            assert_eq!(AtRuleKind::from_key(k.name()), Some(k));
        }
        assert_eq!(Combinator::from_key("media"), None);
    }
}
