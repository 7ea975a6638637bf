//! Pseudo-selector vocabulary.
//!
//! Names are the camelCase keys used in style objects; lookups also accept
//! the kebab-case spelling.

/// Pseudo names whose value maps a label to a nested style object.
pub const NTH_PSEUDO: &[&str] = &[
    "nthChild",
    "nthLastChild",
    "nthOfType",
    "nthLastOfType",
    "nthLastCol",
    "not",
];

/// Recognized pseudo-classes (`:name`).
pub const PSEUDO_CLASSES: &[&str] = &[
    "active",
    "anyLink",
    "autofill",
    "checked",
    "default",
    "defined",
    "disabled",
    "empty",
    "enabled",
    "first",
    "firstChild",
    "firstOfType",
    "focus",
    "focusVisible",
    "focusWithin",
    "fullscreen",
    "hover",
    "inRange",
    "indeterminate",
    "invalid",
    "lastChild",
    "lastOfType",
    "link",
    "onlyChild",
    "onlyOfType",
    "optional",
    "outOfRange",
    "placeholderShown",
    "readOnly",
    "readWrite",
    "required",
    "root",
    "target",
    "valid",
    "visited",
];

/// Recognized pseudo-elements (`::name`).
pub const PSEUDO_ELEMENTS: &[&str] = &[
    "after",
    "backdrop",
    "before",
    "cue",
    "fileSelectorButton",
    "firstLetter",
    "firstLine",
    "grammarError",
    "marker",
    "placeholder",
    "selection",
    "spellingError",
];

/// How a pseudo key contributes to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoKind {
    /// ` :name(label)`
    Nth,
    /// `:name`
    Class,
    /// `::name`
    Element,
    /// Selector unchanged.
    Unknown,
}

impl PseudoKind {
    pub fn classify(name: &str) -> Self {
        if contains(NTH_PSEUDO, name) {
            PseudoKind::Nth
        } else if contains(PSEUDO_CLASSES, name) {
            PseudoKind::Class
        } else if contains(PSEUDO_ELEMENTS, name) {
            PseudoKind::Element
        } else {
            PseudoKind::Unknown
        }
    }
}

pub fn is_nth(name: &str) -> bool {
    PseudoKind::classify(name) == PseudoKind::Nth
}

fn contains(table: &[&str], name: &str) -> bool {
    table
        .iter()
        .any(|entry| *entry == name || matches_kebab(entry, name))
}

/// `firstChild` matches `first-child`.
fn matches_kebab(camel: &str, candidate: &str) -> bool {
    let mut rest = candidate.chars();
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            if rest.next() != Some('-') || rest.next() != Some(c.to_ascii_lowercase()) {
                return false;
            }
        } else if rest.next() != Some(c) {
            return false;
        }
    }
    rest.next().is_none()
}
