//! IXE Style Object Model
//!
//! The typed vocabulary consumed by the style compiler: class maps, style
//! objects with declarations, custom properties, pseudo-selectors,
//! combinators and at-rules, nested to any depth.
//!
//! Style trees are built in Rust with the builder methods or loaded from any
//! self-describing serde format (JSON, JS objects).
//!
//! # Example
//!
//! ```
//! use ixe_style::{Classes, StyleObject};
//!
//! let classes = Classes::new().class("btn", StyleObject::new().decl("color", "red"));
//! assert_eq!(classes.len(), 1);
//! ```

pub mod load;
pub mod model;
pub mod pseudo;

pub use model::{AtRuleKind, Classes, Combinator, PseudoRule, SelectorKind, StyleObject, StyleValue};
pub use pseudo::PseudoKind;

/// Error loading a style tree, with position information when the source
/// format provides it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Style load error at line {line}, column {column}: {message}")]
pub struct LoadError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
