//! IXE Style Compiler
//!
//! Compiles a [`Classes`] style tree into stylesheet text. Compilation is a
//! pure, total function: the same tree always yields the same text and no
//! input makes it fail.
//!
//! ```text
//! Classes → lower() → Vec<Rule> → render() → CssText
//! ```
//!
//! # Example
//!
//! ```
//! use ixe_style::{Classes, StyleObject};
//!
//! let classes = Classes::new().class("btn", StyleObject::new().decl("color", "red").decl("padding", 10));
//! assert_eq!(ixe_css::compile(&classes), ".btn{\n  color:red;\n  padding:10px;\n}");
//! ```

pub mod format;
pub mod rules;
pub mod selector;
pub mod walker;

pub use format::{format_value, kebab_case};
pub use rules::{Declaration, Origin, Rule};
pub use walker::lower;

use ixe_style::Classes;

/// Compiled stylesheet text. Identical text is the unit of sharing.
pub type CssText = String;

/// Compile a class map into stylesheet text.
pub fn compile(classes: &Classes) -> CssText {
    rules::render(&lower(classes))
}
