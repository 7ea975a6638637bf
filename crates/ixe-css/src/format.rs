//! Value formatting: unit inference and property name casing.

use ixe_style::StyleValue;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Properties that accept plain numbers not measured in `px`.
const UNITLESS: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridArea",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    // SVG
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
];

const VENDOR_PREFIXES: &[&str] = &["Webkit", "ms", "Moz", "O"];

/// Base table plus every vendor-prefixed variant, built on first use.
fn unitless_table() -> &'static FxHashSet<String> {
    static TABLE: OnceLock<FxHashSet<String>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: FxHashSet<String> = UNITLESS.iter().map(|p| p.to_string()).collect();
        for property in UNITLESS {
            for prefix in VENDOR_PREFIXES {
                table.insert(prefix_key(prefix, property));
            }
        }
        table
    })
}

/// `("Webkit", "flex")` → `WebkitFlex`.
pub fn prefix_key(prefix: &str, property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("{prefix}{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}

pub fn is_unitless(property: &str) -> bool {
    unitless_table().contains(property)
}

/// Format a declaration value, appending `px` to numbers that need a unit.
pub fn format_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) if !property.starts_with("--") && !is_unitless(property) => {
            format!("{}px", format_number(*n))
        }
        other => raw_value(other),
    }
}

/// Format a value with no unit inference (custom properties).
pub fn raw_value(value: &StyleValue) -> String {
    match value {
        StyleValue::Text(text) => text.clone(),
        StyleValue::Number(n) => format_number(*n),
    }
}

/// Largest magnitude below which every integer is exact in an `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// `backgroundColor` → `background-color`, `WebkitFlex` → `-webkit-flex`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
