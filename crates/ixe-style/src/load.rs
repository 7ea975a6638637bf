//! Loading style trees through serde.
//!
//! Works with any self-describing format (`deserialize_any`). Object key order
//! from the source is kept. Only the top level must be a map; below that,
//! entries with the wrong shape are dropped instead of failing the load.

use crate::model::{upsert, AtRuleKind, Classes, Combinator, PseudoRule, SelectorKind, StyleObject, StyleValue};
use crate::pseudo::is_nth;
use crate::LoadError;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Loosely typed value, shaped into the model after reading.
#[derive(Debug, Clone, PartialEq)]
enum Raw {
    Text(String),
    Number(f64),
    Map(Vec<(String, Raw)>),
    Other,
}

impl<'de> Deserialize<'de> for Raw {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawVisitor)
    }
}

struct RawVisitor;

impl<'de> Visitor<'de> for RawVisitor {
    type Value = Raw;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a style value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Raw, E> {
        Ok(Raw::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Raw, E> {
        Ok(Raw::Text(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Raw, E> {
        Ok(Raw::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Raw, E> {
        Ok(Raw::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Raw, E> {
        Ok(Raw::Number(v as f64))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Raw, E> {
        Ok(Raw::Other)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Raw, E> {
        Ok(Raw::Other)
    }

    fn visit_none<E: de::Error>(self) -> Result<Raw, E> {
        Ok(Raw::Other)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Raw, D::Error> {
        Raw::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Raw, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(Raw::Other)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Raw, A::Error> {
        read_entries(map).map(Raw::Map)
    }
}

fn read_entries<'de, A: MapAccess<'de>>(mut map: A) -> Result<Vec<(String, Raw)>, A::Error> {
    let mut entries = Vec::new();
    while let Some((key, value)) = map.next_entry::<String, Raw>()? {
        entries.push((key, value));
    }
    Ok(entries)
}

/// Top-level visitor: insists on a map, then shapes leniently.
struct MapVisitor<T> {
    expecting: &'static str,
    shape: fn(Vec<(String, Raw)>) -> T,
}

impl<'de, T> Visitor<'de> for MapVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
        read_entries(map).map(self.shape)
    }
}

impl<'de> Deserialize<'de> for Classes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor {
            expecting: "a map of class names to style objects",
            shape: shape_classes,
        })
    }
}

impl<'de> Deserialize<'de> for StyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor {
            expecting: "a style object",
            shape: shape_style,
        })
    }
}

impl Classes {
    /// Load a class map from JSON text.
    pub fn from_json(source: &str) -> Result<Classes, LoadError> {
        serde_json::from_str(source).map_err(|err| {
            let position = format!(" at line {} column {}", err.line(), err.column());
            let message = err.to_string();
            LoadError {
                message: message.trim_end_matches(position.as_str()).to_string(),
                line: err.line(),
                column: err.column(),
            }
        })
    }
}

fn shape_classes(entries: Vec<(String, Raw)>) -> Classes {
    let mut classes = Classes::new();
    for (name, value) in entries {
        match value {
            Raw::Map(body) => classes.insert(name, shape_style(body)),
            _ => log::debug!("ignoring class `{name}`: style is not an object"),
        }
    }
    classes
}

fn shape_style(entries: Vec<(String, Raw)>) -> StyleObject {
    let mut style = StyleObject::new();

    for (key, value) in entries {
        match key.as_str() {
            "type" => match value {
                Raw::Text(marker) => match SelectorKind::from_marker(&marker) {
                    Some(kind) => style.kind = Some(kind),
                    None => log::debug!("ignoring unknown selector type `{marker}`"),
                },
                _ => log::debug!("ignoring non-string selector type"),
            },
            "var" => match value {
                Raw::Map(vars) => {
                    for (name, value) in vars {
                        if let Some(value) = scalar(value) {
                            upsert(&mut style.vars, name, value);
                        }
                    }
                }
                _ => log::debug!("ignoring `var`: value is not an object"),
            },
            "pseudo" => match value {
                Raw::Map(rules) => {
                    for (name, body) in rules {
                        if let Some(rule) = shape_pseudo(&name, body) {
                            upsert(&mut style.pseudo, name, rule);
                        }
                    }
                }
                _ => log::debug!("ignoring `pseudo`: value is not an object"),
            },
            reserved if is_reserved(reserved) => shape_nested(&mut style, reserved, value),
            _ => match scalar(value) {
                Some(value) => upsert(&mut style.declarations, key, value),
                None => log::debug!("ignoring non-scalar declaration `{key}`"),
            },
        }
    }

    style
}

/// Combinator and at-rule maps.
fn shape_nested(style: &mut StyleObject, key: &str, value: Raw) {
    let Raw::Map(body) = value else {
        log::debug!("ignoring `{key}`: value is not an object");
        return;
    };

    if let Some(combinator) = Combinator::from_key(key) {
        *style.combinator_mut(combinator) = shape_classes(body);
    } else if let Some(kind) = AtRuleKind::from_key(key) {
        for (condition, payload) in body {
            match payload {
                Raw::Map(classes) => upsert(style.at_rules_mut(kind), condition, shape_classes(classes)),
                _ => log::debug!("ignoring @{} `{condition}`: payload is not an object", kind.name()),
            }
        }
    }
}

fn shape_pseudo(name: &str, body: Raw) -> Option<PseudoRule> {
    let Raw::Map(body) = body else {
        log::debug!("ignoring pseudo `{name}`: value is not an object");
        return None;
    };

    if !is_nth(name) {
        return Some(PseudoRule::Block(shape_style(body)));
    }

    let mut labels = Vec::new();
    for (label, value) in body {
        match value {
            Raw::Map(style) => upsert(&mut labels, label, shape_style(style)),
            _ => log::debug!("ignoring {name}({label}): value is not an object"),
        }
    }
    Some(PseudoRule::Labeled(labels))
}

fn scalar(value: Raw) -> Option<StyleValue> {
    match value {
        Raw::Text(text) => Some(StyleValue::Text(text)),
        Raw::Number(n) => Some(StyleValue::Number(n)),
        Raw::Map(_) | Raw::Other => None,
    }
}

fn is_reserved(key: &str) -> bool {
    Combinator::from_key(key).is_some()
        || AtRuleKind::from_key(key).is_some()
}
