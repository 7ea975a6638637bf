//! WASM bindings for the IXE style compiler.
//!
//! Exposes `compile()` and a `StyleRegistry` to JavaScript via wasm-bindgen.
//! The registry owns the refcount table; the page supplies the sink as two
//! callbacks, typically creating and removing `<style>` elements in
//! `document.head`.

use ixe_inject::{Injector, StyleSink};
use ixe_style::Classes;
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// Compile a JS style object into stylesheet text.
///
/// Throws a JS error if the value is not an object.
#[wasm_bindgen]
pub fn compile(style: JsValue) -> Result<String, JsError> {
    let classes = classes_from(style)?;
    Ok(ixe_css::compile(&classes))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn classes_from(style: JsValue) -> Result<Classes, JsError> {
    serde_wasm_bindgen::from_value(style).map_err(|e| JsError::new(&e.to_string()))
}

/// Sink backed by JS callbacks: `attach(id, text) -> node` and `detach(node)`.
struct JsSink {
    attach: Function,
    detach: Function,
}

impl StyleSink for JsSink {
    type Node = JsValue;

    fn attach(&mut self, id: &str, text: &str) -> JsValue {
        self.attach
            .call2(&JsValue::NULL, &JsValue::from_str(id), &JsValue::from_str(text))
            .unwrap_or_else(|err| {
                log::warn!("style attach callback failed for {id}: {err:?}");
                JsValue::UNDEFINED
            })
    }

    fn detach(&mut self, node: JsValue) {
        if let Err(err) = self.detach.call1(&JsValue::NULL, &node) {
            log::warn!("style detach callback failed: {err:?}");
        }
    }
}

/// Page-wide style registry. Create one per document.
#[wasm_bindgen]
pub struct StyleRegistry {
    injector: Injector<JsSink>,
}

#[wasm_bindgen]
impl StyleRegistry {
    #[wasm_bindgen(constructor)]
    pub fn new(attach: Function, detach: Function) -> StyleRegistry {
        StyleRegistry {
            injector: Injector::new(JsSink { attach, detach }),
        }
    }

    /// Acquire pre-compiled text.
    pub fn acquire(&self, text: &str) {
        self.injector.acquire(text);
    }

    pub fn release(&self, text: &str) {
        self.injector.release(text);
    }

    /// Compile a style object and acquire the result. Returns the text to
    /// pass to `release` later.
    #[wasm_bindgen(js_name = acquireStyle)]
    pub fn acquire_style(&self, style: JsValue) -> Result<String, JsError> {
        let text = ixe_css::compile(&classes_from(style)?);
        self.injector.acquire(&text);
        Ok(text)
    }

    #[wasm_bindgen(js_name = refCount)]
    pub fn ref_count(&self, text: &str) -> usize {
        self.injector.ref_count(text)
    }

    /// Number of distinct texts currently held.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.injector.len()
    }
}
