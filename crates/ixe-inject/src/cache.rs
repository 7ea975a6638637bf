//! Content-keyed reference-counting cache.

use crate::sink::StyleSink;
use ixe_css::CssText;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Stable identifier for a style text: `ixe-` followed by 8 hex digits.
pub fn style_id(text: &str) -> String {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    let hash = hasher.finish();
    format!("ixe-{:08x}", (hash ^ (hash >> 32)) as u32)
}

struct Entry<N> {
    count: usize,
    node: N,
}

/// Refcount table over a style sink.
///
/// Each distinct text is attached once, on its first acquire, and detached
/// when its count returns to zero.
pub struct InjectionCache<S: StyleSink> {
    sink: S,
    entries: FxHashMap<CssText, Entry<S::Node>>,
}

impl<S: StyleSink> InjectionCache<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            entries: FxHashMap::default(),
        }
    }

    pub fn acquire(&mut self, text: &str) {
        if let Some(entry) = self.entries.get_mut(text) {
            entry.count += 1;
            log::trace!("style {} acquired ({})", style_id(text), entry.count);
            return;
        }

        let id = style_id(text);
        let node = self.sink.attach(&id, text);
        log::debug!("attached style {id}");
        self.entries.insert(text.to_string(), Entry { count: 1, node });
    }

    /// Release one use of `text`. Releasing text that is not held is a no-op.
    pub fn release(&mut self, text: &str) {
        let Some(entry) = self.entries.get_mut(text) else {
            log::warn!("release of style {} that is not acquired", style_id(text));
            return;
        };

        entry.count -= 1;
        if entry.count > 0 {
            log::trace!("style {} released ({})", style_id(text), entry.count);
            return;
        }

        if let Some(entry) = self.entries.remove(text) {
            self.sink.detach(entry.node);
            log::debug!("detached style {}", style_id(text));
        }
    }

    pub fn ref_count(&self, text: &str) -> usize {
        self.entries.get(text).map_or(0, |entry| entry.count)
    }

    /// Number of distinct texts currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
