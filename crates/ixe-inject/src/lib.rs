//! IXE Style Injection
//!
//! Inserts compiled stylesheet text into a shared style sink exactly once
//! per distinct text, however many callers request it, and removes it when
//! the last caller lets go.
//!
//! ```text
//! use_style(factory, deps) ─┐
//!                           ├→ Injector → InjectionCache (text → count) → StyleSink
//! use_raw_style(text) ──────┘
//! ```
//!
//! The injector is single-threaded: callers share one handle (clone it)
//! and acquisitions are tied to guard lifetimes.

pub mod cache;
pub mod scope;
pub mod sink;

pub use cache::{style_id, InjectionCache};
pub use scope::{StyleGuard, StyleScope};
pub use sink::{MemorySink, NodeId, StyleNode, StyleSink};

use ixe_css::CssText;
use ixe_style::Classes;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to one injection cache and its sink.
pub struct Injector<S: StyleSink> {
    cache: Rc<RefCell<InjectionCache<S>>>,
}

impl<S: StyleSink> Clone for Injector<S> {
    fn clone(&self) -> Self {
        Self {
            cache: Rc::clone(&self.cache),
        }
    }
}

impl<S: StyleSink> Injector<S> {
    pub fn new(sink: S) -> Self {
        Self {
            cache: Rc::new(RefCell::new(InjectionCache::new(sink))),
        }
    }

    pub fn acquire(&self, text: &str) {
        self.cache.borrow_mut().acquire(text);
    }

    pub fn release(&self, text: &str) {
        self.cache.borrow_mut().release(text);
    }

    pub fn ref_count(&self, text: &str) -> usize {
        self.cache.borrow().ref_count(text)
    }

    /// Number of distinct texts currently held.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn with_sink<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(self.cache.borrow().sink())
    }

    /// Acquire pre-compiled text for the lifetime of the returned guard.
    pub fn use_raw_style(&self, text: impl Into<CssText>) -> StyleGuard<S> {
        StyleGuard::new(self.clone(), text.into())
    }

    /// Compile `factory(&deps)` and hold it until the scope is dropped or
    /// updated with different deps.
    pub fn use_style<D, F>(&self, factory: F, deps: D) -> StyleScope<S, D, F>
    where
        D: PartialEq,
        F: Fn(&D) -> Classes,
    {
        StyleScope::new(self.clone(), factory, deps)
    }

    /// Release from a destructor. Skipped with a warning if the cache is
    /// already borrowed, which only happens when a sink calls back into this
    /// injector; the release is then lost and the count stays above zero.
    fn release_on_drop(&self, text: &str) {
        match self.cache.try_borrow_mut() {
            Ok(mut cache) => cache.release(text),
            Err(_) => log::warn!("style cache busy, dropping release of {}", style_id(text)),
        }
    }
}
