//! Scoped acquisition: guards that release on every exit path.

use crate::sink::StyleSink;
use crate::Injector;
use ixe_css::CssText;
use ixe_style::Classes;

/// Holds one use of a style text; releases it when dropped.
pub struct StyleGuard<S: StyleSink> {
    injector: Injector<S>,
    text: CssText,
}

impl<S: StyleSink> StyleGuard<S> {
    pub(crate) fn new(injector: Injector<S>, text: CssText) -> Self {
        injector.acquire(&text);
        Self { injector, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<S: StyleSink> Drop for StyleGuard<S> {
    fn drop(&mut self) {
        self.injector.release_on_drop(&self.text);
    }
}

/// A compiled style tied to a dependency value.
///
/// The factory runs again only when [`StyleScope::update`] receives deps
/// that differ by value. The new text is acquired before the previous one
/// is released, so text shared by both survives the switch.
pub struct StyleScope<S, D, F>
where
    S: StyleSink,
{
    injector: Injector<S>,
    factory: F,
    deps: D,
    guard: StyleGuard<S>,
}

impl<S, D, F> StyleScope<S, D, F>
where
    S: StyleSink,
    D: PartialEq,
    F: Fn(&D) -> Classes,
{
    pub(crate) fn new(injector: Injector<S>, factory: F, deps: D) -> Self {
        let text = ixe_css::compile(&factory(&deps));
        let guard = StyleGuard::new(injector.clone(), text);
        Self {
            injector,
            factory,
            deps,
            guard,
        }
    }

    /// Recompile for new deps. Returns whether anything changed.
    pub fn update(&mut self, deps: D) -> bool {
        if deps == self.deps {
            return false;
        }

        let text = ixe_css::compile(&(self.factory)(&deps));
        let previous = std::mem::replace(&mut self.guard, StyleGuard::new(self.injector.clone(), text));
        drop(previous);
        self.deps = deps;
        true
    }

    pub fn text(&self) -> &str {
        self.guard.text()
    }

    pub fn deps(&self) -> &D {
        &self.deps
    }
}
