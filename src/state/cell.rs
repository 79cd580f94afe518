//! Read/write access to a piece of widget state.
//!
//! The controller is written against `StateCell` so it can drive Leptos
//! signals in the browser and plain `Rc<RefCell<_>>` cells in unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

pub trait StateCell<T> {
    /// Read without subscribing the caller to changes.
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutate in place and notify observers.
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&RefCell::borrow(self))
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut RefCell::borrow_mut(self));
    }
}
