//! Observable single-owner state cell.
//!
//! DESIGN
//! ======
//! Each dashboard component owns one `Store` and is the only writer. Every
//! mutation publishes a snapshot to subscribers; the Leptos layer subscribes
//! once and mirrors snapshots into an `RwSignal` (see `util::signal`), so the
//! core state machines stay testable without a reactive runtime.
//!
//! Single-threaded by construction (`Rc`/`RefCell`), matching the browser
//! event loop. Observers must not write back into the store they observe.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

type Observer<T> = Box<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<Observer<T>>>,
}

pub struct Store<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner { value: RefCell::new(value), observers: RefCell::new(Vec::new()) }),
        }
    }

    /// Read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Mutate in place, then notify every observer once.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.inner.value.borrow_mut());
        self.notify();
        out
    }

    /// Replace the value wholesale.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Register an observer. It is not called for the current value.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) {
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }

    fn notify(&self) {
        let value = self.inner.value.borrow();
        for observer in self.inner.observers.borrow().iter() {
            observer(&value);
        }
    }
}

impl<T: Clone> Store<T> {
    /// Clone out a read-only snapshot.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}
