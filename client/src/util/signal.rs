//! Bridge from core `Store`s into Leptos signals.

use leptos::prelude::*;

use crate::state::store::Store;

/// Create a signal seeded from `store` that follows every later mutation.
///
/// Writes after the owning scope is disposed are dropped.
pub fn mirror<T>(store: &Store<T>) -> RwSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let signal = RwSignal::new(store.get());
    store.subscribe(move |snapshot: &T| {
        if signal.try_set(snapshot.clone()).is_some() {
            log::debug!("store update after view teardown dropped");
        }
    });
    signal
}
