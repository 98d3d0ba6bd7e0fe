//! Local task spawning for view event handlers.

use std::future::Future;

/// Run `task` on the browser event loop. Outside hydrate builds there is no
/// event loop to run it on and the task is dropped unpolled.
pub fn spawn_task<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(task);
    }
}
