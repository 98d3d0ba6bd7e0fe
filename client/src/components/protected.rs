//! Route wrapper that only renders its children for a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server rendering has no access to browser storage, so the guard is only
//! evaluated once the client has hydrated. Until then a neutral placeholder
//! is rendered on both sides.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::guard::{GuardDecision, ProtectedView, guard};

#[component]
pub fn Protected(target: ProtectedView, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let hydrated = RwSignal::new(false);

    Effect::new(move || hydrated.set(true));

    move || {
        if !hydrated.get() {
            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
        }
        match guard(target, session.get()) {
            GuardDecision::Render(_) => children().into_any(),
            GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        }
    }
}
