//! Dismissible banner for action outcomes.

use leptos::prelude::*;

use crate::state::actions::{Notice, NoticeKind};

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>, on_dismiss: Callback<()>) -> impl IntoView {
    move || {
        notice.get().map(|current| {
            let class = match current.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="status">
                    <span>{current.text}</span>
                    <button class="notice__dismiss" on:click=move |_| on_dismiss.run(())>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
