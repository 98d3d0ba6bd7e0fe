//! Chat assistant panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the mirrored `ChatState`. Sending is delegated to the dashboard,
//! which owns the `ChatSession`; the input is never locked while a reply is
//! outstanding.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatPanel(chat: RwSignal<ChatState>, on_send: Callback<String>, on_close: Callback<()>) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = (state.messages.len(), state.pending);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        on_send.run(text);
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <aside class="chat-panel">
            <div class="chat-panel__header">
                <span>"QuerySage Assistant"</span>
                <button class="chat-panel__close" title="Close" on:click=move |_| on_close.run(())>
                    "x"
                </button>
            </div>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.is_user();
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--user=is_user
                                    class:chat-panel__message--bot=!is_user
                                >
                                    {if is_user {
                                        view! { <span>{msg.text}</span> }.into_any()
                                    } else {
                                        let rendered = render_markdown_html(&msg.text);
                                        view! { <div class="chat-panel__markdown" inner_html=rendered></div> }
                                            .into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || chat.get().typing().then(|| view! { <div class="chat-panel__typing">"Typing..."</div> })}
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your queries..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=move |_| do_send()
                    disabled=move || input.get().trim().is_empty()
                >
                    "Send"
                </button>
            </div>
        </aside>
    }
}
