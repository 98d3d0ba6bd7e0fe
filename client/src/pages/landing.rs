//! Landing page with the sign-in panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication is a client-side flag only. Any sign-in control marks the
//! session authenticated and moves to the dashboard.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionContext;
use crate::components::navbar::Navbar;
use crate::state::session::SessionStore;
use crate::util::guard::ProtectedView;

const SOCIAL_PROVIDERS: [&str; 4] = ["Google", "GitHub", "Twitter", "LinkedIn"];

fn social_button_class(provider: &str) -> String {
    format!("login-button login-button--social login-button--{}", provider.to_ascii_lowercase())
}

fn panel_title(signing_up: bool) -> &'static str {
    if signing_up { "Create your account" } else { "Welcome back" }
}

fn toggle_label(signing_up: bool) -> &'static str {
    if signing_up {
        "Already have an account? Sign in"
    } else {
        "New here? Sign up"
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let show_panel = RwSignal::new(false);
    let signing_up = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let enter = move || {
        session.with_value(SessionStore::sign_in);
        navigate(ProtectedView::Dashboard.path(), NavigateOptions::default());
    };

    let enter_submit = enter.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        enter_submit();
    };

    view! {
        <div class="landing-page">
            <Navbar />
            <section class="landing-page__hero">
                <h1>"QuerySage"</h1>
                <p class="landing-page__tagline">"Observe your database and ask it why it is slow."</p>
                <button class="btn btn--primary" on:click=move |_| show_panel.set(true)>
                    "Get Started"
                </button>
            </section>
            <Show when=move || show_panel.get()>
                <div class="login-card">
                    <h2>{move || panel_title(signing_up.get())}</h2>
                    <form class="login-form" on:submit=on_submit.clone()>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit">
                            {move || if signing_up.get() { "Sign Up" } else { "Log In" }}
                        </button>
                    </form>
                    <div class="login-divider"></div>
                    <p class="login-card__or">"or Sign in with"</p>
                    {SOCIAL_PROVIDERS
                        .into_iter()
                        .map(|provider| {
                            let enter_social = enter.clone();
                            view! {
                                <button class=social_button_class(provider) on:click=move |_| enter_social()>
                                    {provider}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button class="login-card__toggle" on:click=move |_| signing_up.update(|up| *up = !*up)>
                        {move || toggle_label(signing_up.get())}
                    </button>
                    <button class="login-card__close" on:click=move |_| show_panel.set(false)>
                        "Close"
                    </button>
                </div>
            </Show>
        </div>
    }
}
