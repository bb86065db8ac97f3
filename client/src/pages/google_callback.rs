//! Landing route for the Google OAuth redirect.

use leptos::prelude::*;
use signup::SignupState;

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let store = expect_context::<RwSignal<SignupState>>();

    // Effects only run after hydration, so the exchange happens once in the browser.
    Effect::new(move || crate::util::google::complete(store));

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h2 class="signup-card__title">"GOOGLE LOGIN"</h2>
                <Show when=move || store.with(|s| s.google_login.is_pending())>
                    <p class="signup-card__subtitle">"Signing you in..."</p>
                </Show>
                <Show when=move || store.with(|s| !s.form.feedback_message.is_empty())>
                    <p class="signup-feedback">{move || store.with(|s| s.form.feedback_message.clone())}</p>
                </Show>
                <a class="signup-button" href="/">"Back to sign up"</a>
            </div>
        </div>
    }
}
