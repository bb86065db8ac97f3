//! Sign-up page: name, email, password, remember-me and Google login.

use leptos::prelude::*;
use signup::flow::prepare_registration;
use signup::{Action, SignupState};

use crate::state::password_field::PasswordFieldState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<RwSignal<SignupState>>();
    let field = RwSignal::new(PasswordFieldState::default());
    let busy = move || store.with(SignupState::is_busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if store.with_untracked(SignupState::is_busy) {
            return;
        }
        let request = match store.with_untracked(|s| prepare_registration(&s.form)) {
            Ok(request) => request,
            Err(e) => {
                field.update(|f| f.on_rejected(&e));
                return;
            }
        };
        store.update(|s| s.dispatch(Action::RegisterPending));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::auth_client() {
                Ok(client) => client.register(&request).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::warn!("registration failed: {e}");
            }
            store.update(|s| s.dispatch(Action::register_settled(&result)));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_google = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = crate::util::google::begin() {
            #[cfg(feature = "hydrate")]
            log::warn!("google login could not start: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            let message = signup::state::signup::GOOGLE_LOGIN_FAILED.to_owned();
            store.update(|s| s.dispatch(Action::SetFeedbackMessage(message)));
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h2 class="signup-card__title">"SIGN UP"</h2>
                <p class="signup-card__subtitle">"Create an account to get started."</p>
                <button class="signup-button signup-button--google" type="button" on:click=on_google disabled=busy>
                    "Continue With Google"
                </button>
                <div class="signup-divider">
                    <span>"Or"</span>
                </div>
                <form class="signup-form" on:submit=on_submit>
                    <input
                        id="name"
                        name="name"
                        class="signup-input"
                        type="text"
                        autocomplete="name"
                        placeholder="Name"
                        required=true
                        prop:value=move || store.with(|s| s.form.name.clone())
                        on:input=move |ev| store.update(|s| s.dispatch(Action::SetName(event_target_value(&ev))))
                    />
                    <input
                        id="email"
                        name="email"
                        class="signup-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || store.with(|s| s.form.email.clone())
                        on:input=move |ev| store.update(|s| s.dispatch(Action::SetEmail(event_target_value(&ev))))
                    />
                    <input
                        id="password"
                        name="password"
                        class="signup-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        required=true
                        prop:value=move || store.with(|s| s.form.password.clone())
                        on:input=move |ev| {
                            let password = event_target_value(&ev);
                            field.update(PasswordFieldState::on_input);
                            store.update(|s| s.dispatch(Action::SetPassword(password)));
                        }
                        on:focus=move |_| field.update(|f| f.focused = true)
                        on:blur=move |_| field.update(|f| f.focused = false)
                    />
                    <Show when=move || store.with(|s| field.with(|f| f.hint(&s.form.password).is_some()))>
                        <p class=move || {
                            if field.with(PasswordFieldState::has_error) {
                                "signup-hint signup-hint--error"
                            } else {
                                "signup-hint"
                            }
                        }>
                            {move || store.with(|s| field.with(|f| f.hint(&s.form.password))).unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="signup-remember">
                        <input
                            id="remember-me"
                            name="remember-me"
                            type="checkbox"
                            prop:checked=move || store.with(|s| s.form.remember_me)
                            on:change=move |ev| store.update(|s| s.dispatch(Action::SetRememberMe(event_target_checked(&ev))))
                        />
                        "Remember Me"
                    </label>
                    <button class="signup-button" type="submit" disabled=busy>
                        {move || if store.with(|s| s.register.is_pending()) { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || store.with(|s| !s.form.feedback_message.is_empty())>
                    <p class="signup-feedback">{move || store.with(|s| s.form.feedback_message.clone())}</p>
                </Show>
            </div>
        </div>
    }
}
