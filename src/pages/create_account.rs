//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. A successful registration does not log the user in; it
//! sends them back to landing, from where they log in through the navbar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::net::initiators::{NextStep, submit_registration};
use crate::net::types::AccountRegistration;
use crate::state::request::{Initiator, RequestState};
use crate::util::form::{error_message, submit_label};

#[component]
pub fn CreateAccountPage() -> impl IntoView {
    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(RequestState::Idle);

    let initiator = Initiator::observed(move |state| status.set(state.clone()));
    let dismiss = initiator.clone();
    on_cleanup(move || dismiss.dismiss());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let registration = AccountRegistration {
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let (api, initiator, navigate) = (api.clone(), initiator.clone(), navigate.clone());
        leptos::task::spawn_local(async move {
            if let Ok(Some(NextStep::Navigate(route))) = submit_registration(&api, &initiator, registration).await {
                navigate(&route.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Username"
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error_message(&status.get()).map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <button type="submit" disabled=move || status.get().is_pending()>
                        {move || submit_label(&status.get(), "Create Account", "Creating Account...")}
                    </button>
                </form>
            </div>
        </div>
    }
}
