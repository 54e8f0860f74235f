//! Login dialog opened from the navbar.

use leptos::prelude::*;

use crate::net::api::HttpAuthApi;
use crate::net::initiators::{NextStep, submit_login};
use crate::net::types::LoginCredentials;
use crate::state::request::{Initiator, RequestState};
use crate::state::session::SessionStore;
use crate::util::form::{error_message, submit_label};

/// Username/password form. Closes itself after a successful login.
///
/// Closing the dialog while a login is in flight drops that response.
#[component]
pub fn LoginModal(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<HttpAuthApi>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(RequestState::Idle);

    let initiator = Initiator::observed(move |state| status.set(state.clone()));
    let dismiss = initiator.clone();
    on_cleanup(move || dismiss.dismiss());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginCredentials { username: username.get_untracked(), password: password.get_untracked() };
        let (api, initiator, session) = (api.clone(), initiator.clone(), session.clone());
        leptos::task::spawn_local(async move {
            if let Ok(Some(NextStep::CloseModal)) = submit_login(&api, &initiator, &session, credentials).await {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
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
                    <div class="modal__actions">
                        <button type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || status.get().is_pending()>
                            {move || submit_label(&status.get(), "Login", "Logging in...")}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
