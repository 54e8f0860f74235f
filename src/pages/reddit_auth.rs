//! Reddit account linking page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `Protected`, so a session token is normally present. The
//! token is still read at submit time and the request is refused without one.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::net::initiators::{NextStep, submit_reddit_link};
use crate::net::types::RedditLinkCredentials;
use crate::state::request::{Initiator, RequestState};
use crate::state::session::SessionStore;
use crate::util::form::{error_message, submit_label};

#[component]
pub fn RedditAuthPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();

    let reddit_username = RwSignal::new(String::new());
    let reddit_password = RwSignal::new(String::new());
    let status = RwSignal::new(RequestState::Idle);

    let initiator = Initiator::observed(move |state| status.set(state.clone()));
    let dismiss = initiator.clone();
    on_cleanup(move || dismiss.dismiss());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = RedditLinkCredentials {
            username: reddit_username.get_untracked(),
            password: reddit_password.get_untracked(),
        };
        let (api, initiator, session, navigate) = (api.clone(), initiator.clone(), session.clone(), navigate.clone());
        leptos::task::spawn_local(async move {
            if let Ok(Some(NextStep::Navigate(route))) =
                submit_reddit_link(&api, &initiator, &session, credentials).await
            {
                navigate(&route.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="form-page">
            <div class="form-card">
                <h1>"Connect Reddit Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Reddit Username"
                        <input
                            type="text"
                            required
                            prop:value=move || reddit_username.get()
                            on:input=move |ev| reddit_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Reddit Password"
                        <input
                            type="password"
                            required
                            prop:value=move || reddit_password.get()
                            on:input=move |ev| reddit_password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error_message(&status.get()).map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <button type="submit" disabled=move || status.get().is_pending()>
                        {move || submit_label(&status.get(), "Connect Reddit Account", "Connecting...")}
                    </button>
                </form>
            </div>
        </div>
    }
}
