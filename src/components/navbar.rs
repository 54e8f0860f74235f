//! Top navigation bar with the login/logout controls.

use leptos::prelude::*;

use crate::app::AppRoute;
use crate::components::login_modal::LoginModal;
use crate::state::session::SessionStore;
use crate::util::auth::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = use_session(&store);
    let show_login = RwSignal::new(false);

    let logged_in_actions = move || {
        let store = store.clone();
        view! {
            <button class="navbar__link" on:click=move |_| store.logout()>
                "Logout"
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <a href=AppRoute::Landing.path() class="navbar__brand">
                "Saveddit"
            </a>
            <div class="navbar__actions">
                <Show when=move || !session.get().is_authenticated() fallback=logged_in_actions>
                    <button class="navbar__link" on:click=move |_| show_login.set(true)>
                        "Login"
                    </button>
                    <a href=AppRoute::CreateAccount.path() class="navbar__cta">
                        "Create Account"
                    </a>
                </Show>
            </div>
        </nav>
        <Show when=move || show_login.get()>
            <LoginModal on_close=Callback::new(move |()| show_login.set(false))/>
        </Show>
    }
}
