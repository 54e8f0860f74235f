//! Public landing page.

use leptos::prelude::*;

use crate::app::AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::use_session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = use_session(&store);

    view! {
        <div class="landing-page">
            <h1>"Welcome to Saveddit"</h1>
            <p>"Manage your Reddit saved posts and comments"</p>
            <Show when=move || session.get().is_authenticated()>
                <a href=AppRoute::RedditAuth.path() class="landing-page__link">
                    "Connect Reddit Account"
                </a>
            </Show>
        </div>
    }
}
