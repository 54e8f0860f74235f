//! Route wrapper that only renders its children for an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts a `GuardedRoute` for as long as the wrapped page is on screen. A
//! redirect decision, at mount or after a later logout, replaces the current
//! history entry with the landing route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::{GuardedRoute, RenderDecision, guard};

#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let decision = RwSignal::new(guard(&store.read(), route));
    let guarded = GuardedRoute::mount(&store, route, move |next| decision.set(next));
    on_cleanup(move || drop(guarded));

    Effect::new(move || {
        if let RenderDecision::Redirect(target) = decision.get() {
            navigate(&target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || matches!(decision.get(), RenderDecision::Render(_))>
            {children()}
        </Show>
    }
}
