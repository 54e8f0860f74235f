//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{navbar::Navbar, protected::Protected};
use crate::config::{ApiConfig, BASE_PATH};
use crate::net::api::HttpAuthApi;
use crate::pages::{create_account::CreateAccountPage, landing::LandingPage, reddit_auth::RedditAuthPage};
use crate::state::session::SessionStore;

/// Client-side navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    CreateAccount,
    RedditAuth,
}

impl AppRoute {
    /// Path segment below `BASE_PATH`; empty for the landing route.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Landing => "",
            Self::CreateAccount => "create-account",
            Self::RedditAuth => "reddit-auth",
        }
    }

    pub fn path(self) -> String {
        match self.segment() {
            "" => BASE_PATH.to_owned(),
            segment => format!("{BASE_PATH}/{segment}"),
        }
    }

    /// Routes that only render for an authenticated session.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::RedditAuth)
    }
}

/// Root application component.
///
/// Provides the session store and the backend client, then sets up
/// client-side routing under `/saveddit`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::new());
    provide_context(HttpAuthApi::new(ApiConfig::from_build_env()));

    let base = StaticSegment(BASE_PATH.trim_start_matches('/'));

    view! {
        <Title text="Saveddit"/>

        <Router>
            <div class="app">
                <Navbar/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=BASE_PATH/> }/>
                    <Route path=base view=LandingPage/>
                    <Route
                        path=(base, StaticSegment(AppRoute::CreateAccount.segment()))
                        view=CreateAccountPage
                    />
                    <Route
                        path=(base, StaticSegment(AppRoute::RedditAuth.segment()))
                        view=|| {
                            view! {
                                <Protected route=AppRoute::RedditAuth>
                                    <RedditAuthPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </div>
        </Router>
    }
}
