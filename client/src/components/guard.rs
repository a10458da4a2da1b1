//! UI-only route guard.
//!
//! Redirects visitors who cannot use a page and renders nothing while auth
//! is hydrating. This improves UX but enforces nothing; the API still
//! validates every token.

use busline::guards::GuardDecision;
use busline::routes::Page;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;

/// Renders `children` only while `page`'s guard says `Render`.
#[component]
pub fn RequirePage(page: Page, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth().state();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| page.decide(&auth.get()));

    Effect::new(move || {
        if let Some(target) = decision.get().redirect_target() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            {children()}
        </Show>
    }
}

/// Send a visitor who is already signed in away from `page` (login and
/// sign-up).
pub fn use_signed_in_redirect(page: Page) {
    let auth = use_auth().state();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = page.signed_in_redirect(&auth.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
