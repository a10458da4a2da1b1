//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use busline::net::error::ApiError;
use busline::notice::Notice;
use busline::routes::Page;

use crate::components::guard::use_signed_in_redirect;
use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;
use crate::util::api::use_api;
use crate::util::form::validate_login;

/// Inline message for a failed sign-in. A 401 here means bad credentials,
/// not an expired session.
fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } => message.clone(),
        ApiError::Request(_) => "Could not reach the server.".to_owned(),
        ApiError::Decode(_) | ApiError::Build(_) => "Unexpected response from the server.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    use_signed_in_redirect(Page::Login);
    let auth = use_auth();
    let toasts = use_toasts();
    let api = use_api();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(response) => match auth.login(response) {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => {
                        toasts.show(Notice::error("Could not save the session").with_description(e.to_string()));
                        busy.set(false);
                    }
                },
                Err(e) => {
                    info.set(login_failure_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href="/signup">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
