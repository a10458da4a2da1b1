//! Top navigation bar.
//!
//! Reads auth state only; signing out flips the state and the route guards
//! take the visitor off any page that now requires a session.

use busline::notice::Notice;
use busline::routes::tickets_link;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let state = auth.state();

    let on_logout = move |_| {
        if let Err(e) = auth.logout() {
            toasts.show(
                Notice::warning("Signed out in this tab only")
                    .with_description(format!("Reloading may restore the session: {e}")),
            );
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Busline"</A>
            <div class="navbar__links">
                {move || {
                    tickets_link(&state.get()).map(|link| view! { <A href=link.href>{link.label}</A> })
                }}
                <Show when=move || state.get().is_admin()>
                    <A href="/admin">"Admin"</A>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href="/login">"Sign in"</A>
                            <A href="/signup">"Sign up"</A>
                        }
                    }
                >
                    <A href="/profile">
                        {move || state.get().user.map(|user| user.full_name).unwrap_or_default()}
                    </A>
                    <button class="navbar__logout" on:click=on_logout>"Sign out"</button>
                </Show>
            </div>
        </nav>
    }
}
