//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, toast_stack::ToastStack};
use crate::pages::admin::AdminPage;
use crate::pages::admin_catalog::{AdminBusesPage, AdminLocationsPage, AdminRoutesPage, AdminTripsPage};
use crate::pages::admin_tickets::AdminTicketsPage;
use crate::pages::{
    home::HomePage, login::LoginPage, profile::ProfilePage, signup::SignupPage, tickets::TicketsPage,
};
use crate::state::auth::AuthHandle;
use crate::state::notices::Toasts;
use crate::util::config::api_config;

/// Root application component.
///
/// Provides the auth handle, toast stack, and API config, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthHandle::new();
    provide_context(auth);
    provide_context(Toasts::new());
    provide_context(api_config());

    // Storage is read after mount, so the first render is the hydrating one.
    Effect::new(move || auth.hydrate());

    view! {
        <Title text="Busline"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("tickets") view=TicketsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("tickets")) view=AdminTicketsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("buses")) view=AdminBusesPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("locations")) view=AdminLocationsPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("routes")) view=AdminRoutesPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("trips")) view=AdminTripsPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
