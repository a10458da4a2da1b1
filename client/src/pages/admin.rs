//! Admin dashboard: entry points to the management screens.

use busline::routes::Page;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guard::RequirePage;

const SECTIONS: [(Page, &str, &str); 5] = [
    (Page::AdminTickets, "Tickets", "Search, cancel, and delete passenger tickets."),
    (Page::AdminTrips, "Trips", "Scheduled departures and their buses."),
    (Page::AdminRoutes, "Routes", "Origin/destination pairs with base prices."),
    (Page::AdminBuses, "Buses", "Fleet plates and seat capacity."),
    (Page::AdminLocations, "Locations", "Stops that routes connect."),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequirePage page=Page::Admin>
            <section class="admin">
                <h1>"Administration"</h1>
                <div class="admin__grid">
                    {SECTIONS
                        .into_iter()
                        .map(|(page, title, blurb)| {
                            view! {
                                <A href=page.path() attr:class="admin__card">
                                    <h2>{title}</h2>
                                    <p>{blurb}</p>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </RequirePage>
    }
}
