//! The signed-in user's own tickets.

use busline::net::types::Ticket;
use busline::routes::Page;
use leptos::prelude::*;

use crate::components::guard::RequirePage;
use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;
use crate::util::api::{report_failure, use_api};
use crate::util::format::{format_departure, ticket_status_label, trip_label};

#[component]
pub fn TicketsPage() -> impl IntoView {
    view! {
        <RequirePage page=Page::Tickets>
            <MyTickets/>
        </RequirePage>
    }
}

#[component]
fn MyTickets() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let api = use_api();
    let tickets = RwSignal::new(None::<Vec<Ticket>>);

    if let Some(token) = auth.token() {
        leptos::task::spawn_local(async move {
            match api.my_tickets(&token).await {
                Ok(list) => tickets.set(Some(list)),
                Err(e) => {
                    report_failure(auth, toasts, "Could not load your tickets", &e);
                    tickets.set(Some(Vec::new()));
                }
            }
        });
    }

    view! {
        <section class="tickets">
            <h1>"My tickets"</h1>
            {move || match tickets.get() {
                None => view! { <p>"Loading tickets..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p>"You have no tickets yet."</p> }.into_any(),
                Some(list) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Route"</th>
                                    <th>"Departure"</th>
                                    <th>"Seat"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|ticket| {
                                        let route = ticket.trip.as_ref().map_or_else(|| "Unknown trip".to_owned(), trip_label);
                                        let departure = ticket
                                            .trip
                                            .as_ref()
                                            .map(|trip| format_departure(&trip.trip_departure_date));
                                        view! {
                                            <tr>
                                                <td>{route}</td>
                                                <td>{departure}</td>
                                                <td>{format!("#{}", ticket.ticket_seat_number)}</td>
                                                <td>{ticket_status_label(ticket.ticket_status)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
