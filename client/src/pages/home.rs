//! Public landing page: upcoming trips with a seat-purchase dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone can browse trips. Buying needs a session; anonymous visitors get a
//! sign-in link in place of the buy button.

use busline::net::types::{PurchaseTicket, Trip};
use busline::notice::Notice;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;
use crate::util::api::{report_failure, use_api};
use crate::util::form::parse_seat_number;
use crate::util::format::{format_departure, format_duration, format_price, trip_label, trip_status_label};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let api = use_api();
    let state = auth.state();
    let trips = RwSignal::new(None::<Vec<Trip>>);
    let selected = RwSignal::new(None::<Trip>);
    let seat = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let list_api = api.clone();
    leptos::task::spawn_local(async move {
        match list_api.list_trips().await {
            Ok(list) => trips.set(Some(list)),
            Err(e) => {
                toasts.api_error("Could not load trips", &e);
                trips.set(Some(Vec::new()));
            }
        }
    });

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        let Some(trip) = selected.get_untracked() else {
            return;
        };
        let capacity = trip.bus.as_ref().map(|bus| bus.bus_capacity);
        let seat_number = match parse_seat_number(&seat.get_untracked(), capacity) {
            Ok(n) => n,
            Err(msg) => {
                toasts.show(Notice::warning(msg));
                return;
            }
        };
        let (Some(token), Some(user_id)) = (auth.token(), auth.user_id()) else {
            toasts.show(Notice::info("Sign in to buy a ticket"));
            selected.set(None);
            return;
        };
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let purchase = PurchaseTicket { trip_id: trip.trip_id, user_id, ticket_seat_number: seat_number };
            match api.purchase_ticket(&token, &purchase).await {
                Ok(()) => {
                    selected.set(None);
                    toasts.show(
                        Notice::success("Purchase complete")
                            .with_description(format!("Seat #{seat_number} reserved. See My tickets.")),
                    );
                }
                Err(e) => report_failure(auth, toasts, "Could not complete the purchase", &e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="trips">
            <h1>"Upcoming trips"</h1>
            <Show
                when=move || trips.get().is_some()
                fallback=|| view! { <p class="trips__loading">"Loading trips..."</p> }
            >
                <Show
                    when=move || trips.get().is_some_and(|list| !list.is_empty())
                    fallback=|| view! { <p class="trips__empty">"No trips scheduled."</p> }
                >
                    <div class="trips__grid">
                        <For
                            each=move || trips.get().unwrap_or_default()
                            key=|trip| trip.trip_id.clone()
                            children=move |trip: Trip| {
                                let bookable = trip.is_bookable();
                                let price = trip.route.as_ref().map(|r| format_price(r.route_base_price));
                                let duration = trip.route.as_ref().map(|r| format_duration(r.route_estimate_duration));
                                let plate = trip.bus.as_ref().map(|b| b.bus_plate_number.clone());
                                let buy = {
                                    let trip = trip.clone();
                                    move |_: leptos::ev::MouseEvent| {
                                        seat.set(String::new());
                                        selected.set(Some(trip.clone()));
                                    }
                                };
                                view! {
                                    <article class="trip-card">
                                        <h2>{trip_label(&trip)}</h2>
                                        <p class="trip-card__departure">{format_departure(&trip.trip_departure_date)}</p>
                                        <p class="trip-card__meta">
                                            {price} " · " {duration} " · " {plate}
                                        </p>
                                        <p class="trip-card__status">{trip_status_label(trip.trip_status)}</p>
                                        {move || {
                                            if !bookable {
                                                view! { <span class="trip-card__closed">"Not bookable"</span> }.into_any()
                                            } else if state.get().is_authenticated() {
                                                let buy = buy.clone();
                                                view! { <button class="trip-card__buy" on:click=buy>"Buy ticket"</button> }
                                                    .into_any()
                                            } else {
                                                view! { <A href="/login">"Sign in to buy"</A> }.into_any()
                                            }
                                        }}
                                    </article>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
            {move || {
                selected
                    .get()
                    .map(|trip| {
                        let on_confirm = on_confirm.clone();
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <h2>"Choose your seat"</h2>
                                    <p>{trip_label(&trip)} " · " {format_departure(&trip.trip_departure_date)}</p>
                                    <input
                                        class="modal__input"
                                        type="number"
                                        min="1"
                                        placeholder="Seat number"
                                        prop:value=move || seat.get()
                                        on:input=move |ev| seat.set(event_target_value(&ev))
                                    />
                                    <div class="modal__actions">
                                        <button class="modal__cancel" on:click=move |_| selected.set(None)>
                                            "Cancel"
                                        </button>
                                        <button class="modal__confirm" on:click=on_confirm disabled=move || busy.get()>
                                            "Confirm purchase"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
