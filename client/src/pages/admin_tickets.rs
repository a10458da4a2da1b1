//! Admin ticket panel: search, cancel, and delete any passenger's tickets.

#[cfg(test)]
#[path = "admin_tickets_test.rs"]
mod admin_tickets_test;

use busline::net::types::{Ticket, TicketStatus};
use busline::notice::Notice;
use busline::routes::Page;
use leptos::prelude::*;

use crate::components::guard::RequirePage;
use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;
use crate::util::api::{report_failure, use_api};
use crate::util::format::{format_departure, ticket_status_label, trip_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TicketAction {
    Cancel,
    Delete,
}

impl TicketAction {
    const fn prompt(self) -> &'static str {
        match self {
            Self::Cancel => "Cancel this ticket? The seat becomes available again.",
            Self::Delete => "Delete this ticket permanently?",
        }
    }

    const fn done_title(self) -> &'static str {
        match self {
            Self::Cancel => "Ticket cancelled",
            Self::Delete => "Ticket deleted",
        }
    }

    const fn failure_title(self) -> &'static str {
        match self {
            Self::Cancel => "Could not cancel the ticket",
            Self::Delete => "Could not delete the ticket",
        }
    }

    /// Cancelling an already-cancelled ticket is pointless; deleting is
    /// always offered.
    fn applies_to(self, status: TicketStatus) -> bool {
        match self {
            Self::Cancel => status != TicketStatus::Cancelled,
            Self::Delete => true,
        }
    }
}

#[component]
pub fn AdminTicketsPage() -> impl IntoView {
    view! {
        <RequirePage page=Page::AdminTickets>
            <TicketPanel/>
        </RequirePage>
    }
}

#[component]
fn TicketPanel() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let api = use_api();
    let term = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let tickets = RwSignal::new(None::<Vec<Ticket>>);
    let reload = RwSignal::new(0_u32);
    let confirming = RwSignal::new(None::<(String, TicketAction)>);

    let list_api = api.clone();
    Effect::new(move || {
        reload.track();
        let term = query.get();
        let Some(token) = auth.token() else {
            return;
        };
        let api = list_api.clone();
        leptos::task::spawn_local(async move {
            match api.list_tickets(&token, Some(&term)).await {
                Ok(list) => tickets.set(Some(list)),
                Err(e) => {
                    report_failure(auth, toasts, "Could not load tickets", &e);
                    tickets.set(Some(Vec::new()));
                }
            }
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.set(term.get_untracked());
    };

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        let Some((ticket_id, action)) = confirming.get_untracked() else {
            return;
        };
        confirming.set(None);
        let Some(token) = auth.token() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = match action {
                TicketAction::Cancel => api.cancel_ticket(&token, &ticket_id).await,
                TicketAction::Delete => api.delete_ticket(&token, &ticket_id).await,
            };
            match result {
                Ok(()) => {
                    toasts.show(Notice::success(action.done_title()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => report_failure(auth, toasts, action.failure_title(), &e),
            }
        });
    };

    view! {
        <section class="admin-tickets">
            <h1>"Ticket panel"</h1>
            <form class="search" on:submit=on_search>
                <input
                    class="search__input"
                    type="search"
                    placeholder="Passenger name, email, or plate"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button class="search__button" type="submit">"Search"</button>
            </form>
            {move || match tickets.get() {
                None => view! { <p>"Loading tickets..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p>"No tickets match."</p> }.into_any(),
                Some(list) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Passenger"</th>
                                    <th>"Route"</th>
                                    <th>"Departure"</th>
                                    <th>"Seat"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|ticket| ticket_row(ticket, confirming)).collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            {move || {
                confirming
                    .get()
                    .map(|(_, action)| {
                        let on_confirm = on_confirm.clone();
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <p>{action.prompt()}</p>
                                    <div class="modal__actions">
                                        <button class="modal__cancel" on:click=move |_| confirming.set(None)>
                                            "Keep"
                                        </button>
                                        <button class="modal__confirm" on:click=on_confirm>"Confirm"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

fn ticket_row(ticket: Ticket, confirming: RwSignal<Option<(String, TicketAction)>>) -> impl IntoView {
    let passenger = ticket.user.as_ref().map(|user| user.full_name.clone());
    let route = ticket.trip.as_ref().map_or_else(|| "Unknown trip".to_owned(), trip_label);
    let departure = ticket.trip.as_ref().map(|trip| format_departure(&trip.trip_departure_date));
    let buttons = [TicketAction::Cancel, TicketAction::Delete]
        .into_iter()
        .filter(|action| action.applies_to(ticket.ticket_status))
        .map(|action| {
            let id = ticket.ticket_id.clone();
            let label = match action {
                TicketAction::Cancel => "Cancel",
                TicketAction::Delete => "Delete",
            };
            view! {
                <button class="table__action" on:click=move |_| confirming.set(Some((id.clone(), action)))>
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <tr>
            <td>{passenger}</td>
            <td>{route}</td>
            <td>{departure}</td>
            <td>{format!("#{}", ticket.ticket_seat_number)}</td>
            <td>{ticket_status_label(ticket.ticket_status)}</td>
            <td>{buttons}</td>
        </tr>
    }
}
