//! Admin catalog screens: locations, routes, buses, and trips.
//!
//! SYSTEM CONTEXT
//! ==============
//! All four share one list-and-delete panel keyed by [`Catalog`]. Locations
//! get an inline create form; routes, buses, and trips get an editor that
//! both creates and updates. Deleting something still referenced (a bus
//! with trips, a location on a route) fails on the backend and the panel
//! shows its message.

#[cfg(test)]
#[path = "admin_catalog_test.rs"]
mod admin_catalog_test;

use busline::ApiClient;
use busline::net::error::ApiError;
use busline::net::types::{Bus, BusInput, Location, Route, RouteInput, Trip, TripInput};
use busline::notice::Notice;
use busline::routes::Page;
use leptos::prelude::*;

use crate::components::guard::RequirePage;
use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;
use crate::util::api::{report_failure, use_api};
use crate::util::form::{bus_input, route_input, trip_input, validate_location_name};
use crate::util::format::{
    format_datetime_local, format_departure, format_duration, format_price, route_label, trip_label,
    trip_status_label,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Catalog {
    Locations,
    Routes,
    Buses,
    Trips,
}

impl Catalog {
    const fn page(self) -> Page {
        match self {
            Self::Locations => Page::AdminLocations,
            Self::Routes => Page::AdminRoutes,
            Self::Buses => Page::AdminBuses,
            Self::Trips => Page::AdminTrips,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Locations => "Locations",
            Self::Routes => "Routes",
            Self::Buses => "Buses",
            Self::Trips => "Trips",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::Locations => "location",
            Self::Routes => "route",
            Self::Buses => "bus",
            Self::Trips => "trip",
        }
    }

    const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Locations => &["Id", "Name"],
            Self::Routes => &["Route", "Base price", "Duration"],
            Self::Buses => &["Plate", "Seats"],
            Self::Trips => &["Route", "Departure", "Status", "Bus"],
        }
    }

    /// Editor fields, in the order of [`CatalogRow::draft`]. Empty for
    /// catalogs without an editor.
    const fn fields(self) -> &'static [Field] {
        match self {
            Self::Locations => &[],
            Self::Routes => &[
                Field { label: "Origin", kind: FieldKind::Location },
                Field { label: "Destination", kind: FieldKind::Location },
                Field { label: "Base price", kind: FieldKind::Number },
                Field { label: "Duration (minutes)", kind: FieldKind::Number },
            ],
            Self::Buses => &[
                Field { label: "Plate", kind: FieldKind::Text },
                Field { label: "Seats", kind: FieldKind::Number },
            ],
            Self::Trips => &[
                Field { label: "Route", kind: FieldKind::Route },
                Field { label: "Bus", kind: FieldKind::Bus },
                Field { label: "Departure (UTC)", kind: FieldKind::DateTime },
            ],
        }
    }

    const fn editable(self) -> bool {
        !self.fields().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldKind {
    Text,
    Number,
    DateTime,
    Location,
    Route,
    Bus,
}

impl FieldKind {
    /// `<input type>` for free-form fields; `None` means a select.
    const fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Number => Some("number"),
            Self::DateTime => Some("datetime-local"),
            Self::Location | Self::Route | Self::Bus => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Field {
    label: &'static str,
    kind: FieldKind,
}

/// A select entry: submitted value and shown label.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SelectOption {
    value: String,
    label: String,
}

/// One table row: the id used for deletion, display cells, and the editor
/// values that reproduce the entity.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CatalogRow {
    id: String,
    cells: Vec<String>,
    draft: Vec<String>,
}

/// Open editor: `id` is `None` when creating.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Editing {
    id: Option<String>,
    values: Vec<String>,
}

impl Editing {
    fn create(catalog: Catalog) -> Self {
        Self { id: None, values: vec![String::new(); catalog.fields().len()] }
    }

    fn value(&self, index: usize) -> String {
        self.values.get(index).cloned().unwrap_or_default()
    }
}

/// Validated editor output, ready for the API.
#[derive(Clone, Debug, PartialEq)]
enum CatalogInput {
    Route(RouteInput),
    Bus(BusInput),
    Trip(TripInput),
}

fn location_rows(list: &[Location]) -> Vec<CatalogRow> {
    list.iter()
        .map(|loc| CatalogRow {
            id: loc.location_id.to_string(),
            cells: vec![loc.location_id.to_string(), loc.location_name.clone()],
            draft: Vec::new(),
        })
        .collect()
}

fn route_rows(list: &[Route]) -> Vec<CatalogRow> {
    list.iter()
        .map(|route| CatalogRow {
            id: route.route_id.clone(),
            cells: vec![
                route_label(Some(route)),
                format_price(route.route_base_price),
                format_duration(route.route_estimate_duration),
            ],
            draft: vec![
                location_id(route.origin.as_ref()),
                location_id(route.destination.as_ref()),
                route.route_base_price.to_string(),
                route.route_estimate_duration.to_string(),
            ],
        })
        .collect()
}

fn bus_rows(list: &[Bus]) -> Vec<CatalogRow> {
    list.iter()
        .map(|bus| CatalogRow {
            id: bus.bus_id.clone(),
            cells: vec![bus.bus_plate_number.clone(), bus.bus_capacity.to_string()],
            draft: vec![bus.bus_plate_number.clone(), bus.bus_capacity.to_string()],
        })
        .collect()
}

fn trip_rows(list: &[Trip]) -> Vec<CatalogRow> {
    list.iter()
        .map(|trip| CatalogRow {
            id: trip.trip_id.clone(),
            cells: vec![
                trip_label(trip),
                format_departure(&trip.trip_departure_date),
                trip_status_label(trip.trip_status).to_owned(),
                trip.bus.as_ref().map(|bus| bus.bus_plate_number.clone()).unwrap_or_default(),
            ],
            draft: vec![
                trip.route.as_ref().map(|route| route.route_id.clone()).unwrap_or_default(),
                trip.bus.as_ref().map(|bus| bus.bus_id.clone()).unwrap_or_default(),
                format_datetime_local(&trip.trip_departure_date),
            ],
        })
        .collect()
}

fn location_id(loc: Option<&Location>) -> String {
    loc.map(|l| l.location_id.to_string()).unwrap_or_default()
}

fn location_options(list: &[Location]) -> Vec<SelectOption> {
    list.iter()
        .map(|loc| SelectOption { value: loc.location_id.to_string(), label: loc.location_name.clone() })
        .collect()
}

fn route_options(list: &[Route]) -> Vec<SelectOption> {
    list.iter()
        .map(|route| SelectOption {
            value: route.route_id.clone(),
            label: format!("{} ({})", route_label(Some(route)), format_price(route.route_base_price)),
        })
        .collect()
}

fn bus_options(list: &[Bus]) -> Vec<SelectOption> {
    list.iter()
        .map(|bus| SelectOption {
            value: bus.bus_id.clone(),
            label: format!("{} ({} seats)", bus.bus_plate_number, bus.bus_capacity),
        })
        .collect()
}

/// Validate editor values for `catalog`.
fn build_input(catalog: Catalog, values: &[String]) -> Result<CatalogInput, &'static str> {
    let field = |i: usize| values.get(i).map_or("", String::as_str);
    match catalog {
        Catalog::Locations => Err("Locations cannot be edited."),
        Catalog::Routes => route_input(field(0), field(1), field(2), field(3)).map(CatalogInput::Route),
        Catalog::Buses => bus_input(field(0), field(1)).map(CatalogInput::Bus),
        Catalog::Trips => trip_input(field(0), field(1), field(2)).map(CatalogInput::Trip),
    }
}

async fn fetch_rows(api: &ApiClient, catalog: Catalog) -> Result<Vec<CatalogRow>, ApiError> {
    match catalog {
        Catalog::Locations => api.list_locations().await.map(|list| location_rows(&list)),
        Catalog::Routes => api.list_routes().await.map(|list| route_rows(&list)),
        Catalog::Buses => api.list_buses().await.map(|list| bus_rows(&list)),
        Catalog::Trips => api.list_trips().await.map(|list| trip_rows(&list)),
    }
}

/// Choices for the editor's selects, keyed by field kind.
async fn fetch_options(api: &ApiClient, catalog: Catalog) -> Result<Vec<(FieldKind, Vec<SelectOption>)>, ApiError> {
    match catalog {
        Catalog::Locations | Catalog::Buses => Ok(Vec::new()),
        Catalog::Routes => Ok(vec![(FieldKind::Location, location_options(&api.list_locations().await?))]),
        Catalog::Trips => Ok(vec![
            (FieldKind::Route, route_options(&api.list_routes().await?)),
            (FieldKind::Bus, bus_options(&api.list_buses().await?)),
        ]),
    }
}

/// Create when `id` is `None`, otherwise update that row.
async fn save_row(api: &ApiClient, token: &str, id: Option<&str>, input: &CatalogInput) -> Result<(), ApiError> {
    match (input, id) {
        (CatalogInput::Route(input), None) => api.create_route(token, input).await,
        (CatalogInput::Route(input), Some(id)) => api.update_route(token, id, input).await,
        (CatalogInput::Bus(input), None) => api.create_bus(token, input).await,
        (CatalogInput::Bus(input), Some(id)) => api.update_bus(token, id, input).await,
        (CatalogInput::Trip(input), None) => api.create_trip(token, input).await,
        (CatalogInput::Trip(input), Some(id)) => api.update_trip(token, id, input).await,
    }
}

async fn delete_row(api: &ApiClient, token: &str, catalog: Catalog, id: &str) -> Result<(), ApiError> {
    match catalog {
        Catalog::Locations => {
            let location_id = id.parse::<i64>().map_err(|e| ApiError::Build(format!("location id {id:?}: {e}")))?;
            api.delete_location(token, location_id).await
        }
        Catalog::Routes => api.delete_route(token, id).await,
        Catalog::Buses => api.delete_bus(token, id).await,
        Catalog::Trips => api.delete_trip(token, id).await,
    }
}

#[component]
pub fn AdminLocationsPage() -> impl IntoView {
    catalog_page(Catalog::Locations)
}

#[component]
pub fn AdminRoutesPage() -> impl IntoView {
    catalog_page(Catalog::Routes)
}

#[component]
pub fn AdminBusesPage() -> impl IntoView {
    catalog_page(Catalog::Buses)
}

#[component]
pub fn AdminTripsPage() -> impl IntoView {
    catalog_page(Catalog::Trips)
}

fn catalog_page(catalog: Catalog) -> impl IntoView {
    view! {
        <RequirePage page=catalog.page()>
            <CatalogPanel catalog=catalog/>
        </RequirePage>
    }
}

#[component]
fn CatalogPanel(catalog: Catalog) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let api = use_api();
    let rows = RwSignal::new(None::<Vec<CatalogRow>>);
    let reload = RwSignal::new(0_u32);
    let confirming = RwSignal::new(None::<String>);
    let new_name = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Editing>);
    let options = RwSignal::new(Vec::<(FieldKind, Vec<SelectOption>)>::new());
    let editor_open = Memo::new(move |_| editing.with(Option::is_some));

    let list_api = api.clone();
    Effect::new(move || {
        reload.track();
        let api = list_api.clone();
        leptos::task::spawn_local(async move {
            match fetch_rows(&api, catalog).await {
                Ok(list) => rows.set(Some(list)),
                Err(e) => {
                    report_failure(auth, toasts, &format!("Could not load {}", catalog.title().to_lowercase()), &e);
                    rows.set(Some(Vec::new()));
                }
            }
        });
    });

    let options_api = api.clone();
    Effect::new(move || {
        if !editor_open.get() {
            return;
        }
        let api = options_api.clone();
        leptos::task::spawn_local(async move {
            match fetch_options(&api, catalog).await {
                Ok(list) => options.set(list),
                Err(e) => report_failure(auth, toasts, "Could not load choices", &e),
            }
        });
    });

    let delete_api = api.clone();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        let Some(id) = confirming.get_untracked() else {
            return;
        };
        confirming.set(None);
        let Some(token) = auth.token() else {
            return;
        };
        let api = delete_api.clone();
        leptos::task::spawn_local(async move {
            match delete_row(&api, &token, catalog, &id).await {
                Ok(()) => {
                    toasts.show(Notice::success(format!("Deleted {}", catalog.noun())));
                    reload.update(|n| *n += 1);
                }
                Err(e) => report_failure(auth, toasts, &format!("Could not delete {}", catalog.noun()), &e),
            }
        });
    };

    let create_api = api.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_location_name(&new_name.get_untracked()) {
            Ok(name) => name,
            Err(msg) => {
                toasts.show(Notice::warning(msg));
                return;
            }
        };
        let Some(token) = auth.token() else {
            return;
        };
        let api = create_api.clone();
        leptos::task::spawn_local(async move {
            match api.create_location(&token, &name).await {
                Ok(()) => {
                    new_name.set(String::new());
                    toasts.show(Notice::success("Location added"));
                    reload.update(|n| *n += 1);
                }
                Err(e) => report_failure(auth, toasts, "Could not add location", &e),
            }
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = editing.get_untracked() else {
            return;
        };
        let input = match build_input(catalog, &current.values) {
            Ok(input) => input,
            Err(msg) => {
                toasts.show(Notice::warning(msg));
                return;
            }
        };
        let Some(token) = auth.token() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let verb = if current.id.is_some() { "update" } else { "create" };
            match save_row(&api, &token, current.id.as_deref(), &input).await {
                Ok(()) => {
                    editing.set(None);
                    toasts.show(Notice::success(format!("Saved {}", catalog.noun())));
                    reload.update(|n| *n += 1);
                }
                Err(e) => report_failure(auth, toasts, &format!("Could not {verb} {}", catalog.noun()), &e),
            }
        });
    };

    view! {
        <section class="admin-catalog">
            <h1>{catalog.title()}</h1>
            <Show when=move || catalog == Catalog::Locations>
                <form class="inline-form" on:submit=on_create.clone()>
                    <input
                        class="inline-form__input"
                        type="text"
                        placeholder="New location name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                    <button class="inline-form__button" type="submit">"Add"</button>
                </form>
            </Show>
            <Show when=move || catalog.editable()>
                <button class="admin-catalog__new" on:click=move |_| editing.set(Some(Editing::create(catalog)))>
                    {format!("New {}", catalog.noun())}
                </button>
            </Show>
            {move || match rows.get() {
                None => view! { <p>"Loading..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p>"Nothing here yet."</p> }.into_any(),
                Some(list) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {catalog.headers().iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.id;
                                        let edit = Editing { id: Some(id.clone()), values: row.draft };
                                        view! {
                                            <tr>
                                                {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                                <td>
                                                    <Show when=move || catalog.editable()>
                                                        <button
                                                            class="table__action"
                                                            on:click={
                                                                let edit = edit.clone();
                                                                move |_| editing.set(Some(edit.clone()))
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                    </Show>
                                                    <button
                                                        class="table__action"
                                                        on:click=move |_| confirming.set(Some(id.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
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
            <Show when=move || editor_open.get()>
                <div class="modal-backdrop">
                    <form class="modal" on:submit=on_save.clone()>
                        <h2>
                            {move || {
                                let verb = if editing.with(|e| e.as_ref().is_some_and(|e| e.id.is_some())) {
                                    "Edit"
                                } else {
                                    "New"
                                };
                                format!("{verb} {}", catalog.noun())
                            }}
                        </h2>
                        {catalog
                            .fields()
                            .iter()
                            .enumerate()
                            .map(|(index, field)| editor_field(index, *field, editing, options))
                            .collect_view()}
                        <div class="modal__actions">
                            <button class="modal__cancel" type="button" on:click=move |_| editing.set(None)>
                                "Cancel"
                            </button>
                            <button class="modal__confirm" type="submit">"Save"</button>
                        </div>
                    </form>
                </div>
            </Show>
            {move || {
                confirming
                    .get()
                    .map(|_| {
                        let on_delete = on_delete.clone();
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <p>{format!("Delete this {}?", catalog.noun())}</p>
                                    <div class="modal__actions">
                                        <button class="modal__cancel" on:click=move |_| confirming.set(None)>
                                            "Keep"
                                        </button>
                                        <button class="modal__confirm" on:click=on_delete>"Delete"</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

/// One labelled editor input bound to `editing.values[index]`.
fn editor_field(
    index: usize,
    field: Field,
    editing: RwSignal<Option<Editing>>,
    options: RwSignal<Vec<(FieldKind, Vec<SelectOption>)>>,
) -> impl IntoView {
    let value = move || editing.with(|e| e.as_ref().map(|e| e.value(index)).unwrap_or_default());
    let set = move |raw: String| {
        editing.update(|e| {
            if let Some(slot) = e.as_mut().and_then(|e| e.values.get_mut(index)) {
                *slot = raw;
            }
        });
    };
    let input = match field.kind.input_type() {
        Some(input_type) => view! {
            <input
                class="form__input"
                type=input_type
                step="any"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        None => view! {
            <select class="form__input" on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Choose..."</option>
                {move || {
                    let current = value();
                    options
                        .with(|all| {
                            all.iter().find(|(kind, _)| *kind == field.kind).map(|(_, list)| list.clone()).unwrap_or_default()
                        })
                        .into_iter()
                        .map(|opt| {
                            let selected = opt.value == current;
                            view! { <option value=opt.value prop:selected=selected>{opt.label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
    };
    view! {
        <label class="form__field">
            <span class="form__label">{field.label}</span>
            {input}
        </label>
    }
}
