use super::*;
use busline::net::types::TripStatus;
use mockito::{Matcher, Server};
use time::macros::datetime;

fn loc(id: i64, name: &str) -> Location {
    Location { location_id: id, location_name: name.to_owned() }
}

#[test]
fn every_catalog_maps_to_an_admin_page() {
    for catalog in [Catalog::Locations, Catalog::Routes, Catalog::Buses, Catalog::Trips] {
        assert!(catalog.page().path().starts_with("/admin/"), "{catalog:?}");
    }
}

#[test]
fn location_rows_use_numeric_id() {
    let rows = location_rows(&[loc(7, "Quito")]);
    assert_eq!(
        rows,
        vec![CatalogRow { id: "7".into(), cells: vec!["7".into(), "Quito".into()], draft: Vec::new() }]
    );
}

#[test]
fn route_rows_format_price_and_duration() {
    let route = Route {
        route_id: "r1".into(),
        origin: Some(loc(1, "Quito")),
        destination: Some(loc(2, "Cuenca")),
        route_base_price: 15.5,
        route_estimate_duration: 600,
    };
    let rows = route_rows(&[route]);
    assert_eq!(rows[0].id, "r1");
    assert_eq!(rows[0].cells, vec!["Quito → Cuenca", "$15.50", "10h 00m"]);
    assert_eq!(rows[0].draft, vec!["1", "2", "15.5", "600"]);
}

#[test]
fn bus_rows_show_capacity() {
    let bus = Bus { bus_id: "b1".into(), bus_plate_number: "PBA-1234".into(), bus_capacity: 40 };
    assert_eq!(bus_rows(&[bus])[0].cells, vec!["PBA-1234", "40"]);
}

#[test]
fn trip_rows_tolerate_missing_bus() {
    let trip = Trip {
        trip_id: "t1".into(),
        trip_departure_date: datetime!(2025-05-02 07:30 UTC),
        trip_status: TripStatus::Scheduled,
        route: None,
        bus: None,
    };
    let rows = trip_rows(&[trip]);
    assert_eq!(rows[0].cells, vec!["Unknown route", "2025-05-02 07:30", "Scheduled", ""]);
    assert_eq!(rows[0].draft, vec!["", "", "2025-05-02T07:30"]);
}

#[test]
fn header_count_matches_cells() {
    assert_eq!(Catalog::Locations.headers().len(), location_rows(&[loc(1, "a")])[0].cells.len());
    assert_eq!(Catalog::Buses.headers().len(), 2);
    assert_eq!(Catalog::Routes.headers().len(), 3);
    assert_eq!(Catalog::Trips.headers().len(), 4);
}

#[tokio::test]
async fn invalid_location_id_is_a_build_error() {
    let api = ApiClient::new(&busline::ApiConfig::default());
    let err = delete_row(&api, "tok", Catalog::Locations, "abc").await.unwrap_err();
    assert!(matches!(err, ApiError::Build(_)));
}

// =============================================================================
// Editor
// =============================================================================

fn server_client(server: &Server) -> ApiClient {
    ApiClient::new(&busline::ApiConfig::new(server.url()).unwrap())
}

#[test]
fn only_locations_lack_an_editor() {
    assert!(!Catalog::Locations.editable());
    for catalog in [Catalog::Routes, Catalog::Buses, Catalog::Trips] {
        assert!(catalog.editable(), "{catalog:?}");
        assert_eq!(Editing::create(catalog).values.len(), catalog.fields().len());
    }
}

#[test]
fn row_drafts_fill_every_editor_field() {
    let bus = Bus { bus_id: "b1".into(), bus_plate_number: "PBA-1234".into(), bus_capacity: 40 };
    assert_eq!(bus_rows(&[bus])[0].draft.len(), Catalog::Buses.fields().len());
}

#[test]
fn edited_bus_draft_builds_bus_input() {
    let bus = Bus { bus_id: "b1".into(), bus_plate_number: "PBA-1234".into(), bus_capacity: 40 };
    let draft = bus_rows(&[bus])[0].draft.clone();
    assert_eq!(
        build_input(Catalog::Buses, &draft),
        Ok(CatalogInput::Bus(BusInput { bus_plate_number: "PBA-1234".into(), bus_capacity: 40 }))
    );
}

#[test]
fn route_editor_rejects_same_endpoints() {
    let values: Vec<String> = ["3", "3", "10", "60"].map(String::from).to_vec();
    assert_eq!(build_input(Catalog::Routes, &values), Err("Origin and destination must differ."));
}

#[test]
fn empty_editor_is_rejected() {
    assert_eq!(build_input(Catalog::Trips, &Editing::create(Catalog::Trips).values), Err("Fill in every field."));
    assert!(build_input(Catalog::Locations, &[]).is_err());
}

#[test]
fn select_options_carry_ids() {
    assert_eq!(
        location_options(&[loc(4, "Loja")]),
        vec![SelectOption { value: "4".into(), label: "Loja".into() }]
    );
    let bus = Bus { bus_id: "b1".into(), bus_plate_number: "PBA-1234".into(), bus_capacity: 40 };
    assert_eq!(bus_options(&[bus])[0].label, "PBA-1234 (40 seats)");
}

#[tokio::test]
async fn new_route_is_posted() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/routes")
        .match_header("authorization", "Bearer tok")
        .match_body(Matcher::JsonString(
            r#"{"origin":1,"destination":2,"routeBasePrice":15.5,"routeEstimateDuration":600}"#.into(),
        ))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let values: Vec<String> = ["1", "2", "15.5", "600"].map(String::from).to_vec();
    let input = build_input(Catalog::Routes, &values).unwrap();
    save_row(&server_client(&server), "tok", None, &input).await.unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn edited_trip_is_patched() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("PATCH", "/trips/t1")
        .match_header("authorization", "Bearer tok")
        .match_body(Matcher::PartialJsonString(r#"{"routeId":"r1","busId":"b1"}"#.into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let values: Vec<String> = ["r1", "b1", "2025-05-02T07:30"].map(String::from).to_vec();
    let input = build_input(Catalog::Trips, &values).unwrap();
    save_row(&server_client(&server), "tok", Some("t1"), &input).await.unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn route_choices_come_from_locations() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/locations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"locationId":1,"locationName":"Quito"},{"locationId":2,"locationName":"Cuenca"}]"#)
        .create_async()
        .await;

    let choices = fetch_options(&server_client(&server), Catalog::Routes).await.unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].0, FieldKind::Location);
    assert_eq!(choices[0].1.len(), 2);
    assert!(fetch_options(&server_client(&server), Catalog::Buses).await.unwrap().is_empty());
}
