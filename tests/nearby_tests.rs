mod common;

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::Value;

use ambufind_backend::api::routes;
use ambufind_backend::domain::GeoPoint;

use common::fixtures::{self, ORIGIN};
use common::mocks::utils::reference_haversine_km;
use common::mocks::{MockAmbulanceRepo, MockLocationProvider};
use common::test_state;

async fn call_json(
    state: routes::AppState,
    uri: &str,
) -> (actix_web::http::StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let request = test::TestRequest::get().uri(uri).to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

fn seeded_state() -> routes::AppState {
    test_state(
        Arc::new(MockAmbulanceRepo::with_ambulances(
            fixtures::seeded_directory(),
        )),
        Arc::new(MockLocationProvider::failing()),
    )
}

#[actix_web::test]
async fn ranks_seeded_directory_nearest_first() {
    let (status, body) = call_json(
        seeded_state(),
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["radius_km"], 10.0);
    assert_eq!(body["origin"]["latitude"], 19.1);

    let ambulances = body["ambulances"].as_array().expect("ambulances array");
    let contacts: Vec<&str> = ambulances
        .iter()
        .map(|entry| entry["contact"].as_str().expect("contact string"))
        .collect();
    assert_eq!(contacts, vec!["1", "3", "2", "0"]);

    let mut previous = 0.0;
    for entry in ambulances {
        let distance = entry["distance_km"].as_f64().expect("distance number");
        assert!(distance > 0.0 && distance <= 10.0);
        assert!(distance >= previous, "results must be sorted ascending");
        previous = distance;

        let reported = GeoPoint {
            latitude: entry["location"]["latitude"].as_f64().expect("latitude"),
            longitude: entry["location"]["longitude"].as_f64().expect("longitude"),
        };
        let expected = reference_haversine_km(ORIGIN, reported);
        assert!(
            (distance - expected).abs() < 1e-9,
            "reported {distance} km, reference {expected} km"
        );
    }
}

#[actix_web::test]
async fn widened_radius_admits_the_outlying_entry() {
    let (status, body) = call_json(
        seeded_state(),
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9&radius_km=12",
    )
    .await;

    assert_eq!(status, 200);
    let ambulances = body["ambulances"].as_array().expect("ambulances array");
    assert_eq!(ambulances.len(), 5);

    // The farthest seeded near-origin entry sits just past the default
    // radius, at roughly 11.35 km.
    let last = &ambulances[4];
    assert_eq!(last["contact"], "4");
    let distance = last["distance_km"].as_f64().expect("distance number");
    assert!((11.3..11.4).contains(&distance), "got {distance} km");

    for entry in ambulances {
        assert_eq!(entry["name"], "within10");
    }
}

#[actix_web::test]
async fn provider_position_used_when_coordinates_omitted() {
    let state = test_state(
        Arc::new(MockAmbulanceRepo::with_ambulances(
            fixtures::seeded_directory(),
        )),
        Arc::new(MockLocationProvider::fixed(ORIGIN)),
    );

    let (status, body) = call_json(state, "/api/v1/ambulances/nearby").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["origin"]["latitude"], 19.1);
    assert_eq!(body["origin"]["longitude"], 72.9);

    let contacts: Vec<&str> = body["ambulances"]
        .as_array()
        .expect("ambulances array")
        .iter()
        .map(|entry| entry["contact"].as_str().expect("contact string"))
        .collect();
    assert_eq!(contacts, vec!["1", "3", "2", "0"]);
}

#[actix_web::test]
async fn co_located_entry_is_excluded() {
    let state = test_state(
        Arc::new(MockAmbulanceRepo::with_ambulances(vec![fixtures::ambulance(
            "same-spot",
            "0",
            ORIGIN.latitude,
            ORIGIN.longitude,
        )])),
        Arc::new(MockLocationProvider::failing()),
    );

    let (status, body) = call_json(
        state,
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert!(body["ambulances"].as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn empty_directory_returns_ok_with_no_entries() {
    let state = test_state(
        Arc::new(MockAmbulanceRepo::new()),
        Arc::new(MockLocationProvider::failing()),
    );

    let (status, body) = call_json(
        state,
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert!(body["ambulances"].as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn degrades_when_location_cannot_be_resolved() {
    let (status, body) = call_json(seeded_state(), "/api/v1/ambulances/nearby").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "location_unavailable");
    assert!(body["origin"].is_null());
    assert!(body["ambulances"].as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn degrades_when_directory_is_unavailable() {
    let repo = Arc::new(MockAmbulanceRepo::with_ambulances(
        fixtures::seeded_directory(),
    ));
    repo.fail_reads();

    let state = test_state(repo, Arc::new(MockLocationProvider::failing()));
    let (status, body) = call_json(
        state,
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9",
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "directory_unavailable");
    assert_eq!(body["origin"]["latitude"], 19.1);
    assert!(body["ambulances"].as_array().expect("array").is_empty());
}

#[actix_web::test]
async fn latitude_without_longitude_is_rejected() {
    let (status, body) =
        call_json(seeded_state(), "/api/v1/ambulances/nearby?latitude=19.1").await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn out_of_range_latitude_is_rejected() {
    let (status, body) = call_json(
        seeded_state(),
        "/api/v1/ambulances/nearby?latitude=95.0&longitude=72.9",
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn non_positive_radius_is_rejected() {
    let (status, body) = call_json(
        seeded_state(),
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9&radius_km=0",
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn oversized_radius_is_rejected() {
    let (status, body) = call_json(
        seeded_state(),
        "/api/v1/ambulances/nearby?latitude=19.1&longitude=72.9&radius_km=500",
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn full_listing_returns_every_entry_unranked() {
    let (status, body) = call_json(seeded_state(), "/api/v1/ambulances").await;

    assert_eq!(status, 200);
    let entries = body.as_array().expect("listing array");
    assert_eq!(entries.len(), 10);
    assert!(entries.iter().all(|entry| entry.get("distance_km").is_none()));
}

#[actix_web::test]
async fn full_listing_surfaces_store_failure() {
    let repo = Arc::new(MockAmbulanceRepo::new());
    repo.fail_reads();

    let state = test_state(repo, Arc::new(MockLocationProvider::failing()));
    let (status, body) = call_json(state, "/api/v1/ambulances").await;

    assert_eq!(status, 503);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
}
