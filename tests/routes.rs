use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use eventhub::configure_api;
use eventhub::repository::DieselRepository;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(configure_api),
        )
        .await
    };
}

#[actix_web::test]
async fn test_centre_listing_returns_page_metadata() {
    let test_db = common::TestDb::new("test_centre_listing_returns_page_metadata.db");
    let app = init_app!(test_db);

    for i in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/api/v1/centres")
            .set_json(json!({
                "name": format!("Hall {i}"),
                "address": "1 Main Road",
                "capacity": 100 * i,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/centres?page=1&pageSize=2&minCapacity=150")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCount"], 2);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["hasPrevious"], false);
    assert_eq!(body["hasNext"], false);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["name"], "Hall 3");
}

#[actix_web::test]
async fn test_oversized_page_request_is_clamped() {
    let test_db = common::TestDb::new("test_oversized_page_request_is_clamped.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/v1/events?page=0&pageSize=1000&sort=asc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageSize"], 50);
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["items"], json!([]));
}

#[actix_web::test]
async fn test_error_statuses() {
    let test_db = common::TestDb::new("test_error_statuses.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/api/v1/events/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/tickets/not-a-ticket")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/events")
        .set_json(json!({
            "title": "Backwards",
            "organizerEmail": "host@example.com",
            "startsAt": "2025-07-01T18:00:00",
            "endsAt": "2025-07-01T09:00:00",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_booking_and_ticket_flow() {
    let test_db = common::TestDb::new("test_booking_and_ticket_flow.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/centres")
        .set_json(json!({ "name": "Loft", "address": "9 Mill Lane", "capacity": 1 }))
        .to_request();
    let centre: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/events")
        .set_json(json!({
            "title": "Poetry night",
            "organizerEmail": "host@example.com",
            "startsAt": "2025-07-01T18:00:00",
            "endsAt": "2025-07-01T22:00:00",
            "ticketPrice": 750,
        }))
        .to_request();
    let event: Value = test::call_and_read_body_json(&app, req).await;
    let event_id = event["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/events/{event_id}/booking"))
        .set_json(json!({ "centreId": centre["id"] }))
        .to_request();
    let booked: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(booked["centreId"], centre["id"]);

    let issue = |name: &str| {
        test::TestRequest::post()
            .uri(&format!("/api/v1/events/{event_id}/tickets"))
            .set_json(json!({ "holderName": name, "holderEmail": "guest@example.com" }))
            .to_request()
    };
    let resp = test::call_service(&app, issue("Ada")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let ticket: Value = test::read_body_json(resp).await;
    assert_eq!(ticket["price"], 750);

    let resp = test::call_service(&app, issue("Grace")).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let code = ticket["code"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/tickets/{code}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/v1/organizers/host@example.com/tickets")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["items"][0]["holderName"], "Ada");
}
