use super::{body_string, get, post, FORM, JSON};
use crate::assistant::MSG_FAILURE;
use crate::assistant::Assistant;
use crate::router::handle;
use crate::tests::utils::{listing, priced_listings, test_state, FakeModel};
use serde_json::Value;

fn json(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn properties_api_returns_store_contents() {
    let state = test_state(&[listing("a"), listing("b")]);

    let resp = handle(get("/api/properties"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/json");

    let body = json(resp);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["kamar_tidur"], 2);
    assert_eq!(body[0]["harga"], 500_000_000.0);
}

#[test]
fn search_api_returns_exact_matches_and_criteria() {
    let mut three = listing("three");
    three.bedrooms = 3;
    let state = test_state(&[listing("two"), three]);

    let resp = handle(
        post("/api/search_properties", JSON, r#"{"query": "3 kamar tidur"}"#),
        &state,
    )
    .unwrap();
    let body = json(resp);

    assert_eq!(body["ai_powered"], true);
    assert_eq!(body["criteria"]["bedrooms"], 3);
    assert_eq!(body["properties"].as_array().unwrap().len(), 1);
    assert_eq!(body["properties"][0]["id"], "three");
}

#[test]
fn search_api_blank_query_shows_recent() {
    let state = test_state(&[listing("a")]);

    let body = json(handle(post("/api/search_properties", JSON, r#"{"query": "  "}"#), &state).unwrap());
    assert_eq!(body["ai_powered"], false);
    assert_eq!(body["explanation"], "Menampilkan beberapa properti terbaru.");
}

#[test]
fn bad_json_is_a_json_400() {
    let state = test_state(&[]);

    let resp = handle(post("/api/search_properties", JSON, "not json"), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(json(resp)["error"].as_str().unwrap().contains("invalid JSON"));
}

#[test]
fn predict_api_not_ready_is_400() {
    let state = test_state(&priced_listings(2));

    let resp = handle(post("/api/predict", JSON, r#"{"luas_tanah": 120}"#), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(json(resp)["error"].as_str().unwrap().starts_with("Cannot predict price"));
}

#[test]
fn predict_api_formats_the_estimate() {
    let state = test_state(&priced_listings(8));

    let resp = handle(
        post("/api/predict", JSON, r#"{"luas_tanah": "150", "kamar_tidur": 3, "kondisi": "baru"}"#),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = json(resp);
    let prediction = body["prediction"].as_f64().unwrap();
    assert!(prediction > 0.0);
    assert!(body["formatted"].as_str().unwrap().starts_with("Rp "));
}

#[test]
fn chat_attaches_listings_to_property_questions() {
    let mut three = listing("three");
    three.bedrooms = 3;
    let state = test_state(&[listing("two"), three]);

    let resp = handle(post("/chat", FORM, "message=ada+rumah+3+kamar+tidur%3F"), &state).unwrap();
    let body = json(resp);

    assert_eq!(body["response"], "Halo dari asisten");
    assert_eq!(body["properties"][0]["id"], "three");

    let body = json(handle(post("/chat", FORM, "message=halo"), &state).unwrap());
    assert!(body.get("properties").is_none());
}

#[test]
fn chat_backend_failure_is_an_apology() {
    let mut state = test_state(&[]);
    state.assistant = Assistant::new(Box::new(FakeModel::failing()));

    let body = json(handle(post("/chat", FORM, "message=halo"), &state).unwrap());
    assert_eq!(body["response"], MSG_FAILURE);
}

#[test]
fn chat_without_message_is_400() {
    let state = test_state(&[]);

    let resp = handle(post("/chat", FORM, "message=+"), &state).unwrap();
    assert_eq!(resp.status(), 400);
}
