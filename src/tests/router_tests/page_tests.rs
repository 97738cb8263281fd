use super::{body_string, get, location};
use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{listing, test_state};
use std::fs;

#[test]
fn home_page_shows_search_and_featured_listings() {
    let listings: Vec<_> = (0..8).map(|i| listing(&format!("h{i}"))).collect();
    let state = test_state(&listings);

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("action=\"/search\""));
    assert!(body.contains("/property/h5"));
    assert!(!body.contains("/property/h6"), "only the first six are featured");
}

#[test]
fn properties_page_applies_form_filters() {
    let mut small = listing("small");
    small.bedrooms = 2;
    let mut big = listing("big");
    big.bedrooms = 4;
    let state = test_state(&[small, big]);

    let resp = handle(get("/properties?kamar_tidur=3&budget_min="), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("/property/big"));
    assert!(!body.contains("/property/small"));
}

#[test]
fn detail_page_and_unknown_id_redirect() {
    let state = test_state(&[listing("a"), listing("b"), listing("c"), listing("d"), listing("e")]);

    let resp = handle(get("/property/a"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Jl. Kaliurang No. a"));
    assert!(body.contains("/property/d"));
    assert!(!body.contains("/property/e"), "three other listings at most");

    let resp = handle(get("/property/nope"), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/properties");
}

#[test]
fn search_page_explains_the_result() {
    let mut three = listing("three");
    three.bedrooms = 3;
    let state = test_state(&[listing("two"), three]);

    let resp = handle(get("/search?q=rumah+3+kamar+tidur"), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Ditemukan 1 properti"));
    assert!(body.contains("/property/three"));
    assert!(!body.contains("/property/two"));
}

#[test]
fn predict_page_reports_missing_data() {
    let state = test_state(&[listing("only")]);

    let resp = handle(
        super::post("/predict", super::FORM, "luas_tanah=120"),
        &state,
    )
    .unwrap();
    assert!(body_string(resp).contains("Data properti belum cukup"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(&[]);

    assert!(matches!(handle(get("/nowhere"), &state), Err(ServerError::NotFound)));
    assert_eq!(respond(get("/nowhere"), &state).status(), 404);
}

#[test]
fn static_files_are_served_without_traversal() {
    let state = test_state(&[]);
    fs::create_dir_all(&state.config.static_dir).unwrap();
    fs::write(state.config.static_dir.join("main.css"), "body {}").unwrap();

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/css; charset=utf-8");
    assert_eq!(body_string(resp), "body {}");

    assert!(matches!(
        handle(get("/static/../properties.json"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(handle(get("/static/missing.js"), &state), Err(ServerError::NotFound)));
}
