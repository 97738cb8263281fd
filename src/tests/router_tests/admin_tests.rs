use super::{body_string, get, location, post, FORM};
use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{priced_listings, test_state};
use std::fs;

#[test]
fn admin_page_lists_listings_and_notice() {
    let state = test_state(&priced_listings(2));

    let resp = handle(get("/admin?notice=deleted"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Kelola Properti"));
    assert!(body.contains("Properti berhasil dihapus."));
    assert!(body.contains("/admin/delete_property/p1"));
}

#[test]
fn adding_a_property_stores_it_and_retrains() {
    let state = test_state(&priced_listings(4));
    assert!(!state.estimator.is_ready());

    let form = "alamat=Jl.+Parangtritis+5&kecamatan=Sewon&kamar_tidur=3&luas_tanah=150&harga=750000000&kondisi=baru&sertifikat=shm";
    let resp = handle(post("/admin/add_property", FORM, form), &state).expect("Handler failed");

    assert_eq!(resp.status(), 302, "Should redirect after adding");
    assert_eq!(location(&resp), "/admin?notice=added");

    let listings = state.store.load().unwrap();
    assert_eq!(listings.len(), 5);
    let added = listings.last().unwrap();
    assert_eq!(added.bedrooms, 3);
    assert_eq!(added.bathrooms, 1, "blank field takes its default");
    assert_eq!(added.distance_school, Some(1000.0));
    assert_eq!(added.price, Some(750_000_000.0));
    assert_eq!(added.neighborhood.as_deref(), Some("Sewon"));
    assert!(added.image.is_none());

    assert!(state.estimator.is_ready(), "fifth priced listing makes the model trainable");
    assert!(state.config.model_path.exists());
}

#[test]
fn multipart_add_saves_the_photo() {
    let state = test_state(&[]);
    let boundary = "RUMAHBOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"kamar_tidur\"\r\n\r\n\
         4\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"tampak depan.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\n\
         JPEG\r\n\
         --{boundary}--\r\n"
    );

    let resp = handle(
        post(
            "/admin/add_property",
            &format!("multipart/form-data; boundary={boundary}"),
            body,
        ),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let listings = state.store.load().unwrap();
    let image = listings[0].image.clone().expect("image stored");
    assert!(image.ends_with("_tampak_depan.jpg"));
    assert_eq!(fs::read(state.config.upload_dir.join(&image)).unwrap(), b"JPEG");
    assert_eq!(listings[0].bedrooms, 4);
}

#[test]
fn failed_append_leaves_no_orphaned_photo() {
    let state = test_state(&[]);
    fs::write(&state.config.data_path, "{ not json").unwrap();

    let boundary = "RUMAHBOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"kamar_tidur\"\r\n\r\n\
         2\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"foto.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\n\
         JPEG\r\n\
         --{boundary}--\r\n"
    );

    let result = handle(
        post(
            "/admin/add_property",
            &format!("multipart/form-data; boundary={boundary}"),
            body,
        ),
        &state,
    );
    assert!(matches!(result, Err(ServerError::Store(_))));

    let leftovers = fs::read_dir(&state.config.upload_dir)
        .map(|dir| dir.count())
        .unwrap_or(0);
    assert_eq!(leftovers, 0, "photo of a rejected listing must not stay on disk");
}

#[test]
fn non_numeric_field_is_rejected() {
    let state = test_state(&[]);

    let result = handle(post("/admin/add_property", FORM, "kamar_tidur=dua"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(state.store.load().unwrap().is_empty());
}

#[test]
fn oversized_upload_is_413() {
    let state = test_state(&[]);
    let too_big = vec![b'a'; state.config.max_upload_bytes as usize + 1];

    let resp = respond(post("/admin/add_property", FORM, too_big), &state);
    assert_eq!(resp.status(), 413);
}

#[test]
fn deleting_removes_and_retrains() {
    let state = test_state(&priced_listings(5));
    assert!(state.estimator.is_ready());

    let resp = handle(post("/admin/delete_property/p0", FORM, ""), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/admin?notice=deleted");

    assert_eq!(state.store.load().unwrap().len(), 4);
    assert!(!state.estimator.is_ready(), "four priced listings are not enough");

    let resp = handle(post("/admin/delete_property/p0", FORM, ""), &state).unwrap();
    assert_eq!(location(&resp), "/admin?notice=missing");
}

#[test]
fn delete_over_get_is_not_a_route() {
    let state = test_state(&priced_listings(1));

    assert!(matches!(
        handle(get("/admin/delete_property/p0"), &state),
        Err(ServerError::NotFound)
    ));
    assert_eq!(state.store.load().unwrap().len(), 1);
}
