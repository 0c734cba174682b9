use actix_web::http::StatusCode;
use serde_json::json;
use tempfile::tempdir;

mod common;

#[actix_web::test]
async fn test_create_cafe_when_customer_expect_forbidden() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let customer = common::signup_with_role(&app, "maya", "maya@example.com", "customer").await;

    let res = common::post_json(
        &app,
        "/cafes",
        Some(&customer),
        &json!({ "name": "Sey Coffee" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_create_cafe_when_owner_expect_listed() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;

    let res = common::post_json(
        &app,
        "/cafes",
        Some(&owner),
        &json!({ "name": "Sey Coffee", "address": "18 Grattan St", "neighborhood": "Bushwick" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = common::body_json(res).await;
    assert_eq!(body["name"], "Sey Coffee");
    assert_eq!(body["neighborhood"], "Bushwick");

    let list = common::get(&app, "/cafes", Some(&owner)).await;
    assert_eq!(list.status(), StatusCode::OK);
    let cafes = common::body_json(list).await;
    assert_eq!(cafes.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_cafe_when_blank_name_expect_validation_error() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;

    let res = common::post_json(&app, "/cafes", Some(&owner), &json!({ "name": "  " })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_cafe_detail_when_unknown_id_expect_not_found() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let token = common::signup(&app, "maya", "maya@example.com", "espresso").await;

    let res = common::get(&app, "/cafes/9999", Some(&token)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_cafe_detail_when_malformed_id_expect_not_found() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let token = common::signup(&app, "maya", "maya@example.com", "espresso").await;

    for uri in ["/cafes/not-a-number", "/cafes/12abc"] {
        let res = common::get(&app, uri, Some(&token)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[actix_web::test]
async fn test_cafe_detail_expect_cafe_with_reviews() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;
    let cafe_id = common::create_cafe(&app, &owner, "Devocion").await;

    let res = common::post_json(
        &app,
        &format!("/cafes/{cafe_id}/reviews"),
        Some(&owner),
        &json!({ "rating": 5, "text": "Own bias aside, lovely." }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = common::get(&app, &format!("/cafes/{cafe_id}"), Some(&owner)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert_eq!(body["cafe"]["name"], "Devocion");
    assert_eq!(body["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(body["reviews"][0]["username"], "sam");
}

#[actix_web::test]
async fn test_search_when_mixed_case_fragment_expect_match() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;
    common::create_cafe(&app, &owner, "Blue Bottle").await;
    common::create_cafe(&app, &owner, "Partners Coffee").await;

    let res = common::get(&app, "/search?q=bLuE", Some(&owner)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Blue Bottle");
}

#[actix_web::test]
async fn test_search_when_query_has_like_wildcards_expect_literal_match() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;
    common::create_cafe(&app, &owner, "100% Arabica").await;
    common::create_cafe(&app, &owner, "100 Proof Roasters").await;
    common::create_cafe(&app, &owner, "flat_white bar").await;
    common::create_cafe(&app, &owner, "flat white stand").await;

    // `%` matches itself, not any run of characters ("100%25" decodes to "100%")
    let res = common::get(&app, "/search?q=100%25", Some(&owner)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let hits = common::body_json(res).await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "100% Arabica");

    // `_` matches itself, not any single character
    let res = common::get(&app, "/search?q=flat_w", Some(&owner)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let hits = common::body_json(res).await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "flat_white bar");
}

#[actix_web::test]
async fn test_search_when_no_query_expect_empty_list() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;
    common::create_cafe(&app, &owner, "Blue Bottle").await;

    for uri in ["/search", "/search?q=", "/search?q=%20"] {
        let res = common::get(&app, uri, Some(&owner)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = common::body_json(res).await;
        assert!(body.as_array().unwrap().is_empty(), "GET {uri}");
    }
}
