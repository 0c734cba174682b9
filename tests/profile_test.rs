use actix_web::http::StatusCode;
use serde_json::json;
use tempfile::tempdir;

mod common;

#[actix_web::test]
async fn test_update_profile_when_customer_expect_shop_fields_ignored() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let customer = common::signup_with_role(&app, "maya", "maya@example.com", "customer").await;

    let res = common::put_json(
        &app,
        "/me",
        Some(&customer),
        &json!({
            "username": "maya_v2",
            "phone": "212-555-0117",
            "shop_location": "should not stick",
            "operation_hours": "should not stick"
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert_eq!(body["username"], "maya_v2");
    assert_eq!(body["phone"], "212-555-0117");
    assert_eq!(body["shop_location"], serde_json::Value::Null);
    assert_eq!(body["operation_hours"], serde_json::Value::Null);
}

#[actix_web::test]
async fn test_update_profile_when_owner_expect_shop_fields_applied() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;

    let res = common::put_json(
        &app,
        "/me",
        Some(&owner),
        &json!({
            "username": "sam",
            "phone": "718-555-0199",
            "shop_location": "18 Grattan St, Brooklyn",
            "operation_hours": "7am-6pm"
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert_eq!(body["shop_location"], "18 Grattan St, Brooklyn");
    assert_eq!(body["operation_hours"], "7am-6pm");
}

#[actix_web::test]
async fn test_update_profile_when_username_taken_expect_conflict() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    common::signup(&app, "maya", "maya@example.com", "espresso").await;
    let other = common::signup(&app, "nick", "nick@example.com", "espresso").await;

    let res = common::put_json(&app, "/me", Some(&other), &json!({ "username": "maya" })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_me_expect_no_password_hash() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let token = common::signup(&app, "maya", "maya@example.com", "espresso").await;

    let res = common::get(&app, "/me", Some(&token)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert_eq!(body["username"], "maya");
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_saved_places_expect_idempotent_save_and_unsave() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let owner = common::signup_with_role(&app, "sam", "sam@example.com", "owner").await;
    let cafe_id = common::create_cafe(&app, &owner, "Sey Coffee").await;
    let customer = common::signup_with_role(&app, "maya", "maya@example.com", "customer").await;

    // saving twice keeps a single entry
    for _ in 0_i32..2_i32 {
        let res = common::post_json(
            &app,
            &format!("/cafes/{cafe_id}/save"),
            Some(&customer),
            &json!({}),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    let res = common::get(&app, "/saved", Some(&customer)).await;
    let body = common::body_json(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Sey Coffee");

    let res = common::delete(&app, &format!("/cafes/{cafe_id}/save"), Some(&customer)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = common::get(&app, "/saved", Some(&customer)).await;
    let body = common::body_json(res).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_save_when_unknown_cafe_expect_not_found() {
    let td = tempdir().unwrap();
    let app = common::initialize_app(&td).await;
    let token = common::signup(&app, "maya", "maya@example.com", "espresso").await;

    let res = common::post_json(&app, "/cafes/424242/save", Some(&token), &json!({})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
