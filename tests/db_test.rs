use chrono::Utc;
use tempfile::tempdir;

use sips::db::init::connect;
use sips::db::models::cafe::{Manager as _, NewCafe};
use sips::db::models::user::Manager as _;

/// A fresh account carries NULL in every optional column, and those rows
/// must decode cleanly back out of the pool.
#[actix_web::test]
async fn test_create_user_when_optional_columns_null_expect_decoded() {
    let td = tempdir().unwrap();
    let db_path = td.path().join("sips.sqlite3");
    let db = connect(&format!("sqlite://{}?mode=rwc", db_path.display()))
        .await
        .unwrap();

    let created = db
        .create_user("maya", "maya@example.com", "hash", &Utc::now().to_rfc3339())
        .await
        .unwrap();
    assert_eq!(created.username, "maya");
    assert_eq!(created.role, None);
    assert_eq!(created.phone, None);
    assert_eq!(created.shop_location, None);
    assert_eq!(created.operation_hours, None);

    let found = db.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.email, "maya@example.com");
    assert_eq!(found.role, None);
}

#[actix_web::test]
async fn test_create_cafe_when_optional_columns_null_expect_decoded() {
    let td = tempdir().unwrap();
    let db_path = td.path().join("sips.sqlite3");
    let db = connect(&format!("sqlite://{}?mode=rwc", db_path.display()))
        .await
        .unwrap();

    let owner = db
        .create_user("sam", "sam@example.com", "hash", &Utc::now().to_rfc3339())
        .await
        .unwrap();
    let listing = NewCafe {
        name: "Sey Coffee".into(),
        address: None,
        neighborhood: None,
        description: None,
    };
    let cafe = db
        .create_cafe(owner.id, &listing, &Utc::now().to_rfc3339())
        .await
        .unwrap();
    assert!(cafe.id > 0);
    assert_eq!(cafe.address, None);

    let all = db.find_all_cafes().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Sey Coffee");
    assert_eq!(all[0].neighborhood, None);
    assert_eq!(all[0].description, None);
}
