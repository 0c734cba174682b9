//! Handlers for posting, editing and deleting reviews.
//!
//! Only the author of a review may edit or delete it.
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::db::models::cafe::Manager as _;
use crate::db::models::review::{Manager as _, MAX_RATING, MIN_RATING};
use crate::server::api::auth::require_user;
use crate::server::api::state::{App as AppState, Global as _};
use crate::server::errors::SipsError;

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Check the shared rating and text rules for posting and editing.
fn validate(body: &request::ReviewBody) -> Result<(i64, String), SipsError> {
    if body.rating < MIN_RATING || body.rating > MAX_RATING {
        return Err(SipsError::Validation(
            "Rating must be between 1 and 5.".into(),
        ));
    }
    let text = body.text.trim().to_owned();
    if text.is_empty() {
        return Err(SipsError::Validation("Review text cannot be empty.".into()));
    }
    Ok((body.rating, text))
}

/// Handler for posting a review of a cafe.
#[tracing::instrument(skip(req, data, payload))]
pub async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<request::ReviewBody>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let cafe_id = super::parse_id(&path, "Cafe not found.")?;
    let db = data.db();
    if db.find_cafe_by_id(cafe_id).await?.is_none() {
        return Err(SipsError::NotFound("Cafe not found.".into()));
    }
    let (rating, text) = validate(&payload)?;
    let review = db
        .create_review(
            cafe_id,
            account.id,
            &account.username,
            rating,
            &text,
            &Utc::now().to_rfc3339(),
        )
        .await?;
    tracing::info!(review_id = review.id, cafe_id, "Review posted");
    Ok(HttpResponse::Created().json(review))
}

/// Handler for editing a review. Author only.
#[tracing::instrument(skip(req, data, payload))]
pub async fn edit(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<request::ReviewBody>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let review_id = super::parse_id(&path, "Review not found.")?;
    let db = data.db();
    let Some(review) = db.find_review_by_id(review_id).await? else {
        return Err(SipsError::NotFound("Review not found.".into()));
    };
    if review.user_id != account.id {
        return Err(SipsError::Forbidden(
            "You can only edit your own review.".into(),
        ));
    }
    let (rating, text) = validate(&payload)?;
    db.update_review(review_id, rating, &text).await?;
    let updated = db
        .find_review_by_id(review_id)
        .await?
        .ok_or_else(|| SipsError::NotFound("Review not found.".into()))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Handler for deleting a review. Author only.
#[tracing::instrument(skip(req, data))]
pub async fn delete(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let review_id = super::parse_id(&path, "Review not found.")?;
    let db = data.db();
    let Some(review) = db.find_review_by_id(review_id).await? else {
        return Err(SipsError::NotFound("Review not found.".into()));
    };
    if review.user_id != account.id {
        return Err(SipsError::Forbidden(
            "You can only delete your own review.".into(),
        ));
    }
    db.delete_review(review_id).await?;
    tracing::info!(review_id, "Review deleted");
    Ok(HttpResponse::Ok().json(json!({ "message": "Review deleted." })))
}
