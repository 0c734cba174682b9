//! Handlers for a user's saved cafes.
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::db::models::cafe::Manager as _;
use crate::db::models::saved_place::Manager as _;
use crate::server::api::auth::require_user;
use crate::server::api::state::{App as AppState, Global as _};
use crate::server::errors::SipsError;

/// Handler for saving a cafe. Saving twice is a no-op.
#[tracing::instrument(skip(req, data))]
pub async fn save(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let cafe_id = super::parse_id(&path, "Cafe not found.")?;
    let db = data.db();
    if db.find_cafe_by_id(cafe_id).await?.is_none() {
        return Err(SipsError::NotFound("Cafe not found.".into()));
    }
    db.save_place(account.id, cafe_id, &Utc::now().to_rfc3339())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Cafe saved." })))
}

/// Handler for removing a cafe from the saved list.
#[tracing::instrument(skip(req, data))]
pub async fn unsave(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let cafe_id = super::parse_id(&path, "Cafe not found.")?;
    data.db().unsave_place(account.id, cafe_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Cafe removed from saved places." })))
}

/// Handler for listing the caller's saved cafes.
#[tracing::instrument(skip(req, data))]
pub async fn list(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let cafes = data.db().find_saved_cafes(account.id).await?;
    Ok(HttpResponse::Ok().json(cafes))
}
