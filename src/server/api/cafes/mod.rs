//! Handlers for browsing, searching and listing cafes.
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::db::models::cafe::{Manager as _, NewCafe};
use crate::db::models::review::Manager as _;
use crate::server::api::auth::require_user;
use crate::server::api::state::{App as AppState, Global as _};
use crate::server::errors::SipsError;

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Handler for listing every cafe.
#[tracing::instrument(skip(req, data))]
pub async fn list(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, SipsError> {
    require_user(&req, &data).await?;
    let cafes = data.db().find_all_cafes().await?;
    Ok(HttpResponse::Ok().json(cafes))
}

/// Handler for one cafe with its reviews.
#[tracing::instrument(skip(req, data))]
pub async fn detail(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, SipsError> {
    require_user(&req, &data).await?;
    let cafe_id = super::parse_id(&path, "Cafe not found.")?;
    let db = data.db();
    let Some(cafe) = db.find_cafe_by_id(cafe_id).await? else {
        return Err(SipsError::NotFound("Cafe not found.".into()));
    };
    let reviews = db.find_reviews_by_cafe(cafe_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "cafe": cafe, "reviews": reviews })))
}

/// Handler for searching cafes by name.
///
/// A missing or empty query returns an empty list rather than every cafe,
/// matching the original behavior of only searching when a term is given.
#[tracing::instrument(skip(req, data))]
pub async fn search(
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<request::Search>,
) -> Result<HttpResponse, SipsError> {
    require_user(&req, &data).await?;
    let fragment = query.q.as_deref().unwrap_or_default().trim().to_owned();
    if fragment.is_empty() {
        return Ok(HttpResponse::Ok().json(json!([])));
    }
    let cafes = data.db().find_cafes_by_name_fragment(&fragment).await?;
    Ok(HttpResponse::Ok().json(cafes))
}

/// Handler for listing a new cafe. Shop owners only.
#[tracing::instrument(skip(req, data, payload))]
pub async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<NewCafe>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    if !account.is_owner() {
        return Err(SipsError::Forbidden(
            "Only shop owners can list a cafe.".into(),
        ));
    }
    if payload.name.trim().is_empty() {
        return Err(SipsError::Validation("Cafe name is required.".into()));
    }
    let listing = NewCafe {
        name: payload.name.trim().to_owned(),
        address: payload.address.clone(),
        neighborhood: payload.neighborhood.clone(),
        description: payload.description.clone(),
    };
    let cafe = data
        .db()
        .create_cafe(account.id, &listing, &Utc::now().to_rfc3339())
        .await?;
    tracing::info!(cafe_id = cafe.id, owner_id = account.id, "Cafe listed");
    Ok(HttpResponse::Created().json(cafe))
}
