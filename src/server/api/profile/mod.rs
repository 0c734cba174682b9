//! Handlers for the caller's own profile.
use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::models::user::{Manager as _, Profile};
use crate::server::api::auth::require_user;
use crate::server::api::state::{App as AppState, Global as _};
use crate::server::errors::SipsError;

/// Handler for reading the caller's profile.
#[tracing::instrument(skip(req, data))]
pub async fn me(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    Ok(HttpResponse::Ok().json(account))
}

/// Handler for updating the caller's profile.
///
/// Everyone may change their username and phone. The shop fields are only
/// applied when the caller is an owner; for customers they are ignored.
#[tracing::instrument(skip(req, data, payload))]
pub async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<Profile>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let username = payload.username.trim().to_owned();
    if username.is_empty() {
        return Err(SipsError::Validation("Username is required.".into()));
    }
    let db = data.db();
    if let Some(taken) = db.find_user_by_username(&username).await? {
        if taken.id != account.id {
            return Err(SipsError::Conflict("That username is already taken.".into()));
        }
    }
    let (shop_location, operation_hours) = if account.is_owner() {
        (
            payload.shop_location.clone(),
            payload.operation_hours.clone(),
        )
    } else {
        (None, None)
    };
    let profile = Profile {
        username,
        phone: payload.phone.clone(),
        shop_location,
        operation_hours,
    };
    db.update_user_profile(account.id, &profile).await?;
    let updated = db
        .find_user_by_id(account.id)
        .await?
        .ok_or_else(|| SipsError::NotFound("User not found.".into()))?;
    tracing::info!(user_id = account.id, "Profile updated");
    Ok(HttpResponse::Ok().json(updated))
}
