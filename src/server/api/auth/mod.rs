//! Handlers for signing up, logging in and out, and picking a role.
//!
//! Sessions are bearer tokens: handed out at signup/login, presented back
//! either as an `Authorization: Bearer` header or as the `sips_session`
//! cookie, and stored server-side as a keyed hash.
use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use rand::RngCore as _;
use serde_json::json;
use sha2::{Digest as _, Sha256};

use crate::db::models::session::Manager as _;
use crate::db::models::user::{Manager as _, User, ROLE_CUSTOMER, ROLE_OWNER};
use crate::server::api::state::{App as AppState, Global as _};
use crate::server::errors::SipsError;
use crate::utils::passwords;

/// Module that maps the HTTP web request body to structs.
pub mod request;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sips_session";
/// Length of session tokens in bytes, before encoding.
const TOKEN_LEN: usize = 32;

/// Handler for the signup endpoint.
///
/// Validation follows the original form checks, in order: username, email
/// and password present, password at least 6 characters, then uniqueness
/// of email and username. The new account starts without a role and is
/// logged in immediately.
#[tracing::instrument(skip(data, payload))]
pub async fn signup(
    data: web::Data<AppState>,
    payload: web::Json<request::Signup>,
) -> Result<HttpResponse, SipsError> {
    let username = payload.username.trim().to_owned();
    let email = payload.email.trim().to_lowercase();
    let password = payload.password.clone();

    if username.is_empty() {
        return Err(SipsError::Validation("Username is required.".into()));
    }
    if email.is_empty() {
        return Err(SipsError::Validation("Email is required.".into()));
    }
    if password.is_empty() {
        return Err(SipsError::Validation("Password is required.".into()));
    }
    if password.len() < 6 {
        return Err(SipsError::Validation(
            "Password must be at least 6 characters.".into(),
        ));
    }
    let db = data.db();
    if db.find_user_by_email(&email).await?.is_some() {
        return Err(SipsError::Conflict(
            "An account with that email already exists.".into(),
        ));
    }
    if db.find_user_by_username(&username).await?.is_some() {
        return Err(SipsError::Conflict("That username is already taken.".into()));
    }

    let password_hash = passwords::hash_password(&password);
    let created_at = Utc::now().to_rfc3339();
    let new_user = db
        .create_user(&username, &email, &password_hash, &created_at)
        .await?;
    tracing::info!(user_id = new_user.id, "New account created");

    let token = open_session(&data, new_user.id).await?;
    Ok(session_response(&token, &new_user, true))
}

/// Handler for the login endpoint.
///
/// Unknown email and wrong password produce the same generic error, so
/// the endpoint does not reveal which addresses are registered.
#[tracing::instrument(skip(data, payload))]
pub async fn login(
    data: web::Data<AppState>,
    payload: web::Json<request::Login>,
) -> Result<HttpResponse, SipsError> {
    let email = payload.email.trim().to_lowercase();

    let found = data.db().find_user_by_email(&email).await?;
    let verified = found
        .filter(|account| passwords::verify_password(&account.password_hash, &payload.password));
    let Some(account) = verified else {
        return Err(SipsError::Unauthorized("Invalid email or password.".into()));
    };

    let token = open_session(&data, account.id).await?;
    tracing::info!(user_id = account.id, "Logged in");
    Ok(session_response(&token, &account, false))
}

/// Handler for the logout endpoint. Deletes the presented session.
///
/// A token that does not name a live session is rejected, the same as on
/// any other protected route.
#[tracing::instrument(skip(req, data))]
pub async fn logout(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, SipsError> {
    let token = bearer_token(&req)
        .ok_or_else(|| SipsError::Unauthorized("Please log in to access that page.".into()))?;
    let hash = token_hash(&data.config().secret_key, &token);
    let db = data.db();
    if db.find_session_by_token_hash(&hash).await?.is_none() {
        return Err(SipsError::Unauthorized(
            "Please log in to access that page.".into(),
        ));
    }
    db.delete_session_by_token_hash(&hash).await?;

    let mut expired = Cookie::new(SESSION_COOKIE, "");
    expired.set_path("/");
    expired.make_removal();
    let mut response = HttpResponse::Ok().json(json!({ "message": "You've been logged out." }));
    response
        .add_cookie(&expired)
        .map_err(|err| SipsError::Internal(anyhow::anyhow!("{err}")))?;
    Ok(response)
}

/// Handler for picking the account role right after signup.
#[tracing::instrument(skip(req, data, payload))]
pub async fn select_role(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<request::RoleSelection>,
) -> Result<HttpResponse, SipsError> {
    let account = require_user(&req, &data).await?;
    let role = payload.role.as_str();
    if role != ROLE_CUSTOMER && role != ROLE_OWNER {
        return Err(SipsError::Validation(
            "Role must be customer or owner.".into(),
        ));
    }
    let db = data.db();
    db.update_user_set_role(account.id, role).await?;
    let updated = db
        .find_user_by_id(account.id)
        .await?
        .ok_or_else(|| SipsError::NotFound("User not found.".into()))?;
    tracing::info!(user_id = account.id, role, "Role selected");
    Ok(HttpResponse::Ok().json(updated))
}

/// Resolve the caller's account from the presented session token.
///
/// # Errors
/// `Unauthorized` when no token is presented or the session is unknown.
pub async fn require_user(req: &HttpRequest, data: &AppState) -> Result<User, SipsError> {
    let token = bearer_token(req)
        .ok_or_else(|| SipsError::Unauthorized("Please log in to access that page.".into()))?;
    let hash = token_hash(&data.config().secret_key, &token);
    let found = data.db().find_session_by_token_hash(&hash).await?;
    let Some(open_session) = found else {
        return Err(SipsError::Unauthorized(
            "Please log in to access that page.".into(),
        ));
    };
    data.db()
        .find_user_by_id(open_session.user_id)
        .await?
        .ok_or_else(|| SipsError::Unauthorized("Please log in to access that page.".into()))
}

/// Mint a token and record the session for a user.
async fn open_session(data: &AppState, user_id: i64) -> Result<String, SipsError> {
    let mut raw = [0_u8; TOKEN_LEN];
    rand::thread_rng().fill_bytes(&mut raw);
    let token = URL_SAFE_NO_PAD.encode(raw);
    let hash = token_hash(&data.config().secret_key, &token);
    data.db()
        .create_session(user_id, &hash, &Utc::now().to_rfc3339())
        .await?;
    Ok(token)
}

/// Build the signup/login response: token and account as JSON, plus the
/// session cookie for browser callers.
fn session_response(token: &str, account: &User, created: bool) -> HttpResponse {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_owned());
    cookie.set_path("/");
    cookie.set_http_only(true);
    let mut builder = if created {
        HttpResponse::Created()
    } else {
        HttpResponse::Ok()
    };
    builder
        .cookie(cookie)
        .json(json!({ "token": token, "user": account }))
}

/// Pull the session token out of the `Authorization` header or the
/// session cookie, in that order.
fn bearer_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);
    from_header.or_else(|| req.cookie(SESSION_COOKIE).map(|cookie| cookie.value().to_owned()))
}

/// Keyed hash of a session token, as stored in the session table.
fn token_hash(secret: &str, token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(token.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}
