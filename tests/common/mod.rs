#![allow(dead_code)]
use actix_http::Request;
use actix_service::Service;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test;
use actix_web::Error;
use serde_json::{json, Value};
use tempfile::TempDir;

use sips::db;
use sips::server::api::state::App as AppState;
use sips::server::app::init_app;
use sips::server::config::Config;

/// Build the full app backed by a throwaway SQLite database inside `td`.
pub async fn initialize_app(
    td: &TempDir,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let db_path = td.path().join("sips.sqlite3");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let database = db::init::connect(&db_url).await.unwrap();
    let state = AppState {
        db: database,
        config: Config {
            port: 5000,
            database_url: db_url,
            secret_key: "test-secret".into(),
        },
    };
    let app = init_app(&state).unwrap();
    test::init_service(app).await
}

pub async fn post_json<S, B>(
    app: &S,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::post().uri(uri).set_json(body);
    if let Some(token) = token {
        req = req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn put_json<S, B>(
    app: &S,
    uri: &str,
    token: Option<&str>,
    body: &Value,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::put().uri(uri).set_json(body);
    if let Some(token) = token {
        req = req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn get<S, B>(app: &S, uri: &str, token: Option<&str>) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(token) = token {
        req = req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn delete<S, B>(app: &S, uri: &str, token: Option<&str>) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::delete().uri(uri);
    if let Some(token) = token {
        req = req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
    }
    test::call_service(app, req.to_request()).await
}

pub async fn body_json<B: MessageBody>(res: ServiceResponse<B>) -> Value {
    test::read_body_json(res).await
}

/// Sign up a fresh account and return its session token.
pub async fn signup<S, B>(app: &S, username: &str, email: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let res = post_json(
        app,
        "/signup",
        None,
        &json!({ "username": username, "email": email, "password": password }),
    )
    .await;
    assert!(res.status().is_success(), "signup failed: {}", res.status());
    let body = body_json(res).await;
    body["token"].as_str().unwrap().to_owned()
}

/// Sign up an account and give it a role.
pub async fn signup_with_role<S, B>(
    app: &S,
    username: &str,
    email: &str,
    role: &str,
) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let token = signup(app, username, email, "espresso").await;
    let res = post_json(app, "/me/role", Some(&token), &json!({ "role": role })).await;
    assert!(res.status().is_success(), "role selection failed");
    token
}

/// List a cafe as the given owner and return its id.
pub async fn create_cafe<S, B>(app: &S, owner_token: &str, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let res = post_json(
        app,
        "/cafes",
        Some(owner_token),
        &json!({ "name": name, "neighborhood": "Greenpoint" }),
    )
    .await;
    assert!(res.status().is_success(), "cafe creation failed");
    let body = body_json(res).await;
    body["id"].as_i64().unwrap()
}
