//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse, Responder,
};
use serde_json::json;

use crate::server::api::state::App as AppState;

use super::{auth, cafes, profile, reviews, saved};

/// Central place to register all the App routing.
///
/// Everything except `/`, `/signup` and `/login` requires a session.
#[tracing::instrument(skip(app, state))]
pub fn register_app<T, U>(app: App<U>, state: &AppState) -> App<U>
where
    T: MessageBody,
    U: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<T>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
{
    app.app_data(web::Data::new(state.clone()))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/signup").route(web::post().to(auth::signup)))
        .service(web::resource("/login").route(web::post().to(auth::login)))
        .service(web::resource("/logout").route(web::post().to(auth::logout)))
        .service(
            web::scope("/me")
                .service(
                    web::resource("")
                        .route(web::get().to(profile::me))
                        .route(web::put().to(profile::update)),
                )
                .service(web::resource("/role").route(web::post().to(auth::select_role))),
        )
        .service(web::resource("/search").route(web::get().to(cafes::search)))
        .service(web::resource("/saved").route(web::get().to(saved::list)))
        .service(
            web::scope("/cafes")
                .service(
                    web::resource("")
                        .route(web::get().to(cafes::list))
                        .route(web::post().to(cafes::create)),
                )
                .service(web::resource("/{cafe_id}").route(web::get().to(cafes::detail)))
                .service(
                    web::resource("/{cafe_id}/reviews").route(web::post().to(reviews::create)),
                )
                .service(
                    web::resource("/{cafe_id}/save")
                        .route(web::post().to(saved::save))
                        .route(web::delete().to(saved::unsave)),
                ),
        )
        .service(
            web::scope("/reviews").service(
                web::resource("/{review_id}")
                    .route(web::put().to(reviews::edit))
                    .route(web::delete().to(reviews::delete)),
            ),
        )
}

/// Handler for the service root. Doubles as a liveness probe.
#[allow(clippy::unused_async)]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": "sips",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
