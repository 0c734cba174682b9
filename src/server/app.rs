//! Serve the Sips API.
#![allow(clippy::exit, clippy::unused_async)]
use crate::db;
use crate::server::api::state::App as AppState;
use crate::server::config::Config;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};

use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;

use crate::server::api::routes;
use crate::server::tracing::SipsRootSpanBuilder;
use tracing_actix_web::TracingLogger;

/// Serve the Sips API.
///
/// # Errors
/// Errors if the server cannot bind its port.
#[actix_web::main]
pub async fn serve(port: u16) -> io::Result<()> {
    let bind = "127.0.0.1";
    let config = Config::load(port);
    let port = config.port;
    tracing::info!("Running the Sips API on http://{bind}:{port}.");

    let database = match db::init::connect(&config.database_url).await {
        Ok(database) => database,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let state = AppState {
        db: database,
        config,
    };

    HttpServer::new(move || {
        init_app(&state).unwrap_or_else(|err| {
            tracing::error!("Unable to initialize app.");
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        })
    })
    .bind((bind, port))?
    .run()
    .await
}

/// Initialize the application and all routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
/// # Errors
/// Will error if unable to initialize the application
pub fn init_app(
    state: &AppState,
) -> anyhow::Result<
    App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = Error,
        >,
    >,
> {
    let app = routes::register_app(
        App::new().wrap(TracingLogger::<SipsRootSpanBuilder>::new()),
        state,
    );
    Ok(app)
}
