//! Application factory
//!
//! Builds the actix-web application from shared state.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use tp_core::repositories::{CredentialStore, UserRepository};
use tp_core::services::KeyProvider;
use tp_shared::{error_codes, ErrorResponse};

use crate::handlers::extractor_error;
use crate::routes::auth::{issue::issue_token, refresh::refresh_token, AppState};
use crate::routes::health::health_check;

/// Create and configure the application with all dependencies
///
/// `json_limit` bounds request bodies in bytes.
pub fn create_app<K, S, U>(
    app_state: web::Data<AppState<K, S, U>>,
    json_limit: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    K: KeyProvider + 'static,
    S: CredentialStore + 'static,
    U: UserRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(|err, _req| extractor_error(err)),
        )
        .app_data(web::QueryConfig::default().error_handler(|err, _req| extractor_error(err)))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/auth", web::post().to(issue_token::<K, S, U>))
        .route("/refresh", web::post().to(refresh_token::<K, S, U>))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
