use actix_web::{web, HttpResponse};
use validator::Validate;

use tp_core::repositories::{CredentialStore, UserRepository};
use tp_core::services::KeyProvider;

use crate::dto::RefreshTokenRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

use super::{token_response, AppState};

/// Handler for POST /refresh
///
/// Exchanges the current pair for a new one. The presented refresh token is
/// invalidated on success.
///
/// # Request Body
///
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "q0Y1n3...=="
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing fields
/// - 401 Unauthorized: Either token rejected (one generic message)
/// - 500 Internal Server Error: Key, entropy or storage failure
pub async fn refresh_token<K, S, U>(
    state: web::Data<AppState<K, S, U>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    K: KeyProvider + 'static,
    S: CredentialStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .rotation_service
        .rotate(&request.access_token, &request.refresh_token)
        .await
    {
        Ok(pair) => token_response(pair),
        Err(error) => handle_domain_error(error),
    }
}
