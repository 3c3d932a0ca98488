use actix_web::{web, HttpResponse};
use validator::Validate;

use tp_core::repositories::{CredentialStore, UserRepository};
use tp_core::services::KeyProvider;

use crate::dto::IssueTokenQuery;
use crate::handlers::{handle_domain_error, validation_error_response};

use super::{token_response, AppState};

/// Handler for POST /auth?guid=<subject>
///
/// Issues an access/refresh pair for a subject known to the identity store.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "q0Y1n3...==",
///     "token_type": "Bearer",
///     "expires_in": 300
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing, malformed or unknown subject
/// - 500 Internal Server Error: Key, entropy or storage failure
pub async fn issue_token<K, S, U>(
    state: web::Data<AppState<K, S, U>>,
    query: web::Query<IssueTokenQuery>,
) -> HttpResponse
where
    K: KeyProvider + 'static,
    S: CredentialStore + 'static,
    U: UserRepository + 'static,
{
    if let Err(errors) = query.validate() {
        return validation_error_response(&errors);
    }

    match state.rotation_service.issue(&query.guid).await {
        Ok(pair) => token_response(pair),
        Err(error) => handle_domain_error(error),
    }
}
