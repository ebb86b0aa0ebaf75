use crate::auth::auth::AuthUser;
use crate::client::auth_client::{AuthClient, AuthClientError};
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use serde_json::json;
use tracing::error;

/// Gateway-pattern authorization for downstream services: the bearer token is
/// forwarded to the auth service validate endpoint on every request instead of
/// being verified locally. An unreachable auth service fails the request with
/// 500; there is no retry and no fallback.
pub async fn remote_auth_middleware(
    mut req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let header_value = match req.headers().get("Authorization") {
        Some(h) => h.to_str().map_err(|_| {
            actix_web::error::ErrorUnauthorized(
                json!({"error": "Invalid Authorization header encoding"}),
            )
        })?,
        None => {
            let resp =
                HttpResponse::Unauthorized().json(json!({"error": "Missing Authorization header"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let token = match header_value.strip_prefix("Bearer ") {
        Some(t) => t.to_owned(),
        None => {
            let resp = HttpResponse::Unauthorized()
                .json(json!({"error": "Authorization header must start with Bearer"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let client = req
        .app_data::<Data<AuthClient>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Auth client missing"))?
        .clone();

    match client.validate(&token).await {
        Ok(validated) => match AuthUser::from_validated(validated) {
            Some(user) => {
                req.extensions_mut().insert(user);
                next.call(req).await
            }
            None => {
                let resp = HttpResponse::Unauthorized().json(json!({"error": "Invalid role"}));
                Ok(req.into_response(resp.map_into_boxed_body()))
            }
        },
        Err(AuthClientError::Unauthorized) => {
            let resp = HttpResponse::Unauthorized()
                .json(json!({"error": "Invalid or expired token"}));
            Ok(req.into_response(resp.map_into_boxed_body()))
        }
        Err(e) => {
            error!(error = %e, "Token validation call failed");
            let resp = HttpResponse::InternalServerError()
                .json(json!({"error": "Authorization service unavailable"}));
            Ok(req.into_response(resp.map_into_boxed_body()))
        }
    }
}
