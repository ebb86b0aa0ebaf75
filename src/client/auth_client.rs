use crate::models::{ValidateResponse, ValidatedUser};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthClientError {
    /// Auth service unreachable or the response body unreadable.
    #[error("auth service call failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Auth service answered and rejected the token.
    #[error("token rejected by auth service")]
    Unauthorized,

    /// Auth service answered with something other than 200/401.
    #[error("unexpected auth service response: {0}")]
    UnexpectedStatus(StatusCode),
}

/// HTTP client for the auth service validate endpoint. Every protected
/// request on a downstream service costs one call here; there is no
/// caching and no retry, a dead auth service fails the request.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    validate_url: String,
}

impl AuthClient {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            http,
            validate_url: format!("{}/api/auth/validate", base_url.trim_end_matches('/')),
        })
    }

    /// Resolve a bearer token to the user identity the auth service vouches for.
    pub async fn validate(&self, token: &str) -> Result<ValidatedUser, AuthClientError> {
        let resp = self
            .http
            .get(&self.validate_url)
            .bearer_auth(token)
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                let body: ValidateResponse = resp.json().await?;
                if body.valid {
                    body.user.ok_or(AuthClientError::Unauthorized)
                } else {
                    Err(AuthClientError::Unauthorized)
                }
            }
            StatusCode::UNAUTHORIZED => Err(AuthClientError::Unauthorized),
            status => Err(AuthClientError::UnexpectedStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_is_normalized() {
        let client = AuthClient::new("http://auth.internal:8080/", 2000).unwrap();
        assert_eq!(
            client.validate_url,
            "http://auth.internal:8080/api/auth/validate"
        );

        let client = AuthClient::new("http://auth.internal:8080", 2000).unwrap();
        assert_eq!(
            client.validate_url,
            "http://auth.internal:8080/api/auth/validate"
        );
    }

    #[actix_web::test]
    async fn unreachable_auth_service_is_a_transport_error() {
        // nothing listens on port 1
        let client = AuthClient::new("http://127.0.0.1:1", 500).unwrap();
        match client.validate("some-token").await {
            Err(AuthClientError::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other.map(|u| u.id)),
        }
    }
}
