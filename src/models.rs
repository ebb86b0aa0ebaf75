use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Deserialize)]
pub struct RegisterReq {
    pub email: String,
    pub password: String,
    pub role_id: u8,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct LoginReqDto {
    pub email: String,
    pub password: String
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: u64,
    pub sub: String,     // email
    pub role: u8,        // role id
    pub exp: usize,
    pub jti: String,

    pub token_type: TokenType,
    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub enum TokenType {
    Access,
    Refresh,
}

/// User identity as resolved by the auth service validate endpoint.
/// Downstream services deserialize this instead of decoding JWTs locally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ValidatedUser {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = 4)]
    pub role_id: u8,
    #[schema(example = 1000, nullable = true)]
    pub employee_id: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateResponse {
    #[schema(example = true)]
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ValidatedUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Invalid or expired token", nullable = true)]
    pub error: Option<String>,
}

impl ValidateResponse {
    pub fn ok(user: ValidatedUser) -> Self {
        Self {
            valid: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            user: None,
            error: Some(error.into()),
        }
    }
}

#[derive(FromRow)]
pub struct RefreshTokenSql {
    pub id: u64,
    pub user_id: u64,
    pub revoked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_response_ok_carries_user() {
        let resp = ValidateResponse::ok(ValidatedUser {
            id: 7,
            email: "jane@company.com".into(),
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            role_id: 4,
            employee_id: Some(1000),
        });

        assert!(resp.valid);
        assert_eq!(resp.user.as_ref().unwrap().id, 7);
        assert!(resp.error.is_none());
    }

    #[test]
    fn validate_response_json_round_trip() {
        let json = r#"{"valid":true,"user":{"id":1,"email":"a@b.c","first_name":"A","last_name":"B","role_id":2,"employee_id":null}}"#;
        let resp: ValidateResponse = serde_json::from_str(json).unwrap();
        assert!(resp.valid);
        assert_eq!(resp.user.unwrap().role_id, 2);
    }

    #[test]
    fn rejected_response_omits_user() {
        let resp = ValidateResponse::rejected("Invalid token");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("\"user\""));
        assert!(json.contains("Invalid token"));
    }
}
