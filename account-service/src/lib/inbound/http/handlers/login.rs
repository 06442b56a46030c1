use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ValidationFailures;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Password;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let credentials = body.try_into_credentials()?;

    let token = state
        .account_service
        .login(credentials)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Validate every field, collecting all violations before failing.
    fn try_into_credentials(self) -> Result<Credentials, ValidationFailures> {
        let mut violations = Vec::new();

        let email = EmailAddress::new(self.email)
            .map_err(|e| violations.push(e.to_string()))
            .ok();
        let password = Password::new(self.password)
            .map_err(|e| violations.push(e.to_string()))
            .ok();

        match (email, password) {
            (Some(email), Some(password)) => Ok(Credentials::new(email, password)),
            _ => Err(ValidationFailures(violations)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_parses() {
        let request = LoginRequest {
            email: "ana@x.com".to_string(),
            password: "secret1".to_string(),
        };

        let credentials = request
            .try_into_credentials()
            .expect("Expected valid credentials");
        assert_eq!(credentials.email.as_str(), "ana@x.com");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let request = LoginRequest {
            email: "nope".to_string(),
            password: "abc".to_string(),
        };

        let failures = request
            .try_into_credentials()
            .expect_err("Expected validation failures");
        assert_eq!(failures.0.len(), 2);
    }
}
