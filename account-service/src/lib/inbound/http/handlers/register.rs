use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::ValidationFailures;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountName;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Password;
use crate::domain::account::models::RegisterAccountCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    state
        .account_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    /// Validate every field, collecting all violations before failing.
    fn try_into_command(self) -> Result<RegisterAccountCommand, ValidationFailures> {
        let mut violations = Vec::new();

        let name = AccountName::new(self.name)
            .map_err(|e| violations.push(e.to_string()))
            .ok();
        let email = EmailAddress::new(self.email)
            .map_err(|e| violations.push(e.to_string()))
            .ok();
        let password = Password::new(self.password)
            .map_err(|e| violations.push(e.to_string()))
            .ok();

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) => {
                Ok(RegisterAccountCommand::new(name, email, password))
            }
            _ => Err(ValidationFailures(violations)),
        }
    }
}

/// Created account, password hash excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for RegisterResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name.as_str().to_string(),
            email: account.email.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_parses() {
        let command = request("Ana", "ana@x.com", "secret1")
            .try_into_command()
            .expect("Expected valid command");

        assert_eq!(command.name.as_str(), "Ana");
        assert_eq!(command.email.as_str(), "ana@x.com");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let result = request("", "not-an-email", "abc").try_into_command();

        let failures = result.expect_err("Expected validation failures");
        assert_eq!(failures.0.len(), 3);
        assert!(failures.0.iter().any(|v| v.contains("name")));
        assert!(failures.0.iter().any(|v| v.contains("email")));
        assert!(failures.0.iter().any(|v| v.contains("password")));
    }

    #[test]
    fn test_single_violation() {
        let result = request("Ana", "ana@x.com", "abc").try_into_command();

        let failures = result.expect_err("Expected validation failures");
        assert_eq!(failures.0.len(), 1);
        assert!(failures.0[0].contains("at least 6 characters"));
    }
}
