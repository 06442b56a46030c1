use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::inbound::http::router::AppState;

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<GetAccountResponseData>, ApiError> {
    let account_id =
        AccountId::from_string(&account_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .get_account(&account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

/// Fetched account, password hash excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAccountResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for GetAccountResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name.as_str().to_string(),
            email: account.email.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}
