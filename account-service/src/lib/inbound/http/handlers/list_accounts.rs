use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Account;
use crate::inbound::http::router::AppState;

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AccountListItem>>, ApiError> {
    state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::from)
        .map(|accounts| {
            let items: Vec<AccountListItem> = accounts.iter().map(AccountListItem::from).collect();
            ApiSuccess::new(StatusCode::OK, items)
        })
}

/// Listed account, password hash excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountListItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountListItem {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name.as_str().to_string(),
            email: account.email.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}
