use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AccountName;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::ports::AccountDirectory;

/// Postgres-backed account directory.
///
/// Email uniqueness lives in the `accounts_email_key` constraint, so the
/// race between two simultaneous registrations with the same email is
/// settled by the database and the loser gets `DuplicateEmail`.
pub struct PostgresAccountDirectory {
    pool: PgPool,
}

impl PostgresAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            name: AccountName::new(row.name)?,
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

const SELECT_ACCOUNT: &str =
    "SELECT id, name, email, password_hash, created_at FROM accounts";

#[async_trait]
impl AccountDirectory for PostgresAccountDirectory {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            "INSERT INTO accounts (id, name, email, password_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(account.id.0)
        .bind(account.name.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::DuplicateEmail(account.email.as_str().to_string());
                }
            }
            AccountError::Directory(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_all(&self) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_ACCOUNT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Directory(e.to_string()))?;

        rows.into_iter().map(Account::try_from).collect()
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{} WHERE id = $1", SELECT_ACCOUNT))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccountError::Directory(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{} WHERE email = $1", SELECT_ACCOUNT))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccountError::Directory(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }
}
