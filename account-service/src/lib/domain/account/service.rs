use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::ports::AccountDirectory;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency
/// injection: the directory and authenticator are constructed at startup
/// and passed in, so tests can substitute fakes.
pub struct AccountService<D>
where
    D: AccountDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<D> AccountService<D>
where
    D: AccountDirectory,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - Account persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl_hours` - Access token lifetime in hours
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            directory,
            authenticator,
            token_ttl_hours,
        }
    }
}

#[async_trait]
impl<D> AccountServicePort for AccountService<D>
where
    D: AccountDirectory,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))?;

        let account = Account {
            id: AccountId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.directory.create(account).await?;

        tracing::info!(account_id = %created.id, "Account registered");

        Ok(created)
    }

    async fn login(&self, credentials: Credentials) -> Result<String, AccountError> {
        // Unknown email and wrong password take the same exit.
        let account = self
            .directory
            .find_by_email(credentials.email.as_str())
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let claims = Claims::new(
            account.name.as_str(),
            account.email.as_str(),
            self.token_ttl_hours,
        );

        let result = self
            .authenticator
            .authenticate(credentials.password.as_str(), &account.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                other => AccountError::Unknown(other.to_string()),
            })?;

        tracing::info!(account_id = %account.id, "Account logged in");

        Ok(result.access_token)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.directory.find_all().await
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.directory
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}
