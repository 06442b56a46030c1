use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::RegisterAccountCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with validated fields.
    ///
    /// Hashes the password before the account is written; the raw
    /// password is dropped here and never stored.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Directory` - Directory operation failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Returns
    /// Signed access token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, deliberately
    ///   indistinguishable
    /// * `Directory` - Directory operation failed
    async fn login(&self, credentials: Credentials) -> Result<String, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `Directory` - Directory operation failed
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError>;

    /// Retrieve an account by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `Directory` - Directory operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// The directory owns uniqueness enforcement: two concurrent
/// registrations with the same email race at the storage layer, and the
/// loser surfaces as `DuplicateEmail`.
#[async_trait]
pub trait AccountDirectory: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Directory` - Directory operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `Directory` - Directory operation failed
    async fn find_all(&self) -> Result<Vec<Account>, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `Directory` - Directory operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by email address.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `Directory` - Directory operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
