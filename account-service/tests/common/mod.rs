use std::sync::Arc;
use std::sync::Mutex;

use account_service::domain::account::errors::AccountError;
use account_service::domain::account::models::Account;
use account_service::domain::account::models::AccountId;
use account_service::domain::account::ports::AccountDirectory;
use account_service::domain::account::ports::AccountServicePort;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenHandler;

const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";

// Minimum bcrypt cost keeps the suite fast.
const TEST_HASH_COST: u32 = 4;

/// Test application that spawns a real server over an in-memory directory
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_handler: TokenHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::with_cost(TEST_SECRET, TEST_HASH_COST));
        let directory = Arc::new(InMemoryDirectory::new());
        let account_service: Arc<dyn AccountServicePort> = Arc::new(AccountService::new(
            directory,
            Arc::clone(&authenticator),
            24,
        ));

        let router = create_router(account_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_handler: TokenHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}

/// In-memory account directory fake.
///
/// Enforces the same email-uniqueness contract as the real directory so
/// the end-to-end suite runs without a database.
pub struct InMemoryDirectory {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AccountDirectory for InMemoryDirectory {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();

        if accounts
            .iter()
            .any(|a| a.email.as_str() == account.email.as_str())
        {
            return Err(AccountError::DuplicateEmail(
                account.email.as_str().to_string(),
            ));
        }

        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_all(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == *id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email.as_str() == email)
            .cloned())
    }
}
