use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, TOKEN__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// The token signing secret has no default and must be non-empty;
    /// loading fails otherwise so the service never signs with an empty
    /// secret.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 3000_i64)?
            .set_default("token.expiration_hours", 24_i64)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.token.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "token.secret must be a non-empty signing secret".to_string(),
            ));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::Mutex;
    use std::sync::MutexGuard;

    use super::Config;

    // Environment variables are process-wide state, so every test that
    // touches them holds this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_load_reads_secret_from_environment() {
        let _guard = lock_env();
        env::set_var("TOKEN__SECRET", "env-signing-secret");
        env::set_var("DATABASE__URL", "postgres://env-host/accounts");

        let result = Config::load();

        env::remove_var("TOKEN__SECRET");
        env::remove_var("DATABASE__URL");

        let config = result.expect("Env-provided secret should load");
        assert_eq!(config.token.secret, "env-signing-secret");
        assert_eq!(config.database.url, "postgres://env-host/accounts");
        assert_eq!(config.server.http_port, 3000);
        assert_eq!(config.token.expiration_hours, 24);
    }

    #[test]
    fn test_load_fails_without_secret() {
        let _guard = lock_env();
        env::remove_var("TOKEN__SECRET");

        let result = Config::load();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_blank_secret() {
        let _guard = lock_env();
        env::set_var("TOKEN__SECRET", "   ");

        let result = Config::load();

        env::remove_var("TOKEN__SECRET");

        let error = result.expect_err("Blank secret should be rejected");
        assert!(error.to_string().contains("non-empty"));
    }
}
