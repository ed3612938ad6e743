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
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    /// Base64-encoded symmetric signing key
    pub key: String,
    #[serde(default = "JwtConfig::default_expiration_days")]
    pub expiration_days: i64,
}

impl JwtConfig {
    const MAX_EXPIRATION_DAYS: i64 = 365;

    fn default_expiration_days() -> i64 {
        auth::TokenService::DEFAULT_LIFETIME_DAYS
    }

    /// Token lifetime, checked to lie between one day and a year.
    ///
    /// # Errors
    /// * `Message` - `expiration_days` is out of range
    pub fn token_lifetime(&self) -> Result<chrono::Duration, ConfigError> {
        if !(1..=Self::MAX_EXPIRATION_DAYS).contains(&self.expiration_days) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_days must be between 1 and {}, got {}",
                Self::MAX_EXPIRATION_DAYS,
                self.expiration_days
            )));
        }

        Ok(chrono::Duration::days(self.expiration_days))
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("key", &"[redacted]")
            .field("expiration_days", &self.expiration_days)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__KEY=... overrides jwt.key
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(expiration_days: i64) -> JwtConfig {
        JwtConfig {
            key: String::new(),
            expiration_days,
        }
    }

    #[test]
    fn test_environment_overrides_files() {
        env::set_var("JWT__KEY", "from-env");
        env::set_var("DATABASE__URL", "postgres://env");
        env::set_var("SERVER__HTTP_PORT", "9999");

        let config = Config::load();

        env::remove_var("JWT__KEY");
        env::remove_var("DATABASE__URL");
        env::remove_var("SERVER__HTTP_PORT");

        let config = config.expect("Failed to load configuration");
        assert_eq!(config.jwt.key, "from-env");
        assert_eq!(config.database.url, "postgres://env");
        assert_eq!(config.server.http_port, 9999);
        assert_eq!(config.jwt.expiration_days, 7);
    }

    #[test]
    fn test_token_lifetime_range() {
        assert_eq!(
            jwt_config(7).token_lifetime().unwrap(),
            chrono::Duration::days(7)
        );
        assert!(jwt_config(365).token_lifetime().is_ok());

        for days in [0, -1, 366, 1_000_000_000, i64::MAX] {
            assert!(matches!(
                jwt_config(days).token_lifetime(),
                Err(ConfigError::Message(_))
            ));
        }
    }

    #[test]
    fn test_jwt_config_debug_redacts_key() {
        let config = JwtConfig {
            key: "c2VjcmV0".to_string(),
            expiration_days: 7,
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("c2VjcmV0"));
        assert!(debug.contains("expiration_days: 7"));
    }
}
