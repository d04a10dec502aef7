use std::env;
use anyhow::{Context, Result};

/// Atlas cluster host of the production deployment.
const ATLAS_CLUSTER_HOST: &str = "cluster0.l3p6wcn.mongodb.net";

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub database: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mongodb_uri = env::var("MONGODB_URI").ok();

        // Credentials are only required when no full connection string is given.
        let (db_user, db_password) = match &mongodb_uri {
            Some(_) => (env::var("DB_USER").ok(), env::var("DB_PASSWORD").ok()),
            None => (
                Some(env::var("DB_USER").context(
                    "DB_USER environment variable is required (or set MONGODB_URI)",
                )?),
                Some(env::var("DB_PASSWORD").context(
                    "DB_PASSWORD environment variable is required (or set MONGODB_URI)",
                )?),
            ),
        };

        let database = env::var("DB_NAME").unwrap_or_else(|_| "toy-mart".to_string());

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            mongodb_uri,
            db_user,
            db_password,
            database,
            service_port,
            service_host,
        })
    }

    /// Connection string for the document store.
    ///
    /// `MONGODB_URI` wins when set; otherwise the Atlas cluster string is
    /// assembled from the credentials.
    pub fn connection_uri(&self) -> String {
        match &self.mongodb_uri {
            Some(uri) => uri.clone(),
            None => format!(
                "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
                self.db_user.as_deref().unwrap_or_default(),
                self.db_password.as_deref().unwrap_or_default(),
                ATLAS_CLUSTER_HOST,
            ),
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match &self.mongodb_uri {
            Some(_) => tracing::info!("  MongoDB: connection string from MONGODB_URI"),
            None => tracing::info!(
                "  MongoDB: Atlas cluster {} as user {}",
                ATLAS_CLUSTER_HOST,
                self.db_user.as_deref().unwrap_or("<unset>"),
            ),
        }
        tracing::info!("  Database: {}", self.database);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn clear_env_vars() {
        unsafe {
            env::remove_var("MONGODB_URI");
            env::remove_var("DB_USER");
            env::remove_var("DB_PASSWORD");
            env::remove_var("DB_NAME");
            env::remove_var("PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    fn set_credentials() {
        unsafe {
            env::set_var("DB_USER", "test-user");
            env::set_var("DB_PASSWORD", "test-password");
        }
    }

    #[test]
    fn test_config_with_credentials() {
        let _guard = lock_env();
        clear_env_vars();
        set_credentials();

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_user, Some("test-user".to_string()));
        assert_eq!(config.db_password, Some("test-password".to_string()));
        assert_eq!(config.database, "toy-mart");
        assert_eq!(config.service_port, 5000);
        assert_eq!(config.service_host, "0.0.0.0");

        let uri = config.connection_uri();
        assert!(uri.starts_with("mongodb+srv://test-user:test-password@"));
        assert!(uri.contains(ATLAS_CLUSTER_HOST));
        assert!(uri.ends_with("retryWrites=true&w=majority"));
    }

    #[test]
    fn test_config_with_uri_override() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.mongodb_uri, Some("mongodb://localhost:27017".to_string()));
        assert_eq!(config.connection_uri(), "mongodb://localhost:27017");
    }

    #[test]
    fn test_config_with_custom_values() {
        let _guard = lock_env();
        clear_env_vars();
        set_credentials();
        unsafe {
            env::set_var("DB_NAME", "toy-mart-staging");
            env::set_var("PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database, "toy-mart-staging");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_missing_user() {
        let _guard = lock_env();
        clear_env_vars();

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("DB_USER"));
    }

    #[test]
    fn test_missing_password() {
        let _guard = lock_env();
        clear_env_vars();
        unsafe {
            env::set_var("DB_USER", "test-user");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("DB_PASSWORD"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_env();
        clear_env_vars();
        set_credentials();
        unsafe {
            env::set_var("PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = lock_env();
        clear_env_vars();
        set_credentials();
        unsafe {
            env::set_var("PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
