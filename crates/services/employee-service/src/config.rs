//! Employee service configuration.

use std::env;

use common::{DatabaseConfig, PasswordHashConfig};

/// Employee service configuration.
#[derive(Debug, Clone, Default)]
pub struct EmployeeServiceConfig {
    pub database: DatabaseConfig,
    /// Work factor for newly hashed passwords
    pub password_hash: PasswordHashConfig,
}

impl EmployeeServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("EMPLOYEE_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            password_hash: PasswordHashConfig {
                memory_kib: parse_var("PASSWORD_HASH_MEMORY_KIB")
                    .unwrap_or(defaults.password_hash.memory_kib),
                iterations: parse_var("PASSWORD_HASH_ITERATIONS")
                    .unwrap_or(defaults.password_hash.iterations),
                parallelism: parse_var("PASSWORD_HASH_PARALLELISM")
                    .unwrap_or(defaults.password_hash.parallelism),
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
