use crate::error::{AppError, Result};
use std::{env, str::FromStr};

const TOKEN_TTL_DAYS: std::ops::RangeInclusive<i64> = 1..=3650;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::ConfigError(format!(
                "Invalid STORE_BACKEND value: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    /// Only required for the postgres backend.
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend: StoreBackend = var_or("STORE_BACKEND", "postgres").parse()?;
        let url = lookup("DB_URL");
        if backend == StoreBackend::Postgres && url.is_none() {
            return Err(AppError::ConfigError(
                "DB_URL is required for the postgres backend".to_string(),
            ));
        }

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("JWT_SECRET not set".to_string()))?;

        let bcrypt_cost: u32 = parse_var("BCRYPT_COST", &var_or("BCRYPT_COST", "12"))?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(AppError::ConfigError(
                "BCRYPT_COST must be between 4 and 31".to_string(),
            ));
        }

        let token_ttl_days: i64 = parse_var("JWT_EXPIRY_DAYS", &var_or("JWT_EXPIRY_DAYS", "30"))?;
        if !TOKEN_TTL_DAYS.contains(&token_ttl_days) {
            return Err(AppError::ConfigError(
                "JWT_EXPIRY_DAYS must be between 1 and 3650".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: parse_var("PORT", &var_or("PORT", "3000"))?,
                max_body_size: parse_var("MAX_BODY_SIZE", &var_or("MAX_BODY_SIZE", "1048576"))?,
            },
            database: DatabaseConfig {
                backend,
                url,
                max_connections: parse_var(
                    "DB_MAX_CONNECTIONS",
                    &var_or("DB_MAX_CONNECTIONS", "20"),
                )?,
            },
            cors: CorsConfig {
                allowed_origins: var_or("FRONTEND_URL", "http://localhost:3000")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            auth: AuthConfig {
                jwt_secret,
                token_ttl_days,
                bcrypt_cost,
            },
            catalog: CatalogConfig {
                seed_sample_data: parse_flag(&var_or("SEED_CATALOG", "false"))?,
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key)))
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::ConfigError("Invalid SEED_CATALOG value".to_string())),
    }
}
