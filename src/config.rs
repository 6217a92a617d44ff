//! Runtime configuration.
//!
//! Every setting is a command-line flag with an environment fallback, so the
//! service can be configured the way the world-database deployments always
//! were (`DB_USERNAME`, `DB_PASSWORD`, `DB_HOSTNAME`, `DB_PORT`,
//! `DB_DATABASE`) or with a single `DATABASE_URL`.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Args;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::error::{Error, Result};
use crate::http::SessionSettings;

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Full connection URL; takes precedence over the DB_* parts
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "DB_USERNAME")]
    pub db_username: Option<String>,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    #[arg(long, env = "DB_HOSTNAME", default_value = "localhost")]
    pub db_hostname: String,

    #[arg(long, env = "DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    #[arg(long, env = "DB_DATABASE", default_value = "world")]
    pub db_database: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,

    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:10101")]
    pub bind_addr: SocketAddr,

    /// Days of inactivity before a session expires
    #[arg(long, env = "SESSION_TTL_DAYS", default_value_t = 14)]
    pub session_ttl_days: i64,

    /// Only send the session cookie over HTTPS
    #[arg(long, env = "SESSION_SECURE", default_value_t = false)]
    pub session_secure: bool,

    /// Seconds between sweeps of expired sessions
    #[arg(long, env = "SESSION_CLEANUP_SECS", default_value_t = 3600)]
    pub session_cleanup_secs: u64,

    #[arg(long, env = "BCRYPT_COST", default_value_t = bcrypt::DEFAULT_COST)]
    pub bcrypt_cost: u32,
}

impl Config {
    /// Rejects settings that would only fail later, at request time.
    pub fn validate(&self) -> Result<()> {
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(Error::Config(format!(
                "bcrypt cost must be between 4 and 31, got {}",
                self.bcrypt_cost
            )));
        }
        if self.session_ttl_days <= 0 {
            return Err(Error::Config("session TTL must be at least one day".into()));
        }
        if self.session_cleanup_secs == 0 {
            return Err(Error::Config("session cleanup interval must be positive".into()));
        }
        Ok(())
    }

    /// `DATABASE_URL` if given, otherwise a MySQL URL composed from the DB_* parts.
    ///
    /// Username and password are percent-encoded, so reserved characters in
    /// them cannot shift the host or database segments.
    pub fn database_url(&self) -> Result<String> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }
        let username = self
            .db_username
            .as_deref()
            .ok_or_else(|| Error::Config("DB_USERNAME or DATABASE_URL must be set".into()))?;

        Ok(format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(username),
            urlencoding::encode(&self.db_password),
            self.db_hostname,
            self.db_port,
            self.db_database
        ))
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            ttl: time::Duration::days(self.session_ttl_days),
            secure: self.session_secure,
        }
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.session_cleanup_secs)
    }

    pub async fn connect(&self) -> Result<DatabaseConnection> {
        let url = self.database_url()?;

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(self.db_max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(10 * 60));

        let db = Database::connect(opt).await?;
        info!(host = %self.db_hostname, database = %self.db_database, "connected to database");
        Ok(db)
    }
}
