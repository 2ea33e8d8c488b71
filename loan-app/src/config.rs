//! Environment-driven configuration for the loan payments server.

use std::env;

/// Runtime settings resolved once at startup.
pub struct Config {
    /// Port the loan payments API listens on. `PORT`, default 8080.
    pub port: u16,
    /// Connection string for the payment store. `DATABASE_URL`, required;
    /// selects SQLite or Postgres depending on the enabled adapter.
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {:?}", raw))?,
            Err(_) => 8080,
        };

        let database_url = env::var("DATABASE_URL").map_err(|_| {
            anyhow::anyhow!("DATABASE_URL environment variable is required (payment store)")
        })?;

        Ok(Self { port, database_url })
    }
}
