use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub password_salt: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub health_table: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let password_salt = std::env::var("PASSWORD_SALT").context("PASSWORD_SALT is not set")?;
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v.parse::<u16>().with_context(|| format!("invalid APP_PORT {v:?}"))?,
            Err(_) => 8088,
        };
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let health_table =
            std::env::var("HEALTH_TABLE").unwrap_or_else(|_| "star_war_persons".into());
        anyhow::ensure!(
            is_plain_identifier(&health_table),
            "HEALTH_TABLE must be a plain SQL identifier, got {health_table:?}"
        );

        Ok(Self {
            database_url,
            password_salt,
            host,
            port,
            max_connections,
            health_table,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The health table name is spliced into SQL, so only `[A-Za-z_][A-Za-z0-9_]*` passes.
pub(crate) fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
