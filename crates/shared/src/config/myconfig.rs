use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
}

impl Config {
    /// Reads configuration from the environment. `DATABASE_URL` is required;
    /// `PORT` falls back to 8000, `RUN_MIGRATIONS` to "true" and
    /// `DB_MAX_CONNECTIONS` to 5.
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "true".to_string());

        let run_migrations = parse_flag("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?;

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_max_conn,
        })
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{} must be 'true' or 'false', got '{}'", name, other)),
    }
}
