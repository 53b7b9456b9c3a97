use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // mode=rwc creates the database file on first run
        let database_url = env_or("DATABASE_URL", "sqlite:formbox.db?mode=rwc");

        let host: IpAddr = env_or("FORMBOX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMBOX_HOST: {e}"))?;

        let port: u16 = env_or("FORMBOX_PORT", "5298")
            .parse()
            .map_err(|e| format!("Invalid FORMBOX_PORT: {e}"))?;

        let max_body_size: usize = env_or("FORMBOX_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FORMBOX_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMBOX_LOG_LEVEL", "info");

        let static_dir = env_or("FORMBOX_STATIC_DIR", "static");

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            log_level,
            static_dir,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
