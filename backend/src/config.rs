use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,
    pub static_dir: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        let environment = load_string("ENVIRONMENT", "development");
        let default_port = match environment.as_str() {
            "staging" => "3100",
            _ => "3000",
        };
        Self {
            database_url: load_string("DATABASE_URL", "tbr.db"),
            port: try_load("PORT", default_port),
            frontend_url: load_string("FRONTEND_URL", "http://localhost:8080"),
            static_dir: load_string("STATIC_DIR", "frontend/dist"),
            environment,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn load_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = load_string(key, default);
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            match default.parse() {
                Ok(value) => value,
                Err(_) => unreachable!("default for {key} must parse"),
            }
        }
    }
}
