use std::env;

use derive_more::Display;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Display, PartialEq)]
pub enum SettingsError {
    #[display(fmt = "{} must be set", _0)]
    Missing(&'static str),
}

#[derive(Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_address: String,
}

impl Settings {
    pub fn from_env() -> Result<Settings, SettingsError> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Settings, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::Missing("DATABASE_URL"))?;
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Settings {
            database_url,
            bind_address,
        })
    }
}
