use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_STORE_PATH: &str = "reminders.json";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// Where the reminder store document lives.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("remind.toml"))
            .merge(Env::prefixed("REMIND_"))
            .extract()
    }

    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }
}
