use std::path::PathBuf;

use reqwest::Url;
use serde::Deserialize;

use crate::error::{BbwError, Result};

const CACHE_FILENAME: &str = ".bbwgo.json";

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: Url,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Overrides `~/.bbwgo.json`.
    pub cache_path: Option<PathBuf>,
}

fn default_feed_url() -> Url {
    Url::parse("https://pentester.land/writeups.json").expect("static feed url is valid")
}

fn default_user_agent() -> String {
    concat!("bbw/", env!("CARGO_PKG_VERSION")).into()
}

impl Config {
    /// Reads `BBW_*` variables from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed("BBW_").from_env::<Self>()?)
    }

    pub fn cache_path(&self) -> Result<PathBuf> {
        match &self.cache_path {
            Some(path) => Ok(path.clone()),
            None => {
                let home = std::env::home_dir().ok_or(BbwError::HomeDirUnavailable)?;
                Ok(home.join(CACHE_FILENAME))
            }
        }
    }
}
