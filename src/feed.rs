use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::Config;
use crate::error::{BbwError, Result};

/// Newest first; index 0 is the most recent writeup.
pub type WriteupFeed = Vec<Writeup>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Writeup {
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<WriteupLink>,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub programs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bugs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bounty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub added_date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct WriteupLink {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

impl Writeup {
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|l| l.title.as_str())
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|l| l.link.as_str())
    }
}

#[derive(Deserialize)]
struct WriteupList {
    #[serde(deserialize_with = "null_as_default")]
    data: WriteupFeed,
}

// Older caches store empty lists as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn decode_feed(body: &str) -> Result<WriteupFeed> {
    let list: WriteupList = serde_json::from_str(body).map_err(BbwError::Decode)?;
    Ok(list.data)
}

pub struct FeedClient {
    client: Client,
    url: Url,
}

impl FeedClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            url: config.feed_url.clone(),
        })
    }

    pub fn fetch(&self) -> Result<WriteupFeed> {
        info!("Fetching writeups from {}", self.url);
        let body = self
            .client
            .get(self.url.clone())
            .send()?
            .error_for_status()?
            .text()?;
        let feed = decode_feed(&body)?;
        debug!("Fetched {} writeups", feed.len());
        Ok(feed)
    }
}
