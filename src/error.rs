use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BbwError>;

#[derive(Debug, Error)]
pub enum BbwError {
    #[error("failed to fetch writeup feed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode writeup feed: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("writeup feed is empty")]
    EmptyFeed,

    #[error("can't resolve the home directory")]
    HomeDirUnavailable,

    #[error("cache I/O failed for {}: {source}", path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache file {} is malformed: {source}", path.display())]
    CacheDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode cache record: {0}")]
    CacheEncode(#[source] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to load config: {0}")]
    Config(#[from] envy::Error),
}
