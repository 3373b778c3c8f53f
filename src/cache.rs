use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{BbwError, Result};
use crate::feed::Writeup;

/// Holds the single most recent writeup seen by a previous run.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` means there is no cache yet, i.e. this is the first run.
    pub fn load(&self) -> Result<Option<Writeup>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No cache at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(BbwError::CacheIo {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let writeup = serde_json::from_str(&data).map_err(|source| BbwError::CacheDecode {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(writeup))
    }

    pub fn save(&self, writeup: &Writeup) -> Result<()> {
        let raw = serde_json::to_vec(writeup).map_err(BbwError::CacheEncode)?;
        std::fs::write(&self.path, raw).map_err(|source| BbwError::CacheIo {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved latest writeup to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::WriteupLink;
    use crate::signature::is_same;
    use tempfile::TempDir;

    fn writeup() -> Writeup {
        Writeup {
            links: vec![WriteupLink {
                title: "Account takeover via OAuth".into(),
                link: "https://example.com/ato".into(),
            }],
            authors: vec!["dave".into()],
            programs: vec!["Acme".into()],
            bugs: vec!["OAuth".into(), "ATO".into()],
            bounty: "$3,000".into(),
            publication_date: "2024-05-01".into(),
            added_date: "2024-05-02".into(),
        }
    }

    #[test]
    fn missing_file_is_first_run() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join(".bbwgo.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join(".bbwgo.json"));
        store.save(&writeup()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, writeup());
        assert!(is_same(&loaded, &writeup()));
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join(".bbwgo.json"));
        store.save(&writeup()).unwrap();

        let newer = Writeup {
            publication_date: "2024-05-09".into(),
            ..writeup()
        };
        store.save(&newer).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), newer);
    }

    #[test]
    fn uses_pascal_case_field_names() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join(".bbwgo.json"));
        store.save(&writeup()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with(r#"{"Links":[{"Title":"Account takeover via OAuth","#));
        assert!(raw.contains(r#""PublicationDate":"2024-05-01""#));
    }

    #[test]
    fn loads_record_with_null_lists() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join(".bbwgo.json"));
        std::fs::write(
            store.path(),
            r#"{"Links":[{"Title":"t","Link":"l"}],"Authors":null,"Programs":null,"Bugs":null,"Bounty":"","PublicationDate":"2023-12-31","AddedDate":""}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.authors.is_empty());
        assert_eq!(loaded.publication_date, "2023-12-31");
    }

    #[test]
    fn malformed_cache_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join(".bbwgo.json"));
        std::fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(BbwError::CacheDecode { .. })));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory can't be read as a file.
        let store = CacheStore::new(dir.path());
        assert!(matches!(store.load(), Err(BbwError::CacheIo { .. })));
        assert!(matches!(
            store.save(&writeup()),
            Err(BbwError::CacheIo { .. })
        ));
    }
}
