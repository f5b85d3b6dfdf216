//! Flat-file user store
//!
//! The whole user map lives in memory and is rewritten to a single JSON file
//! on every mutation. Handlers for different chats run concurrently, so every
//! load-mutate-save sequence happens under one lock.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::error::AppResult;

/// One stored message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEntry {
    pub text: String,
    pub time: String,
}

/// Per-user history and join timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub queries: Vec<QueryEntry>,
    #[serde(default = "unknown_joined")]
    pub joined: String,
}

fn unknown_joined() -> String {
    "Unknown".to_string()
}

impl UserRecord {
    /// Fresh record with no queries
    pub fn new(joined: impl Into<String>) -> Self {
        Self {
            queries: Vec::new(),
            joined: joined.into(),
        }
    }

    /// Join date as `YYYY-MM-DD` (the first 10 characters of the timestamp)
    pub fn joined_date(&self) -> &str {
        match self.joined.char_indices().nth(10) {
            Some((idx, _)) => &self.joined[..idx],
            None => &self.joined,
        }
    }
}

/// User id → record. Ordered so that serialization is deterministic.
pub type Store = BTreeMap<String, UserRecord>;

/// Formats an instant the way records store it: `YYYY-MM-DD HH:MM:SS.ffffff`
pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Reads the store from disk.
///
/// A missing or malformed file yields an empty store; this never fails.
pub fn load(path: &Path) -> Store {
    let raw = match fs_err::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("User store {} not found, starting empty", path.display());
            return Store::new();
        }
        Err(e) => {
            log::warn!("Failed to read user store, starting empty: {}", e);
            return Store::new();
        }
    };

    match serde_json::from_str::<Store>(&raw) {
        Ok(store) => store,
        Err(e) => {
            log::warn!("User store {} is malformed, starting empty: {}", path.display(), e);
            Store::new()
        }
    }
}

/// Rewrites the whole store file.
///
/// Data goes to a sibling `.tmp` file first and is then renamed over the
/// target, so a crash mid-write leaves the previous contents intact.
pub fn save(path: &Path, store: &Store) -> AppResult<()> {
    let json = serde_json::to_string_pretty(store)?;
    let tmp = temp_path(path);
    fs_err::write(&tmp, json)?;
    fs_err::rename(&tmp, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Owned, file-backed user store
///
/// All mutation goes through [`UserStore::record_query`],
/// [`UserStore::ensure_user`] and [`UserStore::clear_queries`].
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: Mutex<Store>,
}

impl UserStore {
    /// Loads the store at `path` (empty if absent or malformed)
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let users = load(&path);
        log::info!("Loaded {} user record(s) from {}", users.len(), path.display());
        Self {
            path,
            users: Mutex::new(users),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a query for `user_id`, creating the record with `joined = time`
    /// if needed, then persists the whole store.
    pub fn record_query(&self, user_id: &str, text: &str, time: &str) -> AppResult<()> {
        let mut users = self.users.lock();
        users
            .entry(user_id.to_string())
            .or_insert_with(|| UserRecord::new(time))
            .queries
            .push(QueryEntry {
                text: text.to_string(),
                time: time.to_string(),
            });
        save(&self.path, &users)
    }

    /// Creates an empty record for `user_id` if there is none.
    ///
    /// Returns `true` when a record was created.
    pub fn ensure_user(&self, user_id: &str, joined: &str) -> AppResult<bool> {
        let mut users = self.users.lock();
        if users.contains_key(user_id) {
            return Ok(false);
        }
        users.insert(user_id.to_string(), UserRecord::new(joined));
        save(&self.path, &users)?;
        Ok(true)
    }

    /// Empties the query history of an existing user and persists.
    ///
    /// Unknown users are left alone; returns whether a record existed.
    pub fn clear_queries(&self, user_id: &str) -> AppResult<bool> {
        let mut users = self.users.lock();
        match users.get_mut(user_id) {
            Some(record) => {
                record.queries.clear();
                save(&self.path, &users)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Copy of a user's record
    pub fn snapshot(&self, user_id: &str) -> Option<UserRecord> {
        self.users.lock().get(user_id).cloned()
    }

    /// Number of stored queries (0 for unknown users)
    pub fn query_count(&self, user_id: &str) -> usize {
        self.users.lock().get(user_id).map_or(0, |r| r.queries.len())
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> UserStore {
        UserStore::open(dir.path().join("user_data.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_record_query_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for i in 0..5 {
            store
                .record_query("42", &format!("q{}", i), &format!("2024-01-0{} 10:00:00.000000", i + 1))
                .unwrap();
        }

        let record = store.snapshot("42").unwrap();
        assert_eq!(record.queries.len(), 5);
        let texts: Vec<&str> = record.queries.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["q0", "q1", "q2", "q3", "q4"]);
        assert_eq!(record.joined, "2024-01-01 10:00:00.000000");
    }

    #[test]
    fn test_record_query_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.record_query("7", "hello", "2024-05-01 09:00:00.000000").unwrap();

        let reloaded = load(store.path());
        assert_eq!(reloaded["7"].queries[0].text, "hello");
        assert!(!temp_path(store.path()).exists());
    }

    #[test]
    fn test_clear_queries_resets_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.record_query("1", "a", "2024-01-01 00:00:00.000000").unwrap();
        store.record_query("1", "b", "2024-01-01 00:00:01.000000").unwrap();

        assert!(store.clear_queries("1").unwrap());
        assert_eq!(store.query_count("1"), 0);
        assert_eq!(load(store.path())["1"].queries.len(), 0);
        // the record itself survives
        assert_eq!(store.snapshot("1").unwrap().joined, "2024-01-01 00:00:00.000000");
    }

    #[test]
    fn test_clear_queries_unknown_user_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.clear_queries("missing").unwrap());
        assert!(store.snapshot("missing").is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_ensure_user_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.ensure_user("9", "2024-02-02 12:00:00.000000").unwrap());
        assert!(!store.ensure_user("9", "2025-01-01 00:00:00.000000").unwrap());
        let record = store.snapshot("9").unwrap();
        assert!(record.queries.is_empty());
        assert_eq!(record.joined_date(), "2024-02-02");
    }

    #[test]
    fn test_save_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.record_query("2", "calc: 1+1", "2024-01-01 00:00:00.000000").unwrap();
        store.record_query("10", "привет", "2024-01-02 00:00:00.000000").unwrap();
        let path = store.path().to_path_buf();

        save(&path, &load(&path)).unwrap();
        let first = std::fs::read(&path).unwrap();
        save(&path, &load(&path)).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_file_schema_is_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.record_query("5", "coin", "2024-01-01 00:00:00.000000").unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  \"5\": {"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["5"]["queries"][0]["text"], "coin");
        assert_eq!(value["5"]["queries"][0]["time"], "2024-01-01 00:00:00.000000");
        assert_eq!(value["5"]["joined"], "2024-01-01 00:00:00.000000");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("missing").join("user_data.json"));
        assert!(store.record_query("1", "x", "2024-01-01 00:00:00.000000").is_err());
    }

    #[test]
    fn test_missing_joined_defaults_to_unknown() {
        let store: Store = serde_json::from_str(r#"{"1": {"queries": []}}"#).unwrap();
        assert_eq!(store["1"].joined_date(), "Unknown");
    }

    #[test]
    fn test_timestamp_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(7, 5, 3, 42)
            .unwrap()
            .and_utc();
        assert_eq!(timestamp(&at), "2024-03-09 07:05:03.000042");
    }
}
