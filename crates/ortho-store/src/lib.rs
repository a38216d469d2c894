//! File-backed local key-value store.
//!
//! Stands in for browser local storage: one pretty-printed JSON file per
//! key under a store directory. Two keys are in use today — the auth token
//! and the cart snapshot — but the store is key-agnostic.
//!
//! Writes are atomic: the value is written to a temp file in the same
//! directory and renamed over the target, so a crash mid-write never leaves
//! a truncated value behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store key for the bearer token string.
pub const KEY_AUTH_TOKEN: &str = "auth_token";
/// Store key for the serialized cart lines.
pub const KEY_CART: &str = "cart";

/// A directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if missing) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize `value` under `key`, replacing any previous value.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key)?;
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("serialize store value failed: {key}"))?;
        fs::write(&tmp, format!("{json}\n"))
            .with_context(|| format!("write store temp failed: {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("commit store write failed: {}", path.display()))?;
        Ok(())
    }

    /// Read the value under `key`. `Ok(None)` when the key has never been
    /// written (or was deleted); an error when the file exists but cannot
    /// be read or parsed.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read store value failed: {}", path.display()))
            }
        };
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("parse store value failed: {}", path.display()))?;
        Ok(Some(value))
    }

    /// Remove the value under `key`. Missing keys are a no-op.
    pub fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("delete store value failed: {}", path.display()))
            }
        }
    }

    // Keys map to file names; constrain them so a key can never escape the
    // store directory.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
        {
            bail!("invalid store key: {key:?}");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}
