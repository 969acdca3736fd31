//! Key/value preference persistence with per-key expiry
//!
//! Values are plain strings; callers coerce them. An absent or expired key is a normal read
//! result. Writes are best-effort: `persist`/`forget` log failures instead of returning them.

use chrono::{DateTime, Duration, Utc};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::shared::errors::Result;
use crate::shared::logging::log_preference_write_error;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str, ttl_days: i64) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Stored value with its absolute expiry
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceRecord {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl PreferenceRecord {
    pub fn new(value: &str, now: DateTime<Utc>, ttl_days: i64) -> Self {
        Self {
            value: value.to_string(),
            expires_at: now + Duration::days(ttl_days),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// In-process store used for server rendering and tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    records: RefCell<HashMap<String, PreferenceRecord>>,
    /// Frozen clock; `None` follows the system time
    now: Cell<Option<DateTime<Utc>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(now: DateTime<Utc>) -> Self {
        let store = Self::default();
        store.now.set(Some(now));
        store
    }

    /// Pre-populate a key with the standard TTL
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            let record = PreferenceRecord::new(value, store.now(), crate::shared::constants::PREFERENCE_TTL_DAYS);
            store.records.borrow_mut().insert(key.to_string(), record);
        }
        store
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(Some(self.now() + by));
    }

    pub fn record(&self, key: &str) -> Option<PreferenceRecord> {
        self.records.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.get().unwrap_or_else(Utc::now)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let now = self.now();
        let mut records = self.records.borrow_mut();
        match records.get(key) {
            Some(record) if record.is_expired(now) => {
                records.remove(key);
                None
            }
            Some(record) => Some(record.value.clone()),
            None => None,
        }
    }

    fn set(&self, key: &str, value: &str, ttl_days: i64) -> Result<()> {
        let record = PreferenceRecord::new(value, self.now(), ttl_days);
        self.records.borrow_mut().insert(key.to_string(), record);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

/// `"true"` is the only truthy stored value
pub fn read_flag(store: &dyn PreferenceStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

/// Fire-and-forget write
pub fn persist(store: &dyn PreferenceStore, key: &str, value: &str, ttl_days: i64) {
    if let Err(e) = store.set(key, value, ttl_days) {
        log_preference_write_error(key, &e.to_string());
    }
}

pub fn persist_flag(store: &dyn PreferenceStore, key: &str, value: bool, ttl_days: i64) {
    persist(store, key, if value { "true" } else { "false" }, ttl_days);
}

/// Fire-and-forget removal
pub fn forget(store: &dyn PreferenceStore, key: &str) {
    if let Err(e) = store.remove(key) {
        log_preference_write_error(key, &e.to_string());
    }
}
