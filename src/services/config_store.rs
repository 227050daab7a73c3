//! Configuration Store for ThemeSheet.
//!
//! Durable single-slot storage for the active remote endpoint plus a bounded
//! MRU history of previously used endpoint URLs. Both live as JSON values
//! under fixed keys of an injected [`KeyValueStore`]; no other component
//! writes those keys.

use chrono::Utc;
use tracing::warn;

use crate::storage::KeyValueStore;
use crate::types::config::{SheetsConfig, UrlHistoryEntry};
use crate::types::errors::ConfigError;

/// Storage key for the active endpoint configuration.
const CONFIG_KEY: &str = "sheets_config";
/// Storage key for the endpoint URL history.
const URL_HISTORY_KEY: &str = "url_history";
/// Maximum number of retained history entries; older entries are evicted.
pub const URL_HISTORY_LIMIT: usize = 10;

/// Configuration store over an injected key-value backend.
pub struct ConfigStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the active configuration.
    ///
    /// Returns `Ok(None)` when no configuration was ever saved. An
    /// unparseable stored value is treated as absent and logged — reads
    /// never fail on bad data, only on a failing backend.
    pub fn get_config(&self) -> Result<Option<SheetsConfig>, ConfigError> {
        let Some(raw) = self.store.get(CONFIG_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(Some(config)),
            Err(e) => {
                warn!(key = CONFIG_KEY, error = %e, "discarding unparseable stored configuration");
                Ok(None)
            }
        }
    }

    /// Persists `config` as the sole active configuration, overwriting any
    /// prior value unconditionally. The endpoint URL is also upserted into
    /// the URL history. Validation is the caller's responsibility.
    pub fn save_config(&mut self, config: &SheetsConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string(config)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        self.store.set(CONFIG_KEY, &json)?;
        self.add_url_to_history(&config.endpoint_url, None)
    }

    /// Deletes the active configuration slot. History is untouched.
    pub fn clear_config(&mut self) -> Result<(), ConfigError> {
        self.store.remove(CONFIG_KEY)?;
        Ok(())
    }

    /// Returns the URL history, most-recent-first.
    ///
    /// Absent or unparseable history yields an empty list; the anomaly is
    /// logged in the unparseable case.
    pub fn get_url_history(&self) -> Result<Vec<UrlHistoryEntry>, ConfigError> {
        let Some(raw) = self.store.get(URL_HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(key = URL_HISTORY_KEY, error = %e, "discarding unparseable URL history");
                Ok(Vec::new())
            }
        }
    }

    /// Upserts `url` at the front of the history.
    ///
    /// Any existing entry with the same URL (exact, case-sensitive match) is
    /// removed first, so re-saving a known URL moves it to the front with a
    /// refreshed timestamp. The list is truncated to [`URL_HISTORY_LIMIT`],
    /// evicting the oldest entries.
    pub fn add_url_to_history(
        &mut self,
        url: &str,
        label: Option<String>,
    ) -> Result<(), ConfigError> {
        let mut entries = self.get_url_history()?;
        entries.retain(|e| e.url != url);

        let label = label.unwrap_or_else(|| format!("Endpoint {}", entries.len() + 1));
        entries.insert(
            0,
            UrlHistoryEntry {
                url: url.to_string(),
                added_at: Utc::now().to_rfc3339(),
                label: Some(label),
            },
        );
        entries.truncate(URL_HISTORY_LIMIT);

        self.persist_history(&entries)
    }

    /// Removes the history entry matching `url`, if any. Idempotent.
    pub fn remove_url_from_history(&mut self, url: &str) -> Result<(), ConfigError> {
        let mut entries = self.get_url_history()?;
        let before = entries.len();
        entries.retain(|e| e.url != url);
        if entries.len() == before {
            return Ok(());
        }
        self.persist_history(&entries)
    }

    fn persist_history(&mut self, entries: &[UrlHistoryEntry]) -> Result<(), ConfigError> {
        let json = serde_json::to_string(entries)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        self.store.set(URL_HISTORY_KEY, &json)?;
        Ok(())
    }
}
