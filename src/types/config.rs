use serde::{Deserialize, Serialize};

/// The active remote endpoint configuration.
///
/// Persisted as JSON under a single storage key; camelCase on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsConfig {
    pub endpoint_url: String,
}

/// A previously used endpoint URL, retained to speed up reconfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlHistoryEntry {
    /// Deduplication key — exact, case-sensitive match.
    pub url: String,
    /// RFC 3339 insertion time.
    pub added_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
