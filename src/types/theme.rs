use serde::{Deserialize, Serialize};

/// Completion status of a theme, as stored in the remote spreadsheet.
///
/// The remote store keeps the literal strings `"SIM"` / `"NÃO"`; anything
/// else read back from the wire is treated as not done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeStatus {
    #[serde(rename = "SIM")]
    Done,
    #[serde(rename = "NÃO")]
    NotDone,
}

impl ThemeStatus {
    /// The exact string the remote store uses for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeStatus::Done => "SIM",
            ThemeStatus::NotDone => "NÃO",
        }
    }

    /// Parses a wire value, defaulting unknown strings to `NotDone`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "SIM" => ThemeStatus::Done,
            _ => ThemeStatus::NotDone,
        }
    }
}

impl Default for ThemeStatus {
    fn default() -> Self {
        ThemeStatus::NotDone
    }
}

/// One row of remote data: a planned blog theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Spreadsheet row number (1-based, offset past the header row).
    /// `None` for records not yet persisted remotely. The client never
    /// invents an id — it only echoes ids produced by a list fetch.
    pub id: Option<u32>,
    /// Locale-formatted creation time, set once at creation.
    pub timestamp: String,
    pub title: String,
    pub description: String,
    pub done: ThemeStatus,
}

/// Form data for creating or updating a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDraft {
    pub title: String,
    pub description: String,
    pub done: ThemeStatus,
}

impl ThemeDraft {
    /// Checks the non-empty-title invariant. Callers are expected to run
    /// this before submitting a create/update; the client does not.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Theme title must not be empty".to_string());
        }
        Ok(())
    }
}
