//! Remote Data Client for ThemeSheet.
//!
//! Translates CRUD intents into HTTP calls against the configured
//! Apps-Script-style endpoint and converts between the wire shape (an array
//! of 4-element string arrays, one per spreadsheet row) and [`Theme`].
//!
//! Every operation is a single round trip: no retries, no caching, no
//! optimistic local mutation. Callers re-fetch the list after a mutation to
//! observe its effect.

use serde::Serialize;
use tracing::debug;

use crate::types::config::SheetsConfig;
use crate::types::errors::SheetsError;
use crate::types::theme::{Theme, ThemeDraft, ThemeStatus};

/// Spreadsheet row number of the first data row. Row 1 is the header, so
/// the row at list position 0 lives at row 2.
pub const HEADER_ROW_OFFSET: usize = 2;

/// Wire payload for mutation requests. The `directive` tag is the
/// discriminator the backend dispatches on.
#[derive(Debug, Serialize)]
#[serde(tag = "directive", rename_all = "camelCase")]
enum DirectivePayload<'a> {
    #[serde(rename_all = "camelCase")]
    Create {
        timestamp: String,
        title: &'a str,
        description: &'a str,
        done: ThemeStatus,
    },
    #[serde(rename_all = "camelCase")]
    Update {
        row_index: u32,
        title: &'a str,
        description: &'a str,
        done: ThemeStatus,
    },
    #[serde(rename_all = "camelCase")]
    Delete { row_index: u32 },
}

impl DirectivePayload<'_> {
    fn name(&self) -> &'static str {
        match self {
            DirectivePayload::Create { .. } => "create",
            DirectivePayload::Update { .. } => "update",
            DirectivePayload::Delete { .. } => "delete",
        }
    }
}

/// Maps one positional wire row to a [`Theme`].
///
/// This is the single place the positional contract lives: a row is
/// `[timestamp, title, description, status]`; missing trailing fields
/// default to the empty string / not done. `index` is the 0-based position
/// within the response; the resulting id is the spreadsheet row number.
pub fn theme_from_row(index: usize, row: &[String]) -> Theme {
    let field = |i: usize| row.get(i).cloned().unwrap_or_default();
    Theme {
        id: Some((index + HEADER_ROW_OFFSET) as u32),
        timestamp: field(0),
        title: field(1),
        description: field(2),
        done: row
            .get(3)
            .map(|s| ThemeStatus::from_wire(s))
            .unwrap_or_default(),
    }
}

/// Remote data client bound to a single configured endpoint.
pub struct SheetsClient {
    http: reqwest::Client,
    endpoint_url: String,
}

impl SheetsClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Creates a client from the stored configuration.
    ///
    /// Fails with [`SheetsError::NotConfigured`] when no configuration
    /// exists or its endpoint URL is empty — checked before any network
    /// activity can happen.
    pub fn from_config(config: Option<&SheetsConfig>) -> Result<Self, SheetsError> {
        match config {
            Some(c) if !c.endpoint_url.is_empty() => Ok(Self::new(c.endpoint_url.clone())),
            _ => Err(SheetsError::NotConfigured),
        }
    }

    /// The endpoint this client talks to.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Fetches all themes.
    ///
    /// Issues `GET {endpoint}?directive=getAll` and maps each response row
    /// positionally; row ids start at [`HEADER_ROW_OFFSET`].
    pub async fn list_themes(&self) -> Result<Vec<Theme>, SheetsError> {
        let response = self
            .http
            .get(&self.endpoint_url)
            .query(&[("directive", "getAll")])
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::RequestFailed {
                directive: "getAll".to_string(),
                status: status.as_u16(),
            });
        }

        let rows: Vec<Vec<String>> = response
            .json()
            .await
            .map_err(|e| SheetsError::InvalidResponse(e.to_string()))?;

        debug!(rows = rows.len(), "fetched theme rows");
        Ok(rows
            .iter()
            .enumerate()
            .map(|(i, row)| theme_from_row(i, row))
            .collect())
    }

    /// Creates a theme from `draft`.
    ///
    /// The creation timestamp is computed here, once, as the current local
    /// time; updates never recompute it. Title validation is the caller's
    /// responsibility.
    pub async fn create_theme(&self, draft: &ThemeDraft) -> Result<(), SheetsError> {
        self.post_directive(&DirectivePayload::Create {
            timestamp: creation_timestamp(),
            title: &draft.title,
            description: &draft.description,
            done: draft.done,
        })
        .await
    }

    /// Updates the theme at spreadsheet row `id` with the fields of `draft`.
    pub async fn update_theme(&self, id: u32, draft: &ThemeDraft) -> Result<(), SheetsError> {
        self.post_directive(&DirectivePayload::Update {
            row_index: id,
            title: &draft.title,
            description: &draft.description,
            done: draft.done,
        })
        .await
    }

    /// Deletes the theme at spreadsheet row `id`.
    pub async fn delete_theme(&self, id: u32) -> Result<(), SheetsError> {
        self.post_directive(&DirectivePayload::Delete { row_index: id })
            .await
    }

    /// Posts one mutation directive as a JSON body. Success is the HTTP
    /// status alone; the response body is ignored.
    async fn post_directive(&self, payload: &DirectivePayload<'_>) -> Result<(), SheetsError> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::RequestFailed {
                directive: payload.name().to_string(),
                status: status.as_u16(),
            });
        }
        debug!(directive = payload.name(), "remote mutation accepted");
        Ok(())
    }
}

/// Current local time formatted the way the remote sheet displays it.
fn creation_timestamp() -> String {
    chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}
