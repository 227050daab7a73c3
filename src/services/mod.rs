// ThemeSheet service layer.
// Stateless services over the key-value store and the remote endpoint.

pub mod config_store;
pub mod sheets_client;
