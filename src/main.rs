//! ThemeSheet console demo.
//!
//! Opens the durable configuration database, shows the active endpoint and
//! URL history, and lists remote themes when an endpoint is configured.
//! Set `THEMESHEET_ENDPOINT` to (re)configure the endpoint for this run.

use std::env;

use themesheet::database::Database;
use themesheet::platform;
use themesheet::services::config_store::ConfigStore;
use themesheet::services::sheets_client::SheetsClient;
use themesheet::storage::SqliteStore;
use themesheet::types::config::SheetsConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("ThemeSheet v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    let data_dir = platform::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let db = Database::open(data_dir.join("themesheet.db"))?;
    let mut config_store = ConfigStore::new(SqliteStore::new(db.connection()));

    if let Ok(url) = env::var("THEMESHEET_ENDPOINT") {
        config_store.save_config(&SheetsConfig { endpoint_url: url })?;
        println!("Endpoint saved from THEMESHEET_ENDPOINT.");
    }

    match config_store.get_config()? {
        Some(config) => {
            println!("Active endpoint: {}", config.endpoint_url);
            let client = SheetsClient::from_config(Some(&config))?;
            match client.list_themes().await {
                Ok(themes) => {
                    println!("{} theme(s):", themes.len());
                    for theme in &themes {
                        println!(
                            "  row {:>3}  {}  [{}]  {}",
                            theme.id.map(|id| id.to_string()).unwrap_or_default(),
                            theme.timestamp,
                            theme.done.as_str(),
                            theme.title
                        );
                    }
                }
                Err(e) => eprintln!("Could not list themes: {}", e),
            }
        }
        None => {
            println!("No endpoint configured.");
            println!("Set THEMESHEET_ENDPOINT to your Apps Script web app URL to get started.");
        }
    }

    let history = config_store.get_url_history()?;
    if !history.is_empty() {
        println!();
        println!("Previously used endpoints:");
        for entry in &history {
            println!(
                "  {}  {}  ({})",
                entry.added_at,
                entry.url,
                entry.label.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
