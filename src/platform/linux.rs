// ThemeSheet platform paths for Linux
// Data: ~/.local/share/themesheet

use std::env;
use std::path::PathBuf;

/// Returns the data directory for ThemeSheet on Linux.
/// Uses `$XDG_DATA_HOME/themesheet` if set, otherwise `~/.local/share/themesheet`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("themesheet")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("themesheet")
    }
}
