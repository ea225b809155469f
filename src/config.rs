use std::env;
use std::path::PathBuf;

pub const DEFAULT_STOP_WORD: &str = "stop";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with the starting menu (`MENU_FILE`)
    pub menu_file: Option<PathBuf>,
    /// Word that ends item entry while building an order (`CAFE_STOP_WORD`)
    pub stop_word: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: None,
            stop_word: DEFAULT_STOP_WORD.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the environment. Call `dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            menu_file: non_empty("MENU_FILE").map(PathBuf::from),
            stop_word: non_empty("CAFE_STOP_WORD")
                .map(|word| word.trim().to_string())
                .unwrap_or_else(|| DEFAULT_STOP_WORD.to_string()),
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
