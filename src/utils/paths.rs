use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

pub const HOME_ENV: &str = "POCKET_LEDGER_HOME";

const DEFAULT_DIR_NAME: &str = ".pocket_ledger";
const STORE_DIR: &str = "store";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Application data directory: `$POCKET_LEDGER_HOME`, else `~/.pocket_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the persisted ledger blobs.
pub fn store_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}
