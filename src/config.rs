use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("punchlist")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Address the API server binds.
    pub listen_addr: String,
    /// JSON file backing the server store.
    pub data_file: PathBuf,
    /// Base URL the client talks to, including the `/api` prefix.
    pub api_base_url: String,
    /// Directory holding the client's offline fallback entries.
    pub local_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            data_file: data_dir.join("todos.json"),
            api_base_url: "http://127.0.0.1:3000/api".to_string(),
            local_dir: data_dir.join("offline"),
        }
    }
}

impl Config {
    /// Read the config file when present, defaults otherwise. A file that
    /// fails to parse is logged and ignored rather than aborting startup.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(data) => Self::parse(&data, &path.display().to_string()),
            Err(_) => Self::default(),
        }
    }

    fn parse(data: &str, origin: &str) -> Self {
        match serde_json::from_str(data) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unparseable config {}: {}", origin, e);
                Self::default()
            }
        }
    }

    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("punchlist").join("config.json"))
    }

    /// Ensure the directories behind the configured paths exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        if let Some(parent) = self.data_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir_all(&self.local_dir)
    }
}
