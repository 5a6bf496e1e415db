use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/* =========================
   Session Configuration
   ========================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub contract_path: PathBuf,
    pub campaign_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            model: "deepseek-r1:8b".into(),
            temperature: 0.2,
            timeout_secs: 90,
            contract_path: PathBuf::from("prompts/storyteller.md"),
            campaign_path: PathBuf::from("campaigns/the_weight_of_gold.json"),
        }
    }
}

impl SessionConfig {
    /// Generation settings handed to the engine. Always an explicit value,
    /// so sessions against different endpoints or models can coexist.
    pub fn generation(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// The reproducibility knobs for one chat call.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

fn config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("storyteller");
    path.push("config.json");
    path
}

/// Load the session config from the user config dir, falling back to
/// defaults when the file is missing or unparsable.
pub fn load_config() -> SessionConfig {
    fs::read_to_string(config_path())
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}
