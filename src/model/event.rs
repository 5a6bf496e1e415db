use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An in-world event that has already occurred, handed to the storyteller
/// for aftermath narration. `actor` and `action` are always present; any
/// further descriptive fields ride along verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub actor: String,
    pub action: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl EventRecord {
    pub fn new(actor: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            details: Map::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Serialize into the structured text embedded in the user prompt.
    /// Never fails: an unserializable record degrades to `{}`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
