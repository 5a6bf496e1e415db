use serde::{Deserialize, Serialize};
use serde_json::Value;

/* =========================
   Campaign Document
   ========================= */

/// The campaign/world document a session is seeded from.
///
/// Every field at every level is optional in the source JSON: a missing
/// branch deserializes to its empty default so context assembly stays
/// total. Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignDocument {
    pub campaign: CampaignInfo,
    pub setting: Setting,
    pub boss: Boss,
    pub final_scene: FinalScene,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignInfo {
    pub arc: ArcInfo,
    pub story_overview: StoryOverview,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcInfo {
    pub title: String,
    pub scope: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryOverview {
    pub premise: String,
    pub arc_start: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub final_scene_location: SceneLocation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneLocation {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Boss {
    pub identity: BossIdentity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BossIdentity {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalScene {
    pub entry_moment: String,
    pub stakes: Vec<String>,
    /// Free-shape nested structure, kept as JSON so it survives flattening
    /// into the context block.
    pub narrative_pressure: Value,
}

impl Default for FinalScene {
    fn default() -> Self {
        Self {
            entry_moment: String::new(),
            stakes: Vec::new(),
            narrative_pressure: empty_object(),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let doc: CampaignDocument = serde_json::from_value(json!({})).unwrap();
        assert!(doc.campaign.arc.title.is_empty());
        assert!(doc.final_scene.stakes.is_empty());
        assert_eq!(doc.final_scene.narrative_pressure, json!({}));
    }

    #[test]
    fn test_partial_document_fills_missing_branches() {
        let doc: CampaignDocument = serde_json::from_value(json!({
            "campaign": { "arc": { "title": "The Weight of Gold" } },
            "boss": { "identity": { "name": "Vhalreth", "type": "dragon" } },
        }))
        .unwrap();
        assert_eq!(doc.campaign.arc.title, "The Weight of Gold");
        assert!(doc.campaign.arc.scope.is_empty());
        assert_eq!(doc.boss.identity.name, "Vhalreth");
        assert_eq!(doc.boss.identity.kind, "dragon");
        assert!(doc.boss.identity.title.is_empty());
        assert!(doc.setting.final_scene_location.name.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let doc: CampaignDocument = serde_json::from_value(json!({
            "campaign": { "arc": { "title": "T", "unused": 1 } },
            "extra_top_level": { "a": "b" },
        }))
        .unwrap();
        assert_eq!(doc.campaign.arc.title, "T");
    }
}
