use serde_json::Value;

use crate::model::campaign::CampaignDocument;

/// Render the campaign document into the authoritative context block.
///
/// Total over incomplete documents: a missing field shows up as a blank
/// value after its label, never as an error. Line order is fixed; golden
/// tests depend on it.
pub fn build_storyteller_context(campaign: &CampaignDocument) -> String {
    let arc = &campaign.campaign.arc;
    let overview = &campaign.campaign.story_overview;
    let location = &campaign.setting.final_scene_location;
    let boss = &campaign.boss.identity;
    let scene = &campaign.final_scene;

    let mut block = String::new();
    push_fact(&mut block, "Arc Title", &arc.title);
    push_fact(&mut block, "Arc Scope", &arc.scope);
    push_fact(&mut block, "Premise", &overview.premise);
    push_fact(&mut block, "Arc Start", &overview.arc_start);
    push_fact(&mut block, "Final Scene Location", &location.name);
    push_fact(&mut block, "Final Scene Description", &location.description);
    push_fact(
        &mut block,
        "Boss",
        &format!("{} — {} ({})", boss.name, boss.title, boss.kind),
    );
    push_fact(&mut block, "Entry Moment", &scene.entry_moment);
    push_fact(&mut block, "Stakes", &scene.stakes.join(", "));
    push_fact(
        &mut block,
        "Narrative Pressure",
        &json_or_empty(&scene.narrative_pressure),
    );

    block.trim().to_string()
}

/// Render the character-query context from flat free-text fields.
/// Section order is fixed; the closing directive line always comes last.
pub fn build_character_context(
    world_state: &str,
    player_stats: &str,
    lore: &str,
    memory_logs: &str,
) -> String {
    let mut block = String::new();
    push_section(&mut block, "World State", world_state);
    push_section(&mut block, "Player Stats", player_stats);
    push_section(&mut block, "Long Backstory Lore", lore);
    push_section(&mut block, "Memory Logs", memory_logs);
    block.push_str("What do you do now?");

    block.trim().to_string()
}

fn push_fact(block: &mut String, label: &str, value: &str) {
    block.push_str(label);
    block.push_str(": ");
    block.push_str(value);
    block.push('\n');
}

fn push_section(block: &mut String, label: &str, body: &str) {
    block.push_str(label);
    block.push_str(":\n");
    block.push_str(body);
    block.push_str("\n\n");
}

fn json_or_empty(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_campaign() -> CampaignDocument {
        serde_json::from_value(json!({
            "campaign": {
                "arc": { "title": "The Weight of Gold", "scope": "final confrontation" },
                "story_overview": {
                    "premise": "A dragon's hoard is cursed.",
                    "arc_start": "The party crosses the pass at dusk.",
                },
            },
            "setting": {
                "final_scene_location": {
                    "name": "The Black Keep",
                    "description": "A throne hall drowned in coin.",
                },
            },
            "boss": {
                "identity": { "name": "Vhalreth", "title": "the Gilded", "type": "dragon" },
            },
            "final_scene": {
                "entry_moment": "The doors groan open.",
                "stakes": ["the party's lives", "the valley below"],
                "narrative_pressure": { "rising": "greed" },
            },
        }))
        .unwrap()
    }

    #[test]
    fn test_full_document_renders_in_fixed_order() {
        let block = build_storyteller_context(&full_campaign());
        let expected = "Arc Title: The Weight of Gold\n\
                        Arc Scope: final confrontation\n\
                        Premise: A dragon's hoard is cursed.\n\
                        Arc Start: The party crosses the pass at dusk.\n\
                        Final Scene Location: The Black Keep\n\
                        Final Scene Description: A throne hall drowned in coin.\n\
                        Boss: Vhalreth — the Gilded (dragon)\n\
                        Entry Moment: The doors groan open.\n\
                        Stakes: the party's lives, the valley below\n\
                        Narrative Pressure: {\"rising\":\"greed\"}";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_empty_document_keeps_every_label() {
        let doc: CampaignDocument = serde_json::from_value(json!({})).unwrap();
        let block = build_storyteller_context(&doc);
        for label in [
            "Arc Title: ",
            "Arc Scope: ",
            "Premise: ",
            "Arc Start: ",
            "Final Scene Location: ",
            "Final Scene Description: ",
            "Boss: ",
            "Entry Moment: ",
            "Stakes: ",
            "Narrative Pressure: {}",
        ] {
            assert!(block.contains(label), "missing label {label:?} in {block:?}");
        }
    }

    #[test]
    fn test_arbitrary_missing_subsets_never_change_labels() {
        let variants = [
            json!({ "campaign": { "arc": { "title": "T" } } }),
            json!({ "final_scene": { "stakes": ["a"] } }),
            json!({ "boss": {} }),
            json!({ "setting": { "final_scene_location": { "name": "Keep" } } }),
        ];
        for variant in variants {
            let doc: CampaignDocument = serde_json::from_value(variant).unwrap();
            let block = build_storyteller_context(&doc);
            assert_eq!(block.lines().count(), 10);
            assert!(block.starts_with("Arc Title: "));
        }
    }

    #[test]
    fn test_character_context_sections_in_order() {
        let block = build_character_context("calm village", "HP 10", "an old feud", "met the smith");
        let labels = [
            "World State:",
            "Player Stats:",
            "Long Backstory Lore:",
            "Memory Logs:",
            "What do you do now?",
        ];
        let mut last = 0;
        for label in labels {
            let at = block.find(label).expect(label);
            assert!(at >= last, "{label} out of order");
            assert_eq!(block.matches(label).count(), 1, "{label} repeated");
            last = at;
        }
        assert!(block.ends_with("What do you do now?"));
    }
}
