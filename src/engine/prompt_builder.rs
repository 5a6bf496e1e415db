use crate::config::GenerationSettings;
use crate::engine::llm_client::ChatRequest;
use crate::model::event::EventRecord;

/// Builds the user prompt sent alongside the contract.
/// This struct is intentionally dumb: it only formats labeled sections.
/// No parsing, no networking, no turn logic.
///
/// Every section carries an explicit label so the model cannot conflate
/// authoritative context with narrated fiction.
pub struct PromptBuilder;

impl PromptBuilder {
    /// First turn of a session: context plus a scene request.
    pub fn opening_request(
        settings: &GenerationSettings,
        system_prompt: &str,
        context: &str,
        directive: &str,
    ) -> ChatRequest {
        let mut prompt = String::new();
        push_section(&mut prompt, "CAMPAIGN CONTEXT (authoritative)", context);
        push_section(&mut prompt, "SCENE REQUEST", directive);

        ChatRequest::new(settings, system_prompt, prompt.trim())
    }

    /// Any later turn: context, the previous sanitized narration, the event
    /// that just occurred, and what to produce about it.
    pub fn aftermath_request(
        settings: &GenerationSettings,
        system_prompt: &str,
        context: &str,
        prior_narration: &str,
        event: &EventRecord,
        directive: &str,
    ) -> ChatRequest {
        let mut prompt = String::new();
        push_section(&mut prompt, "CAMPAIGN CONTEXT (authoritative)", context);
        push_section(&mut prompt, "PREVIOUS NARRATION", prior_narration);
        push_section(&mut prompt, "NEW EVENT (already occurred)", &event.to_json());
        push_section(&mut prompt, "TASK", directive);

        ChatRequest::new(settings, system_prompt, prompt.trim())
    }
}

fn push_section(prompt: &mut String, label: &str, body: &str) {
    prompt.push_str(label);
    prompt.push_str(":\n");
    prompt.push_str(body);
    prompt.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::context_assembler::build_storyteller_context;
    use crate::model::campaign::CampaignDocument;
    use std::time::Duration;

    fn settings() -> GenerationSettings {
        GenerationSettings {
            model: "deepseek-r1:8b".into(),
            temperature: 0.2,
            timeout: Duration::from_secs(90),
        }
    }

    #[test]
    fn test_opening_request_over_empty_campaign_keeps_labels() {
        let doc: CampaignDocument = serde_json::from_value(serde_json::json!({})).unwrap();
        let context = build_storyteller_context(&doc);
        let request = PromptBuilder::opening_request(
            &settings(),
            "You are a storyteller.",
            &context,
            "Write the opening.",
        );

        assert!(request.user_prompt.contains("Arc Title: "));
        assert!(request
            .user_prompt
            .starts_with("CAMPAIGN CONTEXT (authoritative):"));
        assert!(request
            .user_prompt
            .contains("SCENE REQUEST:\nWrite the opening."));
        assert_eq!(request.system_prompt, "You are a storyteller.");
        assert!(!request.stream);
    }

    #[test]
    fn test_aftermath_request_labels_prior_narration_and_event() {
        let event = EventRecord::new("Ronan", "opens an old chest")
            .with_detail("location_detail", "edge of the throne hall");
        let request = PromptBuilder::aftermath_request(
            &settings(),
            "You are a storyteller.",
            "Arc Title: T",
            "The hall fell silent.",
            &event,
            "Describe the aftermath.",
        );

        assert!(request
            .user_prompt
            .contains("PREVIOUS NARRATION:\nThe hall fell silent."));
        assert!(request
            .user_prompt
            .contains("NEW EVENT (already occurred):\n"));
        assert!(request.user_prompt.contains("\"actor\":\"Ronan\""));
        assert!(request
            .user_prompt
            .contains("\"location_detail\":\"edge of the throne hall\""));
        assert!(request.user_prompt.ends_with("TASK:\nDescribe the aftermath."));
    }

    #[test]
    fn test_requests_carry_generation_settings() {
        let request = PromptBuilder::opening_request(&settings(), "contract", "ctx", "directive");
        assert_eq!(request.model, "deepseek-r1:8b");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.timeout, Duration::from_secs(90));
    }
}
