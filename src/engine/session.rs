use crate::config::GenerationSettings;
use crate::engine::context_assembler::build_storyteller_context;
use crate::engine::llm_client::{ChatClient, ChatError, ChatRequest};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::sanitizer::sanitize;
use crate::model::campaign::CampaignDocument;
use crate::model::event::EventRecord;
use crate::model::turn::NarrationTurn;

/// A turn that could not be completed, with enough context for the caller
/// to retry it manually. The session state is left as it was before the
/// turn, so retrying rebuilds the identical request.
#[derive(Debug, thiserror::Error)]
#[error("turn {turn} ({directive}) failed: {source}")]
pub struct TurnError {
    pub turn: u32,
    pub directive: String,
    #[source]
    pub source: ChatError,
}

/// Sequences the turns of one narrative session.
///
/// The contract and campaign context are fixed for the session's lifetime;
/// the only state carried between turns is the previous sanitized
/// narration, threaded into the next aftermath prompt. Turns are strictly
/// sequential. Independent sessions share nothing.
pub struct StorySession {
    client: ChatClient,
    settings: GenerationSettings,
    contract: String,
    context: String,
    last_narration: Option<String>,
    turns_completed: u32,
}

impl StorySession {
    pub fn new(
        client: ChatClient,
        settings: GenerationSettings,
        contract: String,
        campaign: &CampaignDocument,
    ) -> Self {
        Self {
            client,
            settings,
            contract,
            context: build_storyteller_context(campaign),
            last_narration: None,
            turns_completed: 0,
        }
    }

    /// Open the session: narrate the scene the directive asks for.
    pub fn opening(&mut self, directive: &str) -> Result<NarrationTurn, TurnError> {
        let request = PromptBuilder::opening_request(
            &self.settings,
            &self.contract,
            &self.context,
            directive,
        );
        self.run_turn(request, directive)
    }

    /// Narrate the aftermath of an event, against the previous turn's
    /// sanitized narration. With no prior turn the PREVIOUS NARRATION
    /// section is rendered empty rather than erroring.
    pub fn advance(
        &mut self,
        event: &EventRecord,
        directive: &str,
    ) -> Result<NarrationTurn, TurnError> {
        let prior = self.last_narration.as_deref().unwrap_or("");
        let request = PromptBuilder::aftermath_request(
            &self.settings,
            &self.contract,
            &self.context,
            prior,
            event,
            directive,
        );
        self.run_turn(request, directive)
    }

    fn run_turn(&mut self, request: ChatRequest, directive: &str) -> Result<NarrationTurn, TurnError> {
        let turn = self.turns_completed + 1;
        tracing::info!(turn, model = %request.model, "requesting narration");

        let raw = self
            .client
            .complete(&request)
            .map_err(|source| TurnError {
                turn,
                directive: directive.to_string(),
                source,
            })?;

        let sanitized = sanitize(&raw);
        self.last_narration = Some(sanitized.clone());
        self.turns_completed = turn;

        Ok(NarrationTurn {
            raw_response: raw,
            sanitized_text: sanitized,
        })
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn last_narration(&self) -> Option<&str> {
        self.last_narration.as_deref()
    }

    pub fn turns_completed(&self) -> u32 {
        self.turns_completed
    }
}
