use crate::config::GenerationSettings;
use crate::engine::context_assembler::build_character_context;
use crate::engine::llm_client::{ChatClient, ChatError, ChatRequest};
use crate::engine::sanitizer::sanitize;

/// The flat world snapshot a character is asked to act from.
#[derive(Debug, Clone, Default)]
pub struct CharacterQuery {
    pub world_state: String,
    pub player_stats: String,
    pub lore: String,
    pub memory_logs: String,
}

/// Ask a character what it does next, conditioned on its contract. One
/// shot: no turn threading, no session state.
pub fn query_character(
    client: &ChatClient,
    settings: &GenerationSettings,
    contract: &str,
    query: &CharacterQuery,
) -> Result<String, ChatError> {
    let context = build_character_context(
        &query.world_state,
        &query.player_stats,
        &query.lore,
        &query.memory_logs,
    );
    let request = ChatRequest::new(settings, contract, context);
    let raw = client.complete(&request)?;
    Ok(sanitize(&raw))
}
