//! Storyteller: a turn-based narrative engine that composes layered prompts
//! from campaign state, sends them to a chat-completion endpoint, and
//! sanitizes the model's reply into canonical narration.

pub mod config;
pub mod engine;
pub mod loader;
pub mod model;

pub use config::{GenerationSettings, SessionConfig};
pub use engine::character::{query_character, CharacterQuery};
pub use engine::llm_client::{ChatClient, ChatError, ChatRequest};
pub use engine::sanitizer::sanitize;
pub use engine::session::{StorySession, TurnError};
pub use loader::ConfigurationError;
pub use model::campaign::CampaignDocument;
pub use model::event::EventRecord;
pub use model::turn::NarrationTurn;
