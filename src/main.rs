use anyhow::Context;
use tracing_subscriber::EnvFilter;

use storyteller::engine::llm_client::ChatClient;
use storyteller::engine::session::StorySession;
use storyteller::model::event::EventRecord;
use storyteller::{config, loader};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load_config();
    let contract = loader::load_contract(&config.contract_path)
        .with_context(|| format!("loading contract {}", config.contract_path.display()))?;
    let campaign = loader::load_campaign(&config.campaign_path)
        .with_context(|| format!("loading campaign {}", config.campaign_path.display()))?;

    let client = ChatClient::new(config.base_url.clone());
    let mut session = StorySession::new(client, config.generation(), contract, &campaign);

    println!("\n=== STORYTELLER: OPENING ===\n");
    let opening = session.opening(
        "Write the opening narration for the arc start: the party arrives at the Black Keep \
         and approaches the throne hall.\n\
         Keep it atmospheric and high-stakes. Do not include choices or actions.",
    )?;
    println!("{}", opening.sanitized_text);

    let event = EventRecord::new(
        "Ronan",
        "opens an old chest half-buried in the hoard near a collapsed pillar",
    )
    .with_detail(
        "location_detail",
        "edge of the throne hall, where gold has pooled like a landslide",
    );

    println!("\n=== STORYTELLER: AFTER ACTION (Ronan opens chest) ===\n");
    let after_action = session.advance(
        &event,
        "Describe the immediate narrative aftermath of this event as it becomes visible in \
         the scene.\n\
         Do not introduce choices or new actions.",
    )?;
    println!("{}", after_action.sanitized_text);

    Ok(())
}
