use std::fs;
use std::path::{Path, PathBuf};

use crate::model::campaign::CampaignDocument;

/// A required input document could not be used. Fatal to the session;
/// never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing required document: {}", path.display())]
    Missing { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("campaign document {} is not valid JSON: {source}", path.display())]
    MalformedCampaign {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the storyteller/character contract as opaque text.
pub fn load_contract(path: &Path) -> Result<String, ConfigurationError> {
    read_document(path)
}

/// Load and parse the campaign document.
pub fn load_campaign(path: &Path) -> Result<CampaignDocument, ConfigurationError> {
    let text = read_document(path)?;
    serde_json::from_str(&text).map_err(|source| ConfigurationError::MalformedCampaign {
        path: path.to_path_buf(),
        source,
    })
}

fn read_document(path: &Path) -> Result<String, ConfigurationError> {
    if !path.exists() {
        return Err(ConfigurationError::Missing {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| ConfigurationError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
