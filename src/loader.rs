//! Source document loading.

use crate::document::{DomainDocument, PlatformConfig};
use crate::errors::{ConvertError, ConvertResult};
use crate::training::{parse_training, TrainingDocument};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a whole document into memory.
pub fn read_document(path: &Path) -> ConvertResult<String> {
    fs::read_to_string(path).map_err(|e| ConvertError::DocumentAccess {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> ConvertResult<T> {
    let content = read_document(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| ConvertError::format(path.display().to_string(), e.to_string()))
}

/// Load the domain document's intent declarations.
pub fn load_domain(path: &Path) -> ConvertResult<DomainDocument> {
    let domain: DomainDocument = load_yaml(path)?;
    info!(
        "loaded {} intent declarations from {}",
        domain.intents.len(),
        path.display()
    );
    Ok(domain)
}

/// Load the slot to type bindings.
pub fn load_platform_config(path: &Path) -> ConvertResult<PlatformConfig> {
    let config: PlatformConfig = load_yaml(path)?;
    info!(
        "loaded {} slot bindings from {}",
        config.slots.len(),
        path.display()
    );
    Ok(config)
}

/// Load and parse the training document.
pub fn load_training(path: &Path) -> ConvertResult<TrainingDocument> {
    let content = read_document(path)?;
    let training = parse_training(&path.display().to_string(), &content)?;
    info!(
        "loaded {} intent blocks ({} samples) from {}",
        training.blocks.len(),
        training.sample_count(),
        path.display()
    );
    Ok(training)
}
