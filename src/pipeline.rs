//! Phase ordering for a conversion run.
//!
//! Each phase is a function from the previous phases' outputs to its own:
//! 1. intent registry from the domain declarations
//! 2. samples and placeholder slots from the training blocks
//! 3. slot type resolver from the platform configuration
//! 4. per-intent slot descriptors
//! 5. entity values and synonyms from the training annotations
//! 6. assembly (and, for [`ModelConverter::export`], rendering)

use crate::assembler::{assemble, render_model, resolve_intents};
use crate::config::ConversionConfig;
use crate::document::{DomainDocument, PlatformConfig};
use crate::entities::aggregate_entities;
use crate::errors::{ConvertError, ConvertResult};
use crate::loader::{load_domain, load_platform_config, load_training};
use crate::model::InteractionModel;
use crate::registry::IntentRegistry;
use crate::slots::SlotTypeResolver;
use crate::training::TrainingDocument;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Convert already loaded documents into an interaction model.
pub fn convert_documents(
    invocation_name: &str,
    domain: &DomainDocument,
    training: &TrainingDocument,
    platform: &PlatformConfig,
    provider_prefix: &str,
) -> ConvertResult<InteractionModel> {
    let registry = IntentRegistry::from_declarations(&domain.intents).with_samples(training)?;
    let resolver = SlotTypeResolver::new(platform, provider_prefix);
    let intents = resolve_intents(registry, &resolver)?;
    let catalog = aggregate_entities(training, &resolver)?;
    Ok(assemble(invocation_name, intents, &catalog))
}

/// Runs one conversion described by a [`ConversionConfig`].
#[derive(Debug, Clone)]
pub struct ModelConverter {
    config: ConversionConfig,
}

impl ModelConverter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Load the three documents and build the model.
    pub fn convert(&self) -> ConvertResult<InteractionModel> {
        let domain = load_domain(&self.config.domain)?;
        let training = load_training(&self.config.training)?;
        let platform = load_platform_config(&self.config.platform)?;
        convert_documents(
            &self.config.invocation_name,
            &domain,
            &training,
            &platform,
            &self.config.provider_prefix,
        )
    }

    /// Build the model and write it to the configured output.
    ///
    /// The output file is only created once the whole document has been
    /// rendered, so a failed run leaves nothing behind.
    pub fn export(&self) -> ConvertResult<PathBuf> {
        let model = self.convert()?;
        let rendered = render_model(&model, self.config.pretty)?;

        let output = &self.config.output;
        fs::write(output, rendered).map_err(|e| ConvertError::DocumentAccess {
            path: output.display().to_string(),
            message: e.to_string(),
        })?;

        let language_model = model.language_model();
        info!(
            "wrote interaction model with {} intents and {} types to {}",
            language_model.intents.len(),
            language_model.types.len(),
            output.display()
        );
        Ok(output.clone())
    }
}
