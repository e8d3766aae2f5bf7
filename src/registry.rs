//! Intent registry: declared intents and the samples attached to them.

use crate::document::IntentDeclaration;
use crate::errors::{ConvertError, ConvertResult};
use crate::normalizer::normalize_utterance;
use crate::training::TrainingDocument;
use log::{debug, info, warn};
use std::collections::HashMap;

/// A declared intent and what training has contributed to it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRecord {
    pub name: String,
    /// Normalized samples in training-document order.
    pub samples: Vec<String>,
    /// Placeholder slot names across all samples, first appearance first.
    pub slot_names: Vec<String>,
}

impl IntentRecord {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            samples: Vec::new(),
            slot_names: Vec::new(),
        }
    }
}

/// Intents in declaration order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct IntentRegistry {
    records: Vec<IntentRecord>,
    index: HashMap<String, usize>,
}

impl IntentRegistry {
    /// Build a registry with empty records from the domain's declarations.
    ///
    /// A repeated name keeps its first position; the later declaration
    /// replaces the record.
    pub fn from_declarations(declarations: &[IntentDeclaration]) -> Self {
        let mut registry = Self::default();
        for declaration in declarations {
            let name = declaration.name();
            match registry.index.get(name) {
                Some(&idx) => {
                    warn!("intent '{}' declared more than once", name);
                    registry.records[idx] = IntentRecord::new(name);
                }
                None => {
                    registry.index.insert(name.to_string(), registry.records.len());
                    registry.records.push(IntentRecord::new(name));
                }
            }
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&IntentRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn records(&self) -> &[IntentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<IntentRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Normalize every intent block's samples into this registry.
    pub fn with_samples(mut self, training: &TrainingDocument) -> ConvertResult<Self> {
        for block in &training.blocks {
            let idx = *self.index.get(&block.intent).ok_or_else(|| {
                ConvertError::reference(
                    block.intent.clone(),
                    format!(
                        "intent block at {} is not declared in the domain",
                        training.location(block.line)
                    ),
                )
            })?;
            let record = &mut self.records[idx];

            for sample in &block.samples {
                let utterance = normalize_utterance(&sample.text)
                    .map_err(|e| e.at_line(&training.source, sample.line))?;
                record.samples.push(utterance.text);
                for slot in utterance.placeholders {
                    if !record.slot_names.contains(&slot) {
                        record.slot_names.push(slot);
                    }
                }
            }
            debug!(
                "intent '{}': {} samples from block at line {}",
                record.name,
                block.samples.len(),
                block.line
            );
        }

        for record in &self.records {
            if record.samples.is_empty() {
                warn!("intent '{}' has no training samples", record.name);
            }
        }
        info!(
            "parsed {} samples for {} intents",
            training.sample_count(),
            self.records.len()
        );
        Ok(self)
    }
}
