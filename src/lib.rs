//! Conversion of annotated NLU training data into a voice-assistant
//! interaction model.
//!
//! Three documents feed one model:
//! - a domain document declaring the intents (YAML)
//! - a line-oriented training document with annotated samples
//! - a platform configuration binding slot names to types (YAML)
//!
//! ```text
//! ## intent:request_restaurant
//! - a table for (num_people:3) serving [pan asian](cuisine:asian) food
//! ```
//!
//! becomes the sample `a table for {num_people} serving {cuisine} food`,
//! slots `num_people` and `cuisine` with their configured types, and the
//! value `asian` (synonym `pan asian`) under the `cuisine` type.
//!
//! ## Modules
//!
//! - [`annotation`] - Tokenizer for `[display](slot:value)` spans
//! - [`normalizer`] - Sample text with `{slot}` placeholders
//! - [`training`] - `## intent:` block parsing
//! - [`document`] - Domain and platform configuration documents
//! - [`loader`] - Reading documents from disk
//! - [`registry`] - Declared intents and their samples
//! - [`slots`] - Slot to type resolution
//! - [`entities`] - Entity value and synonym aggregation
//! - [`model`] - Output document types
//! - [`assembler`] - Cross-linking and rendering
//! - [`pipeline`] - Phase ordering for a full run
//! - [`config`] - Run configuration
//! - [`errors`] - Error types

pub mod annotation;
pub mod assembler;
pub mod config;
pub mod document;
pub mod entities;
pub mod errors;
pub mod loader;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod registry;
pub mod slots;
pub mod training;

pub use annotation::{parse_annotations, Segment, SlotSpan};
pub use assembler::{assemble, render_model, resolve_intents};
pub use config::{ConversionConfig, DEFAULT_PROVIDER_PREFIX};
pub use document::{DomainDocument, IntentDeclaration, PlatformConfig, SlotBinding};
pub use entities::{aggregate_entities, EntityCatalog, EntityTypeEntry, EntityValueEntry};
pub use errors::{AnnotationError, ConvertError, ConvertResult};
pub use loader::{load_domain, load_platform_config, load_training, read_document};
pub use model::{EntityType, EntityTypeValue, EntityValue, Intent, InteractionModel, SlotRef};
pub use normalizer::{normalize_utterance, NormalizedUtterance};
pub use pipeline::{convert_documents, ModelConverter};
pub use registry::{IntentRecord, IntentRegistry};
pub use slots::SlotTypeResolver;
pub use training::{parse_training, IntentBlock, TrainingDocument, TrainingLine};

#[cfg(test)]
mod tests {
    mod export;
    mod fixtures;
}
