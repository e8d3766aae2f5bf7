//! Output interaction model.
//!
//! ```text
//! { interactionModel: { languageModel: { invocationName, intents: [...], types: [...] } } }
//! ```

use serde::{Deserialize, Serialize};

/// Root of the interaction model document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionModel {
    pub interaction_model: ModelBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelBody {
    pub language_model: LanguageModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageModel {
    pub invocation_name: String,
    pub intents: Vec<Intent>,
    pub types: Vec<EntityType>,
}

/// An intent with its samples and, when any sample references one, its slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub samples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<SlotRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    pub name: String,
    #[serde(rename = "type")]
    pub slot_type: String,
}

/// A user-defined entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    pub name: String,
    pub values: Vec<EntityTypeValue>,
}

/// `{ "name": { "value": ..., "synonyms": [...] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTypeValue {
    pub name: EntityValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl InteractionModel {
    pub fn new(invocation_name: impl Into<String>, intents: Vec<Intent>, types: Vec<EntityType>) -> Self {
        Self {
            interaction_model: ModelBody {
                language_model: LanguageModel {
                    invocation_name: invocation_name.into(),
                    intents,
                    types,
                },
            },
        }
    }

    pub fn language_model(&self) -> &LanguageModel {
        &self.interaction_model.language_model
    }

    pub fn intent(&self, name: &str) -> Option<&Intent> {
        self.language_model().intents.iter().find(|i| i.name == name)
    }

    pub fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.language_model().types.iter().find(|t| t.name == name)
    }
}

impl Intent {
    pub fn slot(&self, name: &str) -> Option<&SlotRef> {
        self.slots.iter().find(|s| s.name == name)
    }
}

impl EntityType {
    pub fn value(&self, value: &str) -> Option<&EntityValue> {
        self.values
            .iter()
            .map(|v| &v.name)
            .find(|v| v.value == value)
    }
}
