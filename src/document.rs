//! Structured source documents: the domain document and the platform configuration.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The domain document. Only the `intents` list is read; other sections are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DomainDocument {
    pub intents: Vec<IntentDeclaration>,
}

/// One entry of the domain's intent list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawIntentDeclaration")]
pub enum IntentDeclaration {
    /// `- greet`
    Bare(String),
    /// `- request_restaurant: { use_entities: [...] }`
    Configured {
        name: String,
        config: serde_yaml::Value,
    },
}

impl IntentDeclaration {
    pub fn name(&self) -> &str {
        match self {
            IntentDeclaration::Bare(name) => name,
            IntentDeclaration::Configured { name, .. } => name,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIntentDeclaration {
    Name(String),
    Mapping(serde_yaml::Mapping),
}

impl TryFrom<RawIntentDeclaration> for IntentDeclaration {
    type Error = String;

    fn try_from(raw: RawIntentDeclaration) -> Result<Self, Self::Error> {
        match raw {
            RawIntentDeclaration::Name(name) => Ok(IntentDeclaration::Bare(name)),
            RawIntentDeclaration::Mapping(mapping) => {
                let (key, config) = mapping
                    .into_iter()
                    .next()
                    .ok_or_else(|| "intent declaration is an empty mapping".to_string())?;
                let name = match key {
                    serde_yaml::Value::String(name) => name,
                    other => return Err(format!("intent name must be a string, found {:?}", other)),
                };
                Ok(IntentDeclaration::Configured { name, config })
            }
        }
    }
}

/// The platform configuration document: slot name to type bindings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlatformConfig {
    pub slots: BTreeMap<String, SlotBinding>,
}

/// `{type: <typeName>}` for a single slot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlotBinding {
    #[serde(rename = "type")]
    pub type_name: String,
}
