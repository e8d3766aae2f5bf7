//! Slot name to type resolution.

use crate::document::PlatformConfig;
use crate::errors::{ConvertError, ConvertResult};
use std::collections::HashMap;

/// Read-only lookup of declared slot types.
#[derive(Debug, Clone)]
pub struct SlotTypeResolver {
    types: HashMap<String, String>,
    provider_prefix: String,
}

impl SlotTypeResolver {
    pub fn new(config: &PlatformConfig, provider_prefix: impl Into<String>) -> Self {
        Self {
            types: config
                .slots
                .iter()
                .map(|(name, binding)| (name.clone(), binding.type_name.clone()))
                .collect(),
            provider_prefix: provider_prefix.into(),
        }
    }

    /// Type declared for `slot`; an undeclared slot is a reference error.
    pub fn resolve(&self, slot: &str) -> ConvertResult<&str> {
        self.types.get(slot).map(String::as_str).ok_or_else(|| {
            ConvertError::reference(slot, "slot is not declared in the platform configuration")
        })
    }

    /// Whether `type_name` is a platform built-in.
    pub fn is_provider_type(&self, type_name: &str) -> bool {
        type_name.starts_with(&self.provider_prefix)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
