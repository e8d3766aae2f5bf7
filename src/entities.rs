//! Entity value and synonym aggregation over the training document.

use crate::annotation::{parse_annotations, Segment};
use crate::errors::ConvertResult;
use crate::model::{EntityType, EntityTypeValue, EntityValue};
use crate::slots::SlotTypeResolver;
use crate::training::TrainingDocument;
use log::{debug, info};
use std::collections::{BTreeSet, HashMap};

/// Values collected for one user-defined entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypeEntry {
    pub name: String,
    values: Vec<EntityValueEntry>,
    index: HashMap<String, usize>,
}

/// A canonical value and every synonym seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityValueEntry {
    pub value: String,
    pub synonyms: BTreeSet<String>,
}

impl EntityTypeEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn record(&mut self, value: &str, synonym: Option<&str>) {
        let idx = match self.index.get(value) {
            Some(&idx) => idx,
            None => {
                self.index.insert(value.to_string(), self.values.len());
                self.values.push(EntityValueEntry {
                    value: value.to_string(),
                    synonyms: BTreeSet::new(),
                });
                self.values.len() - 1
            }
        };
        if let Some(synonym) = synonym {
            self.values[idx].synonyms.insert(synonym.to_string());
        }
    }

    /// Values in order of first appearance.
    pub fn values(&self) -> &[EntityValueEntry] {
        &self.values
    }

    pub fn value(&self, value: &str) -> Option<&EntityValueEntry> {
        self.index.get(value).map(|&idx| &self.values[idx])
    }
}

/// Entity types in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityCatalog {
    types: Vec<EntityTypeEntry>,
    index: HashMap<String, usize>,
}

impl EntityCatalog {
    /// Record `value` (and optionally a synonym of it) under `type_name`.
    pub fn record(&mut self, type_name: &str, value: &str, synonym: Option<&str>) {
        let idx = match self.index.get(type_name) {
            Some(&idx) => idx,
            None => {
                self.index.insert(type_name.to_string(), self.types.len());
                self.types.push(EntityTypeEntry::new(type_name));
                self.types.len() - 1
            }
        };
        self.types[idx].record(value, synonym);
    }

    pub fn types(&self) -> &[EntityTypeEntry] {
        &self.types
    }

    pub fn get(&self, type_name: &str) -> Option<&EntityTypeEntry> {
        self.index.get(type_name).map(|&idx| &self.types[idx])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Output representation; synonyms are emitted sorted.
    pub fn to_entity_types(&self) -> Vec<EntityType> {
        self.types
            .iter()
            .map(|entry| EntityType {
                name: entry.name.clone(),
                values: entry
                    .values
                    .iter()
                    .map(|v| EntityTypeValue {
                        name: EntityValue {
                            value: v.value.clone(),
                            synonyms: v.synonyms.iter().cloned().collect(),
                        },
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Scan every list line of the training document for `[display](slot[:value])`
/// spans and collect values and synonyms per resolved type.
///
/// Spans whose slot resolves to a provider type are skipped. Lines are read
/// as written, without the punctuation and digit stripping applied to samples.
pub fn aggregate_entities(
    training: &TrainingDocument,
    resolver: &SlotTypeResolver,
) -> ConvertResult<EntityCatalog> {
    let mut catalog = EntityCatalog::default();

    for item in &training.items {
        let segments =
            parse_annotations(&item.text).map_err(|e| e.at_line(&training.source, item.line))?;

        for segment in segments {
            let span = match segment {
                Segment::Slot(span) => span,
                _ => continue,
            };
            let value = match span.canonical_value() {
                Some(value) => value,
                None => continue,
            };

            let type_name = resolver.resolve(&span.slot)?;
            if resolver.is_provider_type(type_name) {
                continue;
            }

            debug!(
                "entity '{}' value '{}' synonym {:?} at {}",
                type_name,
                value,
                span.synonym(),
                training.location(item.line)
            );
            catalog.record(type_name, value, span.synonym());
        }
    }

    info!("aggregated {} entity types", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{PlatformConfig, SlotBinding};
    use crate::errors::ConvertError;
    use crate::training::parse_training;

    fn resolver() -> SlotTypeResolver {
        let mut config = PlatformConfig::default();
        for (slot, ty) in [
            ("cuisine", "cuisine"),
            ("food", "cuisine"),
            ("num_people", "AMAZON.NUMBER"),
        ] {
            config.slots.insert(
                slot.to_string(),
                SlotBinding {
                    type_name: ty.to_string(),
                },
            );
        }
        SlotTypeResolver::new(&config, "AMAZON")
    }

    fn aggregate(input: &str) -> ConvertResult<EntityCatalog> {
        aggregate_entities(&parse_training("nlu.md", input)?, &resolver())
    }

    #[test]
    fn test_alias_records_synonym() {
        let catalog = aggregate("## intent:inform\n- any [pan asian](cuisine:asian) place\n").unwrap();
        let asian = catalog.get("cuisine").unwrap().value("asian").unwrap();
        assert!(asian.synonyms.contains("pan asian"));
    }

    #[test]
    fn test_plain_value_enumerated() {
        let catalog = aggregate("## intent:inform\n- a [gastropub](cuisine)\n").unwrap();
        let gastropub = catalog.get("cuisine").unwrap().value("gastropub").unwrap();
        assert!(gastropub.synonyms.is_empty());
    }

    #[test]
    fn test_synonyms_merge_across_document() {
        let input = r#"## intent:inform
- [gastro pub](cuisine:gastropub) and [thai](cuisine)
- [gastro pub](cuisine:gastropub)

## intent:request_restaurant
- a [gastro-pub](food:gastropub) for [two](num_people:2)
"#;
        let catalog = aggregate(input).unwrap();
        assert_eq!(catalog.len(), 1);
        let cuisine = catalog.get("cuisine").unwrap();
        let values: Vec<&str> = cuisine.values().iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["gastropub", "thai"]);
        let synonyms: Vec<&str> = cuisine.values()[0]
            .synonyms
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(synonyms, vec!["gastro pub", "gastro-pub"]);
    }

    #[test]
    fn test_provider_types_skipped() {
        let catalog = aggregate("## intent:book\n- for [3](num_people) people\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_bare_references_contribute_nothing() {
        let catalog = aggregate("## intent:book\n- for (cuisine:thai)\n").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_lines_outside_intent_blocks_scanned() {
        let catalog = aggregate("## lookup:cuisine\n- [korean](cuisine)\n").unwrap();
        assert!(catalog.get("cuisine").unwrap().value("korean").is_some());
    }

    #[test]
    fn test_unknown_slot() {
        let err = aggregate("## intent:inform\n- [cheap](price)\n").unwrap_err();
        assert!(matches!(err, ConvertError::Reference { ref name, .. } if name == "price"));
    }

    #[test]
    fn test_to_entity_types() {
        let mut catalog = EntityCatalog::default();
        catalog.record("cuisine", "asian", Some("pan asian"));
        catalog.record("cuisine", "thai", None);
        let types = catalog.to_entity_types();
        assert_eq!(types[0].values[0].name.synonyms, vec!["pan asian"]);
        assert!(types[0].values[1].name.synonyms.is_empty());
    }
}
