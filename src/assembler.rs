//! Cross-linking intents, slots and types into the output model.

use crate::entities::EntityCatalog;
use crate::errors::{ConvertError, ConvertResult};
use crate::model::{Intent, InteractionModel, SlotRef};
use crate::registry::IntentRegistry;
use crate::slots::SlotTypeResolver;

/// Turn registry records into output intents, resolving every placeholder slot.
pub fn resolve_intents(
    registry: IntentRegistry,
    resolver: &SlotTypeResolver,
) -> ConvertResult<Vec<Intent>> {
    registry
        .into_records()
        .into_iter()
        .map(|record| -> ConvertResult<Intent> {
            let slots = record
                .slot_names
                .into_iter()
                .map(|name| -> ConvertResult<SlotRef> {
                    let slot_type = resolver.resolve(&name)?.to_string();
                    Ok(SlotRef { name, slot_type })
                })
                .collect::<ConvertResult<Vec<_>>>()?;

            Ok(Intent {
                name: record.name,
                samples: record.samples,
                slots,
            })
        })
        .collect()
}

/// Attach resolved intents and the aggregated types under the model root.
pub fn assemble(
    invocation_name: &str,
    intents: Vec<Intent>,
    catalog: &EntityCatalog,
) -> InteractionModel {
    InteractionModel::new(invocation_name, intents, catalog.to_entity_types())
}

/// Render the model as JSON.
pub fn render_model(model: &InteractionModel, pretty: bool) -> ConvertResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(model)
    } else {
        serde_json::to_string(model)
    };
    rendered.map_err(|e| ConvertError::Serialization {
        message: e.to_string(),
    })
}
