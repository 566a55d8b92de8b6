//! Discriminator resolution for polymorphic model families.

use serde_json::{Map, Value as JsonValue};

use crate::model::{Discriminator, ModelDescriptor};

/// Picks the concrete model for a raw payload decoded as `base`.
///
/// Reads the discriminator of `base` (wire key first, then the logical
/// name) and follows its table, repeating for subtypes that are themselves
/// polymorphic. A missing, non-string or unregistered discriminator stops
/// resolution at the model reached so far, so newer server-side subtypes
/// still decode as their base.
pub fn resolve_subtype(
    base: &'static ModelDescriptor,
    raw: &Map<String, JsonValue>,
) -> &'static ModelDescriptor {
    let mut model = base;
    while let Some(disc) = model.discriminator {
        let subtype = raw_discriminator(disc, raw)
            .and_then(JsonValue::as_str)
            .and_then(|literal| disc.subtype(literal));
        match subtype {
            Some(subtype) if subtype != model => model = subtype,
            _ => break,
        }
    }
    model
}

/// Returns the raw discriminator value carried by `raw`, if any.
pub(crate) fn raw_discriminator<'r>(
    disc: &Discriminator,
    raw: &'r Map<String, JsonValue>,
) -> Option<&'r JsonValue> {
    raw.get(disc.wire_key)
        .or_else(|| raw.get(disc.field))
        .filter(|value| !value.is_null())
}
