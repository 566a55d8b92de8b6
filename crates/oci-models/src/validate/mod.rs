//! Validation of field values and records.
//!
//! Type conformance is checked on every assignment and during decoding.
//! Required-field validation is opt-in: responses routinely omit fields the
//! schema marks as required, so decoding does not enforce it.

pub mod enum_guard;

pub use enum_guard::enum_guard;

use crate::diagnostic::NoopSink;
use crate::error::ValidationError;
use crate::model::{Field, FieldDescriptor, ModelDescriptor, Primitive, Record, SemanticType, Value};

/// Checks that every required field of `record` holds a value, recursing
/// into nested records, lists and maps.
pub fn validate_record(record: &Record) -> Result<(), ValidationError> {
    for (field, slot) in record.fields() {
        match slot {
            Field::Present(value) => validate_nested(value)?,
            _ if field.required => {
                return Err(ValidationError::MissingRequired {
                    model: record.model_name(),
                    field: field.name,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

fn validate_nested(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Model(record) => validate_record(record),
        Value::List(items) => items.iter().try_for_each(validate_nested),
        Value::Map(entries) => entries.values().try_for_each(validate_nested),
        _ => Ok(()),
    }
}

/// Checks a value assigned to `field` of `model`, returning it in normalized
/// form (integers widened for float fields, date-time text parsed, enum
/// values guarded).
pub(crate) fn check_value(
    model: &'static ModelDescriptor,
    field: &'static FieldDescriptor,
    value: Value,
) -> Result<Value, ValidationError> {
    conform(model.name, field, &field.ty, value)
}

fn conform(
    model: &'static str,
    field: &'static FieldDescriptor,
    ty: &SemanticType,
    value: Value,
) -> Result<Value, ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        model,
        field: field.name,
        expected: ty.to_string(),
    };

    match (ty, value) {
        (SemanticType::Primitive(primitive), value) => {
            conform_primitive(model, field, *primitive, value).ok_or_else(mismatch)?
        }
        (SemanticType::Enum(enum_type, policy), Value::String(candidate)) => {
            enum_guard(model, field.name, *enum_type, *policy, &candidate, &NoopSink)
                .map(Value::String)
        }
        (SemanticType::Model(expected), Value::Model(record)) => {
            if record.is_instance_of(expected) {
                Ok(Value::Model(record))
            } else {
                Err(ValidationError::NotASubtype {
                    model,
                    field: field.name,
                    expected: expected.name,
                    found: record.model_name(),
                })
            }
        }
        (SemanticType::List(inner), Value::List(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Null => Ok(Value::Null),
                item => conform(model, field, inner, item),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (SemanticType::Map(inner), Value::Map(entries)) => entries
            .into_iter()
            .map(|(key, item)| match item {
                Value::Null => Ok((key, Value::Null)),
                item => conform(model, field, inner, item).map(|v| (key, v)),
            })
            .collect::<Result<_, _>>()
            .map(Value::Map),
        _ => Err(mismatch()),
    }
}

/// Returns `None` on a kind mismatch.
fn conform_primitive(
    model: &'static str,
    field: &'static FieldDescriptor,
    primitive: Primitive,
    value: Value,
) -> Option<Result<Value, ValidationError>> {
    let non_finite = || ValidationError::NonFiniteFloat {
        model,
        field: field.name,
    };

    let conformed = match (primitive, value) {
        (Primitive::String, v @ Value::String(_)) => Ok(v),
        (Primitive::Integer, v @ Value::Integer(_)) => Ok(v),
        (Primitive::Float, Value::Integer(i)) => Ok(Value::Float(i as f64)),
        (Primitive::Float, Value::Float(v)) if v.is_finite() => Ok(Value::Float(v)),
        (Primitive::Float, Value::Float(_)) => Err(non_finite()),
        (Primitive::Boolean, v @ Value::Bool(_)) => Ok(v),
        (Primitive::DateTime, v @ Value::DateTime(_)) => Ok(v),
        (Primitive::DateTime, Value::String(text)) => match text.parse() {
            Ok(dt) => Ok(Value::DateTime(dt)),
            Err(_) => return None,
        },
        (Primitive::Object, v @ Value::Object(_)) => Ok(v),
        (Primitive::Object, Value::String(s)) => Ok(Value::Object(s.into())),
        (Primitive::Object, Value::Bool(b)) => Ok(Value::Object(b.into())),
        (Primitive::Object, Value::Integer(i)) => Ok(Value::Object(i.into())),
        (Primitive::Object, Value::Float(v)) => match serde_json::Number::from_f64(v) {
            Some(n) => Ok(Value::Object(serde_json::Value::Number(n))),
            None => Err(non_finite()),
        },
        _ => return None,
    };
    Some(conformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::block_storage::{ATTACH_ISCSI_VOLUME_DETAILS, VOLUME};
    use crate::catalog::compute::{
        INSTANCE, INSTANCE_SOURCE_VIA_IMAGE_DETAILS, LAUNCH_INSTANCE_DETAILS,
        LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS,
    };
    use crate::model::RecordBuilder;

    #[test]
    fn test_missing_required_field() {
        let details = RecordBuilder::new(&ATTACH_ISCSI_VOLUME_DETAILS)
            .set("instance_id", "ocid1.instance.oc1.phx.aaaa")
            .build()
            .unwrap();
        assert_eq!(
            validate_record(&details),
            Err(ValidationError::MissingRequired {
                model: "AttachIScsiVolumeDetails",
                field: "volume_id",
            })
        );
    }

    #[test]
    fn test_null_does_not_satisfy_required() {
        let mut details = Record::new(&ATTACH_ISCSI_VOLUME_DETAILS);
        details.set("instance_id", "ocid1.instance.oc1.phx.aaaa").unwrap();
        details.set_null("volume_id").unwrap();
        assert!(validate_record(&details).is_err());
    }

    #[test]
    fn test_nested_required_checked() {
        let details = RecordBuilder::new(&LAUNCH_INSTANCE_DETAILS)
            .set("availability_domain", "Uocm:PHX-AD-1")
            .set("compartment_id", "ocid1.compartment.oc1..aaaa")
            .set("shape", "VM.Standard.E4.Flex")
            .nested("source_details", &INSTANCE_SOURCE_VIA_IMAGE_DETAILS, |s| s)
            .build()
            .unwrap();
        assert_eq!(
            validate_record(&details),
            Err(ValidationError::MissingRequired {
                model: "InstanceSourceViaImageDetails",
                field: "image_id",
            })
        );
    }

    #[test]
    fn test_float_fields_widen_integers() {
        let mut config = Record::new(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS);
        config.set("ocpus", 2).unwrap();
        assert_eq!(config.get_f64("ocpus"), Some(2.0));
        assert_eq!(
            config.set("memory_in_gbs", f64::NAN),
            Err(ValidationError::NonFiniteFloat {
                model: "LaunchInstanceShapeConfigDetails",
                field: "memory_in_gbs",
            })
        );
    }

    #[test]
    fn test_datetime_text_is_parsed() {
        let mut volume = Record::new(&VOLUME);
        volume.set("time_created", "2024-03-15T14:30:00Z").unwrap();
        assert!(volume.get_datetime("time_created").is_some());
        assert!(matches!(
            volume.set("time_created", "yesterday"),
            Err(ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_nested_model_must_match_family() {
        let mut instance = Record::new(&INSTANCE);
        let wrong = Record::new(&VOLUME);
        assert_eq!(
            instance.set("source_details", wrong),
            Err(ValidationError::NotASubtype {
                model: "Instance",
                field: "source_details",
                expected: "InstanceSourceDetails",
                found: "Volume",
            })
        );
    }

    #[test]
    fn test_object_fields_accept_scalars() {
        let mut instance = Record::new(&INSTANCE);
        let mut metadata = std::collections::BTreeMap::new();
        metadata.insert("ssh_authorized_keys".to_string(), Value::from("ssh-ed25519 AAAA"));
        metadata.insert("depth".to_string(), Value::from(3));
        instance.set("extended_metadata", metadata).unwrap();
        let stored = instance.get("extended_metadata").into_option().unwrap();
        assert_eq!(
            stored.as_map().unwrap()["depth"],
            Value::Object(serde_json::json!(3))
        );
    }
}
