//! Decoding of JSON wire payloads into records.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value as JsonValue};

use crate::codec::resolve::{raw_discriminator, resolve_subtype};
use crate::diagnostic::{Diagnostic, DiagnosticSink, NoopSink};
use crate::error::{DecodeError, ValidationError};
use crate::limits::{MAX_JSON_INPUT_SIZE, MAX_NESTING_DEPTH};
use crate::model::{Field, FieldDescriptor, ModelDescriptor, Primitive, Record, SemanticType, Value};
use crate::util::DateTime;
use crate::validate::enum_guard;

/// Options for decoding payloads.
#[derive(Clone, Copy)]
pub struct DecodeOptions<'a> {
    /// Receives lenient-enum downgrades and unknown-subtype fallbacks.
    pub sink: &'a dyn DiagnosticSink,
    /// Maximum nesting of models, lists and maps.
    pub max_depth: usize,
    /// Accept a field under its logical snake_case name when its wire key is
    /// missing. Supplying both is an error either way.
    pub accept_local_keys: bool,
    /// Fill declared defaults for fields missing from the payload.
    pub apply_defaults: bool,
}

impl Default for DecodeOptions<'static> {
    fn default() -> Self {
        Self {
            sink: &NoopSink,
            max_depth: MAX_NESTING_DEPTH,
            accept_local_keys: true,
            apply_defaults: true,
        }
    }
}

impl DecodeOptions<'static> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> DecodeOptions<'a> {
    /// Routes diagnostics to `sink`.
    pub fn with_sink<'b>(self, sink: &'b dyn DiagnosticSink) -> DecodeOptions<'b> {
        DecodeOptions {
            sink,
            max_depth: self.max_depth,
            accept_local_keys: self.accept_local_keys,
            apply_defaults: self.apply_defaults,
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl fmt::Debug for DecodeOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeOptions")
            .field("max_depth", &self.max_depth)
            .field("accept_local_keys", &self.accept_local_keys)
            .field("apply_defaults", &self.apply_defaults)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Decodes `raw` as an instance of `base` or of the subtype its
/// discriminator selects, with default options.
pub fn decode_model(
    base: &'static ModelDescriptor,
    raw: &JsonValue,
) -> Result<Record, DecodeError> {
    decode_model_with_options(base, raw, &DecodeOptions::default())
}

/// Decodes `raw` with explicit options.
pub fn decode_model_with_options(
    base: &'static ModelDescriptor,
    raw: &JsonValue,
    options: &DecodeOptions<'_>,
) -> Result<Record, DecodeError> {
    match raw {
        JsonValue::Object(fields) => decode_object(base, fields, options, 0),
        _ => Err(DecodeError::NotAnObject { model: base.name }),
    }
}

/// Parses JSON text and decodes it with default options.
pub fn decode_json_str(base: &'static ModelDescriptor, input: &str) -> Result<Record, DecodeError> {
    decode_json_str_with_options(base, input, &DecodeOptions::default())
}

/// Parses JSON text and decodes it with explicit options.
pub fn decode_json_str_with_options(
    base: &'static ModelDescriptor,
    input: &str,
    options: &DecodeOptions<'_>,
) -> Result<Record, DecodeError> {
    if input.len() > MAX_JSON_INPUT_SIZE {
        return Err(DecodeError::LengthExceedsLimit {
            field: "input",
            len: input.len(),
            max: MAX_JSON_INPUT_SIZE,
        });
    }
    let raw: JsonValue =
        serde_json::from_str(input).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
    decode_model_with_options(base, &raw, options)
}

// =============================================================================
// MODELS
// =============================================================================

fn decode_object(
    base: &'static ModelDescriptor,
    raw: &Map<String, JsonValue>,
    options: &DecodeOptions<'_>,
    depth: usize,
) -> Result<Record, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::DepthExceeded {
            max: options.max_depth,
        });
    }

    let model = resolve_subtype(base, raw);
    if let Some(disc) = model.discriminator {
        // Resolution stopped at a polymorphic model, so any literal present
        // is one this crate does not know.
        if let Some(literal) = raw_discriminator(disc, raw) {
            options.sink.report(Diagnostic::UnknownSubtype {
                model: model.name,
                discriminator: match literal {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                },
            });
        }
    }

    let mut record = Record::empty(model);
    for (index, field) in model.all_fields().enumerate() {
        let slot = match lookup_field(model, field, raw, options)? {
            Some(JsonValue::Null) => Field::Null,
            Some(value) => match decode_field(model, field, &field.ty, value, options, depth)? {
                Some(value) => Field::Present(value),
                None => Field::Absent,
            },
            None => match field.default {
                Some(default) if options.apply_defaults => Field::Present(default.to_value()),
                _ => Field::Absent,
            },
        };
        *record.slot_mut(index) = slot;
    }

    // A subtype always carries its own literal, whatever the payload said.
    for (name, literal) in model.discriminator_presets() {
        if let Some((index, _)) = model.field(name) {
            *record.slot_mut(index) = Field::Present(Value::String(literal.to_string()));
        }
    }

    Ok(record)
}

/// Finds the raw value of `field` under its wire key or, if allowed, its
/// logical name.
fn lookup_field<'r>(
    model: &'static ModelDescriptor,
    field: &'static FieldDescriptor,
    raw: &'r Map<String, JsonValue>,
    options: &DecodeOptions<'_>,
) -> Result<Option<&'r JsonValue>, DecodeError> {
    let wire = raw.get(field.wire_key);
    if !field.has_local_key() {
        return Ok(wire);
    }
    match (wire, raw.get(field.name)) {
        (Some(_), Some(_)) => Err(DecodeError::ConflictingKeys {
            model: model.name,
            wire_key: field.wire_key,
            local_key: field.name,
        }),
        (None, local) if options.accept_local_keys => Ok(local),
        (wire, _) => Ok(wire),
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Decodes one non-null value. `None` means the value is dropped: list
/// types silently ignore anything that is not an array.
fn decode_field(
    model: &'static ModelDescriptor,
    field: &'static FieldDescriptor,
    ty: &SemanticType,
    raw: &JsonValue,
    options: &DecodeOptions<'_>,
    depth: usize,
) -> Result<Option<Value>, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::DepthExceeded {
            max: options.max_depth,
        });
    }

    let mismatch = || -> DecodeError {
        ValidationError::TypeMismatch {
            model: model.name,
            field: field.name,
            expected: ty.to_string(),
        }
        .into()
    };

    let value = match ty {
        SemanticType::Primitive(primitive) => {
            decode_primitive(model, field, *primitive, raw).ok_or_else(mismatch)??
        }
        SemanticType::Enum(enum_type, policy) => {
            let candidate = raw.as_str().ok_or_else(mismatch)?;
            let accepted = enum_guard(
                model.name,
                field.name,
                *enum_type,
                *policy,
                candidate,
                options.sink,
            )?;
            Value::String(accepted)
        }
        SemanticType::Model(target) => {
            let fields = raw.as_object().ok_or_else(mismatch)?;
            Value::from(decode_object(target, fields, options, depth + 1)?)
        }
        SemanticType::List(inner) => {
            let Some(items) = raw.as_array() else {
                return Ok(None);
            };
            let mut decoded = Vec::with_capacity(items.len());
            for item in items {
                if item.is_null() {
                    decoded.push(Value::Null);
                } else if let Some(value) =
                    decode_field(model, field, inner, item, options, depth + 1)?
                {
                    decoded.push(value);
                }
            }
            Value::List(decoded)
        }
        SemanticType::Map(inner) => {
            let entries = raw.as_object().ok_or_else(mismatch)?;
            let mut decoded = BTreeMap::new();
            for (key, item) in entries {
                if item.is_null() {
                    decoded.insert(key.clone(), Value::Null);
                } else if let Some(value) =
                    decode_field(model, field, inner, item, options, depth + 1)?
                {
                    decoded.insert(key.clone(), value);
                }
            }
            Value::Map(decoded)
        }
    };
    Ok(Some(value))
}

/// Returns `None` on a kind mismatch.
fn decode_primitive(
    model: &'static ModelDescriptor,
    field: &'static FieldDescriptor,
    primitive: Primitive,
    raw: &JsonValue,
) -> Option<Result<Value, DecodeError>> {
    let value = match primitive {
        Primitive::String => Value::String(raw.as_str()?.to_string()),
        Primitive::Integer => Value::Integer(integral(raw)?),
        Primitive::Float => Value::Float(raw.as_f64()?),
        Primitive::Boolean => Value::Bool(raw.as_bool()?),
        Primitive::DateTime => match DateTime::parse(raw.as_str()?) {
            Ok(dt) => Value::DateTime(dt),
            Err(e) => {
                return Some(Err(DecodeError::InvalidDateTime {
                    model: model.name,
                    field: field.name,
                    message: e.to_string(),
                }));
            }
        },
        Primitive::Object => Value::Object(raw.clone()),
    };
    Some(Ok(value))
}

/// Reads an integer, accepting floats with no fractional part (`1024.0`).
fn integral(raw: &JsonValue) -> Option<i64> {
    if let Some(i) = raw.as_i64() {
        return Some(i);
    }
    let f = raw.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::{self, block_storage, compute, network};
    use crate::diagnostic::CollectingSink;
    use crate::limits::UNKNOWN_ENUM_VALUE;
    use crate::model::descriptor::STRING_LIST;

    #[test]
    fn test_nested_polymorphism() {
        let raw = json!({"type": "DomainNameServer", "customDnsServers": ["1.1.1.1"]});
        let option = decode_model(&network::DHCP_OPTION, &raw).unwrap();
        assert_eq!(option.descriptor(), &network::DHCP_DNS_OPTION);
        assert_eq!(option.get_str_list("custom_dns_servers"), Some(vec!["1.1.1.1"]));
    }

    #[test]
    fn test_polymorphic_list_elements() {
        let raw = json!({
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "vcnId": "ocid1.vcn.oc1.phx.aaaa",
            "options": [
                {"type": "DomainNameServer", "serverType": "VcnLocalPlusInternet"},
                {"type": "SearchDomain", "searchDomainNames": ["corp.example.com"]}
            ]
        });
        let details = decode_model(&network::CREATE_DHCP_DETAILS, &raw).unwrap();
        let names: Vec<_> = details
            .get_list("options")
            .unwrap()
            .iter()
            .map(|v| v.as_record().unwrap().model_name())
            .collect();
        assert_eq!(names, ["DhcpDnsOption", "DhcpSearchDomainOption"]);
    }

    #[test]
    fn test_nested_instance_configuration() {
        let raw = json!({
            "compartmentId": "ocid1.compartment.oc1..aaaa",
            "id": "ocid1.instanceconfiguration.oc1.phx.aaaa",
            "timeCreated": "2024-03-15T14:30:00.000Z",
            "instanceDetails": {
                "instanceType": "compute",
                "launchDetails": {
                    "shape": "VM.Standard.E4.Flex",
                    "sourceDetails": {"sourceType": "image", "imageId": "ocid1.image.oc1.phx.aaaa"}
                },
                "blockVolumes": [{
                    "attachDetails": {"type": "paravirtualized", "instanceId": "i", "volumeId": "v"},
                    "createDetails": {
                        "compartmentId": "c",
                        "sourceDetails": {"type": "volumeBackup", "id": "ocid1.volumebackup.oc1..aaaa"}
                    }
                }]
            }
        });
        let config = decode_model(&compute::INSTANCE_CONFIGURATION, &raw).unwrap();
        let details = config.get_record("instance_details").unwrap();
        assert_eq!(details.descriptor(), &compute::COMPUTE_INSTANCE_DETAILS);

        let source = details
            .get_record("launch_details")
            .and_then(|l| l.get_record("source_details"))
            .unwrap();
        assert_eq!(source.descriptor(), &compute::INSTANCE_SOURCE_VIA_IMAGE_DETAILS);

        let volume = details.get_list("block_volumes").unwrap()[0].as_record().unwrap();
        let attach = volume.get_record("attach_details").unwrap();
        assert_eq!(attach.descriptor(), &block_storage::ATTACH_PARAVIRTUALIZED_VOLUME_DETAILS);
        assert_eq!(attach.get_bool("is_read_only"), Some(false));
        let create_source = volume
            .get_record("create_details")
            .and_then(|c| c.get_record("source_details"))
            .unwrap();
        assert_eq!(
            create_source.descriptor(),
            &block_storage::VOLUME_SOURCE_FROM_VOLUME_BACKUP_DETAILS
        );
    }

    #[test]
    fn test_conflicting_keys() {
        let raw = json!({"compartmentId": "A", "compartment_id": "B"});
        assert_eq!(
            decode_model(&network::CREATE_VCN_DETAILS, &raw),
            Err(DecodeError::ConflictingKeys {
                model: "CreateVcnDetails",
                wire_key: "compartmentId",
                local_key: "compartment_id",
            })
        );
    }

    #[test]
    fn test_conflicting_keys_for_every_dual_spelled_field() {
        for model in catalog::models() {
            for field in model.all_fields().filter(|f| f.has_local_key()) {
                let raw = json!({ field.wire_key: "A", field.name: "B" });
                match decode_model(model, &raw) {
                    Err(DecodeError::ConflictingKeys {
                        wire_key,
                        local_key,
                        ..
                    }) => {
                        assert_eq!((wire_key, local_key), (field.wire_key, field.name));
                    }
                    other => panic!("{}.{}: {:?}", model.name, field.name, other),
                }
            }
        }
    }

    #[test]
    fn test_local_key_accepted_alone() {
        let raw = json!({"compartment_id": "ocid1.compartment.oc1..aaaa"});
        let details = decode_model(&network::CREATE_VCN_DETAILS, &raw).unwrap();
        assert_eq!(details.get_str("compartment_id"), Some("ocid1.compartment.oc1..aaaa"));

        let options = DecodeOptions {
            accept_local_keys: false,
            ..DecodeOptions::default()
        };
        let details = decode_model_with_options(&network::CREATE_VCN_DETAILS, &raw, &options).unwrap();
        assert!(!details.is_set("compartment_id"));

        // Both spellings conflict even when the local one would be ignored.
        let both = json!({"compartmentId": "A", "compartment_id": "B"});
        assert_eq!(
            decode_model_with_options(&network::CREATE_VCN_DETAILS, &both, &options),
            Err(DecodeError::ConflictingKeys {
                model: "CreateVcnDetails",
                wire_key: "compartmentId",
                local_key: "compartment_id",
            })
        );
    }

    #[test]
    fn test_strict_enum_rejects() {
        let raw = json!({"domainNameType": "NOT_A_REAL_VALUE"});
        let err = decode_model(&network::CREATE_DHCP_DETAILS, &raw).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Validation(ValidationError::InvalidEnumValue {
                model: "CreateDhcpDetails",
                field: "domain_name_type",
                ..
            })
        ));
    }

    #[test]
    fn test_lenient_enum_downgrades() {
        let sink = CollectingSink::new();
        let options = DecodeOptions::default().with_sink(&sink);
        let raw = json!({"lifecycleState": "NOT_A_REAL_VALUE", "displayName": "prod"});
        let vcn = decode_model_with_options(&network::VCN, &raw, &options).unwrap();

        assert_eq!(vcn.get_str("lifecycle_state"), Some(UNKNOWN_ENUM_VALUE));
        assert_eq!(vcn.get_str("display_name"), Some("prod"));
        assert_eq!(
            sink.take(),
            [Diagnostic::EnumDowngraded {
                model: "Vcn",
                field: "lifecycle_state",
                value: "NOT_A_REAL_VALUE".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_subtype_decodes_as_base() {
        let sink = CollectingSink::new();
        let options = DecodeOptions::default().with_sink(&sink);
        let raw = json!({"type": "Future", "futureField": 1});
        let option = decode_model_with_options(&network::DHCP_OPTION, &raw, &options).unwrap();

        assert_eq!(option.descriptor(), &network::DHCP_OPTION);
        assert_eq!(option.get_str("type"), Some("Future"));
        assert_eq!(
            sink.take(),
            [Diagnostic::UnknownSubtype {
                model: "DhcpOption",
                discriminator: "Future".to_string(),
            }]
        );

        // Missing discriminator is silent.
        decode_model_with_options(&network::DHCP_OPTION, &json!({}), &options).unwrap();
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_null_and_absent_are_distinct() {
        let vcn = decode_model(&network::VCN, &json!({"displayName": null})).unwrap();
        assert_eq!(vcn.get("display_name"), Field::Null);
        assert_eq!(vcn.get("dns_label"), Field::Absent);
    }

    static TEMPLATE: ModelDescriptor = ModelDescriptor {
        name: "Template",
        fields: &[
            FieldDescriptor::new("parameters", "parameters", STRING_LIST),
            FieldDescriptor::new("labels", "labels", SemanticType::Map(&STRING_LIST)),
        ],
        ..ModelDescriptor::plain()
    };

    #[test]
    fn test_malformed_list_is_absent() {
        let template = decode_model(&TEMPLATE, &json!({"parameters": "not-a-list"})).unwrap();
        assert_eq!(template.get("parameters"), Field::Absent);

        let options = decode_model(&network::DHCP_OPTIONS, &json!({"options": {"type": "x"}}))
            .unwrap();
        assert!(!options.is_set("options"));

        // Nested lists drop the malformed entry only.
        let raw = json!({"labels": {"a": ["x"], "b": "y"}});
        let template = decode_model(&TEMPLATE, &raw).unwrap();
        let labels = template.get("labels").into_option().unwrap().as_map().unwrap();
        assert_eq!(labels.keys().collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn test_defaults_apply_only_when_absent() {
        let raw = json!({"type": "iscsi", "instanceId": "i", "volumeId": "v", "isShareable": null});
        let attach = decode_model(&block_storage::ATTACH_VOLUME_DETAILS, &raw).unwrap();
        assert_eq!(attach.descriptor(), &block_storage::ATTACH_ISCSI_VOLUME_DETAILS);
        assert_eq!(attach.get_bool("is_read_only"), Some(false));
        assert_eq!(attach.get("is_shareable"), Field::Null);

        let options = DecodeOptions {
            apply_defaults: false,
            ..DecodeOptions::default()
        };
        let attach =
            decode_model_with_options(&block_storage::ATTACH_VOLUME_DETAILS, &raw, &options).unwrap();
        assert!(!attach.is_set("is_read_only"));
    }

    #[test]
    fn test_subtype_target_presets_discriminator() {
        let raw = json!({"searchDomainNames": ["example.com"]});
        let option = decode_model(&network::DHCP_SEARCH_DOMAIN_OPTION, &raw).unwrap();
        assert_eq!(option.get_str("type"), Some("SearchDomain"));
    }

    #[test]
    fn test_subtype_target_overrides_foreign_discriminator() {
        let raw = json!({
            "type": "SearchDomain",
            "customDnsServers": ["1.1.1.1"],
            "serverType": "VcnLocal"
        });
        let option = decode_model(&network::DHCP_DNS_OPTION, &raw).unwrap();
        assert_eq!(option.descriptor(), &network::DHCP_DNS_OPTION);
        assert_eq!(option.get_str("type"), Some("DomainNameServer"));

        // Re-decoding through the base lands on the same subtype.
        let wire = JsonValue::Object(crate::codec::encode_model(&option).unwrap());
        let again = decode_model(&network::DHCP_OPTION, &wire).unwrap();
        assert_eq!(again.descriptor(), &network::DHCP_DNS_OPTION);
        assert_eq!(again, option);

        let null_type = json!({"type": null, "searchDomainNames": ["example.com"]});
        let option = decode_model(&network::DHCP_SEARCH_DOMAIN_OPTION, &null_type).unwrap();
        assert_eq!(option.get_str("type"), Some("SearchDomain"));
    }

    #[test]
    fn test_type_mismatches() {
        let err = decode_model(&network::VCN, &json!({"displayName": 5})).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::TypeMismatch);

        let err = decode_model(&compute::INSTANCE, &json!({"sourceDetails": "image"})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Validation(ValidationError::TypeMismatch {
                field: "source_details",
                ..
            })
        ));

        let err = decode_model(&network::VCN, &json!({"freeformTags": ["a"]})).unwrap_err();
        assert!(matches!(err, DecodeError::Validation(ValidationError::TypeMismatch { .. })));
    }

    #[test]
    fn test_integral_numbers() {
        let raw = json!({"sizeInMBs": 1024.0, "sizeInGBs": 1});
        let volume = decode_model(&block_storage::VOLUME, &raw).unwrap();
        assert_eq!(volume.get_i64("size_in_mbs"), Some(1024));

        assert!(decode_model(&block_storage::VOLUME, &json!({"sizeInMBs": 1.5})).is_err());

        let config = decode_model(&compute::INSTANCE_SHAPE_CONFIG, &json!({"ocpus": 2})).unwrap();
        assert_eq!(config.get("ocpus").into_option(), Some(&Value::Float(2.0)));
    }

    #[test]
    fn test_datetime_fields() {
        let raw = json!({"timeCreated": "2016-08-25T21:10:29.600Z"});
        let volume = decode_model(&block_storage::VOLUME, &raw).unwrap();
        assert_eq!(
            volume.get_datetime("time_created").map(|dt| dt.to_string()),
            Some("2016-08-25T21:10:29.6Z".to_string())
        );

        let err = decode_model(&block_storage::VOLUME, &json!({"timeCreated": "soon"})).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDateTime { field: "time_created", .. }));
    }

    #[test]
    fn test_object_fields_kept_verbatim() {
        let raw = json!({
            "extendedMetadata": {"config": {"nested": [1, 2]}, "flag": true},
            "definedTags": {"Operations": {"CostCenter": "42"}}
        });
        let instance = decode_model(&compute::INSTANCE, &raw).unwrap();
        let metadata = instance.get("extended_metadata").into_option().unwrap().as_map().unwrap();
        assert_eq!(metadata["config"], Value::Object(json!({"nested": [1, 2]})));

        let tags = instance.get("defined_tags").into_option().unwrap().as_map().unwrap();
        let ops = tags["Operations"].as_map().unwrap();
        assert_eq!(ops["CostCenter"], Value::Object(json!("42")));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = json!({"cidrBlock": "10.0.0.0/16", "someNewField": {"x": 1}});
        let vcn = decode_model(&network::VCN, &raw).unwrap();
        assert_eq!(vcn.get_str("cidr_block"), Some("10.0.0.0/16"));
    }

    #[test]
    fn test_depth_limit() {
        let mut raw = json!({"instanceType": "compute"});
        for _ in 0..20 {
            raw = json!({"instanceType": "instance_options", "options": [raw]});
        }
        let options = DecodeOptions::default().with_max_depth(8);
        let err = decode_model_with_options(&compute::INSTANCE_CONFIGURATION_INSTANCE_DETAILS, &raw, &options)
            .unwrap_err();
        assert_eq!(err, DecodeError::DepthExceeded { max: 8 });

        let decoded = decode_model(&compute::INSTANCE_CONFIGURATION_INSTANCE_DETAILS, &raw).unwrap();
        assert_eq!(decoded.descriptor(), &compute::COMPUTE_INSTANCE_OPTIONS);
    }

    #[test]
    fn test_json_text_entry_point() {
        let vcn = decode_json_str(&network::VCN, r#"{"id": "ocid1.vcn.oc1.phx.aaaa"}"#).unwrap();
        assert_eq!(vcn.get_str("id"), Some("ocid1.vcn.oc1.phx.aaaa"));

        assert!(matches!(
            decode_json_str(&network::VCN, "{not json"),
            Err(DecodeError::InvalidJson(_))
        ));
        assert_eq!(
            decode_json_str(&network::VCN, "[]"),
            Err(DecodeError::NotAnObject { model: "Vcn" })
        );
    }
}
