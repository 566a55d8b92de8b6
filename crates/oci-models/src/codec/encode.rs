//! Encoding of records into their JSON wire shape.

use serde_json::{Map, Number, Value as JsonValue};
use sha2::{Digest, Sha256};

use crate::error::EncodeError;
use crate::model::{Field, FieldDescriptor, Record, Value};

/// Options for encoding records.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Enable canonical encoding mode.
    ///
    /// When enabled, object keys are sorted at every level, including keys
    /// inside free-form `object` values whose order otherwise follows the
    /// decoded input. Equal records then produce identical text.
    ///
    /// Use canonical mode when computing content hashes or comparing
    /// payloads byte for byte.
    pub canonical: bool,
}

impl EncodeOptions {
    /// Creates default (non-canonical) encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates canonical encoding options.
    pub fn canonical() -> Self {
        Self { canonical: true }
    }
}

/// Encodes a record as a wire mapping: wire keys only, absent fields
/// omitted, null fields written as `null`.
pub fn encode_model(record: &Record) -> Result<Map<String, JsonValue>, EncodeError> {
    encode_model_with_options(record, EncodeOptions::default())
}

/// Encodes a record with explicit options.
pub fn encode_model_with_options(
    record: &Record,
    options: EncodeOptions,
) -> Result<Map<String, JsonValue>, EncodeError> {
    let mut out = Map::new();
    for (field, slot) in record.fields() {
        match slot {
            Field::Absent => {}
            Field::Null => {
                out.insert(field.wire_key.to_string(), JsonValue::Null);
            }
            Field::Present(value) => {
                let encoded = encode_value(record.model_name(), field, value, options)?;
                out.insert(field.wire_key.to_string(), encoded);
            }
        }
    }
    if options.canonical {
        out = sorted(out);
    }
    Ok(out)
}

/// Encodes a record as compact JSON text.
pub fn encode_json_string(record: &Record) -> Result<String, EncodeError> {
    encode_json_string_with_options(record, EncodeOptions::default())
}

/// Encodes a record as compact JSON text with explicit options.
pub fn encode_json_string_with_options(
    record: &Record,
    options: EncodeOptions,
) -> Result<String, EncodeError> {
    let map = encode_model_with_options(record, options)?;
    serde_json::to_string(&map).map_err(|e| EncodeError::Json(e.to_string()))
}

/// Returns the SHA-256 digest of the canonical encoding of `record`.
pub fn content_hash(record: &Record) -> Result<[u8; 32], EncodeError> {
    let text = encode_json_string_with_options(record, EncodeOptions::canonical())?;
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    Ok(hash)
}

fn encode_value(
    model: &'static str,
    field: &'static FieldDescriptor,
    value: &Value,
    options: EncodeOptions,
) -> Result<JsonValue, EncodeError> {
    let encoded = match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or(EncodeError::NonFiniteFloat {
                model,
                field: field.name,
            })?,
        Value::String(s) => JsonValue::String(s.clone()),
        Value::DateTime(dt) => JsonValue::String(dt.to_string()),
        Value::Model(record) => JsonValue::Object(encode_model_with_options(record, options)?),
        Value::List(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| encode_value(model, field, item, options))
                .collect::<Result<_, _>>()?,
        ),
        Value::Map(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(key, item)| {
                    encode_value(model, field, item, options).map(|encoded| (key.clone(), encoded))
                })
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(raw) if options.canonical => canonicalize(raw),
        Value::Object(raw) => raw.clone(),
    };
    Ok(encoded)
}

fn sorted(map: Map<String, JsonValue>) -> Map<String, JsonValue> {
    let mut entries: Vec<_> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}

fn canonicalize(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => JsonValue::Object(sorted(
            map.iter()
                .map(|(key, item)| (key.clone(), canonicalize(item)))
                .collect(),
        )),
        JsonValue::Array(items) => JsonValue::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::catalog::compute::{
        INSTANCE_SOURCE_VIA_BOOT_VOLUME_DETAILS, INSTANCE_SOURCE_VIA_IMAGE_DETAILS,
        LAUNCH_INSTANCE_DETAILS, LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS, LAUNCH_MODE,
    };
    use crate::catalog::block_storage::ATTACH_ISCSI_VOLUME_DETAILS;
    use crate::catalog::network::{
        CREATE_DHCP_DETAILS, DHCP_DNS_OPTION, DHCP_SEARCH_DOMAIN_OPTION, DNS_SERVER_TYPE,
        DOMAIN_NAME_TYPE, NETWORK_LIFECYCLE_STATE, VCN,
    };
    use crate::codec::{decode_json_str, decode_model, decode_model_with_options, DecodeOptions};
    use crate::limits::UNKNOWN_ENUM_VALUE;
    use crate::model::RecordBuilder;
    use crate::util::DateTime;

    #[test]
    fn test_unset_vs_null() {
        let mut vcn = Record::new(&VCN);
        vcn.set("id", "ocid1.vcn.oc1.phx.aaaa").unwrap();
        let wire = encode_model(&vcn).unwrap();
        assert!(!wire.contains_key("displayName"));

        vcn.set_null("display_name").unwrap();
        let wire = encode_model(&vcn).unwrap();
        assert_eq!(wire.get("displayName"), Some(&JsonValue::Null));
        assert_eq!(
            JsonValue::Object(wire),
            json!({"displayName": null, "id": "ocid1.vcn.oc1.phx.aaaa"})
        );
    }

    #[test]
    fn test_nested_records_use_wire_keys() {
        let details = RecordBuilder::new(&LAUNCH_INSTANCE_DETAILS)
            .set("compartment_id", "ocid1.compartment.oc1..aaaa")
            .nested("source_details", &INSTANCE_SOURCE_VIA_IMAGE_DETAILS, |s| s
                .set("image_id", "ocid1.image.oc1.phx.aaaa")
                .set("boot_volume_size_in_gbs", 100)
            )
            .nested("shape_config", &LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS, |c| c
                .set("ocpus", 2)
                .set("memory_in_gbs", 16.5)
            )
            .build()
            .unwrap();

        assert_eq!(
            JsonValue::Object(encode_model(&details).unwrap()),
            json!({
                "compartmentId": "ocid1.compartment.oc1..aaaa",
                "shapeConfig": {"ocpus": 2.0, "memoryInGBs": 16.5},
                "sourceDetails": {
                    "sourceType": "image",
                    "bootVolumeSizeInGBs": 100,
                    "imageId": "ocid1.image.oc1.phx.aaaa"
                }
            })
        );
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut vcn = Record::new(&VCN);
        vcn.set("vcn_domain_name", "prod.oraclevcn.com").unwrap();
        vcn.set("cidr_block", "10.0.0.0/16").unwrap();
        assert_eq!(
            encode_json_string(&vcn).unwrap(),
            r#"{"cidrBlock":"10.0.0.0/16","vcnDomainName":"prod.oraclevcn.com"}"#
        );
        assert_eq!(vcn.to_string(), encode_json_string(&vcn).unwrap());
    }

    #[test]
    fn test_datetime_encoded_as_rfc3339() {
        let mut vcn = Record::new(&VCN);
        vcn.set("time_created", DateTime::from_epoch_micros(1_710_513_000_000_000))
            .unwrap();
        let wire = encode_model(&vcn).unwrap();
        assert_eq!(wire["timeCreated"], json!("2024-03-15T14:30:00Z"));
    }

    #[test]
    fn test_canonical_sorts_free_form_objects() {
        let a = decode_json_str(
            &LAUNCH_INSTANCE_DETAILS,
            r#"{"extendedMetadata": {"agent": {"z": 1, "a": 2}}, "shape": "VM.Standard2.1"}"#,
        )
        .unwrap();
        let b = decode_json_str(
            &LAUNCH_INSTANCE_DETAILS,
            r#"{"shape": "VM.Standard2.1", "extendedMetadata": {"agent": {"a": 2, "z": 1}}}"#,
        )
        .unwrap();

        // Plain encoding keeps the order the object arrived in.
        assert_ne!(encode_json_string(&a).unwrap(), encode_json_string(&b).unwrap());

        let canonical_a = encode_json_string_with_options(&a, EncodeOptions::canonical()).unwrap();
        let canonical_b = encode_json_string_with_options(&b, EncodeOptions::canonical()).unwrap();
        assert_eq!(canonical_a, canonical_b);
        assert_eq!(
            canonical_a,
            r#"{"extendedMetadata":{"agent":{"a":2,"z":1}},"shape":"VM.Standard2.1"}"#
        );
        assert_eq!(content_hash(&a).unwrap(), content_hash(&b).unwrap());
    }

    #[test]
    fn test_content_hash_tracks_content() {
        let mut vcn = Record::new(&VCN);
        vcn.set("cidr_block", "10.0.0.0/16").unwrap();
        let before = content_hash(&vcn).unwrap();
        vcn.set_null("display_name").unwrap();
        assert_ne!(before, content_hash(&vcn).unwrap());
    }

    #[test]
    fn test_defaulted_fields_roundtrip_without_defaults() {
        let attach = RecordBuilder::new(&ATTACH_ISCSI_VOLUME_DETAILS)
            .set("instance_id", "ocid1.instance.oc1.phx.aaaa")
            .set("volume_id", "ocid1.volume.oc1.phx.aaaa")
            .build()
            .unwrap();
        let wire = JsonValue::Object(encode_model(&attach).unwrap());

        let options = DecodeOptions {
            apply_defaults: false,
            ..DecodeOptions::default()
        };
        let decoded = decode_model_with_options(&ATTACH_ISCSI_VOLUME_DETAILS, &wire, &options);
        assert_eq!(decoded.unwrap(), attach);

        let defaulted = decode_model(&ATTACH_ISCSI_VOLUME_DETAILS, &wire).unwrap();
        assert_eq!(defaulted.get_bool("is_shareable"), Some(false));
    }

    // =========================================================================
    // ROUND-TRIP PROPERTIES
    // =========================================================================

    fn ocid(kind: &'static str) -> impl Strategy<Value = String> {
        "[a-z0-9]{8,24}".prop_map(move |suffix| format!("ocid1.{kind}.oc1..{suffix}"))
    }

    fn field_state<S: Strategy>(value: S) -> impl Strategy<Value = Field<S::Value>>
    where
        S::Value: Clone,
    {
        prop_oneof![
            Just(Field::Absent),
            Just(Field::Null),
            value.prop_map(Field::Present),
        ]
    }

    fn assign(record: &mut Record, name: &str, state: Field<impl Into<Value>>) {
        match state {
            Field::Absent => {}
            Field::Null => record.set_null(name).unwrap(),
            Field::Present(v) => record.set(name, v).unwrap(),
        }
    }

    fn datetime() -> impl Strategy<Value = DateTime> {
        (0i64..4_102_444_800_000_000, -720i16..=840).prop_map(|(epoch_micros, offset_min)| {
            DateTime {
                epoch_micros,
                offset_min,
            }
        })
    }

    fn vcn() -> impl Strategy<Value = Record> {
        let mut states = NETWORK_LIFECYCLE_STATE.values.to_vec();
        states.push(UNKNOWN_ENUM_VALUE);
        (
            ocid("vcn"),
            field_state("[a-zA-Z0-9 _-]{0,24}"),
            prop::collection::vec("10\\.[0-9]{1,3}\\.0\\.0/16", 0..4),
            prop::sample::select(states),
            field_state(prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..4)),
            field_state(datetime()),
        )
            .prop_map(|(id, name, cidrs, state, tags, created)| {
                let mut vcn = Record::new(&VCN);
                vcn.set("id", id).unwrap();
                assign(&mut vcn, "display_name", name);
                vcn.set("cidr_blocks", cidrs).unwrap();
                vcn.set("lifecycle_state", state).unwrap();
                assign(&mut vcn, "freeform_tags", tags);
                assign(&mut vcn, "time_created", created);
                vcn
            })
    }

    fn dhcp_details() -> impl Strategy<Value = Record> {
        let dns = (
            prop::sample::select(DNS_SERVER_TYPE.values.to_vec()),
            prop::collection::vec("[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}", 0..3),
        )
            .prop_map(|(server_type, servers)| {
                RecordBuilder::new(&DHCP_DNS_OPTION)
                    .set("server_type", server_type)
                    .set("custom_dns_servers", servers)
                    .build()
                    .unwrap()
            });
        let search = prop::collection::vec("[a-z]{1,10}\\.example\\.com", 1..3).prop_map(|names| {
            RecordBuilder::new(&DHCP_SEARCH_DOMAIN_OPTION)
                .set("search_domain_names", names)
                .build()
                .unwrap()
        });
        (
            ocid("compartment"),
            prop::collection::vec(prop_oneof![dns, search], 0..4),
            field_state(prop::sample::select(DOMAIN_NAME_TYPE.values.to_vec())),
        )
            .prop_map(|(compartment, options, domain_type)| {
                let mut details = Record::new(&CREATE_DHCP_DETAILS);
                details.set("compartment_id", compartment).unwrap();
                details.set("options", options).unwrap();
                assign(&mut details, "domain_name_type", domain_type);
                details
            })
    }

    fn launch_details() -> impl Strategy<Value = Record> {
        let metadata_value = prop_oneof![
            any::<i64>().prop_map(JsonValue::from),
            any::<bool>().prop_map(JsonValue::from),
            "[a-z ]{0,12}".prop_map(JsonValue::from),
        ];
        (
            ocid("compartment"),
            any::<bool>(),
            ocid("image"),
            50i64..32_768,
            (1u32..256, 1u32..4096),
            prop::sample::select(LAUNCH_MODE.values.to_vec()),
            prop::collection::btree_map("[a-z_]{1,12}", metadata_value, 0..4),
        )
            .prop_map(
                |(compartment, from_image, source_id, size, (ocpus, memory), mode, metadata)| {
                    let builder = RecordBuilder::new(&LAUNCH_INSTANCE_DETAILS)
                        .set("compartment_id", compartment)
                        .set("launch_mode", mode)
                        .set("extended_metadata", metadata)
                        .nested("shape_config", &LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS, |c| c
                            .set("ocpus", f64::from(ocpus) / 4.0)
                            .set("memory_in_gbs", f64::from(memory) / 2.0)
                        );
                    let builder = if from_image {
                        builder.nested("source_details", &INSTANCE_SOURCE_VIA_IMAGE_DETAILS, |s| s
                            .set("image_id", source_id)
                            .set("boot_volume_size_in_gbs", size)
                        )
                    } else {
                        builder.nested("source_details", &INSTANCE_SOURCE_VIA_BOOT_VOLUME_DETAILS, |s| s
                            .set("boot_volume_id", source_id)
                        )
                    };
                    builder.build().unwrap()
                },
            )
    }

    fn roundtrip(record: &Record) -> Record {
        let wire = JsonValue::Object(encode_model(record).unwrap());
        decode_model(record.descriptor(), &wire).unwrap()
    }

    proptest! {
        #[test]
        fn vcn_roundtrips(vcn in vcn()) {
            prop_assert_eq!(&roundtrip(&vcn), &vcn);
            let text = encode_json_string(&vcn).unwrap();
            prop_assert_eq!(&decode_json_str(&VCN, &text).unwrap(), &vcn);
        }

        #[test]
        fn polymorphic_lists_roundtrip(details in dhcp_details()) {
            prop_assert_eq!(&roundtrip(&details), &details);
        }

        #[test]
        fn floats_survive_json_text(
            ocpus in any::<f64>().prop_filter("finite", |f| f.is_finite()),
        ) {
            let mut config = Record::new(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS);
            config.set("ocpus", ocpus).unwrap();
            let text = encode_json_string(&config).unwrap();
            let decoded = decode_json_str(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS, &text).unwrap();
            prop_assert_eq!(decoded.get_f64("ocpus").map(f64::to_bits), Some(ocpus.to_bits()));
            prop_assert_eq!(&decoded, &config);
        }

        #[test]
        fn nested_models_roundtrip(details in launch_details()) {
            let decoded = roundtrip(&details);
            prop_assert_eq!(&decoded, &details);
            prop_assert_eq!(content_hash(&decoded).unwrap(), content_hash(&details).unwrap());
        }
    }

    #[test]
    fn test_shortest_float_text_parses_back() {
        let mut config = Record::new(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS);
        for ocpus in [985.6906946328695, 1.0715660391465826e-75, 0.1 + 0.2] {
            config.set("ocpus", ocpus).unwrap();
            let text = encode_json_string(&config).unwrap();
            let decoded = decode_json_str(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS, &text).unwrap();
            assert_eq!(decoded.get_f64("ocpus").map(f64::to_bits), Some(ocpus.to_bits()), "{text}");
        }
    }

    #[test]
    fn test_map_of_objects_encoded_sorted() {
        let mut metadata = BTreeMap::new();
        metadata.insert("b".to_string(), json!(1));
        metadata.insert("a".to_string(), json!([true]));
        let details = RecordBuilder::new(&LAUNCH_INSTANCE_DETAILS)
            .set("extended_metadata", metadata)
            .build()
            .unwrap();
        assert_eq!(
            encode_json_string(&details).unwrap(),
            r#"{"extendedMetadata":{"a":[true],"b":1}}"#
        );
    }
}
