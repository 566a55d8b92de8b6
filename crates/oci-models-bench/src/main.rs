//! Benchmark for model decoding and encoding using synthetic API payloads.
//!
//! Usage: `bench-models [count] [--json]`
//!
//! Generates `count` instance and volume attachment payloads shaped like
//! list responses, then times decode, encode and canonical encode.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use oci_models::catalog::block_storage::VOLUME_ATTACHMENT;
use oci_models::catalog::compute::INSTANCE;
use oci_models::{
    CollectingSink, DecodeOptions, Diagnostic, EncodeOptions, ModelDescriptor, Record,
    decode_model_with_options, encode_model, encode_model_with_options,
};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DEFAULT_COUNT: usize = 10_000;
const ITERS: u32 = 10;

// =============================================================================
// PAYLOAD GENERATION
// =============================================================================

fn ocid(kind: &str) -> String {
    format!("ocid1.{}.oc1.phx.{}", kind, Uuid::new_v4().simple())
}

const SHAPES: &[&str] = &["VM.Standard.E4.Flex", "VM.Standard3.Flex", "BM.Standard2.52"];

// Includes a state newer than the models know about.
const INSTANCE_STATES: &[&str] = &["RUNNING", "STOPPED", "PROVISIONING", "MIGRATING"];

// Includes an attachment type newer than the models know about.
const ATTACHMENT_TYPES: &[&str] = &["iscsi", "paravirtualized", "emulated", "nvme"];

fn instance_payload(i: usize, compartment: &str) -> JsonValue {
    let source = if i % 3 == 0 {
        json!({"sourceType": "bootVolume", "bootVolumeId": ocid("bootvolume")})
    } else {
        json!({
            "sourceType": "image",
            "imageId": ocid("image"),
            "bootVolumeSizeInGBs": 50 + (i % 200),
        })
    };
    json!({
        "availabilityDomain": format!("Uocm:PHX-AD-{}", i % 3 + 1),
        "compartmentId": compartment,
        "definedTags": {"Operations": {"CostCenter": format!("{}", 1000 + i % 17)}},
        "displayName": format!("instance-{:06}", i),
        "extendedMetadata": {"bench": {"index": i, "batch": Uuid::now_v7().to_string()}},
        "faultDomain": format!("FAULT-DOMAIN-{}", i % 3 + 1),
        "freeformTags": {"env": if i % 2 == 0 { "prod" } else { "dev" }},
        "id": ocid("instance"),
        "launchMode": "PARAVIRTUALIZED",
        "launchOptions": {
            "bootVolumeType": "PARAVIRTUALIZED",
            "firmware": "UEFI_64",
            "networkType": "VFIO",
            "remoteDataVolumeType": "PARAVIRTUALIZED",
            "isPvEncryptionInTransitEnabled": i % 5 == 0
        },
        "lifecycleState": INSTANCE_STATES[i % INSTANCE_STATES.len()],
        "metadata": {"ssh_authorized_keys": "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAA bench"},
        "region": "phx",
        "shape": SHAPES[i % SHAPES.len()],
        "shapeConfig": {"ocpus": (i % 8 + 1) as f64, "memoryInGBs": ((i % 8 + 1) * 16) as f64},
        "sourceDetails": source,
        "timeCreated": "2024-03-15T14:30:00.000Z",
        "timeMaintenanceRebootDue": null
    })
}

fn attachment_payload(i: usize, compartment: &str) -> JsonValue {
    let attachment_type = ATTACHMENT_TYPES[i % ATTACHMENT_TYPES.len()];
    let mut payload = json!({
        "attachmentType": attachment_type,
        "availabilityDomain": format!("Uocm:PHX-AD-{}", i % 3 + 1),
        "compartmentId": compartment,
        "device": format!("/dev/oracleoci/oraclevd{}", (b'b' + (i % 24) as u8) as char),
        "displayName": format!("attachment-{:06}", i),
        "id": ocid("volumeattachment"),
        "instanceId": ocid("instance"),
        "isReadOnly": false,
        "isShareable": i % 7 == 0,
        "lifecycleState": "ATTACHED",
        "timeCreated": "2024-03-15T14:31:07.250Z",
        "volumeId": ocid("volume")
    });
    if attachment_type == "iscsi" {
        if let Some(fields) = payload.as_object_mut() {
            fields.insert("ipv4".to_string(), json!(format!("169.254.2.{}", i % 250 + 2)));
            fields.insert("iqn".to_string(), json!(format!("iqn.2015-12.com.oracleiaas:{}", i)));
            fields.insert("port".to_string(), json!(3260));
        }
    }
    payload
}

// =============================================================================
// REPORT
// =============================================================================

#[derive(Debug, Serialize)]
struct Phase {
    avg_ms: f64,
    mb_per_s: f64,
}

impl Phase {
    fn new(elapsed: Duration, bytes: usize) -> Self {
        Self {
            avg_ms: elapsed.as_secs_f64() * 1000.0,
            mb_per_s: (bytes as f64 / 1_000_000.0) / elapsed.as_secs_f64(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    payloads: usize,
    json_bytes: usize,
    iterations: u32,
    decode: Phase,
    encode: Phase,
    encode_canonical: Phase,
    models: BTreeMap<&'static str, usize>,
    enum_downgrades: usize,
    unknown_subtypes: usize,
}

fn print_report(report: &Report) {
    println!("Payloads: {} ({} bytes of JSON)", report.payloads, report.json_bytes);
    for (label, phase) in [
        ("Decode", &report.decode),
        ("Encode", &report.encode),
        ("Encode (canonical)", &report.encode_canonical),
    ] {
        println!(
            "\n{}: {:.2} ms (avg of {} iterations)",
            label, phase.avg_ms, report.iterations
        );
        println!("  Throughput: {:.2} MB/s", phase.mb_per_s);
    }

    println!("\n=== Decoded Models ===");
    for (name, count) in &report.models {
        println!("  {}: {}", name, count);
    }
    println!("\n=== Diagnostics ===");
    println!("  Enum values downgraded: {}", report.enum_downgrades);
    println!("  Unknown subtypes: {}", report.unknown_subtypes);
}

// =============================================================================
// MAIN
// =============================================================================

type Payload = (&'static ModelDescriptor, JsonValue);

fn decode_all(payloads: &[Payload], options: &DecodeOptions<'_>) -> Vec<Record> {
    payloads
        .iter()
        .map(|(model, raw)| {
            decode_model_with_options(model, raw, options).expect("Failed to decode")
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("info".parse().expect("valid directive")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let count = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(|a| a.parse().expect("count must be a number"))
        .unwrap_or(DEFAULT_COUNT);

    let compartment = ocid("compartment");
    let generate_start = Instant::now();
    let payloads: Vec<Payload> = (0..count)
        .map(|i| -> Payload {
            if i % 2 == 0 {
                (&INSTANCE, instance_payload(i, &compartment))
            } else {
                (&VOLUME_ATTACHMENT, attachment_payload(i, &compartment))
            }
        })
        .collect();
    let json_bytes: usize = payloads
        .iter()
        .map(|(_, raw)| serde_json::to_string(raw).map(|s| s.len()).unwrap_or(0))
        .sum();
    tracing::info!(count, json_bytes, elapsed = ?generate_start.elapsed(), "generated payloads");

    // Diagnostics are collected once, outside the timed loop.
    let sink = CollectingSink::new();
    let records = decode_all(&payloads, &DecodeOptions::default().with_sink(&sink));
    let diagnostics = sink.take();

    let quiet = DecodeOptions::default();
    let decode_start = Instant::now();
    for _ in 0..ITERS {
        let decoded = decode_all(&payloads, &quiet);
        assert_eq!(decoded.len(), records.len());
    }
    let decode_time = decode_start.elapsed() / ITERS;

    let encode_start = Instant::now();
    for _ in 0..ITERS {
        for record in &records {
            encode_model(record).expect("Failed to encode");
        }
    }
    let encode_time = encode_start.elapsed() / ITERS;

    let canonical_start = Instant::now();
    for _ in 0..ITERS {
        for record in &records {
            encode_model_with_options(record, EncodeOptions::canonical())
                .expect("Failed to encode canonical");
        }
    }
    let canonical_time = canonical_start.elapsed() / ITERS;

    // Verify decode(encode(x)) == x for the whole batch
    for record in &records {
        let wire = JsonValue::Object(encode_model(record).expect("Failed to encode"));
        let again = decode_model_with_options(record.descriptor(), &wire, &quiet)
            .expect("Failed to decode re-encoded record");
        assert_eq!(&again, record, "Round trip should preserve records");
    }

    let mut models = BTreeMap::new();
    for record in &records {
        *models.entry(record.model_name()).or_insert(0) += 1;
    }

    let report = Report {
        payloads: count,
        json_bytes,
        iterations: ITERS,
        decode: Phase::new(decode_time, json_bytes),
        encode: Phase::new(encode_time, json_bytes),
        encode_canonical: Phase::new(canonical_time, json_bytes),
        models,
        enum_downgrades: diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::EnumDowngraded { .. }))
            .count(),
        unknown_subtypes: diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnknownSubtype { .. }))
            .count(),
    };

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("Failed to serialize report")
        );
    } else {
        print_report(&report);
    }
}
