//! Simple decoder to inspect API payload files.
//!
//! Usage: `decode_file <ModelName> <payload.json>`

use std::fs;

use oci_models::{
    catalog, decode_json_str_with_options, CollectingSink, DecodeOptions, Field, Record, Value,
};

fn format_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("{}", b),
        Value::Integer(i) => format!("{}", i),
        Value::Float(f) => format!("{:.6}", f),
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::DateTime(dt) => format!("DATETIME({})", dt),
        Value::Model(record) => format!("<{}>", record.model_name()),
        Value::List(items) => format!("LIST[{}]", items.len()),
        Value::Map(entries) => format!("DICT[{}]", entries.len()),
        Value::Object(json) => format!("OBJECT({})", json),
    }
}

fn print_record(record: &Record, indent: usize) {
    let pad = " ".repeat(indent);
    for (field, slot) in record.fields() {
        match slot {
            Field::Absent => {}
            Field::Null => println!("{}{} = null", pad, field.name),
            Field::Present(Value::Model(nested)) => {
                println!("{}{}: {}", pad, field.name, nested.model_name());
                print_record(nested, indent + 4);
            }
            Field::Present(Value::List(items)) => {
                println!("{}{}: list of {}", pad, field.name, items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::Model(nested) => {
                            println!("{}  [{}] {}", pad, i, nested.model_name());
                            print_record(nested, indent + 6);
                        }
                        other => println!("{}  [{}] {}", pad, i, format_value(other)),
                    }
                }
            }
            Field::Present(value) => println!("{}{} = {}", pad, field.name, format_value(value)),
        }
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let model_name = args.next().unwrap_or_else(|| "Instance".to_string());
    let path = args.next().unwrap_or_else(|| "instance.json".to_string());

    let model = catalog::lookup(&model_name).unwrap_or_else(|| {
        eprintln!("Unknown model: {}", model_name);
        eprintln!("Known models:");
        for m in catalog::models() {
            eprintln!("  {}", m.name);
        }
        std::process::exit(2);
    });

    println!("Reading: {}", path);
    let data = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let sink = CollectingSink::new();
    let options = DecodeOptions::default().with_sink(&sink);
    let record = decode_json_str_with_options(model, &data, &options).expect("Failed to decode");

    println!("\n=== {} ===", record.model_name());
    if record.model_name() != model.name {
        println!("(resolved from {})", model.name);
    }
    let set = record.fields().filter(|(_, slot)| slot.is_set()).count();
    println!("Fields: {} of {} set", set, record.descriptor().field_count());
    print_record(&record, 2);

    let diagnostics = sink.take();
    if !diagnostics.is_empty() {
        println!("\n=== Diagnostics ({}) ===", diagnostics.len());
        for d in &diagnostics {
            println!("  {}", d);
        }
    }

    match oci_models::validate_record(&record) {
        Ok(()) => println!("\nAll required fields present"),
        Err(e) => println!("\nValidation: {}", e),
    }
}
