//! Limits applied while decoding untrusted payloads.

/// Maximum nesting depth of models, lists and maps within one payload.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum size in bytes of JSON text accepted by `decode_json_str`.
pub const MAX_JSON_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Sentinel stored in lenient enum fields that received an unrecognized value.
pub const UNKNOWN_ENUM_VALUE: &str = "UNKNOWN_ENUM_VALUE";
