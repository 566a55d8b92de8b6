//! JSON encoding/decoding for model records.
//!
//! Decoding resolves polymorphic payloads to their concrete subtype, then
//! walks the model's declared fields, converting each raw value according to
//! its semantic type. Encoding is the inverse and writes wire keys only.

pub mod decode;
pub mod encode;
pub mod resolve;

pub use decode::{
    decode_json_str, decode_json_str_with_options, decode_model, decode_model_with_options,
    DecodeOptions,
};
pub use encode::{
    content_hash, encode_json_string, encode_json_string_with_options, encode_model,
    encode_model_with_options, EncodeOptions,
};
pub use resolve::resolve_subtype;
