//! Data models for cloud infrastructure API resources.
//!
//! This crate provides descriptor-driven records for compute, networking and
//! block storage request and response shapes, with JSON decoding, encoding
//! and validation.
//!
//! # Overview
//!
//! Every model is described by a static [`ModelDescriptor`]: its fields,
//! their camelCase wire keys and semantic types, and for polymorphic
//! families a discriminator table. A single codec serves all models:
//! - **Subtype resolution**: a payload decoded as a base type is dispatched
//!   on its discriminator (`type`, `sourceType`, `instanceType`,
//!   `attachmentType`) to the concrete subtype; unknown values fall back to
//!   the base
//! - **Three-state fields**: absent and explicit `null` are kept apart and
//!   re-encoded faithfully
//! - **Enum policies**: request models reject unknown enum values, response
//!   models store them as `UNKNOWN_ENUM_VALUE`
//!
//! # Quick Start
//!
//! ```rust
//! use oci_models::catalog::network::{DHCP_DNS_OPTION, DHCP_OPTION};
//! use oci_models::codec::{decode_model, encode_model};
//! use serde_json::json;
//!
//! let raw = json!({"type": "DomainNameServer", "customDnsServers": ["1.1.1.1"]});
//! let option = decode_model(&DHCP_OPTION, &raw).unwrap();
//! assert!(option.is_instance_of(&DHCP_DNS_OPTION));
//! assert_eq!(option.get_str_list("custom_dns_servers"), Some(vec!["1.1.1.1"]));
//!
//! let wire = encode_model(&option).unwrap();
//! assert_eq!(wire["type"], "DomainNameServer");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Descriptors, fields, values, records and builders
//! - [`codec`]: JSON decoding and encoding, subtype resolution
//! - [`validate`]: Enum guard and required-field validation
//! - [`catalog`]: Descriptors for the supported resources
//! - [`diagnostic`]: Non-fatal decode diagnostics and sinks
//! - [`error`]: Error types
//! - [`limits`]: Limits for decoding untrusted input

pub mod catalog;
pub mod codec;
pub mod diagnostic;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    content_hash, decode_json_str, decode_json_str_with_options, decode_model,
    decode_model_with_options, encode_json_string, encode_model, encode_model_with_options,
    resolve_subtype, DecodeOptions, EncodeOptions,
};
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, NoopSink, TracingSink};
pub use error::{CatalogError, DecodeError, EncodeError, ErrorCode, ValidationError};
pub use model::{
    DefaultValue, Discriminator, EnumPolicy, EnumType, Field, FieldDescriptor, ModelDescriptor,
    Primitive, Record, RecordBuilder, SemanticType, Value,
};
pub use util::DateTime;
pub use validate::{enum_guard, validate_record};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
