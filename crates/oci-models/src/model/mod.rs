//! Data model types.
//!
//! - Descriptors (static per-type metadata)
//! - Fields (three-state slots)
//! - Values and records (model instances)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod descriptor;
pub mod field;
pub mod record;
pub mod value;

pub use builder::RecordBuilder;
pub use descriptor::{
    DefaultValue, Discriminator, EnumPolicy, EnumType, FieldDescriptor, ModelDescriptor, Primitive,
    SemanticType,
};
pub use field::Field;
pub use record::Record;
pub use value::Value;
