//! Error types for model decoding, encoding and validation.

use thiserror::Error;

/// Error classes shared by every error type in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Both spellings of a field are present
    AmbiguousInput,
    /// E002: Value outside a strict enum's declared set
    InvalidEnumValue,
    /// E003: Value does not match the declared semantic type
    TypeMismatch,
    /// E004: Unknown, missing or misplaced field or model
    SchemaViolation,
    /// E005: Malformed input or exceeded limit
    MalformedInput,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::AmbiguousInput => "E001",
            ErrorCode::InvalidEnumValue => "E002",
            ErrorCode::TypeMismatch => "E003",
            ErrorCode::SchemaViolation => "E004",
            ErrorCode::MalformedInput => "E005",
        }
    }
}

/// Error raised when a value is assigned to, or validated against, a field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("[E002] invalid value {value:?} for {model}.{field}: must be one of {allowed:?}")]
    InvalidEnumValue {
        model: &'static str,
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("[E003] type mismatch for {model}.{field}: expected {expected}")]
    TypeMismatch {
        model: &'static str,
        field: &'static str,
        expected: String,
    },

    #[error("[E003] {model}.{field} must be a finite number")]
    NonFiniteFloat {
        model: &'static str,
        field: &'static str,
    },

    #[error("[E004] {model} has no field named {field:?}")]
    UnknownField { model: &'static str, field: String },

    #[error("[E004] {model}.{field} is required")]
    MissingRequired {
        model: &'static str,
        field: &'static str,
    },

    #[error("[E004] {model}.{field} expects {expected}, found {found}")]
    NotASubtype {
        model: &'static str,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("[E004] {model}.{field} is fixed to {expected:?}, cannot become {found}")]
    DiscriminatorMismatch {
        model: &'static str,
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl ValidationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidEnumValue { .. } => ErrorCode::InvalidEnumValue,
            ValidationError::TypeMismatch { .. } | ValidationError::NonFiniteFloat { .. } => {
                ErrorCode::TypeMismatch
            }
            ValidationError::UnknownField { .. }
            | ValidationError::MissingRequired { .. }
            | ValidationError::NotASubtype { .. }
            | ValidationError::DiscriminatorMismatch { .. } => ErrorCode::SchemaViolation,
        }
    }
}

/// Error during decoding of a wire payload into a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Ambiguous input ===
    #[error("[E001] {model}: cannot specify both {wire_key:?} and {local_key:?}")]
    ConflictingKeys {
        model: &'static str,
        wire_key: &'static str,
        local_key: &'static str,
    },

    // === E002-E004: Field validation ===
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("[E003] invalid date-time for {model}.{field}: {message}")]
    InvalidDateTime {
        model: &'static str,
        field: &'static str,
        message: String,
    },

    // === E005: Malformed input ===
    #[error("[E005] {model} payload must be a JSON object")]
    NotAnObject { model: &'static str },

    #[error("[E005] invalid JSON: {0}")]
    InvalidJson(String),

    #[error("[E005] nesting depth exceeds maximum {max}")]
    DepthExceeded { max: usize },

    #[error("[E005] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::ConflictingKeys { .. } => ErrorCode::AmbiguousInput,
            DecodeError::Validation(err) => err.code(),
            DecodeError::InvalidDateTime { .. } => ErrorCode::TypeMismatch,
            _ => ErrorCode::MalformedInput,
        }
    }
}

/// Error during encoding of a record into its wire shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("[E005] {model}.{field} holds a non-finite float")]
    NonFiniteFloat {
        model: &'static str,
        field: &'static str,
    },

    #[error("[E005] JSON serialization failed: {0}")]
    Json(String),
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::MalformedInput
    }
}

/// Inconsistency between descriptors in the model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("[E004] model name {name:?} is declared more than once")]
    DuplicateModel { name: &'static str },

    #[error("[E004] {model}: discriminator literal {literal:?} maps to more than one subtype")]
    DuplicateDiscriminator {
        model: &'static str,
        literal: &'static str,
    },

    #[error("[E004] {model}: subtype {subtype} is not registered under {literal:?}")]
    InconsistentSubtype {
        model: &'static str,
        subtype: &'static str,
        literal: &'static str,
    },

    #[error("[E004] {model}: discriminator field {field:?} is not declared")]
    MissingDiscriminatorField {
        model: &'static str,
        field: &'static str,
    },
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::SchemaViolation
    }
}
