//! Enum guard: admits, downgrades or rejects values of enum fields.

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::ValidationError;
use crate::limits::UNKNOWN_ENUM_VALUE;
use crate::model::{EnumPolicy, EnumType};

/// Checks `candidate` against `enum_type` for `model.field`.
///
/// Members pass unchanged. Other values are rejected under
/// [`EnumPolicy::Strict`] and replaced by the `UNKNOWN_ENUM_VALUE` sentinel
/// under [`EnumPolicy::Lenient`], reporting one diagnostic to `sink`. A
/// lenient field already holding the sentinel keeps it silently.
pub fn enum_guard(
    model: &'static str,
    field: &'static str,
    enum_type: &'static EnumType,
    policy: EnumPolicy,
    candidate: &str,
    sink: &dyn DiagnosticSink,
) -> Result<String, ValidationError> {
    if enum_type.contains(candidate)
        || (policy == EnumPolicy::Lenient && candidate == UNKNOWN_ENUM_VALUE)
    {
        return Ok(candidate.to_string());
    }

    match policy {
        EnumPolicy::Strict => Err(ValidationError::InvalidEnumValue {
            model,
            field,
            value: candidate.to_string(),
            allowed: enum_type.values,
        }),
        EnumPolicy::Lenient => {
            sink.report(Diagnostic::EnumDowngraded {
                model,
                field,
                value: candidate.to_string(),
            });
            Ok(UNKNOWN_ENUM_VALUE.to_string())
        }
    }
}
