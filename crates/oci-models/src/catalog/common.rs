//! Types shared across resource families.

use crate::model::descriptor::{OBJECT, STRING_MAP};
use crate::model::SemanticType;

/// `dict(str, object)`
pub const OBJECT_MAP: SemanticType = SemanticType::Map(&OBJECT);

/// `freeformTags`: `dict(str, str)`
pub const FREEFORM_TAGS: SemanticType = STRING_MAP;

/// `definedTags`: namespace to `dict(str, object)`
pub const DEFINED_TAGS: SemanticType = SemanticType::Map(&OBJECT_MAP);
