//! Non-fatal decode diagnostics and the sinks that receive them.
//!
//! Decoding never logs on its own. Callers pass a [`DiagnosticSink`] through
//! [`DecodeOptions`](crate::codec::DecodeOptions); the default discards
//! everything.

use std::fmt;
use std::sync::Mutex;

/// A condition the decoder tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A lenient enum field received a value outside its declared set and was
    /// stored as `UNKNOWN_ENUM_VALUE`.
    EnumDowngraded {
        model: &'static str,
        field: &'static str,
        value: String,
    },
    /// A polymorphic payload named a subtype this crate does not know; the
    /// base model was decoded instead.
    UnknownSubtype {
        model: &'static str,
        discriminator: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EnumDowngraded {
                model,
                field,
                value,
            } => write!(
                f,
                "{model}.{field}: unrecognized value {value:?} mapped to UNKNOWN_ENUM_VALUE"
            ),
            Diagnostic::UnknownSubtype {
                model,
                discriminator,
            } => write!(
                f,
                "{model}: unrecognized subtype {discriminator:?}, decoded as {model}"
            ),
        }
    }
}

/// Receives diagnostics emitted during decoding.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::EnumDowngraded { model, field, value } => {
                tracing::warn!(model, field, value = %value, "{}", diagnostic)
            }
            Diagnostic::UnknownSubtype {
                model,
                discriminator,
            } => tracing::warn!(model, discriminator = %discriminator, "{}", diagnostic),
        }
    }
}

/// Buffers diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.diagnostics.lock() {
            Ok(mut guard) => guard.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_drains() {
        let sink = CollectingSink::new();
        sink.report(Diagnostic::UnknownSubtype {
            model: "DhcpOption",
            discriminator: "Future".to_string(),
        });
        assert_eq!(sink.take().len(), 1);
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::EnumDowngraded {
            model: "Vcn",
            field: "lifecycle_state",
            value: "MIGRATING".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "Vcn.lifecycle_state: unrecognized value \"MIGRATING\" mapped to UNKNOWN_ENUM_VALUE"
        );
    }
}
