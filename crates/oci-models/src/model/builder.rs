//! Builder API for ergonomic record construction.
//!
//! Provides a fluent interface; the first invalid assignment is reported by
//! [`RecordBuilder::build`].
//!
//! # Example
//!
//! ```rust
//! use oci_models::catalog::compute::{LAUNCH_INSTANCE_DETAILS, INSTANCE_SOURCE_VIA_IMAGE_DETAILS};
//! use oci_models::model::builder::RecordBuilder;
//!
//! let details = RecordBuilder::new(&LAUNCH_INSTANCE_DETAILS)
//!     .set("availability_domain", "Uocm:PHX-AD-1")
//!     .set("compartment_id", "ocid1.compartment.oc1..aaaa")
//!     .set("shape", "VM.Standard.E4.Flex")
//!     .nested("source_details", &INSTANCE_SOURCE_VIA_IMAGE_DETAILS, |s| s
//!         .set("image_id", "ocid1.image.oc1.phx.aaaa")
//!     )
//!     .null("display_name")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(details.get_record("source_details").unwrap().get_str("source_type"), Some("image"));
//! ```

use crate::error::ValidationError;
use crate::model::descriptor::ModelDescriptor;
use crate::model::{Record, Value};

/// Builder for constructing a [`Record`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
    error: Option<ValidationError>,
}

impl RecordBuilder {
    /// Creates a builder for `descriptor`. Discriminator fields are preset.
    pub fn new(descriptor: &'static ModelDescriptor) -> Self {
        Self {
            record: Record::new(descriptor),
            error: None,
        }
    }

    /// Sets a field.
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            self.error = self.record.set(name, value).err();
        }
        self
    }

    /// Sets a field only when `value` is `Some`; `None` leaves it absent.
    pub fn set_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Sets a field to an explicit null.
    pub fn null(mut self, name: &str) -> Self {
        if self.error.is_none() {
            self.error = self.record.set_null(name).err();
        }
        self
    }

    /// Sets a field to a nested record built with `f`.
    pub fn nested<F>(self, name: &str, descriptor: &'static ModelDescriptor, f: F) -> Self
    where
        F: FnOnce(RecordBuilder) -> RecordBuilder,
    {
        let inner = f(RecordBuilder::new(descriptor));
        match inner.build() {
            Ok(record) => self.set(name, record),
            Err(err) => self.fail(err),
        }
    }

    /// Appends a nested record built with `f` to a list field.
    pub fn push<F>(mut self, name: &str, descriptor: &'static ModelDescriptor, f: F) -> Self
    where
        F: FnOnce(RecordBuilder) -> RecordBuilder,
    {
        let inner = match f(RecordBuilder::new(descriptor)).build() {
            Ok(record) => record,
            Err(err) => return self.fail(err),
        };
        let mut items = self
            .record
            .get_list(name)
            .map(<[Value]>::to_vec)
            .unwrap_or_default();
        items.push(Value::from(inner));
        if self.error.is_none() {
            self.error = self.record.set(name, Value::List(items)).err();
        }
        self
    }

    /// Returns the record, or the first validation error encountered.
    pub fn build(self) -> Result<Record, ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.record),
        }
    }

    fn fail(mut self, err: ValidationError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::network::{
        CREATE_DHCP_DETAILS, DHCP_DNS_OPTION, DHCP_SEARCH_DOMAIN_OPTION,
    };

    #[test]
    fn test_builds_polymorphic_list() {
        let details = RecordBuilder::new(&CREATE_DHCP_DETAILS)
            .set("compartment_id", "ocid1.compartment.oc1..aaaa")
            .set("vcn_id", "ocid1.vcn.oc1.phx.aaaa")
            .push("options", &DHCP_DNS_OPTION, |o| o
                .set("server_type", "CustomDnsServer")
                .set("custom_dns_servers", vec!["1.1.1.1"])
            )
            .push("options", &DHCP_SEARCH_DOMAIN_OPTION, |o| o
                .set("search_domain_names", vec!["example.com"])
            )
            .build()
            .unwrap();

        let options = details.get_list("options").unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].as_record().unwrap().get_str("type"), Some("DomainNameServer"));
        assert_eq!(options[1].as_record().unwrap().get_str("type"), Some("SearchDomain"));
    }

    #[test]
    fn test_first_error_wins() {
        let result = RecordBuilder::new(&CREATE_DHCP_DETAILS)
            .set("domain_name_type", "NOT_A_REAL_VALUE")
            .set("unknown", "x")
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidEnumValue { field: "domain_name_type", .. })
        ));
    }

    #[test]
    fn test_nested_error_propagates() {
        let result = RecordBuilder::new(&CREATE_DHCP_DETAILS)
            .push("options", &DHCP_DNS_OPTION, |o| o.set("server_type", 7))
            .build();
        assert!(matches!(result, Err(ValidationError::TypeMismatch { .. })));
    }
}
