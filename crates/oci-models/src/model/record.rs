//! Model instances.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;
use crate::model::descriptor::{FieldDescriptor, ModelDescriptor};
use crate::model::{Field, Value};
use crate::util::DateTime;

/// An instance of a model: one three-state slot per declared field.
///
/// Every present value conforms to its field's semantic type; assignments go
/// through the same checks as decoding.
#[derive(Clone)]
pub struct Record {
    descriptor: &'static ModelDescriptor,
    slots: Vec<Field<Value>>,
}

impl Record {
    /// Creates a record with every field absent, except discriminator fields,
    /// which are preset to this model's literal.
    pub fn new(descriptor: &'static ModelDescriptor) -> Self {
        let mut record = Self::empty(descriptor);
        for (field, literal) in descriptor.discriminator_presets() {
            if let Some((index, _)) = descriptor.field(field) {
                record.slots[index] = Field::Present(Value::String(literal.to_string()));
            }
        }
        record
    }

    /// Creates a record with every field absent.
    pub(crate) fn empty(descriptor: &'static ModelDescriptor) -> Self {
        Self {
            descriptor,
            slots: vec![Field::Absent; descriptor.field_count()],
        }
    }

    pub fn descriptor(&self) -> &'static ModelDescriptor {
        self.descriptor
    }

    pub fn model_name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Returns true if this record's model is `model` or one of its subtypes.
    pub fn is_instance_of(&self, model: &ModelDescriptor) -> bool {
        self.descriptor.is_subtype_of(model)
    }

    /// Returns the state of a field. Unknown names read as absent.
    pub fn get(&self, name: &str) -> Field<&Value> {
        match self.descriptor.field(name) {
            Some((index, _)) => self.slots[index].as_ref(),
            None => Field::Absent,
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_set()
    }

    /// Assigns a value after checking it against the field's semantic type.
    ///
    /// Lenient enum fields store `UNKNOWN_ENUM_VALUE` for unrecognized values;
    /// strict enum fields reject them. Assigning [`Value::Null`] is the same as
    /// [`set_null`](Self::set_null).
    ///
    /// A subtype's discriminator field only accepts the subtype's own literal.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        let (index, field) = self.locate(name)?;
        let value = value.into();
        if value.is_null() {
            return self.set_null(name);
        }
        let value = crate::validate::check_value(self.descriptor, field, value)?;
        if let Some(expected) = self.pinned_literal(field) {
            let found = value.as_str().unwrap_or_default();
            if found != expected {
                return Err(self.discriminator_mismatch(field, expected, format!("{found:?}")));
            }
        }
        self.slots[index] = Field::Present(value);
        Ok(())
    }

    /// Assigns an explicit null; encoded as `null` on the wire.
    pub fn set_null(&mut self, name: &str) -> Result<(), ValidationError> {
        let (index, field) = self.locate(name)?;
        if let Some(expected) = self.pinned_literal(field) {
            return Err(self.discriminator_mismatch(field, expected, "null".to_string()));
        }
        self.slots[index] = Field::Null;
        Ok(())
    }

    /// Returns a field to the absent state; omitted on the wire.
    pub fn unset(&mut self, name: &str) -> Result<(), ValidationError> {
        let (index, field) = self.locate(name)?;
        if let Some(expected) = self.pinned_literal(field) {
            return Err(self.discriminator_mismatch(field, expected, "absent".to_string()));
        }
        self.slots[index] = Field::Absent;
        Ok(())
    }

    /// Iterates over all declared fields with their state, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &Field<Value>)> {
        self.descriptor.all_fields().zip(self.slots.iter())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).into_option().and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).into_option().and_then(Value::as_i64)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).into_option().and_then(Value::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).into_option().and_then(Value::as_bool)
    }

    pub fn get_datetime(&self, name: &str) -> Option<DateTime> {
        self.get(name).into_option().and_then(Value::as_datetime)
    }

    pub fn get_record(&self, name: &str) -> Option<&Record> {
        self.get(name).into_option().and_then(Value::as_record)
    }

    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).into_option().and_then(Value::as_list)
    }

    /// Returns the string items of a `list[str]` field.
    pub fn get_str_list(&self, name: &str) -> Option<Vec<&str>> {
        self.get_list(name)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }

    /// Mutable access to a nested record.
    pub fn get_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        let (index, _) = self.descriptor.field(name)?;
        match &mut self.slots[index] {
            Field::Present(value) => value.as_record_mut(),
            _ => None,
        }
    }

    /// Returns the discriminator literal of the nearest polymorphic family
    /// this record belongs to.
    pub fn discriminator(&self) -> Option<&str> {
        let family = std::iter::once(self.descriptor)
            .chain(self.descriptor.ancestors())
            .find_map(|model| model.discriminator)?;
        self.get_str(family.field)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Field<Value> {
        &mut self.slots[index]
    }

    /// The literal a subtype fixes for `field`, if it is a discriminator.
    fn pinned_literal(&self, field: &FieldDescriptor) -> Option<&'static str> {
        self.descriptor
            .discriminator_presets()
            .into_iter()
            .find_map(|(name, literal)| (name == field.name).then_some(literal))
    }

    fn discriminator_mismatch(
        &self,
        field: &'static FieldDescriptor,
        expected: &'static str,
        found: String,
    ) -> ValidationError {
        ValidationError::DiscriminatorMismatch {
            model: self.descriptor.name,
            field: field.name,
            expected,
            found,
        }
    }

    fn locate(&self, name: &str) -> Result<(usize, &'static FieldDescriptor), ValidationError> {
        self.descriptor
            .field(name)
            .ok_or_else(|| ValidationError::UnknownField {
                model: self.descriptor.name,
                field: name.to_string(),
            })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name == other.descriptor.name && self.slots == other.slots
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.name.hash(state);
        self.slots.hash(state);
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        map.entry(&"@model", &self.descriptor.name);
        for (field, slot) in self.fields() {
            match slot {
                Field::Absent => {}
                Field::Null => {
                    map.entry(&field.name, &Value::Null);
                }
                Field::Present(value) => {
                    map.entry(&field.name, value);
                }
            }
        }
        map.finish()
    }
}

impl fmt::Display for Record {
    /// Writes the wire form as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::codec::encode_json_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
