use serde::{Serialize, Serializer, ser::SerializeStruct};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
    pub inline: bool,
}

impl Field {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Fields serialized with a dialect-specific key for the label.
pub(super) struct KeyedFields<'a> {
    pub fields: &'a [Field],
    pub label_key: &'static str,
}

struct KeyedField<'a> {
    field: &'a Field,
    label_key: &'static str,
}

impl Serialize for KeyedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.fields.iter().map(|field| KeyedField {
            field,
            label_key: self.label_key,
        }))
    }
}

impl Serialize for KeyedField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Field", 3)?;
        state.serialize_field(self.label_key, &self.field.label)?;
        state.serialize_field("value", &self.field.value)?;
        state.serialize_field("inline", &self.field.inline)?;
        state.end()
    }
}
