mod color;
mod field;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::dialect::Dialect;

pub use color::Color;
pub use field::Field;

use field::KeyedFields;

/// The root structure sent to a webhook.
///
/// `username` and `url` are only ever set through the embed builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<D: Dialect> {
    pub text: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    pub section: Section<D>,
}

/// The single attachment or embed block of a [`Payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct Section<D: Dialect> {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub author: Option<Author>,
    pub timestamp: Option<D::Timestamp>,
    pub image: Option<MediaRef>,
    pub thumbnail: Option<MediaRef>,
    pub footer: Option<Footer>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRef {
    pub url: String,
}

// `D::Timestamp` is not required to implement `Default`.
impl<D: Dialect> Default for Payload<D> {
    fn default() -> Self {
        Self {
            text: None,
            username: None,
            url: None,
            section: Section::default(),
        }
    }
}

impl<D: Dialect> Default for Section<D> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            color: None,
            author: None,
            timestamp: None,
            image: None,
            thumbnail: None,
            footer: None,
            fields: Vec::new(),
        }
    }
}

impl<D: Dialect> Payload<D> {
    /// Renders the payload as compact JSON, ready to be posted to a webhook.
    ///
    /// # Errors
    /// Only if `serde_json` fails to write the document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// # Errors
    /// Only if `serde_json` fails to write the document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Writes `key: value` only if the value is present.
fn entry_if_some<M, V>(map: &mut M, key: &'static str, value: Option<&V>) -> Result<(), M::Error>
where
    M: SerializeMap,
    V: Serialize + ?Sized,
{
    match value {
        Some(value) => map.serialize_entry(key, value),
        None => Ok(()),
    }
}

impl<D: Dialect> Serialize for Payload<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        entry_if_some(&mut map, "text", self.text.as_ref())?;
        entry_if_some(&mut map, "username", self.username.as_ref())?;
        entry_if_some(&mut map, "url", self.url.as_ref())?;
        map.serialize_entry(D::SECTIONS_KEY, &[&self.section])?;
        map.end()
    }
}

impl<D: Dialect> Serialize for Section<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        entry_if_some(&mut map, "title", self.title.as_ref())?;
        entry_if_some(&mut map, D::DESCRIPTION_KEY, self.description.as_ref())?;
        entry_if_some(&mut map, "color", self.color.as_ref())?;
        entry_if_some(&mut map, "author", self.author.as_ref())?;
        entry_if_some(&mut map, D::TIMESTAMP_KEY, self.timestamp.as_ref())?;
        entry_if_some(&mut map, "image", self.image.as_ref())?;
        entry_if_some(&mut map, "thumbnail", self.thumbnail.as_ref())?;
        entry_if_some(&mut map, "footer", self.footer.as_ref())?;
        let fields = KeyedFields {
            fields: &self.fields,
            label_key: D::FIELD_LABEL_KEY,
        };
        map.serialize_entry("fields", &fields)?;
        map.end()
    }
}
