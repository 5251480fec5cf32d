use crate::{
    dialect::{Attachment, Dialect, Embed},
    error::BuildError,
    payload::{Author, Field, Footer, MediaRef, Payload},
};

pub type AttachmentBuilder = PayloadBuilder<Attachment>;
pub type EmbedBuilder = PayloadBuilder<Embed>;

/// Accumulates a webhook [`Payload`] through chained calls.
///
/// Every setter mutates the builder in place and returns it again, so calls
/// can be chained off a `let mut` binding:
///
/// ```
/// use webhook_payload::PayloadBuilder;
///
/// let mut builder = PayloadBuilder::for_embed_style();
/// builder
///     .set_title("Alert")
///     .set_color("#ff0000")
///     .add_field("Host", "db-1", Some(true))
///     .set_text("System down");
/// let json = builder.payload().to_json().unwrap();
/// assert!(json.contains(r#""title":"Alert""#));
/// ```
///
/// Scalar setters overwrite, [`add_field`](Self::add_field) appends.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadBuilder<D: Dialect> {
    payload: Payload<D>,
}

impl PayloadBuilder<Attachment> {
    #[must_use]
    pub fn for_attachment_style() -> Self {
        Self::new()
    }
}

impl PayloadBuilder<Embed> {
    #[must_use]
    pub fn for_embed_style() -> Self {
        Self::new()
    }

    /// Overrides the username the webhook posts as.
    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.payload.username = Some(username.into());
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.payload.url = Some(url.into());
        self
    }

    /// Replaces any previous footer.
    pub fn add_footer(&mut self, text: impl Into<String>, icon: Option<&str>) -> &mut Self {
        self.payload.section.footer = Some(Footer {
            text: text.into(),
            icon_url: icon.map(str::to_owned),
        });
        self
    }
}

impl<D: Dialect> Default for PayloadBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dialect> PayloadBuilder<D> {
    /// Creates a builder holding one empty section.
    #[must_use]
    pub fn new() -> Self {
        log::debug!("Creating {} payload builder", D::NAME);
        Self {
            payload: Payload::default(),
        }
    }

    #[must_use]
    pub const fn payload(&self) -> &Payload<D> {
        &self.payload
    }

    #[must_use]
    pub fn build(self) -> Payload<D> {
        self.payload
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.payload.section.description = Some(description.into());
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.payload.section.title = Some(title.into());
        self
    }

    /// Replaces the author wholesale; nothing from a previous call survives.
    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        url: Option<&str>,
        icon: Option<&str>,
    ) -> &mut Self {
        self.payload.section.author = Some(Author {
            name: name.into(),
            url: url.map(str::to_owned),
            icon_url: icon.map(str::to_owned),
        });
        self
    }

    /// Accepts any string (no hex validation) or a [`Color`](crate::Color).
    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.payload.section.color = Some(color.into());
        self
    }

    /// Sets the plain message body sent alongside the section.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.payload.text = Some(text.into());
        self
    }

    /// Appends a field. `inline` defaults to `false`.
    pub fn add_field(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        inline: Option<bool>,
    ) -> &mut Self {
        let mut field = Field::new(label, value);
        field.inline = inline.unwrap_or(false);
        self.payload.section.fields.push(field);
        self
    }

    /// Removes every field whose label equals `label` exactly.
    pub fn remove_field(&mut self, label: &str) -> &mut Self {
        let fields = &mut self.payload.section.fields;
        let before = fields.len();
        fields.retain(|field| field.label != label);
        log::trace!("Removed {} field(s) labelled {label:?}", before - fields.len());
        self
    }

    /// Sets the section timestamp to the given epoch seconds, or to the
    /// current time if `None`.
    ///
    /// # Errors
    /// [`BuildError::InvalidArgument`] if the explicit value is not finite,
    /// or (embed dialect) lies outside the representable date range.
    /// The builder is left unchanged in that case.
    pub fn set_time(&mut self, timestamp: Option<f64>) -> Result<&mut Self, BuildError> {
        let timestamp = match timestamp {
            Some(secs) => D::from_epoch_secs(secs)?,
            None => D::now(),
        };
        log::trace!("Setting {} timestamp to {timestamp:?}", D::NAME);
        self.payload.section.timestamp = Some(timestamp);
        Ok(self)
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.payload.section.image = Some(MediaRef { url: url.into() });
        self
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.payload.section.thumbnail = Some(MediaRef { url: url.into() });
        self
    }
}
