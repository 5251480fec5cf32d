use std::fmt::Debug;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::{error::BuildError, validate};

mod sealed {
    pub trait Sealed {}
}

/// Describes one webhook payload dialect: which JSON keys it uses
/// and how it encodes timestamps.
///
/// Implemented only by [`Attachment`] and [`Embed`].
pub trait Dialect: sealed::Sealed + Debug + Clone + Copy + PartialEq + Default {
    /// Human-readable name, used in log messages.
    const NAME: &'static str;
    /// Key of the single-element section array.
    const SECTIONS_KEY: &'static str;
    /// Key of the section's body text.
    const DESCRIPTION_KEY: &'static str;
    const TIMESTAMP_KEY: &'static str;
    /// Key of a field's label.
    const FIELD_LABEL_KEY: &'static str;

    type Timestamp: Serialize + Debug + Clone + PartialEq;

    fn now() -> Self::Timestamp;

    /// Encodes an explicit point in time given as (fractional) epoch seconds.
    ///
    /// # Errors
    /// [`BuildError::InvalidArgument`] if the value is not finite
    /// or cannot be represented by this dialect.
    fn from_epoch_secs(secs: f64) -> Result<Self::Timestamp, BuildError>;
}

/// Legacy attachment dialect (`attachments`, `text`, numeric `ts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attachment;

/// Embed dialect (`embeds`, `description`, ISO-8601 `timestamp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Embed;

impl sealed::Sealed for Attachment {}
impl sealed::Sealed for Embed {}

impl Dialect for Attachment {
    const NAME: &'static str = "attachment";
    const SECTIONS_KEY: &'static str = "attachments";
    const DESCRIPTION_KEY: &'static str = "text";
    const TIMESTAMP_KEY: &'static str = "ts";
    const FIELD_LABEL_KEY: &'static str = "title";

    /// Epoch seconds with millisecond precision
    type Timestamp = f64;

    #[allow(clippy::cast_precision_loss)]
    fn now() -> f64 {
        Utc::now().timestamp_millis() as f64 / 1000.0
    }

    fn from_epoch_secs(secs: f64) -> Result<f64, BuildError> {
        validate::timestamp(secs)
    }
}

impl Dialect for Embed {
    const NAME: &'static str = "embed";
    const SECTIONS_KEY: &'static str = "embeds";
    const DESCRIPTION_KEY: &'static str = "description";
    const TIMESTAMP_KEY: &'static str = "timestamp";
    const FIELD_LABEL_KEY: &'static str = "name";

    /// ISO-8601 in UTC, e.g. `2024-01-01T00:00:00.000Z`
    type Timestamp = String;

    fn now() -> String {
        iso_8601(Utc::now())
    }

    fn from_epoch_secs(secs: f64) -> Result<String, BuildError> {
        validate::datetime(secs).map(iso_8601)
    }
}

fn iso_8601(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}
