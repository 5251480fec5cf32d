use chrono::{DateTime, Utc};

use crate::error::BuildError;

pub fn timestamp(secs: f64) -> Result<f64, BuildError> {
    if secs.is_finite() {
        return Ok(secs);
    }
    Err(BuildError::InvalidArgument(format!(
        "Timestamp {secs} is not a finite number"
    )))
}

/// Converts epoch seconds to a UTC datetime, rounding to whole milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn datetime(secs: f64) -> Result<DateTime<Utc>, BuildError> {
    let secs = timestamp(secs)?;
    // Float to int casts saturate, so huge values land outside chrono's range below.
    let millis = (secs * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        BuildError::InvalidArgument(format!("Timestamp {secs} is out of the supported range"))
    })
}
