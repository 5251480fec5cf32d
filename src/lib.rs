#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

//! Fluent builders for chat webhook payloads.
//!
//! Two dialects are supported: the legacy attachment style
//! (`{"attachments": [...]}`) and the embed style (`{"embeds": [...]}`).
//! Both share one [`PayloadBuilder`], parameterized by a [`Dialect`] marker.
//! Sending the JSON is left to the caller.

mod validate;

pub mod builder;
pub mod dialect;
pub mod error;
pub mod payload;

#[cfg(test)]
mod builder_tests;

pub use builder::{AttachmentBuilder, EmbedBuilder, PayloadBuilder};
pub use dialect::{Attachment, Dialect, Embed};
pub use error::BuildError;
pub use payload::{Author, Color, Field, Footer, MediaRef, Payload, Section};
