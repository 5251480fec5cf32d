use thiserror::Error;

/// The only way building a payload can fail.
///
/// Every other argument is passed through to the payload uninspected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An argument that cannot be represented in the target dialect,
    /// such as a non-finite timestamp.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
