use std::fmt;

/// Errors raised by scene construction and state updates.
///
/// Device and runtime failures use `anyhow` instead; this type covers the
/// recoverable cases the input layer can log and skip.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A numeric input was NaN or infinite.
    NonFinite { what: &'static str },
    /// A body part name was looked up but never added to the rig.
    UnknownPart(String),
    /// A body part name was added twice.
    DuplicatePart(String),
    /// A body part names a parent that has not been added yet.
    MissingParent { part: String, parent: String },
    /// A status text was written to a target the sink does not know.
    UnknownStatusTarget(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::NonFinite { what } => write!(f, "non-finite value for {what}"),
            SceneError::UnknownPart(name) => write!(f, "unknown body part '{name}'"),
            SceneError::DuplicatePart(name) => write!(f, "body part '{name}' already exists"),
            SceneError::MissingParent { part, parent } => {
                write!(f, "body part '{part}' refers to missing parent '{parent}'")
            }
            SceneError::UnknownStatusTarget(target) => {
                write!(f, "failed to get status target '{target}'")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Returns `Ok(v)` for finite values, `SceneError::NonFinite` otherwise.
#[inline]
pub(crate) fn finite(v: f32, what: &'static str) -> Result<f32, SceneError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SceneError::NonFinite { what })
    }
}
