use crate::complexity::Axis;

/// Errors that can occur while resolving coding inputs.
///
/// The classifier itself is total and cannot fail; errors only arise in
/// strict resolution mode, where unrecognised input is reported instead of
/// being coerced to the lowest rank.
#[derive(Debug, thiserror::Error)]
pub enum EmError {
    #[error("unrecognised {axis} complexity: {value:?}")]
    UnrecognisedComplexity { axis: Axis, value: String },
}

pub type EmResult<T> = std::result::Result<T, EmError>;
