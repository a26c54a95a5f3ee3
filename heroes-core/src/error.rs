/// Errors produced by the `heroes-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A power description was shorter than [`MIN_DESCRIPTION_LEN`](crate::MIN_DESCRIPTION_LEN).
    #[error("invalid description: {len} characters, must be at least {min}")]
    InvalidDescription { len: usize, min: usize },

    /// A power description contained a NUL character.
    #[error("invalid description: must not contain NUL characters")]
    DescriptionContainsNul,

    /// A strength value was not one of `Strong`, `Weak` or `Average`.
    #[error("invalid strength '{value}': expected one of Strong, Weak, Average")]
    InvalidStrength { value: String },
}
