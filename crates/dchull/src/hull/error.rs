use std::fmt;

/// Errors surfaced by the hull builder.
///
/// Degenerate geometry (duplicates, collinear points) is not an error; it is
/// resolved by the tie policy documented on `hull`.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// The point set is empty.
    EmptyInput,
    /// The point at `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// A `HullCfg` field is out of range.
    InvalidConfig { reason: String },
}

impl HullError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for the two invalid-input kinds (as opposed to a bad config).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NonFinite { .. })
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "invalid input: the point set is empty"),
            Self::NonFinite { index } => {
                write!(f, "invalid input: point {index} has a non-finite coordinate")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid hull config: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}
