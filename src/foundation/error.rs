/// Convenience result type used across guidekit.
pub type GuideResult<T> = Result<T, GuideError>;

/// Top-level error taxonomy used by the library.
#[derive(thiserror::Error, Debug)]
pub enum GuideError {
    /// Invalid configuration values (non-positive ratio, oversized canvas, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A command-line value could not be parsed.
    #[error("could not parse {what} from string: {raw}")]
    Parse {
        /// Human-readable name of the value (`"scale"`, `"color"`, ...).
        what: &'static str,
        /// The raw token as given by the user.
        raw: String,
    },

    /// Errors while rasterizing a plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GuideError {
    /// Build a [`GuideError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GuideError::Parse`] value.
    pub fn parse(what: &'static str, raw: impl Into<String>) -> Self {
        Self::Parse {
            what,
            raw: raw.into(),
        }
    }

    /// Build a [`GuideError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GuideError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether this error stems from user input rather than from rendering or IO.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Parse { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
