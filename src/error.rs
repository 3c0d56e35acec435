use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors raised while building charts
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    /// A required column is absent (or present with the wrong kind).
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error(
        "invalid category '{0}': the category must be one of the following ones: \
         'all', 'clearly_visible', 'visible', 'small', 'noise', 'halfpeaks'"
    )]
    InvalidCategory(String),

    #[error("column '{column}' has {found} rows but Wavelength has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, PlotError>;
