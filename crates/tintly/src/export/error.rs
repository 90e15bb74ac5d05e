//! Export errors.

/// Error returned when an export cannot be produced.
///
/// Malformed colors and missing optional fields never fail an export; the
/// only failure is asking for a format that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The format key is not one of `tailwind`, `css`, `json`, `shadcn`.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}
