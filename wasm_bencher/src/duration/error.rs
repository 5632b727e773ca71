//!
//! The duration parsing error.
//!

///
/// The duration parsing error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text is empty or consists of whitespace only.
    #[error("Empty duration")]
    Empty,
    /// The magnitude is not followed by a known unit.
    #[error("Duration `{text}` has an unknown unit `{unit}`")]
    UnknownUnit {
        /// The whole duration text.
        text: String,
        /// The unrecognized unit suffix.
        unit: String,
    },
    /// The magnitude is not a valid integer or decimal number.
    #[error("Duration `{text}` has an invalid magnitude `{magnitude}`")]
    InvalidMagnitude {
        /// The whole duration text.
        text: String,
        /// The offending magnitude.
        magnitude: String,
    },
    /// The text does not start with a magnitude or has unparsed leftovers.
    #[error("Malformed duration `{text}` at offset {offset}")]
    Malformed {
        /// The whole duration text.
        text: String,
        /// The offset of the first character that could not be parsed.
        offset: usize,
    },
}
