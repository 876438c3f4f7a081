use thiserror::Error;

/// Malformed encoded route geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolylineFormatError {
    #[error("invalid polyline character {character:?} at byte {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("polyline ended in the middle of a coordinate delta")]
    UnexpectedEnd,

    #[error("polyline codeword starting at byte {index} is longer than any encodable value")]
    OverlongCodeword { index: usize },
}
