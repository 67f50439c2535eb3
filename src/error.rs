//! Error types surfaced while parsing, decoding, and grouping message parts.
//!
//! Every failure is recoverable. A caller that receives one of these errors
//! can drop the offending part and keep processing the rest of the stream;
//! the [`FragmentStore`](crate::fragment::FragmentStore) never changes state
//! when an operation fails.

use thiserror::Error;

use crate::{encoding::Encoding, part::Reference};

/// Errors produced by the header parser, the text decoders, and fragment
/// grouping.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UdhError {
    /// The hexadecimal input has an odd number of characters.
    #[error("hex string must have an even number of characters")]
    OddLengthInput,
    /// A character outside `[0-9A-Fa-f]` was found in the input.
    #[error("invalid hex digit {character:?} at index {index}")]
    InvalidHexDigit { character: char, index: usize },
    /// The header claims an element that the input is too short to hold.
    #[error("input too short for UDH")]
    InputTooShortForHeader,
    /// The header length octet points past the end of the input.
    #[error("UDH length exceeds input length")]
    HeaderLengthExceedsInput,
    /// The information-element identifier is not a concatenation element.
    #[error("unsupported information element identifier {0:#04x}")]
    UnsupportedElementIdentifier(u8),
    /// The encoding is known but has no decoder.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(Encoding),
    /// The data-coding value does not name any known encoding.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(u8),
    /// UCS2 payloads must contain whole 16-bit code units.
    #[error("payload length {len} is not even for UTF-16 decoding")]
    OddLengthUtf16Payload { len: usize },
    /// The payload is not valid text in the stated encoding.
    #[error("payload is not valid {encoding} text")]
    EncodingDecodeFailed { encoding: Encoding },
    /// The part belongs to a different concatenated message.
    #[error("invalid reference number: expected {expected}, found {found}")]
    ReferenceMismatch {
        expected: Reference,
        found: Reference,
    },
}

/// Errors raised while converting parts and fragment sets to or from their
/// structured text representation.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// The JSON document could not be produced or parsed.
    #[error("json interchange failed: {0}")]
    Json(#[from] serde_json::Error),
}
