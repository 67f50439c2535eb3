//! User Data Header parsing.
//!
//! [`parse_hex`] classifies a hex-encoded `short_message` as either
//! UDH-bearing or standalone and splits it into header fields and raw payload
//! octets. Text decoding is left to [`MessagePart`](crate::MessagePart).
//!
//! ```text
//! 05 00 03 0F 03 03 68656C6C6F
//! |  |  |  |  |  |  '- payload
//! |  |  |  |  |  '- current part
//! |  |  |  |  '- total parts
//! |  |  |  '- reference number (one or two octets)
//! |  |  '- element length
//! |  '- element identifier
//! '- header length
//! ```

use hex::FromHexError;
use log::debug;

use crate::{error::UdhError, part::Reference};

/// First element identifier of the RFC 822 range. Octets at or above this
/// value in position one mark the input as a standalone payload.
pub const RFC822_ELEMENT: u8 = 0x20;

/// Concatenated short message with an 8-bit reference number.
pub const CONCAT_8BIT_REFERENCE: u8 = 0x00;

/// Concatenated short message with a 16-bit reference number.
pub const CONCAT_16BIT_REFERENCE: u8 = 0x08;

/// Header fields and payload extracted from one octet sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Octets in the header after the length octet; zero when standalone.
    pub header_length: u8,
    /// Information-element identifier.
    pub element: u8,
    /// Length of the information element body.
    pub element_length: u8,
    /// Concatenation reference; `{0}` for standalone payloads.
    pub reference: Reference,
    pub total_parts: u8,
    pub current_part: u8,
    /// Octets following the header.
    pub payload: Vec<u8>,
    /// Set when the input carries no header at all.
    pub standalone: bool,
}

impl ParsedHeader {
    fn standalone(payload: Vec<u8>) -> Self {
        Self {
            reference: Reference::standalone(),
            total_parts: 1,
            current_part: 1,
            payload,
            standalone: true,
            ..Self::default()
        }
    }
}

/// Decode a hexadecimal string into octets.
///
/// Upper- and lowercase digits are both accepted.
///
/// # Errors
///
/// Returns [`UdhError::OddLengthInput`] when `input` has an odd number of
/// characters and [`UdhError::InvalidHexDigit`] for any character outside
/// `[0-9A-Fa-f]`.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, UdhError> {
    if input.len() % 2 != 0 {
        return Err(UdhError::OddLengthInput);
    }
    hex::decode(input).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { c, index } => UdhError::InvalidHexDigit {
            character: c,
            index,
        },
        _ => UdhError::OddLengthInput,
    })
}

/// Parse a hex-encoded `short_message`.
///
/// # Errors
///
/// Propagates [`decode_hex`] failures and any error from [`parse_octets`].
pub fn parse_hex(input: &str) -> Result<ParsedHeader, UdhError> {
    parse_octets(decode_hex(input)?)
}

/// Parse raw `short_message` octets.
///
/// The input is treated as UDH-bearing only when the first octet is a
/// plausible header length and the second octet is an identifier below
/// [`RFC822_ELEMENT`]. This is a heuristic: some SMSCs deliver text whose
/// leading octets happen to look like a header, and downstream consumers rely
/// on the exact threshold.
///
/// Inputs shorter than two octets cannot be classified and yield an empty,
/// non-standalone header with no payload.
///
/// # Errors
///
/// Returns [`UdhError::InputTooShortForHeader`] when the element needs more
/// octets than the input provides, [`UdhError::HeaderLengthExceedsInput`]
/// when the header length points past the input, and
/// [`UdhError::UnsupportedElementIdentifier`] for elements other than
/// [`CONCAT_8BIT_REFERENCE`] and [`CONCAT_16BIT_REFERENCE`].
pub fn parse_octets(mut octets: Vec<u8>) -> Result<ParsedHeader, UdhError> {
    let total = octets.len();
    let &[header_length, element, ..] = octets.as_slice() else {
        debug!("{total} octet input is too short to classify");
        return Ok(ParsedHeader::default());
    };

    let udh_end = usize::from(header_length) + 1;
    if header_length == 0 || udh_end >= total || element >= RFC822_ELEMENT {
        debug!("classified {total} octets as a standalone payload");
        return Ok(ParsedHeader::standalone(octets));
    }
    if udh_end > total {
        return Err(UdhError::HeaderLengthExceedsInput);
    }

    let element_length = octets[2];
    let (reference, total_parts, current_part) = match element {
        CONCAT_8BIT_REFERENCE => {
            if total < 6 {
                return Err(UdhError::InputTooShortForHeader);
            }
            (Reference::from(vec![octets[3]]), octets[4], octets[5])
        }
        CONCAT_16BIT_REFERENCE => {
            if header_length < 6 {
                return Err(UdhError::InputTooShortForHeader);
            }
            (Reference::from(octets[3..5].to_vec()), octets[5], octets[6])
        }
        other => return Err(UdhError::UnsupportedElementIdentifier(other)),
    };

    let payload = octets.split_off(udh_end);
    debug!(
        "parsed UDH element {element:#04x} reference {reference} part {current_part}/{total_parts}"
    );
    Ok(ParsedHeader {
        header_length,
        element,
        element_length,
        reference,
        total_parts,
        current_part,
        payload,
        standalone: false,
    })
}
