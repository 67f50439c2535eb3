//! Decoded message parts.
//!
//! A [`MessagePart`] combines the header fields of one `short_message` with
//! its raw payload and the text decoded under the caller-supplied
//! [`Encoding`]. Parts are built once and are immutable afterwards.

use std::{borrow::Borrow, fmt};

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{
    config::InterchangeFormat,
    encoding::Encoding,
    error::{InterchangeError, UdhError},
    header::{self, ParsedHeader},
};

/// Concatenation reference number shared by all parts of one message.
///
/// One octet for 8-bit reference headers, two for 16-bit ones. Rendered and
/// serialised as lowercase hexadecimal.
///
/// # Examples
///
/// ```
/// use sms_udh::Reference;
/// let reference = Reference::from_hex("A5").expect("valid hex");
/// assert_eq!(reference.as_bytes(), &[0xa5]);
/// assert_eq!(reference.to_string(), "a5");
/// ```
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, From,
)]
pub struct Reference(#[serde(with = "hex")] Vec<u8>);

impl Reference {
    /// Reference assigned to every standalone payload.
    #[must_use]
    pub fn standalone() -> Self { Self(vec![0]) }

    /// Parse a reference from its hexadecimal form.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`header::decode_hex`].
    pub fn from_hex(input: &str) -> Result<Self, UdhError> { header::decode_hex(input).map(Self) }

    /// Borrow the reference octets.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<&[u8]> for Reference {
    fn from(value: &[u8]) -> Self { Self(value.to_vec()) }
}

impl AsRef<[u8]> for Reference {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl Borrow<[u8]> for Reference {
    fn borrow(&self) -> &[u8] { &self.0 }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&hex::encode(&self.0)) }
}

/// One decoded `short_message`.
///
/// Field names match the structured interchange representation.
///
/// # Examples
///
/// ```
/// use sms_udh::{Encoding, MessagePart, Reference};
/// let part = MessagePart::parse("05000312010168656C6C6F20776F726C64", Encoding::Gsm7)
///     .expect("valid UDH");
/// assert_eq!(part.reference(), &Reference::from(vec![0x12]));
/// assert_eq!(part.message(), "hello world");
/// assert!(part.is_single_message());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    pub(crate) header_length: u8,
    pub(crate) element: u8,
    pub(crate) element_length: u8,
    pub(crate) reference: Reference,
    pub(crate) total_parts: u8,
    pub(crate) current_part: u8,
    #[serde(with = "hex")]
    pub(crate) raw_message: Vec<u8>,
    pub(crate) message: String,
    pub(crate) encoding: Encoding,
    pub(crate) standalone: bool,
}

impl MessagePart {
    /// Parse a hex-encoded `short_message` and decode its payload.
    ///
    /// # Errors
    ///
    /// Returns any header error from [`header::parse_hex`] or decoding error
    /// from [`Encoding::decode`]. No part is produced on failure.
    pub fn parse(input: &str, encoding: Encoding) -> Result<Self, UdhError> {
        Self::decode(header::parse_hex(input)?, encoding)
    }

    /// Decode the payload of an already parsed header.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Encoding::decode`].
    pub fn decode(header: ParsedHeader, encoding: Encoding) -> Result<Self, UdhError> {
        let message = encoding.decode(&header.payload)?;
        Ok(Self {
            header_length: header.header_length,
            element: header.element,
            element_length: header.element_length,
            reference: header.reference,
            total_parts: header.total_parts,
            current_part: header.current_part,
            raw_message: header.payload,
            message,
            encoding,
            standalone: header.standalone,
        })
    }

    #[must_use]
    pub const fn header_length(&self) -> u8 { self.header_length }

    /// Information-element identifier; meaningful only for UDH-bearing parts.
    #[must_use]
    pub const fn element(&self) -> u8 { self.element }

    #[must_use]
    pub const fn element_length(&self) -> u8 { self.element_length }

    #[must_use]
    pub const fn reference(&self) -> &Reference { &self.reference }

    #[must_use]
    pub const fn total_parts(&self) -> u8 { self.total_parts }

    #[must_use]
    pub const fn current_part(&self) -> u8 { self.current_part }

    /// Payload octets following the header.
    #[must_use]
    pub fn raw_message(&self) -> &[u8] { &self.raw_message }

    /// Decoded text of the payload.
    #[must_use]
    pub fn message(&self) -> &str { &self.message }

    #[must_use]
    pub const fn encoding(&self) -> Encoding { self.encoding }

    #[must_use]
    pub const fn is_standalone(&self) -> bool { self.standalone }

    /// Report whether this part carries a whole message on its own.
    #[must_use]
    pub const fn is_single_message(&self) -> bool { self.standalone || self.total_parts == 1 }

    /// Render the part as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        InterchangeFormat::Json.serialize(self)
    }

    /// Load a part from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Json`] for malformed documents, including
    /// unknown encoding values and invalid hexadecimal octet fields.
    pub fn from_json(input: &str) -> Result<Self, InterchangeError> {
        InterchangeFormat::Json.deserialize(input)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{MessagePart, Reference};
    use crate::{encoding::Encoding, error::UdhError};

    #[test]
    fn parses_and_decodes_udh_part() {
        let part = MessagePart::parse("05000312010168656C6C6F20776F726C64", Encoding::Gsm7)
            .expect("valid UDH");
        let expected = MessagePart {
            header_length: 0x05,
            element: 0x00,
            element_length: 0x03,
            reference: Reference::from(vec![0x12]),
            total_parts: 1,
            current_part: 1,
            raw_message: b"hello world".to_vec(),
            message: "hello world".to_owned(),
            encoding: Encoding::Gsm7,
            standalone: false,
        };
        assert_eq!(part, expected);
    }

    #[test]
    fn parses_standalone_part() {
        let part = MessagePart::parse("776F726C64", Encoding::Ascii).expect("standalone");
        assert!(part.is_standalone());
        assert!(part.is_single_message());
        assert_eq!(part.reference(), &Reference::standalone());
        assert_eq!(part.header_length(), 0);
        assert_eq!(part.raw_message(), b"world");
        assert_eq!(part.message(), "world");
    }

    #[test]
    fn multi_part_is_not_single_message() {
        let part =
            MessagePart::parse("050003A5020265722074657374696E67", Encoding::Gsm7).expect("UDH");
        assert!(!part.is_single_message());
        assert_eq!(part.message(), "er testing");
    }

    #[rstest]
    #[case("050003A5020265722074657374696E67")]
    #[case("776F726C64")]
    fn pictogram_never_produces_a_part(#[case] input: &str) {
        assert_eq!(
            MessagePart::parse(input, Encoding::Pictogram),
            Err(UdhError::UnsupportedEncoding(Encoding::Pictogram))
        );
    }

    #[test]
    fn odd_ucs2_payload_is_rejected() {
        assert_eq!(
            MessagePart::parse("050003010101004100", Encoding::Ucs2),
            Err(UdhError::OddLengthUtf16Payload { len: 3 })
        );
    }

    // Latin-1 octets under a GSM or ASCII coding still yield a part.
    #[rstest]
    #[case::gsm_udh("050003A5010148E9", Encoding::Gsm7, false)]
    #[case::ascii_standalone("48FF", Encoding::Ascii, true)]
    fn stray_octets_are_replaced_not_rejected(
        #[case] input: &str,
        #[case] encoding: Encoding,
        #[case] standalone: bool,
    ) {
        let part = MessagePart::parse(input, encoding).expect("lossy decode keeps the part");
        assert_eq!(part.message(), "H\u{fffd}");
        assert_eq!(part.is_standalone(), standalone);
    }

    #[test]
    fn binary_payload_is_rendered_as_hex() {
        let part = MessagePart::parse("050003070101DEADBEEF", Encoding::Binary8Bit1).expect("UDH");
        assert_eq!(part.message(), "deadbeef");
        assert_eq!(part.raw_message(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn json_uses_interchange_field_names() {
        let part = MessagePart::parse("05000312010168656C6C6F", Encoding::Gsm7).expect("UDH");
        let json = part.to_json().expect("serialise");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["header_length"], 5);
        assert_eq!(value["element"], 0);
        assert_eq!(value["element_length"], 3);
        assert_eq!(value["reference"], "12");
        assert_eq!(value["total_parts"], 1);
        assert_eq!(value["current_part"], 1);
        assert_eq!(value["raw_message"], "68656c6c6f");
        assert_eq!(value["message"], "hello");
        assert_eq!(value["encoding"], 0);
        assert_eq!(value["standalone"], false);
    }

    #[test]
    fn json_rejects_unknown_encoding() {
        let json = r#"{"header_length":0,"element":0,"element_length":0,"reference":"00",
            "total_parts":1,"current_part":1,"raw_message":"","message":"","encoding":99,
            "standalone":true}"#;
        let err = MessagePart::from_json(json).expect_err("encoding 99 is unknown");
        assert!(err.to_string().contains("unknown encoding: 99"), "{err}");
    }

    #[test]
    fn reference_displays_as_hex() {
        let reference = Reference::from_hex("A50F").expect("valid hex");
        assert_eq!(reference.to_string(), "a50f");
        assert_eq!(reference.as_bytes(), &[0xa5, 0x0f]);
    }
}
