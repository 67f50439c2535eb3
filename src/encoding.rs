//! Legacy SMS text encodings and payload decoding.
//!
//! A User Data Header carries no encoding information, so callers pass the
//! data-coding value that accompanied `short_message` on the wire.
//! [`Encoding::decode`] turns the raw payload octets of a part into text,
//! delegating the character-set tables to [`encoding_rs`] and to the local
//! GSM 03.38 table.

mod gsm7;

use std::fmt;

use encoding_rs::{EUC_JP, EUC_KR, ISO_2022_JP, ISO_8859_5, ISO_8859_8, UTF_16BE};
use serde::{Deserialize, Serialize};

use crate::error::UdhError;

/// SMS data-coding values understood by the decoder.
///
/// Discriminants follow the SMPP `data_coding` numbering.
///
/// # Examples
///
/// ```
/// use sms_udh::Encoding;
/// let encoding = Encoding::try_from(8).expect("UCS2 is a known data coding");
/// assert_eq!(encoding, Encoding::Ucs2);
/// assert_eq!(encoding.to_string(), "UCS2 (UTF-16BE)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Encoding {
    /// GSM 03.38 7-bit default alphabet, one septet per octet.
    Gsm7 = 0,
    /// ASCII / IA5.
    Ascii = 1,
    /// Opaque 8-bit binary data.
    Binary8Bit1 = 2,
    /// ISO-8859-1.
    Latin1 = 3,
    /// Opaque 8-bit binary data.
    Binary8Bit2 = 4,
    /// JIS X 0208-1990.
    Jis = 5,
    /// ISO-8859-5.
    Cyrillic = 6,
    /// ISO-8859-8.
    Hebrew = 7,
    /// UCS2, read as UTF-16BE.
    Ucs2 = 8,
    /// Cellular pictogram set.
    Pictogram = 9,
    /// ISO-2022-JP music codes.
    Iso2022Jp = 10,
    Reserved1 = 11,
    Reserved2 = 12,
    /// Extended Kanji JIS X 0212-1990.
    ExtJis = 13,
    /// KS C 5601.
    Ksc5601 = 14,
    /// GSM 7-bit with national language extensions.
    Gsm7Extended = 15,
    Utf8 = 16,
}

impl Encoding {
    /// Every encoding, in data-coding order.
    pub const ALL: [Encoding; 17] = [
        Encoding::Gsm7,
        Encoding::Ascii,
        Encoding::Binary8Bit1,
        Encoding::Latin1,
        Encoding::Binary8Bit2,
        Encoding::Jis,
        Encoding::Cyrillic,
        Encoding::Hebrew,
        Encoding::Ucs2,
        Encoding::Pictogram,
        Encoding::Iso2022Jp,
        Encoding::Reserved1,
        Encoding::Reserved2,
        Encoding::ExtJis,
        Encoding::Ksc5601,
        Encoding::Gsm7Extended,
        Encoding::Utf8,
    ];

    /// Return the SMPP data-coding value.
    #[must_use]
    pub const fn data_coding(self) -> u8 { self as u8 }

    /// Report whether [`decode`](Self::decode) has a decoder for this
    /// encoding.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Encoding::Pictogram | Encoding::Reserved1 | Encoding::Reserved2
        )
    }

    /// Decode `payload` into text.
    ///
    /// Binary encodings are rendered as lowercase hexadecimal rather than
    /// decoded as characters. GSM and ASCII/UTF-8 payloads never fail: octets
    /// outside their character set render as U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`UdhError::UnsupportedEncoding`] for the pictogram and
    /// reserved codings, [`UdhError::OddLengthUtf16Payload`] for a UCS2
    /// payload with a dangling octet, and [`UdhError::EncodingDecodeFailed`]
    /// when the octets are not valid in one of the legacy or UTF-16 character
    /// sets.
    pub fn decode(self, payload: &[u8]) -> Result<String, UdhError> {
        let failed = || UdhError::EncodingDecodeFailed { encoding: self };
        match self {
            Encoding::Gsm7 | Encoding::Gsm7Extended => Ok(gsm7::decode(payload)),
            Encoding::Ascii | Encoding::Utf8 => Ok(String::from_utf8_lossy(payload).into_owned()),
            Encoding::Latin1 => Ok(payload.iter().copied().map(char::from).collect()),
            Encoding::Binary8Bit1 | Encoding::Binary8Bit2 => Ok(hex::encode(payload)),
            Encoding::Ucs2 => {
                if payload.len() % 2 != 0 {
                    return Err(UdhError::OddLengthUtf16Payload { len: payload.len() });
                }
                transcode(UTF_16BE, payload).ok_or_else(failed)
            }
            Encoding::Cyrillic => transcode(ISO_8859_5, payload).ok_or_else(failed),
            Encoding::Hebrew => transcode(ISO_8859_8, payload).ok_or_else(failed),
            Encoding::Iso2022Jp => transcode(ISO_2022_JP, payload).ok_or_else(failed),
            Encoding::Jis | Encoding::ExtJis => transcode(EUC_JP, payload).ok_or_else(failed),
            Encoding::Ksc5601 => transcode(EUC_KR, payload).ok_or_else(failed),
            Encoding::Pictogram | Encoding::Reserved1 | Encoding::Reserved2 => {
                Err(UdhError::UnsupportedEncoding(self))
            }
        }
    }
}

/// Decode `payload` using the raw SMPP data-coding value.
///
/// # Errors
///
/// Returns [`UdhError::UnknownEncoding`] when `data_coding` names no known
/// encoding, otherwise any error from [`Encoding::decode`].
pub fn decode_text(payload: &[u8], data_coding: u8) -> Result<String, UdhError> {
    Encoding::try_from(data_coding)?.decode(payload)
}

// BOM bytes are kept as U+FEFF rather than used to pick a byte order.
fn transcode(codec: &'static encoding_rs::Encoding, payload: &[u8]) -> Option<String> {
    codec
        .decode_without_bom_handling_and_without_replacement(payload)
        .map(std::borrow::Cow::into_owned)
}

impl From<Encoding> for u8 {
    fn from(encoding: Encoding) -> Self { encoding.data_coding() }
}

impl TryFrom<u8> for Encoding {
    type Error = UdhError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Encoding::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(UdhError::UnknownEncoding(value))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Gsm7 => "GSM-7",
            Encoding::Ascii => "ASCII",
            Encoding::Binary8Bit1 => "BINARY-1",
            Encoding::Latin1 => "Latin1",
            Encoding::Binary8Bit2 => "BINARY-2",
            Encoding::Jis => "JIS",
            Encoding::Cyrillic => "ISO8859-5 (Cyrillic)",
            Encoding::Hebrew => "ISO8859-8 (Hebrew)",
            Encoding::Ucs2 => "UCS2 (UTF-16BE)",
            Encoding::Pictogram => "Pictogram",
            Encoding::Iso2022Jp => "ISO2022JP (music)",
            Encoding::Reserved1 => "Reserved-1",
            Encoding::Reserved2 => "Reserved-2",
            Encoding::ExtJis => "EXT-JIS (X 0212-1990)",
            Encoding::Ksc5601 => "KSC-5601",
            Encoding::Gsm7Extended => "GSM-7 (Extended)",
            Encoding::Utf8 => "UTF-8",
        };
        f.write_str(name)
    }
}
