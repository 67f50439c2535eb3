//! GSM 03.38 default alphabet and its escape extension table.
//!
//! Payloads are expected unpacked: one septet per octet, as SMSCs place them
//! in `short_message`.

const ESCAPE: u8 = 0x1b;

#[rustfmt::skip]
const DEFAULT_ALPHABET: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\u{a0}', 'Æ', 'æ', 'ß', 'É',
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

fn extension(septet: u8) -> Option<char> {
    let ch = match septet {
        0x0a => '\u{c}',
        0x14 => '^',
        0x28 => '{',
        0x29 => '}',
        0x2f => '\\',
        0x3c => '[',
        0x3d => '~',
        0x3e => ']',
        0x40 => '|',
        0x65 => '€',
        _ => return None,
    };
    Some(ch)
}

fn base(septet: u8) -> Option<char> { DEFAULT_ALPHABET.get(usize::from(septet)).copied() }

/// Decode unpacked septets into text.
///
/// Octets with the high bit set render as U+FFFD. An escape followed by a
/// code with no extension mapping falls back to the default table, and a
/// trailing escape renders as a space.
pub(super) fn decode(septets: &[u8]) -> String {
    let mut text = String::with_capacity(septets.len());
    let mut iter = septets.iter().copied();
    while let Some(septet) = iter.next() {
        if septet != ESCAPE {
            text.push(base(septet).unwrap_or(char::REPLACEMENT_CHARACTER));
            continue;
        }
        match iter.next() {
            Some(code) => text.push(
                extension(code)
                    .or_else(|| base(code))
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            ),
            None => text.push(' '),
        }
    }
    text
}
