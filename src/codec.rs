/// Positional-numeral encoding and decoding for FlexID values
///
/// This module renders u128 identifiers as text in a fixed alphabet and
/// parses them back, using per-base lookup tables. Base62 is the default
/// rendering; Base32 (Crockford) and Base64 (URL-safe ordering) are
/// available for callers that need a different character set.
use once_cell::sync::Lazy;

/// Character set for base62 encoding (0-9, A-Z, a-z)
const BASE62_CHARS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Character set for base32 encoding (Crockford: no I, L, O, U)
const BASE32_CHARS: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Character set for base64 encoding (positional, not RFC 4648 padding-based)
const BASE64_CHARS: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

fn build_decode_map(alphabet: &[u8]) -> [i8; 256] {
    let mut map = [-1i8; 256];
    for (i, &c) in alphabet.iter().enumerate() {
        map[c as usize] = i as i8;
    }
    map
}

/// Lookup tables for decoding characters back to digit values
static BASE62_DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| build_decode_map(BASE62_CHARS));
static BASE32_DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| build_decode_map(BASE32_CHARS));
static BASE64_DECODE_MAP: Lazy<[i8; 256]> = Lazy::new(|| build_decode_map(BASE64_CHARS));

/// Maximum length of an encoded u128 across all supported bases
/// (base32 is the widest: ceil(128 / 5) = 26 characters)
pub const MAX_LEN: usize = 26;

/// Numeral base used for text rendering of identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    /// Crockford base32 (0-9, A-Z without I, L, O, U)
    Base32,
    /// Base62 (0-9, A-Z, a-z)
    #[default]
    Base62,
    /// Base64 (0-9, A-Z, a-z, -, _)
    Base64,
}

impl Base {
    /// Alphabet for this base, most significant digit first
    #[inline]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Base::Base32 => BASE32_CHARS,
            Base::Base62 => BASE62_CHARS,
            Base::Base64 => BASE64_CHARS,
        }
    }

    /// Number of digits in this base
    #[inline]
    pub const fn radix(self) -> u128 {
        self.alphabet().len() as u128
    }

    #[inline]
    fn decode_map(self) -> &'static [i8; 256] {
        match self {
            Base::Base32 => &BASE32_DECODE_MAP,
            Base::Base62 => &BASE62_DECODE_MAP,
            Base::Base64 => &BASE64_DECODE_MAP,
        }
    }
}

/// Encode a u128 identifier as text in the given base
///
/// The leading character is the most significant digit; zero encodes as the
/// single character "0" in every base.
pub fn encode_in(mut id: u128, base: Base) -> String {
    if id == 0 {
        return "0".to_string();
    }

    let alphabet = base.alphabet();
    let radix = base.radix();

    // Pre-allocate buffer with maximum possible size
    let mut buffer = [0u8; MAX_LEN];
    let mut position = MAX_LEN;

    while id > 0 && position > 0 {
        position -= 1;
        let remainder = (id % radix) as usize;
        buffer[position] = alphabet[remainder];
        id /= radix;
    }

    // Convert only the used portion of the buffer to a string
    String::from_utf8_lossy(&buffer[position..]).into_owned()
}

/// Decode text in the given base back to a u128 identifier
///
/// Every character must belong to the base's alphabet; anything else fails
/// with `InvalidCharacter` rather than silently corrupting the result.
pub fn decode_in(encoded: &str, base: Base) -> Result<u128, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let map = base.decode_map();
    let radix = base.radix();

    let mut result: u128 = 0;
    for &c in encoded.as_bytes() {
        let value = map[c as usize];
        if value == -1 {
            return Err(DecodeError::InvalidCharacter(c as char));
        }

        result = result
            .checked_mul(radix)
            .and_then(|r| r.checked_add(value as u128))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(result)
}

/// Encode a u128 identifier as base62 text
#[inline]
pub fn encode(id: u128) -> String {
    encode_in(id, Base::Base62)
}

/// Decode base62 text back to a u128 identifier
#[inline]
pub fn decode(encoded: &str) -> Result<u128, DecodeError> {
    decode_in(encoded, Base::Base62)
}

/// Errors that can occur during identifier text decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("Cannot decode an empty string")]
    EmptyString,

    /// The input string contains a character outside the alphabet
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u128
    #[error("Decoded value would overflow u128")]
    Overflow,
}
