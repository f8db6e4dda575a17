use std::borrow::Cow;
use unescape_zero_copy::Error;

// Learned from: https://nullprogram.com/blog/2017/10/06/
#[rustfmt::skip]
static UTF8_LENGTH_LOOKUP: [usize; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 3, 3, 4, 0,
];

/// Return the byte length of the complete UTF-8 code point that starts with `byte`. This can be
/// done branchlessly and without computing the entire `char`.
#[inline(always)]
pub(crate) fn char_length_from_byte(byte: u8) -> usize {
    UTF8_LENGTH_LOOKUP[byte as usize >> 3]
}

/// Decode all JSON escape sequences in `str`. Strings without any escapes are returned borrowed.
pub fn unescape_json_str(str: &str) -> Result<Cow<'_, str>, Error> {
    unescape_zero_copy::unescape(json_escape_sequence, str)
}

fn read_hex_unit(s: &str, range: std::ops::Range<usize>) -> Result<u32, Error> {
    let digits = s.get(range).ok_or(Error::IncompleteSequence)?;
    Ok(u32::from_str_radix(digits, 16)?)
}

pub fn json_escape_sequence(s: &str) -> Result<(char, &str), Error> {
    let mut chars = s.chars();
    let next = chars.next().ok_or(Error::IncompleteSequence)?;
    match next {
        'b' => Ok(('\x08', chars.as_str())),
        'f' => Ok(('\x0C', chars.as_str())),
        'n' => Ok(('\n', chars.as_str())),
        'r' => Ok(('\r', chars.as_str())),
        't' => Ok(('\t', chars.as_str())),
        'u' => {
            let first = read_hex_unit(s, 1..5)?;
            // A low surrogate can never stand on its own.
            if (0xDC00..=0xDFFF).contains(&first) {
                return Err(Error::InvalidUnicode(first));
            }
            if !(0xD800..=0xDBFF).contains(&first) {
                let next = char::from_u32(first).ok_or(Error::InvalidUnicode(first))?;
                return Ok((next, &s[5..]));
            }
            // High surrogate, so the low half must follow immediately as `\uXXXX`.
            if s.get(5..7) != Some("\\u") {
                return Err(Error::InvalidUnicode(first));
            }
            let second = read_hex_unit(s, 7..11)?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(Error::InvalidUnicode(second));
            }
            // Taken from serde_json: https://github.com/serde-rs/json/blob/1d7378e8ee87e9225da28094329e06345b76cd99/src/read.rs#L969
            let combined = (((first - 0xD800) << 10) | (second - 0xDC00)) + 0x1_0000;
            let next = char::from_u32(combined).ok_or(Error::InvalidUnicode(combined))?;
            Ok((next, &s[11..]))
        }
        ch => Ok((ch, chars.as_str())),
    }
}
