//! Integer <-> ASCII conversion for bases 2 through 16.
//!
//! Converted strings are NUL-terminated and lengths always count the
//! terminator, so the value returned by [`int_to_ascii`] can be fed straight
//! back into [`ascii_to_int`] as its `digit_count`.
//!
//! Digits above 9 are the uppercase letters `A`-`F`, in both directions.

use log::trace;

use crate::error::DataError;
use crate::memory::my_reverse;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 16;

/// Longest possible output: sign, 32 binary digits and the terminator.
pub const MAX_ASCII_LEN: usize = 34;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn check_base(base: u32) -> Result<(), DataError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(DataError::InvalidBase(base))
    }
}

fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'A'..=b'F' => Some(u32::from(byte - b'A') + 10),
        _ => None,
    }
}

/// Number of bytes [`int_to_ascii`] writes for `value`, terminator included.
pub fn ascii_len(value: i32, base: u32) -> Result<usize, DataError> {
    check_base(base)?;
    if value == 0 {
        return Ok(2);
    }

    let mut magnitude = value.unsigned_abs();
    let mut length = usize::from(value < 0) + 1;
    while magnitude > 0 {
        length += 1;
        magnitude /= base;
    }
    Ok(length)
}

// =============================================================================
// Integer to ASCII
// =============================================================================

/// Writes `value` in `base` into `out` as a NUL-terminated ASCII string.
///
/// Returns the number of bytes written, including the terminator.
/// `i32::MIN` is converted exactly; its magnitude is taken unsigned.
pub fn int_to_ascii(value: i32, out: &mut [u8], base: u32) -> Result<usize, DataError> {
    let required = ascii_len(value, base)?;
    if out.len() < required {
        return Err(DataError::BufferTooSmall {
            required,
            available: out.len(),
        });
    }

    if value == 0 {
        out[0] = b'0';
        out[1] = 0;
        return Ok(2);
    }

    let mut length = 0;
    if value < 0 {
        out[0] = b'-';
        length += 1;
    }
    let sign_len = length;

    let mut magnitude = value.unsigned_abs();
    while magnitude > 0 {
        out[length] = DIGITS[(magnitude % base) as usize];
        length += 1;
        magnitude /= base;
    }

    // digits were produced least significant first
    my_reverse(&mut out[sign_len..], length - sign_len)?;
    out[length] = 0;

    trace!("converted {value} in base {base} to {} bytes", length + 1);
    Ok(length + 1)
}

/// Allocating form of [`int_to_ascii`], without the terminator.
pub fn to_ascii_string(value: i32, base: u32) -> Result<String, DataError> {
    let mut buf = [0u8; MAX_ASCII_LEN];
    let length = int_to_ascii(value, &mut buf, base)?;
    Ok(buf[..length - 1].iter().map(|&b| char::from(b)).collect())
}

// =============================================================================
// ASCII to integer
// =============================================================================

/// Parses the first `digit_count` bytes of `text` as a signed integer.
///
/// `digit_count` is a byte count over the whole string: leading whitespace,
/// the sign, the digits and an optional NUL terminator all count, matching
/// the length reported by [`int_to_ascii`]. Anything from the first NUL on is
/// ignored, as is anything past the end of `text`.
///
/// After leading ASCII whitespace and an optional `-`, every remaining byte
/// must be a digit valid for `base`. The digit run is accumulated from the
/// least significant position backward.
pub fn ascii_to_int(text: &[u8], digit_count: usize, base: u32) -> Result<i32, DataError> {
    check_base(base)?;

    let window = &text[..digit_count.min(text.len())];
    let window = match window.iter().position(|&b| b == 0) {
        Some(end) => &window[..end],
        None => window,
    };

    let mut start = window
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count();
    let negative = window.get(start) == Some(&b'-');
    if negative {
        start += 1;
    }

    let digits = &window[start..];
    if digits.is_empty() {
        return Err(DataError::Empty);
    }

    let mut magnitude: u64 = 0;
    let mut place = Some(1u64);
    for (offset, &byte) in digits.iter().enumerate().rev() {
        let digit = digit_value(byte)
            .filter(|&d| d < base)
            .ok_or(DataError::InvalidDigit {
                position: start + offset,
                byte,
            })?;

        // leading zeros may sit beyond the representable place values
        if digit != 0 {
            let term = place
                .and_then(|p| p.checked_mul(u64::from(digit)))
                .ok_or(DataError::Overflow)?;
            magnitude = magnitude.checked_add(term).ok_or(DataError::Overflow)?;
        }
        place = place.and_then(|p| p.checked_mul(u64::from(base)));
    }

    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i32::try_from(signed).map_err(|_| DataError::Overflow)
}

/// Parses a whole `&str` with [`ascii_to_int`].
pub fn parse_ascii(text: &str, base: u32) -> Result<i32, DataError> {
    ascii_to_int(text.as_bytes(), text.len(), base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itoa_zero() {
        let mut buf = [0xFFu8; 4];
        assert_eq!(int_to_ascii(0, &mut buf, 10), Ok(2));
        assert_eq!(&buf[..2], b"0\0");
    }

    #[test]
    fn test_itoa_negative_hex() {
        let mut buf = [0u8; MAX_ASCII_LEN];
        let length = int_to_ascii(-4096, &mut buf, 16).unwrap();
        assert_eq!(length, 6);
        assert_eq!(&buf[..length], b"-1000\0");
    }

    #[test]
    fn test_itoa_decimal() {
        let mut buf = [0u8; MAX_ASCII_LEN];
        let length = int_to_ascii(123456, &mut buf, 10).unwrap();
        assert_eq!(length, 7);
        assert_eq!(&buf[..length], b"123456\0");
    }

    #[test]
    fn test_itoa_binary_and_letters() {
        assert_eq!(to_ascii_string(5, 2).unwrap(), "101");
        assert_eq!(to_ascii_string(0xBEEF, 16).unwrap(), "BEEF");
        assert_eq!(to_ascii_string(-255, 16).unwrap(), "-FF");
        assert_eq!(to_ascii_string(8, 8).unwrap(), "10");
    }

    #[test]
    fn test_itoa_extremes() {
        assert_eq!(to_ascii_string(i32::MAX, 10).unwrap(), "2147483647");
        assert_eq!(to_ascii_string(i32::MIN, 10).unwrap(), "-2147483648");

        let mut buf = [0u8; MAX_ASCII_LEN];
        let length = int_to_ascii(i32::MIN, &mut buf, 2).unwrap();
        assert_eq!(length, MAX_ASCII_LEN);
        assert_eq!(buf[1], b'1');
        assert!(buf[2..33].iter().all(|&b| b == b'0'));
    }

    #[test]
    fn test_itoa_rejects_bad_base() {
        let mut buf = [0u8; MAX_ASCII_LEN];
        assert_eq!(int_to_ascii(10, &mut buf, 1), Err(DataError::InvalidBase(1)));
        assert_eq!(int_to_ascii(10, &mut buf, 17), Err(DataError::InvalidBase(17)));
        assert_eq!(int_to_ascii(0, &mut buf, 0), Err(DataError::InvalidBase(0)));
    }

    #[test]
    fn test_itoa_small_buffer() {
        let mut buf = [0u8; 3];
        assert_eq!(
            int_to_ascii(-100, &mut buf, 10),
            Err(DataError::BufferTooSmall {
                required: 5,
                available: 3
            })
        );
    }

    #[test]
    fn test_ascii_len_matches_output() {
        for &(value, base) in &[(0, 10), (-1, 2), (255, 16), (i32::MIN, 8), (1000, 10)] {
            let mut buf = [0u8; MAX_ASCII_LEN];
            let written = int_to_ascii(value, &mut buf, base).unwrap();
            assert_eq!(ascii_len(value, base).unwrap(), written);
        }
    }

    #[test]
    fn test_atoi_uses_itoa_length() {
        let mut buf = [0u8; MAX_ASCII_LEN];
        let length = int_to_ascii(-4096, &mut buf, 16).unwrap();
        assert_eq!(ascii_to_int(&buf, length, 16), Ok(-4096));
    }

    #[test]
    fn test_atoi_without_terminator() {
        assert_eq!(parse_ascii("123456", 10), Ok(123456));
        assert_eq!(parse_ascii("7F", 16), Ok(127));
        assert_eq!(parse_ascii("-101", 2), Ok(-5));
    }

    #[test]
    fn test_atoi_whitespace_and_sign() {
        // whitespace and sign both count toward digit_count
        let text = b"  \t-42\0";
        assert_eq!(ascii_to_int(text, text.len(), 10), Ok(-42));
        assert_eq!(parse_ascii("   17", 10), Ok(17));
    }

    #[test]
    fn test_atoi_digit_count_truncates() {
        assert_eq!(ascii_to_int(b"12345", 3, 10), Ok(123));
        assert_eq!(ascii_to_int(b"12", 10, 10), Ok(12));
    }

    #[test]
    fn test_atoi_stops_at_terminator() {
        assert_eq!(ascii_to_int(b"99\0junk", 7, 10), Ok(99));
    }

    #[test]
    fn test_atoi_extremes() {
        assert_eq!(parse_ascii("-2147483648", 10), Ok(i32::MIN));
        assert_eq!(parse_ascii("2147483647", 10), Ok(i32::MAX));
        assert_eq!(parse_ascii("2147483648", 10), Err(DataError::Overflow));
        assert_eq!(parse_ascii("-2147483649", 10), Err(DataError::Overflow));
        assert_eq!(parse_ascii("FFFFFFFFFFFFFFFFFF", 16), Err(DataError::Overflow));
    }

    #[test]
    fn test_atoi_leading_zeros_beyond_word_size() {
        let text = format!("{}1", "0".repeat(80));
        assert_eq!(parse_ascii(&text, 2), Ok(1));
    }

    #[test]
    fn test_atoi_rejects_invalid_digits() {
        assert_eq!(
            parse_ascii("12G", 16),
            Err(DataError::InvalidDigit {
                position: 2,
                byte: b'G'
            })
        );
        assert_eq!(
            parse_ascii("102", 2),
            Err(DataError::InvalidDigit {
                position: 2,
                byte: b'2'
            })
        );
        assert!(matches!(
            parse_ascii("ff", 16),
            Err(DataError::InvalidDigit { position: 1, .. })
        ));
        assert!(parse_ascii("- 5", 10).is_err());
    }

    #[test]
    fn test_atoi_empty_inputs() {
        assert_eq!(parse_ascii("", 10), Err(DataError::Empty));
        assert_eq!(parse_ascii("   ", 10), Err(DataError::Empty));
        assert_eq!(parse_ascii("-", 10), Err(DataError::Empty));
        assert_eq!(ascii_to_int(b"\0", 1, 10), Err(DataError::Empty));
    }

    #[test]
    fn test_atoi_rejects_bad_base() {
        assert_eq!(parse_ascii("10", 20), Err(DataError::InvalidBase(20)));
    }
}
