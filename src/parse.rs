//! Text tokenizer for MAC addresses.
//!
//! Parsing happens in two independent steps: [`strip_separators`] removes
//! everything that is not an ASCII letter or digit, and [`chunk_octets`]
//! reads what is left as consecutive 2-digit hex groups. This accepts the
//! usual notations alike (`56:6f:99:d2:aa:f9`, `56-6F-99-D2-AA-F9`,
//! `566f.99d2.aaf9`) without having to detect the convention first.
use log::{debug, trace};

use crate::{Error, MacAddress, Result};

/// Number of hex digits in a canonical 48-bit address.
pub const HEX_DIGITS: usize = 12;

/// How strictly [`parse_with`] treats the length of its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Exactly 12 hex digits must remain once separators are stripped.
    #[default]
    Strict,
    /// Legacy scanning: a trailing lone digit is read as an octet of its
    /// own. The scan must still yield exactly six octets.
    Lenient,
}

/// Removes every character that is not an ASCII letter or digit.
pub fn strip_separators(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Reads `cleaned` as consecutive 2-character hex chunks, left to right.
///
/// A final 1-character chunk is the value of that single digit. No length
/// check is made, so the result may hold any number of octets.
pub fn chunk_octets(cleaned: &str) -> Result<Vec<u8>> {
    cleaned
        .as_bytes()
        .chunks(2)
        .enumerate()
        .map(|(index, chunk)| {
            chunk.iter().try_fold(0u8, |octet, digit| {
                match char::from(*digit).to_digit(16) {
                    // at most two digits, so this never overflows
                    Some(nibble) => Ok(octet << 4 | nibble as u8),
                    None => Err(Error::InvalidHexDigit {
                        chunk: String::from_utf8_lossy(chunk).into_owned(),
                        offset: index * 2,
                    }),
                }
            })
        })
        .collect()
}

/// Strips separators and chunks the remainder, keeping every octet found.
///
/// This is the unvalidated legacy scan: `"0:1"` gives one octet and a long
/// string gives more than six.
pub fn scan_octets(input: &str) -> Result<Vec<u8>> {
    chunk_octets(&strip_separators(input))
}

/// Parses `input` into a [`MacAddress`] according to `mode`.
pub fn parse_with(input: &str, mode: ParseMode) -> Result<MacAddress> {
    let cleaned = strip_separators(input);
    trace!("parsing {input:?} as {cleaned:?} ({mode:?})");

    if mode == ParseMode::Strict && cleaned.len() != HEX_DIGITS {
        debug!("rejecting {input:?}: {} hex digits", cleaned.len());
        return Err(Error::InvalidLength {
            expected: HEX_DIGITS,
            found: cleaned.len(),
        });
    }

    let octets = chunk_octets(&cleaned).map_err(|error| {
        debug!("rejecting {input:?}: {error}");
        error
    })?;

    MacAddress::try_from(octets.as_slice())
}

#[cfg(test)]
mod tests {
    use super::{chunk_octets, parse_with, scan_octets, strip_separators, ParseMode};
    use crate::{Error, MacAddress};

    #[test]
    fn strips_any_punctuation() {
        assert_eq!(strip_separators("56:6f-99.d2 aa_f9"), "566f99d2aaf9");
        assert_eq!(strip_separators("été:01"), "t01");
        assert_eq!(strip_separators(""), "");
    }

    #[test]
    fn chunks_pairs_and_trailing_digit() {
        assert_eq!(chunk_octets("3c970e").unwrap(), vec![0x3c, 0x97, 0x0e]);
        assert_eq!(chunk_octets("abc").unwrap(), vec![0xab, 0x0c]);
        assert_eq!(chunk_octets("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn chunk_reports_offending_chunk() {
        let error = chunk_octets("00aazq11").unwrap_err();

        assert_eq!(
            error,
            Error::InvalidHexDigit {
                chunk: String::from("zq"),
                offset: 4,
            }
        );
    }

    #[test]
    fn scan_keeps_short_and_long_input() {
        assert_eq!(scan_octets("0:1").unwrap(), vec![0x01]);
        assert_eq!(scan_octets("01:02:03:04:05:06:07").unwrap().len(), 7);
    }

    #[test]
    fn strict_requires_twelve_digits() {
        assert_eq!(
            parse_with("3c:97:0e:7e:52:1", ParseMode::Strict),
            Err(Error::InvalidLength {
                expected: 12,
                found: 11
            })
        );
        assert_eq!(
            parse_with("01:02:03:04:05:06:07", ParseMode::Strict),
            Err(Error::InvalidLength {
                expected: 12,
                found: 14
            })
        );
    }

    #[test]
    fn lenient_accepts_trailing_digit() {
        let mac = parse_with("3c:97:0e:7e:52:1", ParseMode::Lenient).unwrap();

        assert_eq!(mac, MacAddress::new([0x3c, 0x97, 0x0e, 0x7e, 0x52, 0x01]));
    }

    #[test]
    fn lenient_still_rejects_wrong_octet_count() {
        assert_eq!(
            parse_with("01:02:03", ParseMode::Lenient),
            Err(Error::InvalidOctetCount(3))
        );
        assert_eq!(
            parse_with("01:02:03:04:05:06:07", ParseMode::Lenient),
            Err(Error::InvalidOctetCount(7))
        );
    }

    #[test]
    fn hex_errors_win_over_length_in_lenient_mode() {
        assert!(matches!(
            parse_with("zz", ParseMode::Lenient),
            Err(Error::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn default_mode_is_strict() {
        assert_eq!(ParseMode::default(), ParseMode::Strict);
    }
}
