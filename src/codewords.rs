//! Turns a UTF-8 string into the header + payload + terminator/padding bit
//! stream a symbol's data region is built from.
//!
//! Byte mode is the only segment mode this crate emits (numeric and
//! alphanumeric mode are out of scope), always preceded by an ECI header
//! designating UTF-8, since the input is an arbitrary Rust `&str` rather than
//! a caller-guaranteed subset of characters.

use crate::bit_buffer::BitBuffer;
use crate::ec_level::EcLevel;
use crate::error::QrError;
use crate::tables::data_capacity_bits;
use crate::version::Version;

const ECI_MODE_INDICATOR: u32 = 0b0111;
const ECI_UTF8_DESIGNATOR: u32 = 0b0_0011010; // assignment number 26, single-byte form
const BYTE_MODE_INDICATOR: u32 = 0b0100;
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Number of bits the character-count indicator occupies for byte mode at
/// the given version.
fn char_count_bits(version: Version) -> u8 {
    if version.value() <= 9 {
        8
    } else {
        16
    }
}

/// The number of header + payload bits `data` would need at `version`,
/// without terminator or padding.
fn unpadded_len_bits(version: Version, data: &str) -> usize {
    4 + 8 + 4 + usize::from(char_count_bits(version)) + data.len() * 8
}

/// Picks the smallest version at `ec_level` whose capacity holds `data`,
/// starting the search at `Version::MIN`.
pub fn choose_version(ec_level: EcLevel, data: &str) -> Result<Version, QrError> {
    let mut version = Version::MIN;
    loop {
        let needed = unpadded_len_bits(version, data);
        if needed <= data_capacity_bits(version, ec_level) as usize {
            return Ok(version);
        }
        match version.next() {
            Some(next) => version = next,
            None => {
                return Err(QrError::CapacityExceeded {
                    used: needed,
                    capacity: data_capacity_bits(Version::MAX, ec_level) as usize,
                });
            }
        }
    }
}

/// Builds the full, byte-aligned, padded data codeword stream for `data` at
/// the given version and EC level.
///
/// Returns `QrError::CapacityExceeded` if `data` doesn't fit the version's
/// capacity at `ec_level`.
pub fn build_data_codewords(
    version: Version,
    ec_level: EcLevel,
    data: &str,
) -> Result<Vec<u8>, QrError> {
    let capacity = data_capacity_bits(version, ec_level) as usize;
    let unpadded = unpadded_len_bits(version, data);
    if unpadded > capacity {
        return Err(QrError::CapacityExceeded {
            used: unpadded,
            capacity,
        });
    }

    let mut bits = BitBuffer::with_bit_capacity(capacity);
    bits.append_bits(ECI_MODE_INDICATOR, 4);
    bits.append_bits(ECI_UTF8_DESIGNATOR, 8);
    bits.append_bits(BYTE_MODE_INDICATOR, 4);
    bits.append_bits(data.len() as u32, char_count_bits(version));
    bits.append_bytes(data.as_bytes());

    let remaining = capacity - bits.len();
    bits.append_zeros(remaining.min(4));
    let to_byte_boundary = (8 - bits.len() % 8) % 8;
    bits.append_zeros(to_byte_boundary);

    let mut codewords = bits.into_bytes();
    let mut pad = 0;
    while codewords.len() * 8 < capacity {
        codewords.push(PAD_BYTES[pad % 2]);
        pad += 1;
    }
    Ok(codewords)
}
