//! Generates QR Code symbols from UTF-8 text.
//!
//! This crate is the encoder half of a QR Code generator: give it a message,
//! a version (or let it pick one), and an error correction level, and it
//! returns the finished monochrome module matrix. It covers the ISO/IEC
//! 18004 Model 2 pipeline end to end -- byte-mode segmentation with a UTF-8
//! ECI header, Reed-Solomon error correction over GF(256), block
//! interleaving, function-pattern and codeword placement, and automatic
//! mask selection by penalty score.
//!
//! Decoding, the other three segment modes (numeric, alphanumeric, kanji),
//! structured append, and Micro QR are all out of scope: this crate only
//! ever emits byte-mode symbols.
//!
//! # Example
//!
//! ```
//! use qrgen::{encode, EcLevel};
//!
//! let symbol = encode(None, EcLevel::Low, "HELLO WORLD").unwrap();
//! assert_eq!(symbol.version().value(), 1);
//! assert_eq!(symbol.matrix().size(), 21);
//! ```

mod bit_buffer;
mod block;
mod codewords;
mod ec_level;
mod error;
mod format_info;
mod generator;
mod gf256;
mod mask;
mod matrix;
mod penalty;
mod tables;
mod version;

#[cfg(test)]
mod decode_for_test;

pub use ec_level::EcLevel;
pub use error::QrError;
pub use mask::Mask;
pub use matrix::{Matrix, Module};
pub use version::Version;

/// The finished output of [`encode`]: a module matrix plus the version,
/// error correction level and mask index that produced it.
///
/// `version` and `mask` are resolved values -- even when the caller asked
/// for automatic version selection or automatic masking, the fields here
/// report exactly what was chosen, since tests (and some renderers) need to
/// know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrSymbol {
    matrix: Matrix,
    version: Version,
    ec_level: EcLevel,
    mask: Mask,
}

impl QrSymbol {
    /// The finished module matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The version this symbol was encoded at.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The error correction level this symbol was encoded at.
    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    /// The mask pattern chosen for this symbol, in `[0, 7]`.
    pub fn mask(&self) -> Mask {
        self.mask
    }
}

/// Encodes `data` into a QR Code symbol at the given error correction level.
///
/// `version` selects an explicit version number in `1..=40`, or `None` to
/// automatically pick the smallest version the message fits in.
///
/// Returns [`QrError::InvalidInput`] if an explicit `version` is outside
/// `1..=40`, or [`QrError::CapacityExceeded`] if `data` doesn't fit the
/// resolved version's capacity at `ec_level` (including the case where no
/// version up to 40 is large enough, for automatic selection).
pub fn encode(version: Option<u8>, ec_level: EcLevel, data: &str) -> Result<QrSymbol, QrError> {
    let version = match version {
        Some(v) => {
            if !(Version::MIN.value()..=Version::MAX.value()).contains(&v) {
                return Err(QrError::InvalidInput(
                    "version must be between 1 and 40, or omitted for automatic selection",
                ));
            }
            Version::new(v)
        }
        None => codewords::choose_version(ec_level, data)?,
    };

    let data_codewords = codewords::build_data_codewords(version, ec_level, data)?;
    let all_codewords = block::encode_and_interleave(&data_codewords, version, ec_level);
    let mut matrix = matrix::build(version, &all_codewords);

    // Apply-and-revert each mask in turn rather than keeping 8 full matrix
    // copies (masking is its own inverse on codeword cells). Format
    // information is re-stamped on every trial because it encodes the mask
    // index and therefore feeds back into the penalty score.
    let mut best_mask = Mask::new(0);
    let mut best_penalty = i32::MAX;
    for mask in Mask::all() {
        matrix.apply_mask(mask);
        format_info::stamp(&mut matrix, ec_level, mask);
        let score = penalty::score(&matrix);
        if score < best_penalty {
            best_penalty = score;
            best_mask = mask;
        }
        matrix.apply_mask(mask); // undo, since XOR masking is its own inverse
    }
    matrix.apply_mask(best_mask);
    format_info::stamp(&mut matrix, ec_level, best_mask);

    Ok(QrSymbol {
        matrix,
        version,
        ec_level,
        mask: best_mask,
    })
}
