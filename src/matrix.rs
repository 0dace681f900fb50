//! The square grid of modules a symbol is made of, and the function-pattern
//! and codeword placement logic that fills it in.

use crate::mask::Mask;
use crate::tables::alignment_pattern_positions;
use crate::version::Version;

/// One cell of a [`Matrix`]: whether it's dark, and whether it belongs to
/// the data region (and is therefore eligible for masking).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Module {
    pub dark: bool,
    pub is_codeword: bool,
}

/// The finished module grid of a QR Code symbol, side `21 + 4*(version - 1)`.
///
/// Stored as two parallel flat `Vec<bool>` rather than a grid of `Module`
/// structs, since most callers only ever need one of the two fields at a
/// time (rendering reads `dark`, masking reads `is_codeword`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    size: i32,
    dark: Vec<bool>,
    is_codeword: Vec<bool>,
}

impl Matrix {
    /// The side length of the matrix, in modules.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the module at the given coordinates. Coordinates must be in bounds.
    pub fn module(&self, x: i32, y: i32) -> Module {
        let i = self.index(x, y);
        Module {
            dark: self.dark[i],
            is_codeword: self.is_codeword[i],
        }
    }

    /// Returns whether the module at the given coordinates is dark.
    pub fn is_dark(&self, x: i32, y: i32) -> bool {
        self.dark[self.index(x, y)]
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!((0..self.size).contains(&x) && (0..self.size).contains(&y));
        (y * self.size + x) as usize
    }

    /// XORs every codeword module with the given mask's predicate. Calling
    /// this twice with the same mask is the identity (masking is its own
    /// inverse), which is how mask trials are applied and reverted in place.
    pub fn apply_mask(&mut self, mask: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let i = self.index(x, y);
                if self.is_codeword[i] && mask.invert_at(x, y) {
                    self.dark[i] = !self.dark[i];
                }
            }
        }
    }

    /// Overwrites a function module's color without touching `is_codeword`.
    /// Used by format information stamping, which rewrites the same cells on
    /// every mask trial.
    pub(crate) fn set_function_bit(&mut self, x: i32, y: i32, dark: bool) {
        let i = self.index(x, y);
        debug_assert!(!self.is_codeword[i], "format/version cells are never codewords");
        self.dark[i] = dark;
    }
}

/// Tracks, in addition to `Matrix`'s two fields, which cells have been
/// written so far. Discarded once the skeleton is fully built; never part of
/// the public `Matrix` surface.
struct Builder {
    size: i32,
    dark: Vec<bool>,
    is_codeword: Vec<bool>,
    written: Vec<bool>,
}

impl Builder {
    fn new(size: i32) -> Self {
        let cells = (size * size) as usize;
        Self {
            size,
            dark: vec![false; cells],
            is_codeword: vec![false; cells],
            written: vec![false; cells],
        }
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.size + x) as usize
    }

    fn is_written(&self, x: i32, y: i32) -> bool {
        self.written[self.index(x, y)]
    }

    /// Sets a function module's color. Function modules are never codewords.
    fn set_function(&mut self, x: i32, y: i32, dark: bool) {
        if !(0..self.size).contains(&x) || !(0..self.size).contains(&y) {
            return;
        }
        let i = self.index(x, y);
        self.dark[i] = dark;
        self.written[i] = true;
    }

    /// Draws a 9x9 finder pattern (including its separator ring), centered at `(x, y)`.
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let dist = dx.abs().max(dy.abs());
                self.set_function(x + dx, y + dy, dist != 2 && dist != 4);
            }
        }
    }

    /// Draws a 5x5 alignment pattern centered at `(x, y)`.
    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    /// Reserves both 18-bit version information regions with a given bit.
    /// Stamped during skeleton construction since the version information
    /// comes straight from a precomputed table, with no dependency on the
    /// chosen mask.
    fn draw_version(&mut self, version: Version) {
        if version.value() < 7 {
            return;
        }
        let bits = crate::tables::version_information(version);
        for i in 0..18 {
            let bit = (bits >> i) & 1 != 0;
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function(a, b, bit);
            self.set_function(b, a, bit);
        }
    }

    /// Reserves the format information regions with placeholder zero bits,
    /// so the codeword walker treats them as occupied. The real bits are
    /// stamped per mask trial by [`crate::format_info`].
    fn reserve_format_bits(&mut self) {
        for i in 0..6 {
            self.set_function(8, i, false);
        }
        self.set_function(8, 7, false);
        self.set_function(8, 8, false);
        self.set_function(7, 8, false);
        for i in 9..15 {
            self.set_function(14 - i, 8, false);
        }
        for i in 0..8 {
            self.set_function(self.size - 1 - i, 8, false);
        }
        for i in 8..15 {
            self.set_function(8, self.size - 15 + i, false);
        }
        self.set_function(8, self.size - 8, true); // the dark module, always dark
    }

    fn draw_function_patterns(&mut self, version: Version) {
        let size = self.size;
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        let positions = alignment_pattern_positions(version);
        let n = positions.len();
        for (i, &px) in positions.iter().enumerate() {
            for (j, &py) in positions.iter().enumerate() {
                if i == 0 && j == 0 || i == 0 && j == n - 1 || i == n - 1 && j == 0 {
                    continue;
                }
                self.draw_alignment_pattern(i32::from(px), i32::from(py));
            }
        }

        self.draw_version(version);

        // Timing patterns only where the finder/alignment/version drawing
        // above hasn't already claimed the cell.
        for i in 0..size {
            if !self.is_written(6, i) {
                self.set_function(6, i, i % 2 == 0);
            }
            if !self.is_written(i, 6) {
                self.set_function(i, 6, i % 2 == 0);
            }
        }

        self.reserve_format_bits();
    }

    /// Places the codeword bit stream in the zig-zag pattern, skipping cells
    /// already claimed by function patterns. Unfilled trailing cells become
    /// light codeword modules (remainder bits).
    fn draw_codewords(&mut self, codewords: &[u8]) {
        let total_bits = codewords.len() * 8;
        let mut bit_index = 0usize;
        let mut right = self.size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..self.size {
                for j in 0..2 {
                    let x = right - j;
                    let upward = (right + 1) & 2 == 0;
                    let y = if upward { self.size - 1 - vert } else { vert };
                    if !self.is_written(x, y) {
                        let bit = if bit_index < total_bits {
                            let byte = codewords[bit_index / 8];
                            (byte >> (7 - (bit_index % 8))) & 1 != 0
                        } else {
                            false
                        };
                        let i = self.index(x, y);
                        self.dark[i] = bit;
                        self.is_codeword[i] = true;
                        self.written[i] = true;
                        if bit_index < total_bits {
                            bit_index += 1;
                        }
                    }
                }
            }
            right -= 2;
        }
        debug_assert_eq!(bit_index, total_bits);
    }

    fn finish(self) -> Matrix {
        debug_assert!(self.written.iter().all(|&w| w), "every cell must be set");
        Matrix {
            size: self.size,
            dark: self.dark,
            is_codeword: self.is_codeword,
        }
    }
}

/// Builds the full, unmasked matrix for `version`: function patterns,
/// reserved format/version regions, and the codeword stream placed in
/// zig-zag order.
pub fn build(version: Version, codewords: &[u8]) -> Matrix {
    let mut builder = Builder::new(version.size());
    builder.draw_function_patterns(version);
    builder.draw_codewords(codewords);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec_level::EcLevel;

    fn filler_codewords(version: Version, ec_level: EcLevel) -> Vec<u8> {
        let geometry = crate::tables::block_geometry(version, ec_level);
        let raw_bits = raw_data_modules(version);
        let total_bytes = (raw_bits / 8) as usize;
        let data_len = geometry.total_data_codewords() as usize;
        (0..total_bytes)
            .map(|i| if i < data_len { 0xAA } else { 0x55 })
            .collect()
    }

    fn raw_data_modules(version: Version) -> u32 {
        let ver = u32::from(version.value());
        let mut result = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        result
    }

    #[test]
    fn matrix_size_matches_version() {
        let codewords = filler_codewords(Version::new(1), EcLevel::Low);
        let matrix = build(Version::new(1), &codewords);
        assert_eq!(matrix.size(), 21);
    }

    #[test]
    fn finder_pattern_corners_are_dark() {
        let codewords = filler_codewords(Version::new(1), EcLevel::Low);
        let matrix = build(Version::new(1), &codewords);
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 1));
        assert!(!matrix.module(0, 0).is_codeword);
    }

    #[test]
    fn dark_module_is_always_dark() {
        let version = Version::new(5);
        let codewords = filler_codewords(version, EcLevel::Low);
        let matrix = build(version, &codewords);
        assert!(matrix.is_dark(8, matrix.size() - 8));
    }

    #[test]
    fn masking_twice_is_identity_on_codewords() {
        let version = Version::new(3);
        let codewords = filler_codewords(version, EcLevel::Low);
        let mut matrix = build(version, &codewords);
        let before = matrix.clone();
        matrix.apply_mask(Mask::new(3));
        matrix.apply_mask(Mask::new(3));
        assert_eq!(matrix, before);
    }

    proptest::proptest! {
        #[test]
        fn masking_twice_is_identity_for_any_version_and_mask(ver in 1u8..=40, msk in 0u8..=7) {
            let version = Version::new(ver);
            let codewords = filler_codewords(version, EcLevel::Low);
            let mut matrix = build(version, &codewords);
            let before = matrix.clone();
            let mask = Mask::new(msk);
            matrix.apply_mask(mask);
            matrix.apply_mask(mask);
            proptest::prop_assert_eq!(matrix, before);
        }
    }
}
