//! Stamps the 15-bit format information word for a chosen EC level and mask
//! into its two reserved copies in the matrix. Version information doesn't
//! live here: it has no dependency on the mask, so it's stamped once while
//! the matrix skeleton is built (see [`crate::matrix`]).

use crate::ec_level::EcLevel;
use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::tables::format_information;

/// Writes both copies of the format information for `ec_level`/`mask` into
/// `matrix`'s reserved format cells, overwriting whatever was there before
/// (a previous mask trial, or the placeholder zero bits).
pub fn stamp(matrix: &mut Matrix, ec_level: EcLevel, mask: Mask) {
    let bits = format_information(ec_level, mask);
    let bit = |i: u32| (bits >> i) & 1 != 0;
    let size = matrix.size();

    for i in 0..6 {
        matrix.set_function_bit(8, i, bit(i as u32));
    }
    matrix.set_function_bit(8, 7, bit(6));
    matrix.set_function_bit(8, 8, bit(7));
    matrix.set_function_bit(7, 8, bit(8));
    for i in 9..15 {
        matrix.set_function_bit(14 - i, 8, bit(i as u32));
    }

    for i in 0..8 {
        matrix.set_function_bit(size - 1 - i, 8, bit(i as u32));
    }
    for i in 8..15 {
        matrix.set_function_bit(8, size - 15 + i, bit(i as u32));
    }
    matrix.set_function_bit(8, size - 8, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    #[test]
    fn dark_module_stays_dark_after_stamping() {
        let version = Version::new(3);
        let codewords = vec![0u8; (crate::matrix::build(version, &[]).size()) as usize];
        let mut matrix = crate::matrix::build(version, &codewords);
        stamp(&mut matrix, EcLevel::Medium, Mask::new(2));
        assert!(matrix.is_dark(8, matrix.size() - 8));
    }
}
