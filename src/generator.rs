//! Reed-Solomon generator polynomials.
//!
//! `G_d(x) = product over i in 0..d of (x + alpha^i)`, computed iteratively
//! as `G_d = poly_mul(G_{d-1}, [1, alpha^{d-1}])` starting from `G_0 = [1]`.
//! QR Codes only ever need degrees up to 68 (the largest per-block ECC
//! codeword count any version/level combination uses), so the whole table is
//! built once and cached.

use std::sync::OnceLock;

use crate::gf256::poly_mul;

/// The largest generator degree any QR Code version/EC-level pair requires.
pub const MAX_DEGREE: usize = 68;

fn build_generators() -> Vec<Vec<u8>> {
    let mut generators = Vec::with_capacity(MAX_DEGREE + 1);
    generators.push(vec![1u8]); // G_0(x) = 1
    let mut alpha_pow = 1u8;
    for d in 1..=MAX_DEGREE {
        generators.push(poly_mul(&generators[d - 1], &[1, alpha_pow]));
        alpha_pow = crate::gf256::gf_mul(alpha_pow, 2);
    }
    generators
}

/// Returns the generator polynomial of the given degree, coefficients
/// highest-degree first, monic (leading coefficient 1).
///
/// Panics if `degree` exceeds [`MAX_DEGREE`].
pub fn generator_polynomial(degree: usize) -> &'static [u8] {
    static GENERATORS: OnceLock<Vec<Vec<u8>>> = OnceLock::new();
    &GENERATORS.get_or_init(build_generators)[degree]
}
