//! Arithmetic in GF(2^8), the finite field Reed-Solomon encoding works over.
//!
//! The field uses the primitive polynomial `x^8 + x^4 + x^3 + x^2 + 1`
//! (reduction constant `0x11D`) with generator element `alpha = 2`, exactly as
//! ISO/IEC 18004 specifies. Rather than the Russian-peasant multiplication a
//! QR encoder can get away with for a single-shot multiply, this module
//! builds the `EXP`/`LOG` tables once and does every multiplication as a
//! table lookup, which is what the `poly_mod` division in the block encoder
//! does many times per block.

use std::sync::OnceLock;

const REDUCTION: u16 = 0x11D;

/// `EXP[i] = alpha^i` for `i` in `[0, 511]`. The table is deliberately twice
/// the field size so that `gf_mul` can add two `LOG` values (which can sum to
/// up to 508) and index straight into `EXP` without a modulo.
pub struct Gf256Tables {
    exp: [u8; 512],
    log: [u8; 256],
}

fn build_tables() -> Gf256Tables {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];

    let mut x: u16 = 1;
    for i in 0..255usize {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= REDUCTION;
        }
    }
    for i in 255..512 {
        exp[i] = exp[i - 255];
    }
    Gf256Tables { exp, log }
}

fn tables() -> &'static Gf256Tables {
    static TABLES: OnceLock<Gf256Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

/// Multiplies two field elements. `LOG[0]` is undefined, so 0 is special-cased.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = tables();
    let sum = usize::from(t.log[a as usize]) + usize::from(t.log[b as usize]);
    t.exp[sum]
}

/// Multiplies two polynomials (coefficients highest-degree first) under GF(256)
/// arithmetic. The result has length `p.len() + q.len() - 1`.
pub fn poly_mul(p: &[u8], q: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        if pi == 0 {
            continue;
        }
        for (j, &qj) in q.iter().enumerate() {
            result[i + j] ^= gf_mul(pi, qj);
        }
    }
    result
}

/// Computes `dividend mod divisor` via synthetic division, returning the
/// remainder with leading zeros stripped down to `divisor.len() - 1` terms.
///
/// `divisor`'s leading coefficient must be 1 (true of every RS generator
/// polynomial this crate builds).
pub fn poly_mod(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    debug_assert_eq!(divisor[0], 1, "generator polynomials are monic");
    // `head` walks forward instead of shrinking the buffer on every step, so
    // the division touches each coefficient once with no reallocation.
    let mut buf = dividend.to_vec();
    let mut head = 0;
    while buf.len() - head >= divisor.len() {
        let factor = buf[head];
        if factor != 0 {
            for (i, &d) in divisor.iter().enumerate() {
                buf[head + i] ^= gf_mul(d, factor);
            }
        }
        head += 1;
    }
    buf.split_off(head)
}
