//! A minimal reference decoder, compiled only for tests, that undoes
//! exactly this crate's own placement/masking/interleaving to recover the
//! UTF-8 string a [`crate::QrSymbol`] was built from.
//!
//! This crate's whole job is encoding -- decoding is an explicit non-goal of
//! the public API -- so this exists solely to exercise the round-trip
//! property in `#[cfg(test)]` without pulling a third-party decoder
//! dependency into a library that never ships one.

use crate::tables::{block_geometry, ec_codewords_per_block};
use crate::{EcLevel, Matrix, QrSymbol, Version};

/// Walks the same zig-zag order `matrix::build` places codewords in,
/// reading back the bit at every codeword cell.
fn extract_interleaved_bits(matrix: &Matrix) -> Vec<bool> {
    let size = matrix.size();
    let mut bits = Vec::new();
    let mut right = size - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        for vert in 0..size {
            for j in 0..2 {
                let x = right - j;
                let upward = (right + 1) & 2 == 0;
                let y = if upward { size - 1 - vert } else { vert };
                let module = matrix.module(x, y);
                if module.is_codeword {
                    bits.push(module.dark);
                }
            }
        }
        right -= 2;
    }
    bits
}

fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect()
}

/// Reverses block-interleaving, recovering every block's data codewords in
/// original (pre-interleave) order and discarding the EC codewords that
/// trail the interleaved stream. This decoder trusts that encoding already
/// produced a clean codeword stream rather than re-deriving RS syndromes.
fn deinterleave_data(codewords: &[u8], version: Version, ec_level: EcLevel) -> Vec<u8> {
    let geometry = block_geometry(version, ec_level);
    let _ec_count = usize::from(ec_codewords_per_block(version, ec_level));

    let block_sizes: Vec<usize> = std::iter::repeat(usize::from(geometry.group1_size))
        .take(usize::from(geometry.group1_count))
        .chain(
            std::iter::repeat(usize::from(geometry.group2_size))
                .take(usize::from(geometry.group2_count)),
        )
        .collect();
    let max_len = block_sizes.iter().copied().max().unwrap_or(0);

    let mut data_blocks: Vec<Vec<u8>> = block_sizes.iter().map(|&s| Vec::with_capacity(s)).collect();
    let mut pos = 0;
    for i in 0..max_len {
        for (b, &size) in block_sizes.iter().enumerate() {
            if i < size {
                data_blocks[b].push(codewords[pos]);
                pos += 1;
            }
        }
    }
    data_blocks.into_iter().flatten().collect()
}

struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn read_bits(&mut self, width: u32) -> u32 {
        let mut val = 0u32;
        for _ in 0..width {
            let byte = self.bytes[self.pos / 8];
            let bit = (byte >> (7 - (self.pos % 8))) & 1;
            val = (val << 1) | u32::from(bit);
            self.pos += 1;
        }
        val
    }
}

/// Decodes `symbol` back to the UTF-8 string it was encoded from.
///
/// Panics if the symbol's data region doesn't start with this crate's own
/// ECI-plus-byte-mode header, or if the payload isn't valid UTF-8 -- neither
/// should ever happen for a symbol [`crate::encode`] produced.
pub fn decode(symbol: &QrSymbol) -> String {
    let mut working = symbol.matrix().clone();
    working.apply_mask(symbol.mask()); // masking is its own inverse

    let bits = extract_interleaved_bits(&working);
    let codewords = bits_to_bytes(&bits);
    let data = deinterleave_data(&codewords, symbol.version(), symbol.ec_level());

    let mut reader = BitReader::new(&data);
    assert_eq!(reader.read_bits(4), 0b0111, "expected ECI mode indicator");
    assert_eq!(reader.read_bits(8), 0b0_0011010, "expected UTF-8 ECI designator");
    assert_eq!(reader.read_bits(4), 0b0100, "expected byte mode indicator");

    let char_count_bits = if symbol.version().value() <= 9 { 8 } else { 16 };
    let len = reader.read_bits(char_count_bits) as usize;

    let mut payload = Vec::with_capacity(len);
    for _ in 0..len {
        payload.push(reader.read_bits(8) as u8);
    }
    String::from_utf8(payload).expect("payload is valid UTF-8 by construction")
}
