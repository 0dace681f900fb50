//! Splits a data codeword stream into blocks, Reed-Solomon encodes each
//! block independently, and interleaves data and EC codewords into the final
//! stream the matrix layout consumes.

use crate::ec_level::EcLevel;
use crate::gf256::poly_mod;
use crate::generator::generator_polynomial;
use crate::tables::block_geometry;
use crate::version::Version;

/// One data block together with the EC codewords computed for it.
struct Block {
    data: Vec<u8>,
    ec: Vec<u8>,
}

fn split_blocks(data_codewords: &[u8], version: Version, ec_level: EcLevel) -> Vec<&[u8]> {
    let geometry = block_geometry(version, ec_level);
    let mut blocks = Vec::with_capacity(geometry.total_blocks() as usize);
    let mut offset = 0;
    for _ in 0..geometry.group1_count {
        let size = usize::from(geometry.group1_size);
        blocks.push(&data_codewords[offset..offset + size]);
        offset += size;
    }
    for _ in 0..geometry.group2_count {
        let size = usize::from(geometry.group2_size);
        blocks.push(&data_codewords[offset..offset + size]);
        offset += size;
    }
    debug_assert_eq!(offset, data_codewords.len());
    blocks
}

/// Computes the `ec_count` Reed-Solomon codewords for one data block.
fn reed_solomon_encode(data: &[u8], ec_count: u8) -> Vec<u8> {
    let ec_count = usize::from(ec_count);
    let generator = generator_polynomial(ec_count);

    // data * x^ec_count, expressed as coefficients highest-degree first.
    let mut dividend = data.to_vec();
    dividend.resize(dividend.len() + ec_count, 0);

    let mut remainder = poly_mod(&dividend, generator);
    while remainder.len() < ec_count {
        remainder.insert(0, 0);
    }
    remainder
}

/// Splits, RS-encodes and interleaves `data_codewords` into the final
/// codeword stream: all interleaved data codewords followed by all
/// interleaved EC codewords.
pub fn encode_and_interleave(data_codewords: &[u8], version: Version, ec_level: EcLevel) -> Vec<u8> {
    let ec_count = crate::tables::ec_codewords_per_block(version, ec_level);
    let blocks: Vec<Block> = split_blocks(data_codewords, version, ec_level)
        .into_iter()
        .map(|data| Block {
            data: data.to_vec(),
            ec: reed_solomon_encode(data, ec_count),
        })
        .collect();

    let max_data_len = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(data_codewords.len() + blocks.len() * usize::from(ec_count));

    for i in 0..max_data_len {
        for block in &blocks {
            if let Some(&byte) = block.data.get(i) {
                out.push(byte);
            }
        }
    }
    for i in 0..usize::from(ec_count) {
        for block in &blocks {
            out.push(block.ec[i]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_is_divisible_by_its_generator() {
        for ver in [1u8, 5, 7, 14, 40] {
            let version = Version::new(ver);
            for ec_level in [EcLevel::Low, EcLevel::Medium, EcLevel::Quartile, EcLevel::High] {
                let ec_count = crate::tables::ec_codewords_per_block(version, ec_level);
                let geometry = block_geometry(version, ec_level);
                let data: Vec<u8> = (0..geometry.total_data_codewords())
                    .map(|i| (i * 37 + 5) as u8)
                    .collect();
                for block in split_blocks(&data, version, ec_level) {
                    let ec = reed_solomon_encode(block, ec_count);
                    let mut codeword = block.to_vec();
                    codeword.extend_from_slice(&ec);
                    let generator = generator_polynomial(usize::from(ec_count));
                    let remainder = poly_mod(&codeword, generator);
                    assert!(remainder.iter().all(|&b| b == 0));
                }
            }
        }
    }

    proptest::proptest! {
        #[test]
        fn reed_solomon_codeword_is_always_divisible_by_its_generator(
            data in proptest::collection::vec(proptest::prelude::any::<u8>(), 1..200),
            ec_count in 1u8..=68,
        ) {
            let ec = reed_solomon_encode(&data, ec_count);
            let mut codeword = data.clone();
            codeword.extend_from_slice(&ec);
            let generator = generator_polynomial(usize::from(ec_count));
            let remainder = poly_mod(&codeword, generator);
            proptest::prop_assert!(remainder.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn interleaving_preserves_total_length() {
        let version = Version::new(5);
        let ec_level = EcLevel::Quartile;
        let geometry = block_geometry(version, ec_level);
        let data: Vec<u8> = (0..geometry.total_data_codewords()).map(|i| i as u8).collect();
        let ec_count = crate::tables::ec_codewords_per_block(version, ec_level);
        let out = encode_and_interleave(&data, version, ec_level);
        assert_eq!(
            out.len() as u32,
            geometry.total_data_codewords() + u32::from(ec_count) * geometry.total_blocks()
        );
    }

    #[test]
    fn single_block_interleaving_is_identity_on_data_then_ec() {
        let version = Version::new(1);
        let ec_level = EcLevel::Low;
        let geometry = block_geometry(version, ec_level);
        assert_eq!(geometry.total_blocks(), 1);
        let data: Vec<u8> = (0..geometry.total_data_codewords()).map(|i| i as u8).collect();
        let out = encode_and_interleave(&data, version, ec_level);
        assert_eq!(&out[..data.len()], &data[..]);
    }
}
