//! Static tables from ISO/IEC 18004: per-(version, error-correction level)
//! data capacity and block geometry, per-version alignment pattern positions,
//! and the precomputed 15-bit format and 18-bit version information words.
//!
//! Every table here is indexed `[version - 1]` (versions are 1-based) and,
//! where applicable, `[ec_level.ordinal()]` for the `L, M, Q, H` column
//! order. Because these are `static` arrays of primitives rather than
//! anything requiring runtime construction, there is no one-shot
//! initialization guard to worry about here (unlike `gf256` and
//! `generator`, whose tables are genuinely computed).

use crate::ec_level::EcLevel;
use crate::version::Version;

/// Data block geometry for one (version, ec_level) pair: `group1_size`
/// data codewords each repeated `group1_count` times, then `group2_size`
/// codewords (always `group1_size + 1`, or absent) repeated `group2_count`
/// times.
#[derive(Copy, Clone, Debug)]
pub struct BlockGeometry {
    pub group1_size: u16,
    pub group1_count: u8,
    pub group2_size: u16,
    pub group2_count: u8,
}

impl BlockGeometry {
    pub fn total_blocks(&self) -> u32 {
        u32::from(self.group1_count) + u32::from(self.group2_count)
    }

    pub fn total_data_codewords(&self) -> u32 {
        u32::from(self.group1_size) * u32::from(self.group1_count)
            + u32::from(self.group2_size) * u32::from(self.group2_count)
    }
}

/// Returns the data/ECC block layout for the given version and EC level.
pub fn block_geometry(version: Version, ec_level: EcLevel) -> BlockGeometry {
    let (g1size, g1count, g2size, g2count) =
        DATA_CODEWORDS_PER_BLOCK[usize::from(version.value()) - 1][ec_level.ordinal()];
    BlockGeometry {
        group1_size: g1size,
        group1_count: g1count,
        group2_size: g2size,
        group2_count: g2count,
    }
}

/// Returns the number of EC codewords appended to every block at this
/// version and EC level.
pub fn ec_codewords_per_block(version: Version, ec_level: EcLevel) -> u8 {
    EC_CODEWORDS_PER_BLOCK[usize::from(version.value()) - 1][ec_level.ordinal()]
}

/// Returns the total data capacity, in bits, for the given version and EC level.
pub fn data_capacity_bits(version: Version, ec_level: EcLevel) -> u32 {
    DATA_CAPACITIES[usize::from(version.value()) - 1][ec_level.ordinal()]
}

/// Returns the ascending alignment-pattern center coordinates for this
/// version (shared by both axes), or an empty slice for version 1.
pub fn alignment_pattern_positions(version: Version) -> &'static [u16] {
    ALIGNMENT_PATTERN_POSITIONS[usize::from(version.value()) - 1]
}

/// Returns the 15-bit format information word for the given EC level and mask.
pub fn format_information(ec_level: EcLevel, mask: crate::mask::Mask) -> u16 {
    let index = (usize::from(ec_level.format_bits()) << 3) | usize::from(mask.value());
    FORMAT_INFORMATION[index]
}

/// Returns the 18-bit version information word for versions 7 and up.
/// Panics if `version.value() < 7`.
pub fn version_information(version: Version) -> u32 {
    let ver = version.value();
    assert!(ver >= 7, "version information only exists for v >= 7");
    VERSION_INFORMATION[usize::from(ver - 7)]
}

// DATA_CODEWORDS_PER_BLOCK[ver-1][ecl] = (g1size,g1count,g2size,g2count)
pub static DATA_CODEWORDS_PER_BLOCK: [[(u16,u8,u16,u8); 4]; 40] = [
    [(19,1,0,0), (16,1,0,0), (13,1,0,0), (9,1,0,0)], // v1
    [(34,1,0,0), (28,1,0,0), (22,1,0,0), (16,1,0,0)], // v2
    [(55,1,0,0), (44,1,0,0), (17,2,0,0), (13,2,0,0)], // v3
    [(80,1,0,0), (32,2,0,0), (24,2,0,0), (9,4,0,0)], // v4
    [(108,1,0,0), (43,2,0,0), (15,2,16,2), (11,2,12,2)], // v5
    [(68,2,0,0), (27,4,0,0), (19,4,0,0), (15,4,0,0)], // v6
    [(78,2,0,0), (31,4,0,0), (14,2,15,4), (13,4,14,1)], // v7
    [(97,2,0,0), (38,2,39,2), (18,4,19,2), (14,4,15,2)], // v8
    [(116,2,0,0), (36,3,37,2), (16,4,17,4), (12,4,13,4)], // v9
    [(68,2,69,2), (43,4,44,1), (19,6,20,2), (15,6,16,2)], // v10
    [(81,4,0,0), (50,1,51,4), (22,4,23,4), (12,3,13,8)], // v11
    [(92,2,93,2), (36,6,37,2), (20,4,21,6), (14,7,15,4)], // v12
    [(107,4,0,0), (37,8,38,1), (20,8,21,4), (11,12,12,4)], // v13
    [(115,3,116,1), (40,4,41,5), (16,11,17,5), (12,11,13,5)], // v14
    [(87,5,88,1), (41,5,42,5), (24,5,25,7), (12,11,13,7)], // v15
    [(98,5,99,1), (45,7,46,3), (19,15,20,2), (15,3,16,13)], // v16
    [(107,1,108,5), (46,10,47,1), (22,1,23,15), (14,2,15,17)], // v17
    [(120,5,121,1), (43,9,44,4), (22,17,23,1), (14,2,15,19)], // v18
    [(113,3,114,4), (44,3,45,11), (21,17,22,4), (13,9,14,16)], // v19
    [(107,3,108,5), (41,3,42,13), (24,15,25,5), (15,15,16,10)], // v20
    [(116,4,117,4), (42,17,0,0), (22,17,23,6), (16,19,17,6)], // v21
    [(111,2,112,7), (46,17,0,0), (24,7,25,16), (13,34,0,0)], // v22
    [(121,4,122,5), (47,4,48,14), (24,11,25,14), (15,16,16,14)], // v23
    [(117,6,118,4), (45,6,46,14), (24,11,25,16), (16,30,17,2)], // v24
    [(106,8,107,4), (47,8,48,13), (24,7,25,22), (15,22,16,13)], // v25
    [(114,10,115,2), (46,19,47,4), (22,28,23,6), (16,33,17,4)], // v26
    [(122,8,123,4), (45,22,46,3), (23,8,24,26), (15,12,16,28)], // v27
    [(117,3,118,10), (45,3,46,23), (24,4,25,31), (15,11,16,31)], // v28
    [(116,7,117,7), (45,21,46,7), (23,1,24,37), (15,19,16,26)], // v29
    [(115,5,116,10), (47,19,48,10), (24,15,25,25), (15,23,16,25)], // v30
    [(115,13,116,3), (46,2,47,29), (24,42,25,1), (15,23,16,28)], // v31
    [(115,17,0,0), (46,10,47,23), (24,10,25,35), (15,19,16,35)], // v32
    [(115,17,116,1), (46,14,47,21), (24,29,25,19), (15,11,16,46)], // v33
    [(115,13,116,6), (46,14,47,23), (24,44,25,7), (16,59,17,1)], // v34
    [(121,12,122,7), (47,12,48,26), (24,39,25,14), (15,22,16,41)], // v35
    [(121,6,122,14), (47,6,48,34), (24,46,25,10), (15,2,16,64)], // v36
    [(122,17,123,4), (46,29,47,14), (24,49,25,10), (15,24,16,46)], // v37
    [(122,4,123,18), (46,13,47,32), (24,48,25,14), (15,42,16,32)], // v38
    [(117,20,118,4), (47,40,48,7), (24,43,25,22), (15,10,16,67)], // v39
    [(118,19,119,6), (47,18,48,31), (24,34,25,34), (15,20,16,61)], // v40
];

pub static DATA_CAPACITIES: [[u32; 4]; 40] = [
    [152, 128, 104, 72], // v1
    [272, 224, 176, 128], // v2
    [440, 352, 272, 208], // v3
    [640, 512, 384, 288], // v4
    [864, 688, 496, 368], // v5
    [1088, 864, 608, 480], // v6
    [1248, 992, 704, 528], // v7
    [1552, 1232, 880, 688], // v8
    [1856, 1456, 1056, 800], // v9
    [2192, 1728, 1232, 976], // v10
    [2592, 2032, 1440, 1120], // v11
    [2960, 2320, 1648, 1264], // v12
    [3424, 2672, 1952, 1440], // v13
    [3688, 2920, 2088, 1576], // v14
    [4184, 3320, 2360, 1784], // v15
    [4712, 3624, 2600, 2024], // v16
    [5176, 4056, 2936, 2264], // v17
    [5768, 4504, 3176, 2504], // v18
    [6360, 5016, 3560, 2728], // v19
    [6888, 5352, 3880, 3080], // v20
    [7456, 5712, 4096, 3248], // v21
    [8048, 6256, 4544, 3536], // v22
    [8752, 6880, 4912, 3712], // v23
    [9392, 7312, 5312, 4112], // v24
    [10208, 8000, 5744, 4304], // v25
    [10960, 8496, 6032, 4768], // v26
    [11744, 9024, 6464, 5024], // v27
    [12248, 9544, 6968, 5288], // v28
    [13048, 10136, 7288, 5608], // v29
    [13880, 10984, 7880, 5960], // v30
    [14744, 11640, 8264, 6344], // v31
    [15640, 12328, 8920, 6760], // v32
    [16568, 13048, 9368, 7208], // v33
    [17528, 13800, 9848, 7688], // v34
    [18448, 14496, 10288, 7888], // v35
    [19472, 15312, 10832, 8432], // v36
    [20528, 15936, 11408, 8768], // v37
    [21616, 16816, 12016, 9136], // v38
    [22496, 17728, 12656, 9776], // v39
    [23648, 18672, 13328, 10208], // v40
];

pub static EC_CODEWORDS_PER_BLOCK: [[u8; 4]; 40] = [
    [7, 10, 13, 17], // v1
    [10, 16, 22, 28], // v2
    [15, 26, 18, 22], // v3
    [20, 18, 26, 16], // v4
    [26, 24, 18, 22], // v5
    [18, 16, 24, 28], // v6
    [20, 18, 18, 26], // v7
    [24, 22, 22, 26], // v8
    [30, 22, 20, 24], // v9
    [18, 26, 24, 28], // v10
    [20, 30, 28, 24], // v11
    [24, 22, 26, 28], // v12
    [26, 22, 24, 22], // v13
    [30, 24, 20, 24], // v14
    [22, 24, 30, 24], // v15
    [24, 28, 24, 30], // v16
    [28, 28, 28, 28], // v17
    [30, 26, 28, 28], // v18
    [28, 26, 26, 26], // v19
    [28, 26, 30, 28], // v20
    [28, 26, 28, 30], // v21
    [28, 28, 30, 24], // v22
    [30, 28, 30, 30], // v23
    [30, 28, 30, 30], // v24
    [26, 28, 30, 30], // v25
    [28, 28, 28, 30], // v26
    [30, 28, 30, 30], // v27
    [30, 28, 30, 30], // v28
    [30, 28, 30, 30], // v29
    [30, 28, 30, 30], // v30
    [30, 28, 30, 30], // v31
    [30, 28, 30, 30], // v32
    [30, 28, 30, 30], // v33
    [30, 28, 30, 30], // v34
    [30, 28, 30, 30], // v35
    [30, 28, 30, 30], // v36
    [30, 28, 30, 30], // v37
    [30, 28, 30, 30], // v38
    [30, 28, 30, 30], // v39
    [30, 28, 30, 30], // v40
];

pub static ALIGNMENT_PATTERN_POSITIONS: [&[u16]; 40] = [
    &[], // v1
    &[6, 18], // v2
    &[6, 22], // v3
    &[6, 26], // v4
    &[6, 30], // v5
    &[6, 34], // v6
    &[6, 22, 38], // v7
    &[6, 24, 42], // v8
    &[6, 26, 46], // v9
    &[6, 28, 50], // v10
    &[6, 30, 54], // v11
    &[6, 32, 58], // v12
    &[6, 34, 62], // v13
    &[6, 26, 46, 66], // v14
    &[6, 26, 48, 70], // v15
    &[6, 26, 50, 74], // v16
    &[6, 30, 54, 78], // v17
    &[6, 30, 56, 82], // v18
    &[6, 30, 58, 86], // v19
    &[6, 34, 62, 90], // v20
    &[6, 28, 50, 72, 94], // v21
    &[6, 26, 50, 74, 98], // v22
    &[6, 30, 54, 78, 102], // v23
    &[6, 28, 54, 80, 106], // v24
    &[6, 32, 58, 84, 110], // v25
    &[6, 30, 58, 86, 114], // v26
    &[6, 34, 62, 90, 118], // v27
    &[6, 26, 50, 74, 98, 122], // v28
    &[6, 30, 54, 78, 102, 126], // v29
    &[6, 26, 52, 78, 104, 130], // v30
    &[6, 30, 56, 82, 108, 134], // v31
    &[6, 34, 60, 86, 112, 138], // v32
    &[6, 30, 58, 86, 114, 142], // v33
    &[6, 34, 62, 90, 118, 146], // v34
    &[6, 30, 54, 78, 102, 126, 150], // v35
    &[6, 24, 50, 76, 102, 128, 154], // v36
    &[6, 28, 54, 80, 106, 132, 158], // v37
    &[6, 32, 58, 84, 110, 136, 162], // v38
    &[6, 26, 54, 82, 110, 138, 166], // v39
    &[6, 30, 58, 86, 114, 142, 170], // v40
];
pub static FORMAT_INFORMATION: [u16; 32] = [
    0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0, 0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976, 0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B, 0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED
];

pub static VERSION_INFORMATION: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78, 0x1145D, 0x12A17, 0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB, 0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75, 0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B, 0x2542E, 0x26A64, 0x27541, 0x28C69
];
