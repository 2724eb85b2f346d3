//! Static byte-frequency table used to seed every connection's models.

/// Byte frequencies replayed through `add_ref` to seed the message models.
///
/// Both peers must seed from exactly these values; any difference changes
/// every code word.
pub const SEED_FREQUENCIES: [u32; 256] = [
    250_315, 41_193, 6_292, 7_106, 3_730, 3_750, 6_110, 23_283, // 0-7
    33_317, 6_950, 7_838, 9_714, 9_257, 17_259, 3_949, 1_778, // 8-15
    8_288, 1_604, 1_590, 1_663, 1_100, 1_213, 1_238, 1_134, // 16-23
    1_749, 1_059, 1_246, 1_149, 1_273, 4_486, 2_805, 3_472, // 24-31
    21_819, 1_159, 1_670, 1_066, 1_043, 1_012, 1_053, 1_070, // 32-39
    1_726, 888, 1_180, 850, 960, 780, 1_752, 3_296, // 40-47
    10_630, 4_514, 5_881, 2_685, 4_650, 3_837, 2_093, 1_867, // 48-55
    2_584, 1_949, 1_972, 940, 1_134, 1_788, 1_670, 1_206, // 56-63
    5_719, 6_128, 7_222, 6_654, 3_710, 3_795, 1_492, 1_524, // 64-71
    2_215, 1_140, 1_355, 971, 2_180, 1_248, 1_328, 1_195, // 72-79
    1_770, 1_078, 1_264, 1_266, 1_168, 965, 1_155, 1_186, // 80-87
    1_347, 1_228, 1_529, 1_600, 2_617, 2_048, 2_546, 3_275, // 88-95
    2_410, 3_585, 2_504, 2_800, 2_675, 6_146, 3_663, 2_840, // 96-103
    14_253, 3_164, 2_221, 1_687, 3_208, 2_739, 3_512, 4_796, // 104-111
    4_091, 3_515, 5_288, 4_016, 7_937, 6_031, 5_360, 3_924, // 112-119
    4_892, 3_743, 4_566, 4_807, 5_852, 6_400, 6_225, 8_291, // 120-127
    23_243, 7_838, 7_073, 8_935, 5_437, 4_483, 3_641, 5_256, // 128-135
    5_312, 5_328, 5_370, 3_492, 2_458, 1_694, 1_821, 2_121, // 136-143
    1_916, 1_149, 1_516, 1_367, 1_236, 1_029, 1_258, 1_104, // 144-151
    1_245, 1_006, 1_149, 1_025, 1_241, 952, 1_287, 997, // 152-159
    1_713, 1_009, 1_187, 879, 1_099, 929, 1_078, 951, // 160-167
    1_656, 930, 1_153, 1_030, 1_262, 1_062, 1_214, 1_060, // 168-175
    1_621, 930, 1_106, 912, 1_034, 892, 1_158, 990, // 176-183
    1_175, 850, 1_121, 903, 1_087, 920, 1_144, 1_056, // 184-191
    3_462, 2_240, 4_397, 12_136, 7_758, 1_345, 1_307, 3_278, // 192-199
    1_950, 886, 1_023, 1_112, 1_077, 1_042, 1_061, 1_071, // 200-207
    1_484, 1_001, 1_096, 915, 1_052, 995, 1_070, 876, // 208-215
    1_111, 851, 1_059, 805, 1_112, 923, 1_103, 817, // 216-223
    1_899, 1_872, 976, 841, 1_127, 956, 1_159, 950, // 224-231
    7_791, 954, 1_289, 933, 1_127, 3_207, 1_020, 927, // 232-239
    1_355, 768, 1_040, 745, 952, 805, 1_073, 740, // 240-247
    1_013, 805, 1_008, 796, 996, 1_057, 11_457, 13_504, // 248-255
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_byte() {
        assert!(SEED_FREQUENCIES.iter().all(|&count| count > 0));
    }

    #[test]
    fn table_total_is_stable() {
        let total: u64 = SEED_FREQUENCIES.iter().map(|&c| u64::from(c)).sum();
        assert_eq!(total, 1_053_340);
    }

    #[test]
    fn zero_byte_dominates() {
        assert_eq!(SEED_FREQUENCIES[0], 250_315);
        assert!(SEED_FREQUENCIES.iter().skip(1).all(|&c| c < SEED_FREQUENCIES[0]));
    }
}
