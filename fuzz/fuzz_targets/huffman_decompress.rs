#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let out = huffman::decompress(data, 4096);
    assert!(out.len() <= 4096);

    // Anything that decompresses must survive another round trip.
    let again = huffman::decompress(&huffman::compress(&out), 4096);
    assert_eq!(again, out);
});
