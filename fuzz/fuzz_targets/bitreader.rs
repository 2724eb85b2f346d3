#![no_main]

use bitstream::BitReader;
use huffman::HuffmanContext;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = BitReader::new(data);
    let huffman = HuffmanContext::new();
    let mut idx = 0usize;

    // Input bytes drive a bounded sequence of reads, many of them past the end.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 5;
        let bits = u32::from(data[idx] >> 3) + 1;
        idx += 1;

        match op {
            0 => {
                let _ = reader.get_bit();
            }
            1 => {
                let _ = reader.read_bits_lsb(bits.min(32));
            }
            2 => {
                let _ = reader.read_bits_msb(bits.min(32));
            }
            3 => {
                let _ = huffman.receive(&mut reader);
            }
            _ => reader.advance(bits as usize),
        }
    }
});
