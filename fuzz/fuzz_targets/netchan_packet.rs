#![no_main]

use codec::{CodecLimits, Netchan, NetchanConfig, Side};
use huffman::HuffmanContext;
use libfuzzer_sys::fuzz_target;

fn netchan(side: Side) -> Netchan {
    let config = NetchanConfig {
        wire_limits: wire::Limits::for_testing(),
        codec_limits: CodecLimits::for_testing(),
        ..NetchanConfig::new(side)
    };
    Netchan::new(config, 0x5EED)
}

fuzz_target!(|data: &[u8]| {
    let huffman = HuffmanContext::new();
    let mut client = netchan(Side::Client);
    let mut server = netchan(Side::Server);

    // Split the input into datagrams fed to both ends.
    let mut idx = 0usize;
    while idx < data.len() && idx < 8192 {
        let len = usize::from(data[idx]) * 8 + 1;
        idx += 1;
        let end = (idx + len).min(data.len());
        let frame = &data[idx..end];
        idx = end;

        for chan in [&mut client, &mut server] {
            if let Ok(Some(mut packet)) = chan.process_incoming(frame, &huffman) {
                let _ = packet.message.read_string(false, true);
                let _ = packet.message.read_long();
            }
        }
    }
});
