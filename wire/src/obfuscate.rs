//! Rolling XOR obfuscation of message bodies.
//!
//! The cipher is keyed by one seed byte and a key string (a previously
//! exchanged command). It is its own inverse: applying it twice with the
//! same key restores the input.

/// Offset in a server-to-client message where obfuscation starts.
///
/// The reliable acknowledge long before it stays plaintext.
pub const CL_DECODE_START: usize = 4;

/// Offset in a client-to-server message where obfuscation starts.
///
/// The server id, message acknowledge and reliable acknowledge longs before it
/// stay plaintext.
pub const SV_DECODE_START: usize = 12;

/// Applies the rolling XOR to `data` in place.
///
/// Each byte evolves the key as `key ^= c << (i & 1)` (truncated to 8 bits),
/// where `c` walks `key_string` cyclically and `i` is the index within
/// `data`. An empty key string contributes zero; `%` contributes `.`.
pub fn xor_stream(data: &mut [u8], mut key: u8, key_string: &[u8]) {
    let mut key_chars = key_string.iter().copied().cycle();
    for (i, byte) in data.iter_mut().enumerate() {
        let c = match key_chars.next() {
            Some(b'%') => b'.',
            Some(c) => c,
            None => 0,
        };
        key ^= (u32::from(c) << (i & 1)) as u8;
        *byte ^= key;
    }
}

/// Seed byte for server-to-client messages.
#[must_use]
pub const fn server_message_key(challenge: i32, sequence: i32) -> u8 {
    (challenge ^ sequence) as u8
}

/// Seed byte for client-to-server messages.
#[must_use]
pub const fn client_message_key(challenge: i32, server_id: i32, message_ack: i32) -> u8 {
    (challenge ^ server_id ^ message_ack) as u8
}
