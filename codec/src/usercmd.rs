//! Delta compression of client input commands.

use schema::UserCmd;

use crate::message::MessageCodec;

/// Number of command bytes folded into a usercmd key.
const HASH_KEY_LEN: usize = 32;

/// Hashes at most `max_len` bytes of `command`, stopping at the first NUL.
///
/// Bytes are taken as signed, so high bytes pull the sum down.
#[must_use]
pub fn hash_key(command: &[u8], max_len: usize) -> i32 {
    let hash = command
        .iter()
        .take(max_len)
        .take_while(|&&byte| byte != 0)
        .zip(119..)
        .fold(0i32, |hash, (&byte, weight)| {
            hash.wrapping_add(i32::from(byte as i8).wrapping_mul(weight))
        });
    hash ^ (hash >> 10) ^ (hash >> 20)
}

/// Key for the usercmds of a client packet.
///
/// `command` is the reliable command stored at the packet's reliable
/// acknowledge; see [`ProtocolState::usercmd_key`](crate::ProtocolState::usercmd_key).
#[must_use]
pub fn usercmd_key(checksum_feed: i32, message_ack: i32, command: &[u8]) -> i32 {
    checksum_feed ^ message_ack ^ hash_key(command, HASH_KEY_LEN)
}

/// Writes the server time as a byte delta when it grew by less than 256,
/// else as a full long.
fn write_server_time(msg: &mut MessageCodec<'_>, from: &UserCmd, to: &UserCmd) {
    let delta = to.server_time.wrapping_sub(from.server_time);
    if delta < 256 {
        msg.write_bit(1);
        msg.write_byte(delta);
    } else {
        msg.write_bit(0);
        msg.write_long(to.server_time);
    }
}

fn read_server_time(msg: &mut MessageCodec<'_>, from: &UserCmd) -> i32 {
    if msg.read_bit() == 1 {
        from.server_time.wrapping_add(msg.read_byte())
    } else {
        msg.read_long()
    }
}

/// Returns `true` when every field but the server time matches.
fn same_input(a: &UserCmd, b: &UserCmd) -> bool {
    UserCmd {
        server_time: 0,
        ..*a
    } == UserCmd {
        server_time: 0,
        ..*b
    }
}

impl MessageCodec<'_> {
    /// Writes `to` as a delta from `from`.
    ///
    /// A server time that went backwards still takes the byte path and does
    /// not survive the trip.
    pub fn write_delta_usercmd(&mut self, from: &UserCmd, to: &UserCmd) {
        write_server_time(self, from, to);

        for (old, new) in from.angles.iter().zip(&to.angles) {
            self.write_delta(*old, *new, 16);
        }
        self.write_delta(i32::from(from.forwardmove), i32::from(to.forwardmove), 8);
        self.write_delta(i32::from(from.rightmove), i32::from(to.rightmove), 8);
        self.write_delta(i32::from(from.upmove), i32::from(to.upmove), 8);
        self.write_delta(from.buttons, to.buttons, 16);
        self.write_delta(i32::from(from.weapon), i32::from(to.weapon), 8);
        self.write_delta(i32::from(from.forcesel), i32::from(to.forcesel), 8);
        self.write_delta(i32::from(from.invensel), i32::from(to.invensel), 8);
        self.write_delta(i32::from(from.generic_cmd), i32::from(to.generic_cmd), 8);
    }

    pub fn read_delta_usercmd(&mut self, from: &UserCmd) -> UserCmd {
        let server_time = read_server_time(self, from);
        let mut angles = from.angles;
        for angle in &mut angles {
            *angle = self.read_delta(*angle, 16);
        }
        UserCmd {
            server_time,
            angles,
            forwardmove: self.read_delta(i32::from(from.forwardmove), 8) as i8,
            rightmove: self.read_delta(i32::from(from.rightmove), 8) as i8,
            upmove: self.read_delta(i32::from(from.upmove), 8) as i8,
            buttons: self.read_delta(from.buttons, 16),
            weapon: self.read_delta(i32::from(from.weapon), 8) as u8,
            forcesel: self.read_delta(i32::from(from.forcesel), 8) as u8,
            invensel: self.read_delta(i32::from(from.invensel), 8) as u8,
            generic_cmd: self.read_delta(i32::from(from.generic_cmd), 8) as u8,
        }
    }

    /// Writes `to` as a keyed delta from `from`.
    ///
    /// After the server time, a single bit 0 marks an unchanged command.
    /// Otherwise every field is XORed with `key ^ to.server_time`.
    pub fn write_delta_usercmd_key(&mut self, key: i32, from: &UserCmd, to: &UserCmd) {
        write_server_time(self, from, to);

        if same_input(from, to) {
            self.write_bit(0);
            return;
        }
        let key = key ^ to.server_time;
        self.write_bit(1);

        for (old, new) in from.angles.iter().zip(&to.angles) {
            self.write_delta_key(key, *old, *new, 16);
        }
        self.write_delta_key(key, i32::from(from.forwardmove), i32::from(to.forwardmove), 8);
        self.write_delta_key(key, i32::from(from.rightmove), i32::from(to.rightmove), 8);
        self.write_delta_key(key, i32::from(from.upmove), i32::from(to.upmove), 8);
        self.write_delta_key(key, from.buttons, to.buttons, 16);
        self.write_delta_key(key, i32::from(from.weapon), i32::from(to.weapon), 8);
        self.write_delta_key(key, i32::from(from.forcesel), i32::from(to.forcesel), 8);
        self.write_delta_key(key, i32::from(from.invensel), i32::from(to.invensel), 8);
        self.write_delta_key(key, i32::from(from.generic_cmd), i32::from(to.generic_cmd), 8);
    }

    pub fn read_delta_usercmd_key(&mut self, key: i32, from: &UserCmd) -> UserCmd {
        let server_time = read_server_time(self, from);
        if self.read_bit() == 0 {
            return UserCmd {
                server_time,
                ..*from
            };
        }
        let key = key ^ server_time;

        let mut angles = from.angles;
        for angle in &mut angles {
            *angle = self.read_delta_key(key, *angle, 16);
        }
        UserCmd {
            server_time,
            angles,
            forwardmove: self.read_delta_key(key, i32::from(from.forwardmove), 8) as i8,
            rightmove: self.read_delta_key(key, i32::from(from.rightmove), 8) as i8,
            upmove: self.read_delta_key(key, i32::from(from.upmove), 8) as i8,
            buttons: self.read_delta_key(key, from.buttons, 16),
            weapon: self.read_delta_key(key, i32::from(from.weapon), 8) as u8,
            forcesel: self.read_delta_key(key, i32::from(from.forcesel), 8) as u8,
            invensel: self.read_delta_key(key, i32::from(from.invensel), 8) as u8,
            generic_cmd: self.read_delta_key(key, i32::from(from.generic_cmd), 8) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffman::HuffmanContext;

    fn reopen<'h>(msg: &MessageCodec<'h>) -> MessageCodec<'h> {
        MessageCodec::from_bytes(msg.huffman(), msg.data())
    }

    fn sample() -> UserCmd {
        UserCmd {
            server_time: 10_000,
            angles: [1000, 0xFFFF, 0],
            buttons: 0x401,
            weapon: 3,
            forcesel: 1,
            invensel: 0,
            generic_cmd: 12,
            forwardmove: 127,
            rightmove: -127,
            upmove: 0,
        }
    }

    #[test]
    fn delta_roundtrip() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let from = UserCmd {
            server_time: 9_950,
            ..UserCmd::default()
        };
        let to = sample();
        msg.write_delta_usercmd(&from, &to);

        let mut r = reopen(&msg);
        assert_eq!(r.read_delta_usercmd(&from), to);
        assert_eq!(r.bit(), msg.bit());
    }

    #[test]
    fn large_time_gap_sends_full_long() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let from = UserCmd::default();
        let to = sample();
        msg.write_delta_usercmd(&from, &to);

        let mut r = reopen(&msg);
        assert_eq!(r.read_bit(), 0);
        assert_eq!(r.read_long(), 10_000);
    }

    #[test]
    fn small_time_gap_sends_byte() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let from = sample();
        let mut to = from;
        to.server_time += 255;
        msg.write_delta_usercmd(&from, &to);

        let mut r = reopen(&msg);
        assert_eq!(r.read_bit(), 1);
        assert_eq!(r.read_byte(), 255);
    }

    #[test]
    fn backwards_time_is_lossy() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let from = sample();
        let mut to = from;
        to.server_time -= 1;
        msg.write_delta_usercmd(&from, &to);

        let mut r = reopen(&msg);
        let out = r.read_delta_usercmd(&from);
        assert_eq!(out.server_time, from.server_time + 255);
    }

    #[test]
    fn keyed_roundtrip() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let key = 0x1234_5678;
        let from = UserCmd {
            server_time: 9_990,
            ..UserCmd::default()
        };
        let to = sample();
        msg.write_delta_usercmd_key(key, &from, &to);

        let mut r = reopen(&msg);
        assert_eq!(r.read_delta_usercmd_key(key, &from), to);
        assert_eq!(r.bit(), msg.bit());
    }

    #[test]
    fn keyed_unchanged_sends_one_flag_bit() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let from = sample();
        let mut to = from;
        to.server_time += 8;
        msg.write_delta_usercmd_key(99, &from, &to);

        let mut r = reopen(&msg);
        assert_eq!(r.read_bit(), 1);
        assert_eq!(r.read_byte(), 8);
        assert_eq!(r.read_bit(), 0);
        assert_eq!(r.bit(), msg.bit());

        let mut r = reopen(&msg);
        assert_eq!(r.read_delta_usercmd_key(99, &from), to);
    }

    #[test]
    fn hash_key_known_values() {
        // 97 * 119 + 98 * 120 + 99 * 121 = 35282 = 0x89D2, folded with 0x22.
        assert_eq!(hash_key(b"abc", 32), 0x89F0);
        assert_eq!(hash_key(b"abc", 2), 23_313);
        assert_eq!(hash_key(b"ab\0c", 32), 23_313);
        assert_eq!(hash_key(b"", 32), 0);
        assert_eq!(hash_key(&[0xFF], 32), -119);
    }

    #[test]
    fn hash_key_stops_at_max_len() {
        let long = [b'x'; 40];
        assert_eq!(hash_key(&long, 32), hash_key(&long[..32], 32));
        assert_ne!(hash_key(&long, 33), hash_key(&long, 32));
    }

    #[test]
    fn usercmd_key_folds_acks_and_command() {
        assert_eq!(usercmd_key(0x1234, 5, b"abc"), 0x9BC1);
        assert_eq!(usercmd_key(0, 0, b""), 0);
    }

    #[test]
    fn keyed_roundtrip_with_command_key() {
        let ctx = HuffmanContext::new();
        let mut msg = MessageCodec::new(&ctx, 256);
        let key = usercmd_key(-77, 41, b"userinfo \"\\name\\Kyle\"");
        let from = UserCmd::default();
        let to = sample();
        msg.write_delta_usercmd_key(key, &from, &to);

        let mut r = reopen(&msg);
        assert_eq!(r.read_delta_usercmd_key(key, &from), to);
        let mut wrong = reopen(&msg);
        assert_ne!(wrong.read_delta_usercmd_key(key ^ 1, &from), to);
    }

    #[test]
    fn same_input_ignores_time() {
        let a = sample();
        let mut b = a;
        b.server_time += 1;
        assert!(same_input(&a, &b));
        b.upmove = 1;
        assert!(!same_input(&a, &b));
    }
}
