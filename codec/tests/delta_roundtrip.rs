use codec::MessageCodec;
use huffman::HuffmanContext;
use proptest::prelude::*;
use schema::{
    EntityState, FieldTable, NetField, PlayerState, UserCmd, ENTITY_TABLE, GENTITYNUM_BITS,
    MAX_GENTITIES, PLAYER_TABLE,
};

fn reopen<'h>(msg: &MessageCodec<'h>) -> MessageCodec<'h> {
    MessageCodec::from_bytes(msg.huffman(), msg.data())
}

/// Walks the bits written for a single changed entity float field at
/// `pos.trBase[1]` and returns whether it took the small-integer path.
fn entity_float_path(value: f32) -> bool {
    let ctx = HuffmanContext::new();
    let mut msg = MessageCodec::new(&ctx, 256);
    let from = EntityState {
        number: 1,
        ..EntityState::default()
    };
    let mut to = from;
    to.pos.tr_base[1] = value;
    msg.write_delta_entity(Some(&from), Some(&to), false);

    let (index, _) = ENTITY_TABLE.find("pos.trBase[1]").unwrap();
    let mut r = reopen(&msg);
    assert_eq!(r.read_bits(GENTITYNUM_BITS), 1);
    assert_eq!(r.read_bit(), 0, "not removed");
    assert_eq!(r.read_bit(), 1, "has delta");
    assert_eq!(r.read_byte(), index as i32 + 1);
    for _ in 0..index {
        assert_eq!(r.read_bit(), 0);
    }
    assert_eq!(r.read_bit(), 1, "changed");
    assert_eq!(r.read_bit(), 1, "nonzero");
    let small = r.read_bit() == 0;

    let mut r = reopen(&msg);
    let number = r.read_bits(GENTITYNUM_BITS);
    let out = r.read_delta_entity(&from, number);
    assert_eq!(out.pos.tr_base[1].to_bits(), value.to_bits());
    small
}

#[test]
fn worked_example_small_integer_float() {
    let ctx = HuffmanContext::new();
    let mut msg = MessageCodec::new(&ctx, 256);
    let from = EntityState::default();
    let mut to = from;
    to.number = 3;
    to.pos.tr_base[1] = 5.0;
    msg.write_delta_entity(Some(&from), Some(&to), false);

    let mut r = reopen(&msg);
    assert_eq!(r.read_bits(GENTITYNUM_BITS), 3);
    assert_eq!(r.read_bit(), 0);
    assert_eq!(r.read_bit(), 1);
    assert_eq!(r.read_byte(), 2);
    assert_eq!(r.read_bit(), 0, "pos.trTime unchanged");
    assert_eq!(r.read_bit(), 1, "pos.trBase[1] changed");
    assert_eq!(r.read_bit(), 1, "nonzero");
    assert_eq!(r.read_bit(), 0, "small integer");
    assert_eq!(r.read_bits(13), 5 + 4096);
    assert_eq!(r.bit(), msg.bit());
}

#[test]
fn float_boundaries() {
    assert!(entity_float_path(4095.0));
    assert!(entity_float_path(-4096.0));
    assert!(entity_float_path(1.0));
    assert!(!entity_float_path(4096.0));
    assert!(!entity_float_path(-4097.0));
    assert!(!entity_float_path(0.5));
    assert!(!entity_float_path(-1.25));
    assert!(!entity_float_path(f32::MAX));
}

#[test]
fn entity_zeroed_float_uses_zero_bit() {
    let ctx = HuffmanContext::new();
    let mut msg = MessageCodec::new(&ctx, 256);
    let mut from = EntityState::default();
    from.pos.tr_base[1] = 12.0;
    let mut to = from;
    to.pos.tr_base[1] = 0.0;
    msg.write_delta_entity(Some(&from), Some(&to), false);

    let mut r = reopen(&msg);
    r.read_bits(GENTITYNUM_BITS);
    r.read_bit();
    r.read_bit();
    assert_eq!(r.read_byte(), 2);
    assert_eq!(r.read_bit(), 0);
    assert_eq!(r.read_bit(), 1);
    assert_eq!(r.read_bit(), 0, "zero bit");
    assert_eq!(r.bit(), msg.bit());
}

#[test]
fn several_entities_in_one_message() {
    let ctx = HuffmanContext::new();
    let mut msg = MessageCodec::new(&ctx, 4096);
    let base = EntityState::default();
    let entities: Vec<EntityState> = (0..20)
        .map(|i| {
            let mut es = base;
            es.number = i * 7;
            es.e_type = i % 5;
            es.pos.tr_base = [i as f32 * 10.0, -(i as f32), 0.25];
            es.e_flags = i << 3;
            es
        })
        .collect();
    for es in &entities {
        msg.write_delta_entity(Some(&base), Some(es), true);
    }
    msg.write_bits(MAX_GENTITIES - 1, GENTITYNUM_BITS);

    let mut r = reopen(&msg);
    let mut out = Vec::new();
    loop {
        let number = r.read_bits(GENTITYNUM_BITS);
        if number == MAX_GENTITIES - 1 {
            break;
        }
        out.push(r.read_delta_entity(&base, number));
    }
    assert_eq!(out, entities);
}

#[test]
fn usercmd_sequence_roundtrip() {
    let ctx = HuffmanContext::new();
    let mut msg = MessageCodec::new(&ctx, 1024);
    let mut cmds = Vec::new();
    let mut cmd = UserCmd::default();
    for i in 0..16 {
        cmd.server_time += 16;
        cmd.angles[1] = (i * 1000) & 0xFFFF;
        cmd.forwardmove = if i % 2 == 0 { 127 } else { -127 };
        cmd.buttons = i & 3;
        cmds.push(cmd);
    }

    let mut prev = UserCmd::default();
    for cmd in &cmds {
        msg.write_delta_usercmd_key(0x600D, &prev, cmd);
        prev = *cmd;
    }

    let mut r = reopen(&msg);
    let mut prev = UserCmd::default();
    for expected in &cmds {
        let got = r.read_delta_usercmd_key(0x600D, &prev);
        assert_eq!(&got, expected);
        prev = got;
    }
}

/// Sets field `index` of `record` to `raw`, masked and sign-extended to the
/// field's width so the value survives the wire.
fn store_fitting<T: 'static>(table: &FieldTable<T>, record: &mut T, index: usize, raw: i32, float: f32) {
    let field: &NetField<T> = &table.active_fields()[index];
    if field.is_float() {
        field.store(record, float.to_bits());
        return;
    }
    let width = field.width();
    let word = if width >= 32 {
        raw as u32
    } else if field.is_signed() {
        let shift = 32 - width;
        (((raw as u32) << shift) as i32 >> shift) as u32
    } else {
        raw as u32 & ((1u32 << width) - 1)
    };
    field.store(record, word);
}

fn float_value() -> impl Strategy<Value = f32> {
    prop_oneof![
        (-10_000i32..10_000).prop_map(|i| i as f32),
        (-40_000i32..40_000).prop_map(|i| i as f32 / 8.0),
        Just(0.0f32),
        Just(1.0e9f32),
    ]
}

fn edits(len: usize) -> impl Strategy<Value = Vec<(usize, i32, f32)>> {
    prop::collection::vec((0..len, any::<i32>(), float_value()), 0..24)
}

proptest! {
    #[test]
    fn entity_delta_roundtrip(
        from_edits in edits(ENTITY_TABLE.active),
        to_edits in edits(ENTITY_TABLE.active),
        number in 0..MAX_GENTITIES - 1,
    ) {
        let ctx = HuffmanContext::new();
        let mut from = EntityState { number, ..EntityState::default() };
        for &(i, raw, f) in &from_edits {
            store_fitting(&ENTITY_TABLE, &mut from, i, raw, f);
        }
        let mut to = from;
        for &(i, raw, f) in &to_edits {
            store_fitting(&ENTITY_TABLE, &mut to, i, raw, f);
        }

        let mut msg = MessageCodec::new(&ctx, 4096);
        msg.write_delta_entity(Some(&from), Some(&to), true);
        prop_assert!(!msg.is_overflowed());

        let mut r = reopen(&msg);
        let read_number = r.read_bits(GENTITYNUM_BITS);
        prop_assert_eq!(read_number, number);
        let out = r.read_delta_entity(&from, read_number);
        prop_assert_eq!(out, to);
        prop_assert_eq!(r.bit(), msg.bit());
    }

    #[test]
    fn player_delta_roundtrip(
        field_edits in edits(PLAYER_TABLE.active),
        stats in prop::collection::vec((0usize..16, -32_768i32..32_768), 0..6),
        weapons in 0i32..(1 << 19),
        powerup in any::<i32>(),
        ammo in prop::collection::vec((0usize..16, -32_768i32..32_768), 0..6),
    ) {
        let ctx = HuffmanContext::new();
        let from = PlayerState::default();
        let mut to = from;
        for &(i, raw, f) in &field_edits {
            store_fitting(&PLAYER_TABLE, &mut to, i, raw, f);
        }
        // Only the plain player table is exercised here.
        to.m_i_vehicle_num = 0;
        for &(i, v) in &stats {
            to.stats[i] = v;
        }
        to.stats[schema::STAT_WEAPONS] = weapons;
        to.powerups[3] = powerup;
        for &(i, v) in &ammo {
            to.ammo[i] = v;
        }

        let mut msg = MessageCodec::new(&ctx, 8192);
        msg.write_delta_playerstate(Some(&from), &to, false);
        prop_assert!(!msg.is_overflowed());

        let mut r = reopen(&msg);
        let out = r.read_delta_playerstate(Some(&from), false);
        prop_assert_eq!(out, to);
        prop_assert_eq!(r.bit(), msg.bit());
    }

    #[test]
    fn usercmd_delta_roundtrip(
        time in 0i32..1_000_000,
        gap in 0i32..100_000,
        angles in prop::array::uniform3(0i32..65_536),
        moves in prop::array::uniform3(any::<i8>()),
        buttons in 0i32..65_536,
        bytes in prop::array::uniform4(any::<u8>()),
        key in any::<i32>(),
    ) {
        let ctx = HuffmanContext::new();
        let from = UserCmd { server_time: time, ..UserCmd::default() };
        let to = UserCmd {
            server_time: time + gap,
            angles,
            buttons,
            weapon: bytes[0],
            forcesel: bytes[1],
            invensel: bytes[2],
            generic_cmd: bytes[3],
            forwardmove: moves[0],
            rightmove: moves[1],
            upmove: moves[2],
        };

        let mut msg = MessageCodec::new(&ctx, 256);
        msg.write_delta_usercmd(&from, &to);
        msg.write_delta_usercmd_key(key, &from, &to);

        let mut r = reopen(&msg);
        prop_assert_eq!(r.read_delta_usercmd(&from), to);
        prop_assert_eq!(r.read_delta_usercmd_key(key, &from), to);
    }
}
