//! Field-table delta compression of entity and player states.
//!
//! Both codecs compare records as 32-bit wire words, send a count of leading
//! fields covering every change, and then one changed bit per covered field.
//! Fields past the count are copied from the baseline on read.

use schema::{
    EntityState, FieldTable, PlayerState, ENTITY_TABLE, FLOAT_INT_BIAS, FLOAT_INT_BITS,
    GENTITYNUM_BITS, MAX_GENTITIES, MAX_WEAPONS, PILOT_TABLE, PLAYER_TABLE, STAT_WEAPONS,
    VEHICLE_TABLE,
};
use tracing::warn;

use crate::message::MessageCodec;

/// Number of array slots covered by a player-state change mask.
const ARRAY_SLOTS: usize = 16;

/// Builds the change mask of the first [`ARRAY_SLOTS`] entries.
fn change_mask(from: &[i32], to: &[i32]) -> i32 {
    from.iter()
        .zip(to)
        .take(ARRAY_SLOTS)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// Reads the field count, clamped to the table's networked fields.
fn read_field_count<T: 'static>(msg: &mut MessageCodec<'_>, table: &FieldTable<T>) -> usize {
    let count = msg.read_byte().max(0) as usize;
    count.min(table.active_fields().len())
}

impl MessageCodec<'_> {
    /// Writes a float field as a biased 13-bit integer when it is integral
    /// and in range, else as its raw 32-bit pattern.
    #[allow(clippy::float_cmp)]
    fn write_float_field(&mut self, word: u32) {
        let value = f32::from_bits(word);
        let trunc = value as i32;
        let biased = i64::from(trunc) + i64::from(FLOAT_INT_BIAS);
        if trunc as f32 == value && (0..1i64 << FLOAT_INT_BITS).contains(&biased) {
            self.write_bit(0);
            self.write_bits(biased as i32, FLOAT_INT_BITS);
        } else {
            self.write_bit(1);
            self.write_bits(word as i32, 32);
        }
    }

    fn read_float_field(&mut self) -> u32 {
        if self.read_bit() == 0 {
            let trunc = self.read_bits(FLOAT_INT_BITS) - FLOAT_INT_BIAS;
            (trunc as f32).to_bits()
        } else {
            self.read_bits(32) as u32
        }
    }

    /// Writes the delta from `from` to `to` for one entity.
    ///
    /// A missing `to` removes the entity. A missing `from` diffs against a
    /// zeroed record. Nothing is written when the records match unless
    /// `force` is set.
    pub fn write_delta_entity(
        &mut self,
        from: Option<&EntityState>,
        to: Option<&EntityState>,
        force: bool,
    ) {
        let Some(to) = to else {
            if let Some(from) = from {
                self.write_bits(from.number, GENTITYNUM_BITS);
                self.write_bit(1);
            }
            return;
        };

        if !(0..MAX_GENTITIES).contains(&to.number) {
            warn!(number = to.number, "bad entity number, delta not written");
            return;
        }

        let zero = EntityState::default();
        let from = from.unwrap_or(&zero);
        let lc = ENTITY_TABLE.last_changed(from, to);

        if lc == 0 {
            if force {
                self.write_bits(to.number, GENTITYNUM_BITS);
                self.write_bit(0);
                self.write_bit(0);
            }
            return;
        }

        self.write_bits(to.number, GENTITYNUM_BITS);
        self.write_bit(0);
        self.write_bit(1);
        self.write_byte(lc as i32);

        for field in &ENTITY_TABLE.active_fields()[..lc] {
            let (old, new) = (field.word(from), field.word(to));
            if old == new {
                self.write_bit(0);
                continue;
            }
            self.write_bit(1);

            if field.is_float() {
                if f32::from_bits(new) == 0.0 {
                    self.write_bit(0);
                } else {
                    self.write_bit(1);
                    self.write_float_field(new);
                }
            } else if new == 0 {
                self.write_bit(0);
            } else {
                self.write_bit(1);
                self.write_bits(new as i32, field.bits);
            }
        }
    }

    /// Reads an entity delta whose `GENTITYNUM_BITS` number prefix has
    /// already been consumed.
    ///
    /// A removal yields a zeroed record numbered `MAX_GENTITIES - 1`. An
    /// unchanged entity yields a copy of `from` carrying `number`.
    pub fn read_delta_entity(&mut self, from: &EntityState, number: i32) -> EntityState {
        if self.read_bit() == 1 {
            return EntityState {
                number: MAX_GENTITIES - 1,
                ..EntityState::default()
            };
        }

        let mut to = *from;
        to.number = number;
        if self.read_bit() == 0 {
            return to;
        }

        let lc = read_field_count(self, &ENTITY_TABLE);
        for field in &ENTITY_TABLE.active_fields()[..lc] {
            if self.read_bit() == 0 {
                continue;
            }
            let word = if field.is_float() {
                if self.read_bit() == 0 {
                    0
                } else {
                    self.read_float_field()
                }
            } else if self.read_bit() == 0 {
                0
            } else {
                self.read_bits(field.bits) as u32
            };
            field.store(&mut to, word);
        }
        to
    }

    /// Writes the delta from `from` (zeroed when absent) to `to`.
    ///
    /// `vehicle` selects the vehicle table. Otherwise a pilot bit tells the
    /// reader whether the reduced pilot table or the full player table
    /// follows.
    pub fn write_delta_playerstate(
        &mut self,
        from: Option<&PlayerState>,
        to: &PlayerState,
        vehicle: bool,
    ) {
        let zero = PlayerState::default();
        let from = from.unwrap_or(&zero);

        if !vehicle {
            self.write_bit(i32::from(to.is_vehicle_pilot()));
        }
        let table = schema::player_table(to, vehicle);

        let lc = table.last_changed(from, to);
        self.write_byte(lc as i32);

        for field in &table.active_fields()[..lc] {
            let (old, new) = (field.word(from), field.word(to));
            if old == new {
                self.write_bit(0);
                continue;
            }
            self.write_bit(1);

            if field.is_float() {
                self.write_float_field(new);
            } else {
                self.write_bits(new as i32, field.bits);
            }
        }

        let stats = change_mask(&from.stats, &to.stats);
        let persistant = change_mask(&from.persistant, &to.persistant);
        let ammo = change_mask(&from.ammo, &to.ammo);
        let powerups = change_mask(&from.powerups, &to.powerups);

        if stats == 0 && persistant == 0 && ammo == 0 && powerups == 0 {
            self.write_bit(0);
            return;
        }
        self.write_bit(1);

        self.write_masked(stats, &to.stats, |msg, i, value| {
            if i == STAT_WEAPONS {
                msg.write_bits(value, MAX_WEAPONS as i32);
            } else {
                msg.write_short(value);
            }
        });
        self.write_masked(persistant, &to.persistant, |msg, _, value| {
            msg.write_short(value);
        });
        self.write_masked(ammo, &to.ammo, |msg, _, value| msg.write_short(value));
        self.write_masked(powerups, &to.powerups, |msg, _, value| {
            msg.write_long(value);
        });
    }

    /// Reads a player-state delta against `from` (zeroed when absent).
    pub fn read_delta_playerstate(
        &mut self,
        from: Option<&PlayerState>,
        vehicle: bool,
    ) -> PlayerState {
        let mut to = from.copied().unwrap_or_default();

        let table = if vehicle {
            &VEHICLE_TABLE
        } else if self.read_bit() == 1 {
            &PILOT_TABLE
        } else {
            &PLAYER_TABLE
        };

        let lc = read_field_count(self, table);
        for field in &table.active_fields()[..lc] {
            if self.read_bit() == 0 {
                continue;
            }
            let word = if field.is_float() {
                self.read_float_field()
            } else {
                self.read_bits(field.bits) as u32
            };
            field.store(&mut to, word);
        }

        if self.read_bit() == 0 {
            return to;
        }

        self.read_masked(&mut to.stats, |msg, i| {
            if i == STAT_WEAPONS {
                msg.read_bits(MAX_WEAPONS as i32)
            } else {
                msg.read_short()
            }
        });
        self.read_masked(&mut to.persistant, |msg, _| msg.read_short());
        self.read_masked(&mut to.ammo, |msg, _| msg.read_short());
        self.read_masked(&mut to.powerups, |msg, _| msg.read_long());
        to
    }

    fn write_masked(
        &mut self,
        mask: i32,
        values: &[i32],
        mut write: impl FnMut(&mut Self, usize, i32),
    ) {
        if mask == 0 {
            self.write_bit(0);
            return;
        }
        self.write_bit(1);
        self.write_short(mask);
        for (i, &value) in values.iter().enumerate().take(ARRAY_SLOTS) {
            if mask & (1 << i) != 0 {
                write(self, i, value);
            }
        }
    }

    fn read_masked(&mut self, values: &mut [i32], mut read: impl FnMut(&mut Self, usize) -> i32) {
        if self.read_bit() == 0 {
            return;
        }
        let mask = self.read_short();
        for (i, slot) in values.iter_mut().enumerate().take(ARRAY_SLOTS) {
            if mask & (1 << i) != 0 {
                *slot = read(self, i);
            }
        }
    }
}
