//! Protocol constants shared by the records and their field tables.

/// Bits used to send an entity number.
pub const GENTITYNUM_BITS: i32 = 10;

/// Number of entity slots; valid entity numbers are `0..MAX_GENTITIES`.
pub const MAX_GENTITIES: i32 = 1 << GENTITYNUM_BITS;

/// Bits used for a float sent as a biased small integer.
pub const FLOAT_INT_BITS: i32 = 13;

/// Bias added to integral floats so negative values fit [`FLOAT_INT_BITS`].
pub const FLOAT_INT_BIAS: i32 = 1 << (FLOAT_INT_BITS - 1);

/// Number of weapons; also the bit width of the weapons stat.
pub const MAX_WEAPONS: usize = 19;

pub const MAX_STATS: usize = 16;
pub const MAX_PERSISTANT: usize = 16;
pub const MAX_POWERUPS: usize = 16;
pub const MAX_PS_EVENTS: usize = 2;

/// Index of the weapons bitmask in `PlayerState::stats`.
pub const STAT_WEAPONS: usize = 4;

/// Entity flag hiding the model; a pilot inside a vehicle carries it.
pub const EF_NODRAW: i32 = 1 << 8;

pub const NUM_FORCE_POWERS: usize = 18;
pub const FP_LEVITATION: usize = 1;
pub const FP_SEE: usize = 14;

/// Number of leading pilot-table entries that travel on the wire.
pub const PILOT_ACTIVE_FIELDS: usize = 140 - 82;
