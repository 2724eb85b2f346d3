//! Networked records and field tables for the jkanet codec.
//!
//! This crate defines the game records that travel as deltas and the field
//! tables that drive their encoding:
//! - [`EntityState`], [`PlayerState`] (with [`ForceData`]) and [`UserCmd`]
//! - [`NetField`] descriptors with typed accessors on a record's wire words
//! - [`FieldTable`]s in legacy order: entity, player, pilot and vehicle
//! - Deterministic table fingerprints via [`table_hash`]
//!
//! # Design Principles
//!
//! - **Tables are the format** - Field order and widths are data, not code.
//!   The delta codec walks tables and never names a field.
//! - **No layout tricks** - Fields are reached through generated accessor
//!   functions, not byte offsets.
//! - **Explicit widths** - `0` marks a float, a negative width a signed
//!   integer, as in the legacy tables.

mod consts;
mod error;
mod field;
mod hash;
mod records;
mod tables;

pub use consts::{
    EF_NODRAW, FLOAT_INT_BIAS, FLOAT_INT_BITS, FP_LEVITATION, FP_SEE, GENTITYNUM_BITS,
    MAX_GENTITIES, MAX_PERSISTANT, MAX_POWERUPS, MAX_PS_EVENTS, MAX_STATS, MAX_WEAPONS,
    NUM_FORCE_POWERS, PILOT_ACTIVE_FIELDS, STAT_WEAPONS,
};
pub use error::{SchemaError, SchemaResult};
pub use field::{FieldTable, NetField, WireWord};
pub use hash::table_hash;
pub use records::{
    angle_to_short, short_to_angle, EntityState, ForceData, PlayerState, Trajectory, UserCmd,
};
pub use tables::{ENTITY_TABLE, PILOT_TABLE, PLAYER_TABLE, VEHICLE_TABLE};

/// Selects the player state table for a record.
///
/// Vehicles use the vehicle table. Otherwise a pilot riding inside a vehicle
/// uses the pilot table and everyone else the full player table.
#[must_use]
pub fn player_table(state: &PlayerState, vehicle: bool) -> &'static FieldTable<PlayerState> {
    if vehicle {
        &VEHICLE_TABLE
    } else if state.is_vehicle_pilot() {
        &PILOT_TABLE
    } else {
        &PLAYER_TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = EntityState::default();
        let _ = PlayerState::default();
        let _ = UserCmd::default();
        let _ = table_hash(&ENTITY_TABLE);
        let _: SchemaResult<()> = Ok(());
        assert_eq!(GENTITYNUM_BITS, 10);
        assert_eq!(STAT_WEAPONS, 4);
    }

    #[test]
    fn player_table_selection() {
        let mut ps = PlayerState::default();
        assert_eq!(player_table(&ps, false).name, "player");
        assert_eq!(player_table(&ps, true).name, "vehicle");

        ps.m_i_vehicle_num = 3;
        ps.e_flags = EF_NODRAW;
        assert_eq!(player_table(&ps, false).name, "pilot");
        assert_eq!(player_table(&ps, true).name, "vehicle");
    }
}
