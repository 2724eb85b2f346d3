//! Networked game records.
//!
//! Every field here travels as a 32-bit word through a field table (or, for
//! [`UserCmd`], a fixed delta sequence). Field order follows the legacy
//! structure layout; wire order is defined by the tables.

use crate::consts::{MAX_PERSISTANT, MAX_POWERUPS, MAX_PS_EVENTS, MAX_STATS, MAX_WEAPONS, NUM_FORCE_POWERS};

/// Position or angle trajectory of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub tr_type: i32,
    pub tr_time: i32,
    pub tr_duration: i32,
    pub tr_base: [f32; 3],
    pub tr_delta: [f32; 3],
}

/// Entity snapshot record.
///
/// `number` travels separately from the field table as a
/// `GENTITYNUM_BITS`-bit prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityState {
    pub number: i32,
    pub e_type: i32,
    pub e_flags: i32,
    pub e_flags2: i32,
    pub pos: Trajectory,
    pub apos: Trajectory,
    pub time: i32,
    pub time2: i32,
    pub origin: [f32; 3],
    pub origin2: [f32; 3],
    pub angles: [f32; 3],
    pub angles2: [f32; 3],
    pub bolt1: i32,
    pub bolt2: i32,
    pub trickedentindex: i32,
    pub trickedentindex2: i32,
    pub trickedentindex3: i32,
    pub trickedentindex4: i32,
    pub speed: f32,
    pub fireflag: i32,
    pub genericenemyindex: i32,
    pub active_force_pass: i32,
    pub emplaced_owner: i32,
    pub other_entity_num: i32,
    pub other_entity_num2: i32,
    pub ground_entity_num: i32,
    pub constant_light: i32,
    pub loop_sound: i32,
    pub loop_is_soundset: i32,
    pub sound_set_index: i32,
    pub model_ghoul2: i32,
    pub g2radius: i32,
    pub modelindex: i32,
    pub modelindex2: i32,
    pub client_num: i32,
    pub frame: i32,
    pub saber_in_flight: i32,
    pub saber_entity_num: i32,
    pub saber_move: i32,
    pub force_powers_active: i32,
    pub saber_holstered: i32,
    pub is_jedi_master: i32,
    pub is_portal_ent: i32,
    pub solid: i32,
    pub event: i32,
    pub event_parm: i32,
    pub owner: i32,
    pub teamowner: i32,
    pub shouldtarget: i32,
    pub powerups: i32,
    pub weapon: i32,
    pub legs_anim: i32,
    pub torso_anim: i32,
    pub legs_flip: i32,
    pub torso_flip: i32,
    pub force_frame: i32,
    pub generic1: i32,
    pub held_by_client: i32,
    pub rag_attach: i32,
    pub i_model_scale: i32,
    pub broken_limbs: i32,
    pub bolt_to_player: i32,
    pub has_look_target: i32,
    pub look_target: i32,
    pub custom_rgba: [i32; 4],
    pub health: i32,
    pub maxhealth: i32,
    pub npc_saber1: i32,
    pub npc_saber2: i32,
    pub cs_sounds_std: i32,
    pub cs_sounds_combat: i32,
    pub cs_sounds_extra: i32,
    pub cs_sounds_jedi: i32,
    pub surfaces_on: i32,
    pub surfaces_off: i32,
    pub bone_index1: i32,
    pub bone_index2: i32,
    pub bone_index3: i32,
    pub bone_index4: i32,
    pub bone_orient: i32,
    pub bone_angles1: [f32; 3],
    pub bone_angles2: [f32; 3],
    pub bone_angles3: [f32; 3],
    pub bone_angles4: [f32; 3],
    pub npc_class: i32,
    pub m_i_vehicle_num: i32,
    pub user_int1: i32,
    pub user_int2: i32,
    pub user_int3: i32,
    pub user_float1: f32,
    pub user_float2: f32,
    pub user_float3: f32,
    pub user_vec1: [f32; 3],
    pub user_vec2: [f32; 3],
}

/// Networked subset of the force-power state carried in a player state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceData {
    pub force_power_debounce: [i32; NUM_FORCE_POWERS],
    pub force_powers_known: i32,
    pub force_powers_active: i32,
    pub force_power_selected: i32,
    pub force_power: i32,
    pub force_power_level: [i32; NUM_FORCE_POWERS],
    pub force_jump_z_start: f32,
    pub force_grip_cripple: i32,
    pub force_mindtrick_target_index: i32,
    pub force_mindtrick_target_index2: i32,
    pub force_mindtrick_target_index3: i32,
    pub force_mindtrick_target_index4: i32,
    pub force_rage_recovery_time: i32,
    pub force_side: i32,
    pub sentry_deployed: i32,
    pub saber_anim_level: i32,
    pub saber_draw_anim_level: i32,
}

/// Player state record: the scalar fields of the player tables plus four
/// change-masked arrays.
///
/// Only the first 16 entries of `ammo` are ever transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub command_time: i32,
    pub pm_type: i32,
    pub bob_cycle: i32,
    pub pm_flags: i32,
    pub pm_time: i32,
    pub origin: [f32; 3],
    pub velocity: [f32; 3],
    pub move_dir: [f32; 3],
    pub weapon_time: i32,
    pub weapon_charge_time: i32,
    pub weapon_charge_subtract_time: i32,
    pub gravity: i32,
    pub speed: f32,
    pub basespeed: i32,
    pub delta_angles: [i32; 3],
    pub ground_entity_num: i32,
    pub legs_timer: i32,
    pub legs_anim: i32,
    pub torso_timer: i32,
    pub torso_anim: i32,
    pub legs_flip: i32,
    pub torso_flip: i32,
    pub movement_dir: i32,
    pub e_flags: i32,
    pub e_flags2: i32,
    pub event_sequence: i32,
    pub events: [i32; MAX_PS_EVENTS],
    pub event_parms: [i32; MAX_PS_EVENTS],
    pub external_event: i32,
    pub external_event_parm: i32,
    pub client_num: i32,
    pub weapon: i32,
    pub weaponstate: i32,
    pub viewangles: [f32; 3],
    pub viewheight: i32,
    pub damage_event: i32,
    pub damage_yaw: i32,
    pub damage_pitch: i32,
    pub damage_count: i32,
    pub damage_type: i32,
    pub stats: [i32; MAX_STATS],
    pub persistant: [i32; MAX_PERSISTANT],
    pub powerups: [i32; MAX_POWERUPS],
    pub ammo: [i32; MAX_WEAPONS],
    pub generic1: i32,
    pub loop_sound: i32,
    pub jumppad_ent: i32,
    pub saber_in_flight: i32,
    pub saber_move: i32,
    pub saber_blocked: i32,
    pub saber_lock_time: i32,
    pub saber_lock_enemy: i32,
    pub saber_lock_frame: i32,
    pub saber_lock_advance: i32,
    pub saber_entity_num: i32,
    pub saber_can_throw: i32,
    pub rocket_lock_index: i32,
    pub rocket_lock_time: f32,
    pub rocket_target_time: f32,
    pub emplaced_index: i32,
    pub is_jedi_master: i32,
    pub force_restricted: i32,
    pub true_jedi: i32,
    pub true_non_jedi: i32,
    pub generic_enemy_index: i32,
    pub active_force_pass: i32,
    pub has_det_pack_planted: i32,
    pub holocron_bits: i32,
    pub electrify_time: i32,
    pub fd: ForceData,
    pub force_hand_extend: i32,
    pub force_dodge_anim: i32,
    pub duel_index: i32,
    pub duel_time: i32,
    pub duel_in_progress: i32,
    pub saber_attack_chain_count: i32,
    pub saber_holstered: i32,
    pub zoom_mode: i32,
    pub zoom_time: i32,
    pub zoom_locked: i32,
    pub zoom_fov: f32,
    pub falling_to_death: i32,
    pub in_air_anim: i32,
    pub last_hit_loc: [f32; 3],
    pub held_by_client: i32,
    pub rag_attach: i32,
    pub i_model_scale: i32,
    pub broken_limbs: i32,
    pub has_look_target: i32,
    pub look_target: i32,
    pub custom_rgba: [i32; 4],
    pub standheight: i32,
    pub crouchheight: i32,
    pub m_i_vehicle_num: i32,
    pub veh_orientation: [f32; 3],
    pub veh_boarding: i32,
    pub veh_surfaces: i32,
    pub veh_turnaround_index: i32,
    pub veh_turnaround_time: i32,
    pub veh_weapons_linked: i32,
    pub hyper_space_time: i32,
    pub hyper_space_angles: [f32; 3],
    pub hacking_time: i32,
    pub hacking_base_time: i32,
    pub jetpack_fuel: i32,
    pub cloak_fuel: i32,
    pub user_int1: i32,
    pub user_int2: i32,
    pub user_int3: i32,
    pub user_float1: f32,
    pub user_float2: f32,
    pub user_float3: f32,
    pub user_vec1: [f32; 3],
    pub user_vec2: [f32; 3],
}

impl PlayerState {
    /// Returns `true` for a pilot riding inside a vehicle, whose state is sent
    /// with the reduced pilot table.
    #[must_use]
    pub const fn is_vehicle_pilot(&self) -> bool {
        self.m_i_vehicle_num != 0 && self.e_flags & crate::consts::EF_NODRAW != 0
    }
}

/// One client input command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserCmd {
    pub server_time: i32,
    pub angles: [i32; 3],
    pub buttons: i32,
    pub weapon: u8,
    pub forcesel: u8,
    pub invensel: u8,
    pub generic_cmd: u8,
    pub forwardmove: i8,
    pub rightmove: i8,
    pub upmove: i8,
}

/// Converts an angle in degrees to its 16-bit wire form.
#[must_use]
pub fn angle_to_short(angle: f32) -> i32 {
    ((angle * 65536.0 / 360.0) as i32) & 0xFFFF
}

/// Converts a 16-bit wire angle back to degrees.
#[must_use]
pub fn short_to_angle(value: i32) -> f32 {
    value as f32 * (360.0 / 65536.0)
}

impl UserCmd {
    /// Sets `angles` from view angles relative to the player's delta angles.
    pub fn update_angles(&mut self, viewangles: [f32; 3], delta_angles: [i32; 3]) {
        for ((angle, view), delta) in self.angles.iter_mut().zip(viewangles).zip(delta_angles) {
            *angle = angle_to_short(view).wrapping_sub(delta);
        }
    }

    /// Returns `angles` converted to degrees.
    #[must_use]
    pub fn view_angles(&self) -> [f32; 3] {
        self.angles.map(short_to_angle)
    }
}
