//! Field tables in legacy wire order.
//!
//! Each table lists the networked fields of a record in the order they are
//! delta-coded. The order and widths are part of the wire format.

use crate::consts::{FP_LEVITATION, FP_SEE, GENTITYNUM_BITS, PILOT_ACTIVE_FIELDS};
use crate::field::{net_field, FieldTable, NetField};
use crate::records::{EntityState, PlayerState};

pub(crate) static ENTITY_FIELDS: [NetField<EntityState>; 132] = [
    net_field!("pos.trTime", 32, pos.tr_time),
    net_field!("pos.trBase[1]", 0, pos.tr_base[1]),
    net_field!("pos.trBase[0]", 0, pos.tr_base[0]),
    net_field!("apos.trBase[1]", 0, apos.tr_base[1]),
    net_field!("pos.trBase[2]", 0, pos.tr_base[2]),
    net_field!("apos.trBase[0]", 0, apos.tr_base[0]),
    net_field!("pos.trDelta[0]", 0, pos.tr_delta[0]),
    net_field!("pos.trDelta[1]", 0, pos.tr_delta[1]),
    net_field!("eType", 8, e_type),
    net_field!("angles[1]", 0, angles[1]),
    net_field!("pos.trDelta[2]", 0, pos.tr_delta[2]),
    net_field!("origin[0]", 0, origin[0]),
    net_field!("origin[1]", 0, origin[1]),
    net_field!("origin[2]", 0, origin[2]),
    net_field!("weapon", 8, weapon),
    net_field!("apos.trType", 8, apos.tr_type),
    net_field!("legsAnim", 16, legs_anim),
    net_field!("torsoAnim", 16, torso_anim),
    net_field!("genericenemyindex", 32, genericenemyindex),
    net_field!("eFlags", 32, e_flags),
    net_field!("pos.trDuration", 32, pos.tr_duration),
    net_field!("teamowner", 8, teamowner),
    net_field!("groundEntityNum", GENTITYNUM_BITS, ground_entity_num),
    net_field!("pos.trType", 8, pos.tr_type),
    net_field!("angles[2]", 0, angles[2]),
    net_field!("angles[0]", 0, angles[0]),
    net_field!("solid", 24, solid),
    net_field!("fireflag", 2, fireflag),
    net_field!("event", 10, event),
    net_field!("customRGBA[3]", 8, custom_rgba[3]),
    net_field!("customRGBA[0]", 8, custom_rgba[0]),
    net_field!("speed", 0, speed),
    net_field!("clientNum", GENTITYNUM_BITS, client_num),
    net_field!("apos.trBase[2]", 0, apos.tr_base[2]),
    net_field!("apos.trTime", 32, apos.tr_time),
    net_field!("customRGBA[1]", 8, custom_rgba[1]),
    net_field!("customRGBA[2]", 8, custom_rgba[2]),
    net_field!("saberEntityNum", GENTITYNUM_BITS, saber_entity_num),
    net_field!("g2radius", 8, g2radius),
    net_field!("otherEntityNum2", GENTITYNUM_BITS, other_entity_num2),
    net_field!("owner", GENTITYNUM_BITS, owner),
    net_field!("modelindex2", 8, modelindex2),
    net_field!("eventParm", 8, event_parm),
    net_field!("saberMove", 8, saber_move),
    net_field!("apos.trDelta[1]", 0, apos.tr_delta[1]),
    net_field!("boneAngles1[1]", 0, bone_angles1[1]),
    net_field!("modelindex", -16, modelindex),
    net_field!("emplacedOwner", 32, emplaced_owner),
    net_field!("apos.trDelta[0]", 0, apos.tr_delta[0]),
    net_field!("apos.trDelta[2]", 0, apos.tr_delta[2]),
    net_field!("torsoFlip", 1, torso_flip),
    net_field!("angles2[1]", 0, angles2[1]),
    net_field!("lookTarget", GENTITYNUM_BITS, look_target),
    net_field!("origin2[2]", 0, origin2[2]),
    net_field!("modelGhoul2", 8, model_ghoul2),
    net_field!("loopSound", 8, loop_sound),
    net_field!("origin2[0]", 0, origin2[0]),
    net_field!("shouldtarget", 1, shouldtarget),
    net_field!("trickedentindex", 16, trickedentindex),
    net_field!("otherEntityNum", GENTITYNUM_BITS, other_entity_num),
    net_field!("origin2[1]", 0, origin2[1]),
    net_field!("time2", 32, time2),
    net_field!("legsFlip", 1, legs_flip),
    net_field!("bolt2", GENTITYNUM_BITS, bolt2),
    net_field!("constantLight", 32, constant_light),
    net_field!("time", 32, time),
    net_field!("hasLookTarget", 1, has_look_target),
    net_field!("boneAngles1[2]", 0, bone_angles1[2]),
    net_field!("activeForcePass", 6, active_force_pass),
    net_field!("health", 10, health),
    net_field!("loopIsSoundset", 1, loop_is_soundset),
    net_field!("saberHolstered", 2, saber_holstered),
    net_field!("npcSaber1", 9, npc_saber1),
    net_field!("maxhealth", 10, maxhealth),
    net_field!("trickedentindex2", 16, trickedentindex2),
    net_field!("forcePowersActive", 32, force_powers_active),
    net_field!("iModelScale", 10, i_model_scale),
    net_field!("powerups", 16, powerups),
    net_field!("soundSetIndex", 8, sound_set_index),
    net_field!("brokenLimbs", 8, broken_limbs),
    net_field!("csSounds_Std", 8, cs_sounds_std),
    net_field!("saberInFlight", 1, saber_in_flight),
    net_field!("angles2[0]", 0, angles2[0]),
    net_field!("frame", 16, frame),
    net_field!("angles2[2]", 0, angles2[2]),
    net_field!("forceFrame", 16, force_frame),
    net_field!("generic1", 8, generic1),
    net_field!("boneIndex1", 6, bone_index1),
    net_field!("NPC_class", 8, npc_class),
    net_field!("apos.trDuration", 32, apos.tr_duration),
    net_field!("boneOrient", 9, bone_orient),
    net_field!("bolt1", 8, bolt1),
    net_field!("trickedentindex3", 16, trickedentindex3),
    net_field!("m_iVehicleNum", GENTITYNUM_BITS, m_i_vehicle_num),
    net_field!("trickedentindex4", 16, trickedentindex4),
    net_field!("surfacesOff", 32, surfaces_off),
    net_field!("eFlags2", 10, e_flags2),
    net_field!("isJediMaster", 1, is_jedi_master),
    net_field!("isPortalEnt", 1, is_portal_ent),
    net_field!("heldByClient", 6, held_by_client),
    net_field!("ragAttach", GENTITYNUM_BITS, rag_attach),
    net_field!("boltToPlayer", 6, bolt_to_player),
    net_field!("npcSaber2", 9, npc_saber2),
    net_field!("csSounds_Combat", 8, cs_sounds_combat),
    net_field!("csSounds_Extra", 8, cs_sounds_extra),
    net_field!("csSounds_Jedi", 8, cs_sounds_jedi),
    net_field!("surfacesOn", 32, surfaces_on),
    net_field!("boneIndex2", 6, bone_index2),
    net_field!("boneIndex3", 6, bone_index3),
    net_field!("boneIndex4", 6, bone_index4),
    net_field!("boneAngles1[0]", 0, bone_angles1[0]),
    net_field!("boneAngles2[0]", 0, bone_angles2[0]),
    net_field!("boneAngles2[1]", 0, bone_angles2[1]),
    net_field!("boneAngles2[2]", 0, bone_angles2[2]),
    net_field!("boneAngles3[0]", 0, bone_angles3[0]),
    net_field!("boneAngles3[1]", 0, bone_angles3[1]),
    net_field!("boneAngles3[2]", 0, bone_angles3[2]),
    net_field!("boneAngles4[0]", 0, bone_angles4[0]),
    net_field!("boneAngles4[1]", 0, bone_angles4[1]),
    net_field!("boneAngles4[2]", 0, bone_angles4[2]),
    net_field!("userInt1", 1, user_int1),
    net_field!("userInt2", 1, user_int2),
    net_field!("userInt3", 1, user_int3),
    net_field!("userFloat1", 1, user_float1),
    net_field!("userFloat2", 1, user_float2),
    net_field!("userFloat3", 1, user_float3),
    net_field!("userVec1[0]", 1, user_vec1[0]),
    net_field!("userVec1[1]", 1, user_vec1[1]),
    net_field!("userVec1[2]", 1, user_vec1[2]),
    net_field!("userVec2[0]", 1, user_vec2[0]),
    net_field!("userVec2[1]", 1, user_vec2[1]),
    net_field!("userVec2[2]", 1, user_vec2[2]),
];

pub(crate) static PLAYER_FIELDS: [NetField<PlayerState>; 149] = [
    net_field!("commandTime", 32, command_time),
    net_field!("origin[1]", 0, origin[1]),
    net_field!("origin[0]", 0, origin[0]),
    net_field!("viewangles[1]", 0, viewangles[1]),
    net_field!("viewangles[0]", 0, viewangles[0]),
    net_field!("origin[2]", 0, origin[2]),
    net_field!("velocity[0]", 0, velocity[0]),
    net_field!("velocity[1]", 0, velocity[1]),
    net_field!("velocity[2]", 0, velocity[2]),
    net_field!("bobCycle", 8, bob_cycle),
    net_field!("weaponTime", -16, weapon_time),
    net_field!("delta_angles[1]", 16, delta_angles[1]),
    net_field!("speed", 0, speed),
    net_field!("legsAnim", 16, legs_anim),
    net_field!("delta_angles[0]", 16, delta_angles[0]),
    net_field!("torsoAnim", 16, torso_anim),
    net_field!("groundEntityNum", GENTITYNUM_BITS, ground_entity_num),
    net_field!("eFlags", 32, e_flags),
    net_field!("fd.forcePower", 8, fd.force_power),
    net_field!("eventSequence", 16, event_sequence),
    net_field!("torsoTimer", 16, torso_timer),
    net_field!("legsTimer", 16, legs_timer),
    net_field!("viewheight", -8, viewheight),
    net_field!("fd.saberAnimLevel", 4, fd.saber_anim_level),
    net_field!("rocketLockIndex", GENTITYNUM_BITS, rocket_lock_index),
    net_field!("fd.saberDrawAnimLevel", 4, fd.saber_draw_anim_level),
    net_field!("genericEnemyIndex", 32, generic_enemy_index),
    net_field!("events[0]", 10, events[0]),
    net_field!("events[1]", 10, events[1]),
    net_field!("customRGBA[0]", 8, custom_rgba[0]),
    net_field!("movementDir", 4, movement_dir),
    net_field!("saberEntityNum", GENTITYNUM_BITS, saber_entity_num),
    net_field!("customRGBA[3]", 8, custom_rgba[3]),
    net_field!("weaponstate", 4, weaponstate),
    net_field!("saberMove", 32, saber_move),
    net_field!("standheight", 10, standheight),
    net_field!("crouchheight", 10, crouchheight),
    net_field!("basespeed", -16, basespeed),
    net_field!("pm_flags", 16, pm_flags),
    net_field!("jetpackFuel", 8, jetpack_fuel),
    net_field!("cloakFuel", 8, cloak_fuel),
    net_field!("pm_time", -16, pm_time),
    net_field!("customRGBA[1]", 8, custom_rgba[1]),
    net_field!("clientNum", GENTITYNUM_BITS, client_num),
    net_field!("duelIndex", GENTITYNUM_BITS, duel_index),
    net_field!("customRGBA[2]", 8, custom_rgba[2]),
    net_field!("gravity", 16, gravity),
    net_field!("weapon", 8, weapon),
    net_field!("delta_angles[2]", 16, delta_angles[2]),
    net_field!("saberCanThrow", 1, saber_can_throw),
    net_field!("viewangles[2]", 0, viewangles[2]),
    net_field!("fd.forcePowersKnown", 32, fd.force_powers_known),
    net_field!("fd.forcePowerLevel[FP_LEVITATION]", 2, fd.force_power_level[FP_LEVITATION]),
    net_field!("fd.forcePowerDebounce[FP_LEVITATION]", 32, fd.force_power_debounce[FP_LEVITATION]),
    net_field!("fd.forcePowerSelected", 8, fd.force_power_selected),
    net_field!("torsoFlip", 1, torso_flip),
    net_field!("externalEvent", 10, external_event),
    net_field!("damageYaw", 8, damage_yaw),
    net_field!("damageCount", 8, damage_count),
    net_field!("inAirAnim", 1, in_air_anim),
    net_field!("eventParms[1]", 8, event_parms[1]),
    net_field!("fd.forceSide", 2, fd.force_side),
    net_field!("saberAttackChainCount", 4, saber_attack_chain_count),
    net_field!("pm_type", 8, pm_type),
    net_field!("externalEventParm", 8, external_event_parm),
    net_field!("eventParms[0]", -16, event_parms[0]),
    net_field!("lookTarget", GENTITYNUM_BITS, look_target),
    net_field!("vehOrientation[0]", 0, veh_orientation[0]),
    net_field!("weaponChargeSubtractTime", 32, weapon_charge_subtract_time),
    net_field!("vehOrientation[1]", 0, veh_orientation[1]),
    net_field!("moveDir[1]", 0, move_dir[1]),
    net_field!("moveDir[0]", 0, move_dir[0]),
    net_field!("weaponChargeTime", 32, weapon_charge_time),
    net_field!("vehOrientation[2]", 0, veh_orientation[2]),
    net_field!("legsFlip", 1, legs_flip),
    net_field!("damageEvent", 8, damage_event),
    net_field!("rocketTargetTime", 32, rocket_target_time),
    net_field!("activeForcePass", 6, active_force_pass),
    net_field!("electrifyTime", 32, electrify_time),
    net_field!("fd.forceJumpZStart", 0, fd.force_jump_z_start),
    net_field!("loopSound", 16, loop_sound),
    net_field!("hasLookTarget", 1, has_look_target),
    net_field!("saberBlocked", 8, saber_blocked),
    net_field!("damageType", 2, damage_type),
    net_field!("rocketLockTime", 32, rocket_lock_time),
    net_field!("forceHandExtend", 8, force_hand_extend),
    net_field!("saberHolstered", 2, saber_holstered),
    net_field!("fd.forcePowersActive", 32, fd.force_powers_active),
    net_field!("damagePitch", 8, damage_pitch),
    net_field!("m_iVehicleNum", GENTITYNUM_BITS, m_i_vehicle_num),
    net_field!("vehTurnaroundTime", 32, veh_turnaround_time),
    net_field!("generic1", 8, generic1),
    net_field!("jumppad_ent", 10, jumppad_ent),
    net_field!("hasDetPackPlanted", 1, has_det_pack_planted),
    net_field!("saberInFlight", 1, saber_in_flight),
    net_field!("forceDodgeAnim", 16, force_dodge_anim),
    net_field!("zoomMode", 2, zoom_mode),
    net_field!("hackingTime", 32, hacking_time),
    net_field!("zoomTime", 32, zoom_time),
    net_field!("brokenLimbs", 8, broken_limbs),
    net_field!("zoomLocked", 1, zoom_locked),
    net_field!("zoomFov", 0, zoom_fov),
    net_field!("fd.forceRageRecoveryTime", 32, fd.force_rage_recovery_time),
    net_field!("fallingToDeath", 32, falling_to_death),
    net_field!("fd.forceMindtrickTargetIndex", 16, fd.force_mindtrick_target_index),
    net_field!("fd.forceMindtrickTargetIndex2", 16, fd.force_mindtrick_target_index2),
    net_field!("vehWeaponsLinked", 1, veh_weapons_linked),
    net_field!("lastHitLoc[2]", 0, last_hit_loc[2]),
    net_field!("hyperSpaceTime", 32, hyper_space_time),
    net_field!("fd.forceMindtrickTargetIndex3", 16, fd.force_mindtrick_target_index3),
    net_field!("lastHitLoc[0]", 0, last_hit_loc[0]),
    net_field!("eFlags2", 10, e_flags2),
    net_field!("fd.forceMindtrickTargetIndex4", 16, fd.force_mindtrick_target_index4),
    net_field!("hyperSpaceAngles[1]", 0, hyper_space_angles[1]),
    net_field!("lastHitLoc[1]", 0, last_hit_loc[1]),
    net_field!("vehBoarding", 1, veh_boarding),
    net_field!("fd.sentryDeployed", 1, fd.sentry_deployed),
    net_field!("saberLockTime", 32, saber_lock_time),
    net_field!("saberLockFrame", 16, saber_lock_frame),
    net_field!("vehTurnaroundIndex", GENTITYNUM_BITS, veh_turnaround_index),
    net_field!("vehSurfaces", 16, veh_surfaces),
    net_field!("fd.forcePowerLevel[FP_SEE]", 2, fd.force_power_level[FP_SEE]),
    net_field!("saberLockEnemy", GENTITYNUM_BITS, saber_lock_enemy),
    net_field!("fd.forceGripCripple", 1, fd.force_grip_cripple),
    net_field!("emplacedIndex", GENTITYNUM_BITS, emplaced_index),
    net_field!("holocronBits", 32, holocron_bits),
    net_field!("isJediMaster", 1, is_jedi_master),
    net_field!("forceRestricted", 1, force_restricted),
    net_field!("trueJedi", 1, true_jedi),
    net_field!("trueNonJedi", 1, true_non_jedi),
    net_field!("duelTime", 32, duel_time),
    net_field!("duelInProgress", 1, duel_in_progress),
    net_field!("saberLockAdvance", 1, saber_lock_advance),
    net_field!("heldByClient", 6, held_by_client),
    net_field!("ragAttach", GENTITYNUM_BITS, rag_attach),
    net_field!("iModelScale", 10, i_model_scale),
    net_field!("hackingBaseTime", 16, hacking_base_time),
    net_field!("userInt1", 1, user_int1),
    net_field!("userInt2", 1, user_int2),
    net_field!("userInt3", 1, user_int3),
    net_field!("userFloat1", 1, user_float1),
    net_field!("userFloat2", 1, user_float2),
    net_field!("userFloat3", 1, user_float3),
    net_field!("userVec1[0]", 1, user_vec1[0]),
    net_field!("userVec1[1]", 1, user_vec1[1]),
    net_field!("userVec1[2]", 1, user_vec1[2]),
    net_field!("userVec2[0]", 1, user_vec2[0]),
    net_field!("userVec2[1]", 1, user_vec2[1]),
    net_field!("userVec2[2]", 1, user_vec2[2]),
];

/// Pilot table. Only the first [`PILOT_ACTIVE_FIELDS`] entries are networked.
pub(crate) static PILOT_FIELDS: [NetField<PlayerState>; 140] = [
    net_field!("commandTime", 32, command_time),
    net_field!("origin[1]", 0, origin[1]),
    net_field!("origin[0]", 0, origin[0]),
    net_field!("viewangles[1]", 0, viewangles[1]),
    net_field!("viewangles[0]", 0, viewangles[0]),
    net_field!("origin[2]", 0, origin[2]),
    net_field!("weaponTime", -16, weapon_time),
    net_field!("delta_angles[1]", 16, delta_angles[1]),
    net_field!("delta_angles[0]", 16, delta_angles[0]),
    net_field!("eFlags", 32, e_flags),
    net_field!("eventSequence", 16, event_sequence),
    net_field!("rocketLockIndex", GENTITYNUM_BITS, rocket_lock_index),
    net_field!("events[0]", 10, events[0]),
    net_field!("events[1]", 10, events[1]),
    net_field!("weaponstate", 4, weaponstate),
    net_field!("pm_flags", 16, pm_flags),
    net_field!("pm_time", -16, pm_time),
    net_field!("clientNum", GENTITYNUM_BITS, client_num),
    net_field!("weapon", 8, weapon),
    net_field!("delta_angles[2]", 16, delta_angles[2]),
    net_field!("viewangles[2]", 0, viewangles[2]),
    net_field!("externalEvent", 10, external_event),
    net_field!("eventParms[1]", 8, event_parms[1]),
    net_field!("pm_type", 8, pm_type),
    net_field!("externalEventParm", 8, external_event_parm),
    net_field!("eventParms[0]", -16, event_parms[0]),
    net_field!("weaponChargeSubtractTime", 32, weapon_charge_subtract_time),
    net_field!("weaponChargeTime", 32, weapon_charge_time),
    net_field!("rocketTargetTime", 32, rocket_target_time),
    net_field!("fd.forceJumpZStart", 0, fd.force_jump_z_start),
    net_field!("rocketLockTime", 32, rocket_lock_time),
    net_field!("m_iVehicleNum", GENTITYNUM_BITS, m_i_vehicle_num),
    net_field!("generic1", 8, generic1),
    net_field!("eFlags2", 10, e_flags2),
    net_field!("legsAnim", 16, legs_anim),
    net_field!("torsoAnim", 16, torso_anim),
    net_field!("torsoTimer", 16, torso_timer),
    net_field!("legsTimer", 16, legs_timer),
    net_field!("jetpackFuel", 8, jetpack_fuel),
    net_field!("cloakFuel", 8, cloak_fuel),
    net_field!("saberCanThrow", 1, saber_can_throw),
    net_field!("fd.forcePowerDebounce[FP_LEVITATION]", 32, fd.force_power_debounce[FP_LEVITATION]),
    net_field!("torsoFlip", 1, torso_flip),
    net_field!("legsFlip", 1, legs_flip),
    net_field!("fd.forcePowersActive", 32, fd.force_powers_active),
    net_field!("hasDetPackPlanted", 1, has_det_pack_planted),
    net_field!("fd.forceRageRecoveryTime", 32, fd.force_rage_recovery_time),
    net_field!("saberInFlight", 1, saber_in_flight),
    net_field!("fd.forceMindtrickTargetIndex", 16, fd.force_mindtrick_target_index),
    net_field!("fd.forceMindtrickTargetIndex2", 16, fd.force_mindtrick_target_index2),
    net_field!("fd.forceMindtrickTargetIndex3", 16, fd.force_mindtrick_target_index3),
    net_field!("fd.forceMindtrickTargetIndex4", 16, fd.force_mindtrick_target_index4),
    net_field!("fd.sentryDeployed", 1, fd.sentry_deployed),
    net_field!("fd.forcePowerLevel[FP_SEE]", 2, fd.force_power_level[FP_SEE]),
    net_field!("holocronBits", 32, holocron_bits),
    net_field!("fd.forcePower", 8, fd.force_power),
    net_field!("velocity[0]", 0, velocity[0]),
    net_field!("velocity[1]", 0, velocity[1]),
    net_field!("velocity[2]", 0, velocity[2]),
    net_field!("bobCycle", 8, bob_cycle),
    net_field!("speed", 0, speed),
    net_field!("groundEntityNum", GENTITYNUM_BITS, ground_entity_num),
    net_field!("viewheight", -8, viewheight),
    net_field!("fd.saberAnimLevel", 4, fd.saber_anim_level),
    net_field!("fd.saberDrawAnimLevel", 4, fd.saber_draw_anim_level),
    net_field!("genericEnemyIndex", 32, generic_enemy_index),
    net_field!("customRGBA[0]", 8, custom_rgba[0]),
    net_field!("movementDir", 4, movement_dir),
    net_field!("saberEntityNum", GENTITYNUM_BITS, saber_entity_num),
    net_field!("customRGBA[3]", 8, custom_rgba[3]),
    net_field!("saberMove", 32, saber_move),
    net_field!("standheight", 10, standheight),
    net_field!("crouchheight", 10, crouchheight),
    net_field!("basespeed", -16, basespeed),
    net_field!("customRGBA[1]", 8, custom_rgba[1]),
    net_field!("duelIndex", GENTITYNUM_BITS, duel_index),
    net_field!("customRGBA[2]", 8, custom_rgba[2]),
    net_field!("gravity", 16, gravity),
    net_field!("fd.forcePowersKnown", 32, fd.force_powers_known),
    net_field!("fd.forcePowerLevel[FP_LEVITATION]", 2, fd.force_power_level[FP_LEVITATION]),
    net_field!("fd.forcePowerSelected", 8, fd.force_power_selected),
    net_field!("damageYaw", 8, damage_yaw),
    net_field!("damageCount", 8, damage_count),
    net_field!("inAirAnim", 1, in_air_anim),
    net_field!("fd.forceSide", 2, fd.force_side),
    net_field!("saberAttackChainCount", 4, saber_attack_chain_count),
    net_field!("lookTarget", GENTITYNUM_BITS, look_target),
    net_field!("moveDir[1]", 0, move_dir[1]),
    net_field!("moveDir[0]", 0, move_dir[0]),
    net_field!("damageEvent", 8, damage_event),
    net_field!("moveDir[2]", 0, move_dir[2]),
    net_field!("activeForcePass", 6, active_force_pass),
    net_field!("electrifyTime", 32, electrify_time),
    net_field!("damageType", 2, damage_type),
    net_field!("loopSound", 16, loop_sound),
    net_field!("hasLookTarget", 1, has_look_target),
    net_field!("saberBlocked", 8, saber_blocked),
    net_field!("forceHandExtend", 8, force_hand_extend),
    net_field!("saberHolstered", 2, saber_holstered),
    net_field!("damagePitch", 8, damage_pitch),
    net_field!("jumppad_ent", 10, jumppad_ent),
    net_field!("forceDodgeAnim", 16, force_dodge_anim),
    net_field!("zoomMode", 2, zoom_mode),
    net_field!("hackingTime", 32, hacking_time),
    net_field!("zoomTime", 32, zoom_time),
    net_field!("brokenLimbs", 8, broken_limbs),
    net_field!("zoomLocked", 1, zoom_locked),
    net_field!("zoomFov", 0, zoom_fov),
    net_field!("fallingToDeath", 32, falling_to_death),
    net_field!("lastHitLoc[2]", 0, last_hit_loc[2]),
    net_field!("lastHitLoc[0]", 0, last_hit_loc[0]),
    net_field!("lastHitLoc[1]", 0, last_hit_loc[1]),
    net_field!("saberLockTime", 32, saber_lock_time),
    net_field!("saberLockFrame", 16, saber_lock_frame),
    net_field!("saberLockEnemy", GENTITYNUM_BITS, saber_lock_enemy),
    net_field!("fd.forceGripCripple", 1, fd.force_grip_cripple),
    net_field!("emplacedIndex", GENTITYNUM_BITS, emplaced_index),
    net_field!("isJediMaster", 1, is_jedi_master),
    net_field!("forceRestricted", 1, force_restricted),
    net_field!("trueJedi", 1, true_jedi),
    net_field!("trueNonJedi", 1, true_non_jedi),
    net_field!("duelTime", 32, duel_time),
    net_field!("duelInProgress", 1, duel_in_progress),
    net_field!("saberLockAdvance", 1, saber_lock_advance),
    net_field!("heldByClient", 6, held_by_client),
    net_field!("ragAttach", GENTITYNUM_BITS, rag_attach),
    net_field!("iModelScale", 10, i_model_scale),
    net_field!("hackingBaseTime", 16, hacking_base_time),
    net_field!("userInt1", 1, user_int1),
    net_field!("userInt2", 1, user_int2),
    net_field!("userInt3", 1, user_int3),
    net_field!("userFloat1", 1, user_float1),
    net_field!("userFloat2", 1, user_float2),
    net_field!("userFloat3", 1, user_float3),
    net_field!("userVec1[0]", 1, user_vec1[0]),
    net_field!("userVec1[1]", 1, user_vec1[1]),
    net_field!("userVec1[2]", 1, user_vec1[2]),
    net_field!("userVec2[0]", 1, user_vec2[0]),
    net_field!("userVec2[1]", 1, user_vec2[1]),
    net_field!("userVec2[2]", 1, user_vec2[2]),
];

pub(crate) static VEHICLE_FIELDS: [NetField<PlayerState>; 69] = [
    net_field!("commandTime", 32, command_time),
    net_field!("origin[1]", 0, origin[1]),
    net_field!("origin[0]", 0, origin[0]),
    net_field!("viewangles[1]", 0, viewangles[1]),
    net_field!("viewangles[0]", 0, viewangles[0]),
    net_field!("origin[2]", 0, origin[2]),
    net_field!("velocity[0]", 0, velocity[0]),
    net_field!("velocity[1]", 0, velocity[1]),
    net_field!("velocity[2]", 0, velocity[2]),
    net_field!("weaponTime", -16, weapon_time),
    net_field!("delta_angles[1]", 16, delta_angles[1]),
    net_field!("speed", 0, speed),
    net_field!("legsAnim", 16, legs_anim),
    net_field!("delta_angles[0]", 16, delta_angles[0]),
    net_field!("groundEntityNum", GENTITYNUM_BITS, ground_entity_num),
    net_field!("eFlags", 32, e_flags),
    net_field!("eventSequence", 16, event_sequence),
    net_field!("legsTimer", 16, legs_timer),
    net_field!("rocketLockIndex", GENTITYNUM_BITS, rocket_lock_index),
    net_field!("events[0]", 10, events[0]),
    net_field!("events[1]", 10, events[1]),
    net_field!("weaponstate", 4, weaponstate),
    net_field!("pm_flags", 16, pm_flags),
    net_field!("pm_time", -16, pm_time),
    net_field!("clientNum", GENTITYNUM_BITS, client_num),
    net_field!("gravity", 16, gravity),
    net_field!("weapon", 8, weapon),
    net_field!("delta_angles[2]", 16, delta_angles[2]),
    net_field!("viewangles[2]", 0, viewangles[2]),
    net_field!("externalEvent", 10, external_event),
    net_field!("eventParms[1]", 8, event_parms[1]),
    net_field!("pm_type", 8, pm_type),
    net_field!("externalEventParm", 8, external_event_parm),
    net_field!("eventParms[0]", -16, event_parms[0]),
    net_field!("vehOrientation[0]", 0, veh_orientation[0]),
    net_field!("vehOrientation[1]", 0, veh_orientation[1]),
    net_field!("moveDir[1]", 0, move_dir[1]),
    net_field!("moveDir[0]", 0, move_dir[0]),
    net_field!("vehOrientation[2]", 0, veh_orientation[2]),
    net_field!("moveDir[2]", 0, move_dir[2]),
    net_field!("rocketTargetTime", 32, rocket_target_time),
    net_field!("electrifyTime", 32, electrify_time),
    net_field!("loopSound", 16, loop_sound),
    net_field!("rocketLockTime", 32, rocket_lock_time),
    net_field!("m_iVehicleNum", GENTITYNUM_BITS, m_i_vehicle_num),
    net_field!("vehTurnaroundTime", 32, veh_turnaround_time),
    net_field!("hackingTime", 32, hacking_time),
    net_field!("brokenLimbs", 8, broken_limbs),
    net_field!("vehWeaponsLinked", 1, veh_weapons_linked),
    net_field!("hyperSpaceTime", 32, hyper_space_time),
    net_field!("eFlags2", 10, e_flags2),
    net_field!("hyperSpaceAngles[1]", 0, hyper_space_angles[1]),
    net_field!("vehBoarding", 1, veh_boarding),
    net_field!("vehTurnaroundIndex", GENTITYNUM_BITS, veh_turnaround_index),
    net_field!("vehSurfaces", 16, veh_surfaces),
    net_field!("hyperSpaceAngles[0]", 0, hyper_space_angles[0]),
    net_field!("hyperSpaceAngles[2]", 0, hyper_space_angles[2]),
    net_field!("userInt1", 1, user_int1),
    net_field!("userInt2", 1, user_int2),
    net_field!("userInt3", 1, user_int3),
    net_field!("userFloat1", 1, user_float1),
    net_field!("userFloat2", 1, user_float2),
    net_field!("userFloat3", 1, user_float3),
    net_field!("userVec1[0]", 1, user_vec1[0]),
    net_field!("userVec1[1]", 1, user_vec1[1]),
    net_field!("userVec1[2]", 1, user_vec1[2]),
    net_field!("userVec2[0]", 1, user_vec2[0]),
    net_field!("userVec2[1]", 1, user_vec2[1]),
    net_field!("userVec2[2]", 1, user_vec2[2]),
];

/// Entity state table (132 fields).
pub static ENTITY_TABLE: FieldTable<EntityState> = FieldTable {
    name: "entity",
    fields: &ENTITY_FIELDS,
    active: 132,
};

/// Player state table for an ordinary client (149 fields).
pub static PLAYER_TABLE: FieldTable<PlayerState> = FieldTable {
    name: "player",
    fields: &PLAYER_FIELDS,
    active: 149,
};

/// Player state table for a pilot inside a vehicle.
pub static PILOT_TABLE: FieldTable<PlayerState> = FieldTable {
    name: "pilot",
    fields: &PILOT_FIELDS,
    active: PILOT_ACTIVE_FIELDS,
};

/// Player state table for the vehicle itself (69 fields).
pub static VEHICLE_TABLE: FieldTable<PlayerState> = FieldTable {
    name: "vehicle",
    fields: &VEHICLE_FIELDS,
    active: 69,
};
