//! Deterministic field table fingerprints.

use blake3::Hasher;

use crate::field::FieldTable;

/// Computes a fingerprint of a table's wire layout.
///
/// Covers the field count, the active count and each field's position and bit
/// width. Field names are excluded, so renaming a field keeps the fingerprint;
/// reordering or resizing fields changes it. Peers with different
/// fingerprints cannot decode each other's deltas.
#[must_use]
pub fn table_hash<T: 'static>(table: &FieldTable<T>) -> u64 {
    let mut hasher = Hasher::new();
    write_u32(&mut hasher, table.fields.len() as u32);
    write_u32(&mut hasher, table.active as u32);

    for (index, field) in table.fields.iter().enumerate() {
        write_u16(&mut hasher, index as u16);
        write_i32(&mut hasher, field.bits);
    }

    let hash = hasher.finalize();
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(word)
}

fn write_u16(hasher: &mut Hasher, value: u16) {
    hasher.update(&value.to_le_bytes());
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}

fn write_i32(hasher: &mut Hasher, value: i32) {
    hasher.update(&value.to_le_bytes());
}
