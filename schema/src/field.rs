//! Field descriptors and tables.

use crate::error::{SchemaError, SchemaResult};

/// A record field that travels as one 32-bit wire word.
///
/// Integers use their two's complement bits, floats their IEEE-754 pattern.
pub trait WireWord: Copy {
    fn to_word(self) -> u32;
    fn from_word(word: u32) -> Self;
}

impl WireWord for i32 {
    fn to_word(self) -> u32 {
        self as u32
    }

    fn from_word(word: u32) -> Self {
        word as i32
    }
}

impl WireWord for f32 {
    fn to_word(self) -> u32 {
        self.to_bits()
    }

    fn from_word(word: u32) -> Self {
        Self::from_bits(word)
    }
}

/// Describes one networked field of record type `T`.
///
/// `bits` follows the legacy convention: `0` marks a float, a negative value
/// a signed integer of `|bits|` bits, a positive value an unsigned one.
pub struct NetField<T> {
    /// Legacy field name, used for diagnostics and fingerprints.
    pub name: &'static str,
    pub bits: i32,
    pub get: fn(&T) -> u32,
    pub set: fn(&mut T, u32),
}

impl<T> Clone for NetField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NetField<T> {}

impl<T> std::fmt::Debug for NetField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetField")
            .field("name", &self.name)
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}

impl<T> NetField<T> {
    /// Returns `true` for float fields.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` for signed integer fields.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.bits < 0
    }

    /// Returns the integer bit width (`0` for floats).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.bits.unsigned_abs()
    }

    /// Reads the field's wire word from `record`.
    #[must_use]
    pub fn word(&self, record: &T) -> u32 {
        (self.get)(record)
    }

    /// Stores a wire word into the field of `record`.
    pub fn store(&self, record: &mut T, word: u32) {
        (self.set)(record, word);
    }

    /// Copies this field from `src` into `dst`.
    pub fn copy(&self, src: &T, dst: &mut T) {
        (self.set)(dst, (self.get)(src));
    }
}

/// An ordered list of field descriptors.
///
/// Only the first `active` entries travel on the wire; the rest of `fields` is
/// kept so the table mirrors its legacy definition.
pub struct FieldTable<T: 'static> {
    pub name: &'static str,
    pub fields: &'static [NetField<T>],
    pub active: usize,
}

impl<T: 'static> std::fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTable")
            .field("name", &self.name)
            .field("len", &self.fields.len())
            .field("active", &self.active)
            .finish()
    }
}

impl<T: 'static> FieldTable<T> {
    /// Returns the networked fields in wire order.
    #[must_use]
    pub fn active_fields(&self) -> &'static [NetField<T>] {
        &self.fields[..self.active.min(self.fields.len())]
    }

    /// Returns `1 + index` of the last networked field whose words differ, or
    /// `0` when every networked field matches.
    #[must_use]
    pub fn last_changed(&self, from: &T, to: &T) -> usize {
        self.active_fields()
            .iter()
            .rposition(|field| field.word(from) != field.word(to))
            .map_or(0, |i| i + 1)
    }

    /// Looks up a field by its legacy name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(usize, &'static NetField<T>)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Checks bit widths and the active count.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.active > self.fields.len() {
            return Err(SchemaError::ActiveOutOfRange {
                table: self.name,
                active: self.active,
                len: self.fields.len(),
            });
        }
        if self.active > usize::from(u8::MAX) {
            return Err(SchemaError::TooManyFields {
                table: self.name,
                active: self.active,
            });
        }
        for field in self.fields {
            if !(-32..=32).contains(&field.bits) {
                return Err(SchemaError::InvalidBitWidth {
                    field: field.name,
                    bits: field.bits,
                });
            }
        }
        Ok(())
    }
}

/// Builds a [`NetField`] for a field path on the record.
macro_rules! net_field {
    ($name:literal, $bits:expr, $($path:tt)+) => {
        $crate::field::NetField {
            name: $name,
            bits: $bits,
            get: |r| $crate::field::WireWord::to_word(r.$($path)+),
            set: |r, w| r.$($path)+ = $crate::field::WireWord::from_word(w),
        }
    };
}

pub(crate) use net_field;
