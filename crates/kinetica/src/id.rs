//! # Entity Identity: 128-bit Random IDs
//!
//! An [`EntityId`] is an opaque 128-bit value. The [`Registry`](crate::ecs::Registry)
//! maps identities to their components; the identity itself carries no data.
//!
//! ## Design: Random IDs, Never Recycled
//!
//! Game-oriented ECS libraries usually hand out small integer slots and pair
//! them with a generation counter so recycled slots can be told apart. A
//! modeling tool has different needs: documents are saved, reloaded, copied
//! between files, and referenced from logs. So every entity gets a fresh
//! random 128-bit identity in the well-known `8-4-4-4-12` hex layout:
//!
//! ```text
//! 550e8400-e29b-41d4-a716-446655440000
//!               ^    ^
//!               |    variant bits `10` (byte 8)
//!               version nibble `4` (byte 6)
//! ```
//!
//! Identities are never reused. A stale handle to a destroyed entity can never
//! alias a newer one. Generation and text rendering come from [`uuid`].
//!
//! ## Nil and Validity
//!
//! The all-zero identity is reserved as "no entity". It is never produced by
//! [`EntityId::generate`] because the version nibble is always non-zero.
//!
//! Parsing is lenient: [`EntityId::parse`] never fails, it returns a value
//! marked invalid when the text is malformed. Equality, ordering, and hashing
//! only look at the 16 bytes, so the validity flag never affects map lookups.
//!
//! Serialization writes the text form. An invalid identity with non-zero bytes
//! has no text form that reads back equal, so serializing one is an error.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};
use uuid::Uuid;

/// Length of the canonical hyphenated text form.
const TEXT_LEN: usize = 36;

/// Byte offsets of the four `-` separators in the text form.
const SEPARATORS: [usize; 4] = [8, 13, 18, 23];

/// Token rendered for the nil (or any invalid) identity.
const NIL_TEXT: &str = "nil";

/// A 128-bit entity identity.
#[derive(Clone, Copy)]
pub struct EntityId {
    uuid: Uuid,
    valid: bool,
}

impl EntityId {
    /// The reserved "no entity" identity.
    pub const NIL: Self = Self {
        uuid: Uuid::nil(),
        valid: false,
    };

    /// Generate a fresh random identity (version 4, variant `10`).
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            valid: true,
        }
    }

    /// The all-zero nil identity.
    pub const fn nil() -> Self {
        Self::NIL
    }

    /// Wrap raw bytes. The result is marked valid.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self {
            uuid: Uuid::from_bytes(bytes),
            valid: true,
        }
    }

    /// Decode the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    ///
    /// Never fails. Wrong length or misplaced separators give [`EntityId::NIL`].
    /// A hex pair that can't be decoded contributes a zero byte and marks the
    /// result invalid; the remaining pairs are still decoded.
    pub fn parse(text: &str) -> Self {
        let s = text.as_bytes();
        if s.len() != TEXT_LEN || SEPARATORS.iter().any(|&i| s[i] != b'-') {
            return Self::NIL;
        }

        let mut bytes = [0u8; 16];
        let mut valid = true;
        let mut pos = 0;
        for byte in bytes.iter_mut() {
            if SEPARATORS.contains(&pos) {
                pos += 1;
            }
            match (hex_value(s[pos]), hex_value(s[pos + 1])) {
                (Some(hi), Some(lo)) => *byte = (hi << 4) | lo,
                _ => valid = false,
            }
            pos += 2;
        }

        Self {
            uuid: Uuid::from_bytes(bytes),
            valid,
        }
    }

    /// Raw bytes, in text order.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.uuid.as_bytes()
    }

    /// Whether this value was generated, built from bytes, or parsed cleanly.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether all 16 bytes are zero.
    pub fn is_nil(&self) -> bool {
        self.uuid.is_nil()
    }

    /// The 4-bit version field (4 for generated identities).
    pub fn version(&self) -> u8 {
        self.uuid.get_version_num() as u8
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NIL
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid || self.is_nil() {
            return f.write_str(NIL_TEXT);
        }
        fmt::Display::fmt(&self.uuid.hyphenated(), f)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({self})")
    }
}

/// Error returned by the strict [`FromStr`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    input: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid entity id", self.input)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for EntityId {
    type Err = ParseIdError;

    /// Strict parse. Accepts `nil` and the canonical text form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NIL_TEXT {
            return Ok(Self::NIL);
        }
        let id = Self::parse(s);
        if id.is_valid() {
            Ok(id)
        } else {
            Err(ParseIdError {
                input: s.to_string(),
            })
        }
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.valid && !self.is_nil() {
            return Err(ser::Error::custom(format_args!(
                "cannot serialize invalid entity id {}",
                self.uuid.hyphenated()
            )));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = EntityId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hyphenated 128-bit id or `nil`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EntityId, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}
