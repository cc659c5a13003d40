// ── Wire types for the todo resource ──
//
// TodoId is the one identifier type used end-to-end. Servers are
// inconsistent about whether ids come back as JSON numbers or strings
// of digits; both forms deserialize into the same integer so equality
// never depends on the wire representation.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── TodoId ──────────────────────────────────────────────────────────

/// Server-assigned identifier for a [`Todo`].
///
/// Accepts either a JSON number or a string of digits on the way in,
/// and always serializes as a number. Comparing two ids is plain
/// integer equality, so `7` and `"7"` name the same item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i64);

impl TodoId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = TodoId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string of digits")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TodoId, E> {
                Ok(TodoId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TodoId, E> {
                i64::try_from(v)
                    .map(TodoId)
                    .map_err(|_| E::custom("todo id out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TodoId, E> {
                v.parse::<i64>()
                    .map(TodoId)
                    .map_err(|_| E::custom(format!("todo id is not numeric: {v:?}")))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

// ── Todo ────────────────────────────────────────────────────────────

/// A single todo item as the server returns it.
///
/// Immutable from the client's point of view: the client never patches
/// an item in place, it replaces whole lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
}

/// Create payload. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
