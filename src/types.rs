use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// One rating field: a non-negative number, or explicitly unrated.
///
/// "Unrated" is a real domain state, distinct from a zero rating;
/// collapsing the two corrupts the standings sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Rated(u32),
    Unrated,
}

impl Rating {
    pub fn is_unrated(&self) -> bool {
        matches!(self, Rating::Unrated)
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            Rating::Rated(v) => Some(*v),
            Rating::Unrated => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(v) => write!(f, "{v}"),
            Rating::Unrated => write!(f, "Unrated"),
        }
    }
}

/// Wire shape: the bare number, or the string "Unrated". This is the layout
/// the snapshot file has always used.
impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Rated(v) => serializer.serialize_u32(*v),
            Rating::Unrated => serializer.serialize_str("Unrated"),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(i64),
            Text(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Num(n) if (0..=u32::MAX as i64).contains(&n) => Ok(Rating::Rated(n as u32)),
            // Out-of-range numbers and any marker string read as unrated, so
            // older snapshot revisions decode instead of erroring.
            Repr::Num(_) | Repr::Text(_) => Ok(Rating::Unrated),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// One player's extracted ratings. Built once per identifier by the fetcher,
/// read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub fide_id: String,
    pub name: String,
    pub standard: Rating,
    pub rapid: Rating,
    pub blitz: Rating,
}

impl PlayerRecord {
    /// Fully degraded record: sentinel name, every field unrated. Used for
    /// missing profiles and transport failures alike.
    pub fn placeholder(fide_id: &str) -> Self {
        Self {
            fide_id: fide_id.to_string(),
            name: format!("Player ID {fide_id}"),
            standard: Rating::Unrated,
            rapid: Rating::Unrated,
            blitz: Rating::Unrated,
        }
    }
}

// ---------------------------------------------------------------------------
// RatingsSnapshot
// ---------------------------------------------------------------------------

/// One fetch cycle's batch, in roster order. Replaced wholesale on refetch,
/// never patched per player. Serializes as a plain record array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsSnapshot {
    pub players: Vec<PlayerRecord>,
}

impl RatingsSnapshot {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    /// Whether this snapshot was fetched for exactly the given identifier
    /// list, order-insensitively. Each record carries its fide_id, so the
    /// cache key is derived from the records rather than stored beside them.
    pub fn covers(&self, fide_ids: &[String]) -> bool {
        let mut have: Vec<&str> = self.players.iter().map(|p| p.fide_id.as_str()).collect();
        let mut want: Vec<&str> = fide_ids.iter().map(String::as_str).collect();
        have.sort_unstable();
        want.sort_unstable();
        have == want
    }
}
