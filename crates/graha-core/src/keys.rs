//! Graha identifiers.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Identifier of one of the nine grahas, serialized by its two-letter
/// abbreviation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ObjectKey {
    /// Surya, the Sun.
    Sy,
    /// Chandra, the Moon.
    Ch,
    /// Mangala, Mars.
    Ma,
    /// Budha, Mercury.
    Bu,
    /// Guru, Jupiter.
    Gu,
    /// Shukra, Venus.
    Sk,
    /// Shani, Saturn.
    Sa,
    /// Rahu, the north lunar node.
    Ra,
    /// Ketu, the south lunar node.
    Ke,
}

impl ObjectKey {
    /// All keys in their canonical (weekday) order.
    pub const ALL: [Self; 9] = [
        Self::Sy,
        Self::Ch,
        Self::Ma,
        Self::Bu,
        Self::Gu,
        Self::Sk,
        Self::Sa,
        Self::Ra,
        Self::Ke,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sy => "Sy",
            Self::Ch => "Ch",
            Self::Ma => "Ma",
            Self::Bu => "Bu",
            Self::Gu => "Gu",
            Self::Sk => "Sk",
            Self::Sa => "Sa",
            Self::Ra => "Ra",
            Self::Ke => "Ke",
        }
    }

    /// Whether this key is one of the lunar nodes (chaya grahas).
    #[must_use]
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Ra | Self::Ke)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownObjectKey(s.to_string()))
    }
}
