//! Character, dignity, and classification enums for Graha.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Classification enums follow the naming of Brihat Parashara Hora Shastra,
//! chapter 3.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

/// Benefic/malefic nature of a graha.
///
/// Descriptors only ever carry `Benign` or `Malefic` as their base character.
/// `Mixed` is produced by resolution when a graha is conjunct with both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    Benign,
    Malefic,
    Mixed,
}

impl Character {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Benign => "benign",
            Self::Malefic => "malefic",
            Self::Mixed => "mixed",
        }
    }

    /// Whether this value may be used as a descriptor's base character.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::Benign | Self::Malefic)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CharacterRuleKind
// ---------------------------------------------------------------------------

/// Which rule derives a graha's resolved character from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CharacterRuleKind {
    /// The base character, regardless of position.
    Fixed,
    /// Benefic/malefic tally over grahas sharing the same house.
    Conjunction,
    /// Waxing (shukla) or waning (krishna) phase relative to the Sun.
    Paksha,
}

impl CharacterRuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Conjunction => "conjunction",
            Self::Paksha => "paksha",
        }
    }
}

impl fmt::Display for CharacterRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Dignity of a graha by sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    /// In the exaltation (ucha) sign.
    Exalted,
    /// Within the mooltrikona range.
    Mooltrikona,
    /// Within one of its own-sign (swa) ranges.
    OwnSign,
    /// In the debilitation (neecha) sign.
    Debilitated,
    Neutral,
}

impl Dignity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::Mooltrikona => "mooltrikona",
            Self::OwnSign => "own_sign",
            Self::Debilitated => "debilitated",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classifications
// ---------------------------------------------------------------------------

/// Presiding deity (BPHS 3.18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Deva {
    Agni,
    Varuna,
    Skanda,
    Vishnu,
    Indra,
    Shachi,
    Brahma,
}

/// Gender (BPHS 3.19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Neuter,
}

/// Governing element (BPHS 3.20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Bhuta {
    Agni,
    Jala,
    Pritvi,
    Akasha,
    Vayu,
}

/// Caste (BPHS 3.21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Varna {
    Brahmana,
    Kshatriya,
    Vaishya,
    Shudra,
}

/// Quality (BPHS 3.22).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Guna {
    Sattva,
    Raja,
    Tamas,
}

/// Bodily tissue (BPHS 3.31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dhatu {
    Asthi,
    Rakta,
    Majja,
    Rasa,
    Vasa,
    Shukra,
    Snayu,
}

/// Taste (BPHS 3.34).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rasa {
    Katu,
    Lavana,
    Tikta,
    Mishra,
    Madhura,
    Amla,
    Kashaya,
}

/// Ayurvedic constitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Prakriti {
    Vata,
    Pitta,
    Kapha,
}

/// Direction (Brihat Jataka 2.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Disha {
    Purva,
    Agneya,
    Dakshina,
    Nairritya,
    Pashchima,
    Vayavya,
    Uttara,
    Ishanya,
}
