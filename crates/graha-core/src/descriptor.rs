//! Immutable reference records for grahas.
//!
//! Each field type validates itself on construction, and
//! [`ObjectDescriptor::validate`] checks the cross-field constraints once when
//! a descriptor enters a catalog.

use serde::Serialize;

use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;
use crate::position::{Degree, HOUSE_SPAN, House, Position};

/// Number of house offsets an aspect table covers.
pub const ASPECT_OFFSETS: usize = 12;

// ---------------------------------------------------------------------------
// AspectWeights
// ---------------------------------------------------------------------------

/// Aspect (drishti) strength per house offset, `1` (own house) through `12`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectWeights([f64; ASPECT_OFFSETS]);

impl AspectWeights {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if any weight is outside `[0, 1]`.
    pub fn new(weights: [f64; ASPECT_OFFSETS]) -> Result<Self, CoreError> {
        if let Some((index, weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(0.0..=1.0).contains(*w))
        {
            return Err(CoreError::Validation(format!(
                "aspect weight for offset {} must be in [0, 1], got {weight}",
                index + 1
            )));
        }
        Ok(Self(weights))
    }

    /// Weight for a house offset in `1..=12`.
    #[must_use]
    pub fn weight(&self, offset: u8) -> Option<f64> {
        let index = usize::from(offset).checked_sub(1)?;
        self.0.get(index).copied()
    }

    /// Weight cast from `from` onto `to`.
    #[must_use]
    pub fn between(&self, from: House, to: House) -> f64 {
        self.0[usize::from(from.offset_to(to) - 1)]
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; ASPECT_OFFSETS] {
        &self.0
    }
}

impl TryFrom<&[f64]> for AspectWeights {
    type Error = CoreError;

    fn try_from(weights: &[f64]) -> Result<Self, Self::Error> {
        let weights: [f64; ASPECT_OFFSETS] = weights.try_into().map_err(|_| {
            CoreError::Validation(format!(
                "aspect table must have exactly {ASPECT_OFFSETS} entries, got {}",
                weights.len()
            ))
        })?;
        Self::new(weights)
    }
}

// ---------------------------------------------------------------------------
// Special points and ranges
// ---------------------------------------------------------------------------

/// A single point in the zodiac, such as the deep exaltation degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecialPoint {
    pub house: House,
    pub degree: Degree,
}

impl SpecialPoint {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if either component is out of range.
    pub fn new(house: u8, degree: f64) -> Result<Self, CoreError> {
        Ok(Self {
            house: House::new(house)?,
            degree: Degree::new(degree)?,
        })
    }
}

/// A degree range within one house, `[start, end)`.
///
/// An `end` of 30 covers the remainder of the house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignRange {
    pub house: House,
    pub start: f64,
    pub end: f64,
}

impl SignRange {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] unless `0 <= start < end <= 30`.
    pub fn new(house: u8, start: f64, end: f64) -> Result<Self, CoreError> {
        let house = House::new(house)?;
        if !(0.0 <= start && start < end && end <= HOUSE_SPAN) {
            return Err(CoreError::Validation(format!(
                "sign range must satisfy 0 <= start < end <= 30, got [{start}, {end})"
            )));
        }
        Ok(Self { house, start, end })
    }

    /// The whole of one house.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `house` is out of range.
    pub fn whole(house: u8) -> Result<Self, CoreError> {
        Self::new(house, 0.0, HOUSE_SPAN)
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        let degree = position.degree.get();
        position.house == self.house && self.start <= degree && degree < self.end
    }
}

/// Age span of a graha's natural period, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgePeriod {
    pub start: u8,
    pub end: u8,
}

// ---------------------------------------------------------------------------
// ObjectDescriptor
// ---------------------------------------------------------------------------

/// Static reference record for one graha.
///
/// Classifications the classical tables leave open for the nodes are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDescriptor {
    pub key: ObjectKey,
    pub name: String,
    pub avatara: String,
    pub unicode: char,
    /// Character before any positional context is applied.
    pub base_character: Character,
    pub character_rule: CharacterRuleKind,
    pub deva: Option<Deva>,
    pub gender: Option<Gender>,
    pub bhuta: Option<Bhuta>,
    pub varna: Option<Varna>,
    pub guna: Option<Guna>,
    pub dhatu: Vec<Dhatu>,
    pub rasa: Option<Rasa>,
    pub prakriti: Vec<Prakriti>,
    pub disha: Option<Disha>,
    pub maturity_age: u8,
    pub age_period: Option<AgePeriod>,
    /// Deep exaltation point (ucha).
    pub exaltation: SpecialPoint,
    /// Deep debilitation point (neecha).
    pub debilitation: SpecialPoint,
    pub mooltrikona: SignRange,
    /// Own-sign (swa) ranges.
    pub own_signs: Vec<SignRange>,
    /// Aspect strength (drishti) per house offset.
    pub aspects: AspectWeights,
}

impl ObjectDescriptor {
    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the base character is `Mixed`, the
    /// debilitation point is not opposite the exaltation point, the age period
    /// is empty, or no own sign is listed.
    pub fn validate(&self) -> Result<(), CoreError> {
        let key = self.key;
        if !self.base_character.is_base() {
            return Err(CoreError::Validation(format!(
                "{key}: base character must be benign or malefic, got {}",
                self.base_character
            )));
        }
        if self.exaltation.house.offset_to(self.debilitation.house) != 7
            || self.exaltation.degree != self.debilitation.degree
        {
            return Err(CoreError::Validation(format!(
                "{key}: debilitation point must be opposite the exaltation point"
            )));
        }
        if self
            .age_period
            .is_some_and(|period| period.start >= period.end)
        {
            return Err(CoreError::Validation(format!(
                "{key}: age period must start before it ends"
            )));
        }
        if self.own_signs.is_empty() {
            return Err(CoreError::Validation(format!(
                "{key}: at least one own sign is required"
            )));
        }
        Ok(())
    }
}
