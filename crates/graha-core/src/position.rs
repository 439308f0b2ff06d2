//! Validated positional input for one chart instant.
//!
//! Positions are produced by an external ephemeris. The types here only
//! enforce range validity: houses in `[1, 12]`, degrees in `[0, 30)`, and at
//! most one position per key.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;
use crate::keys::ObjectKey;

/// Degrees spanned by one house.
pub const HOUSE_SPAN: f64 = 30.0;

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

/// Zodiacal sign index (rashi), `1` = Aries through `12` = Pisces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

impl House {
    /// Build a house, rejecting values outside `[1, 12]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `value` is out of range.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (1..=12).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(format!(
                "house must be in [1, 12], got {value}"
            )))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// House offset from `self` to `other`, counted inclusively: the same
    /// house is offset 1, the opposite house is offset 7.
    #[must_use]
    pub const fn offset_to(self, other: Self) -> u8 {
        (other.0 + 12 - self.0) % 12 + 1
    }
}

impl TryFrom<u8> for House {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<House> for u8 {
    fn from(house: House) -> Self {
        house.0
    }
}

impl JsonSchema for House {
    fn schema_name() -> Cow<'static, str> {
        "House".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 12
        })
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Degree
// ---------------------------------------------------------------------------

/// Degree within a house, in `[0, 30)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Degree(f64);

impl Degree {
    /// Build a degree, rejecting non-finite values and values outside `[0, 30)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `value` is out of range.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if value.is_finite() && (0.0..HOUSE_SPAN).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(format!(
                "degree must be in [0, 30), got {value}"
            )))
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Degree {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Degree> for f64 {
    fn from(degree: Degree) -> Self {
        degree.0
    }
}

impl JsonSchema for Degree {
    fn schema_name() -> Cow<'static, str> {
        "Degree".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "number",
            "minimum": 0,
            "exclusiveMaximum": 30
        })
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// House and degree of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub house: House,
    pub degree: Degree,
}

impl Position {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if either component is out of range.
    pub fn new(house: u8, degree: f64) -> Result<Self, CoreError> {
        Ok(Self {
            house: House::new(house)?,
            degree: Degree::new(degree)?,
        })
    }

    /// Absolute ecliptic longitude in `[0, 360)`.
    #[must_use]
    pub fn longitude(self) -> f64 {
        f64::from(self.house.get() - 1).mul_add(HOUSE_SPAN, self.degree.get())
    }
}

// ---------------------------------------------------------------------------
// PositionSnapshot
// ---------------------------------------------------------------------------

/// Positions of every known graha at one chart instant.
///
/// Serialized as a map from abbreviation to position:
///
/// ```text
/// { "Bu": { "house": 5, "degree": 12.5 }, "Sa": { "house": 5, "degree": 2.0 } }
/// ```
///
/// Deserialization goes through [`PositionSnapshot::insert`], so a repeated
/// key is rejected rather than overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct PositionSnapshot {
    positions: BTreeMap<ObjectKey, Position>,
}

impl PositionSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert from raw house and degree values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for out-of-range values and
    /// [`CoreError::DuplicatePosition`] if `key` is already placed.
    pub fn with(mut self, key: ObjectKey, house: u8, degree: f64) -> Result<Self, CoreError> {
        self.insert(key, Position::new(house, degree)?)?;
        Ok(self)
    }

    /// Place `key` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicatePosition`] if `key` is already placed.
    pub fn insert(&mut self, key: ObjectKey, position: Position) -> Result<(), CoreError> {
        if self.positions.contains_key(&key) {
            return Err(CoreError::DuplicatePosition(key));
        }
        self.positions.insert(key, position);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: ObjectKey) -> Option<Position> {
        self.positions.get(&key).copied()
    }

    #[must_use]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.positions.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Placed keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.positions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, Position)> + '_ {
        self.positions.iter().map(|(key, position)| (*key, *position))
    }

    /// Keys placed in `house`, in key order.
    pub fn in_house(&self, house: House) -> impl Iterator<Item = ObjectKey> + '_ {
        self.iter()
            .filter(move |(_, position)| position.house == house)
            .map(|(key, _)| key)
    }
}

impl<'de> Deserialize<'de> for PositionSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = PositionSnapshot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from graha abbreviation to position")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut snapshot = PositionSnapshot::new();
        while let Some((key, position)) = map.next_entry::<ObjectKey, Position>()? {
            snapshot.insert(key, position).map_err(de::Error::custom)?;
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn house_rejects_out_of_range(#[case] value: u8) {
        assert!(House::new(value).is_err());
    }

    #[rstest]
    #[case(-0.5)]
    #[case(30.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn degree_rejects_out_of_range(#[case] value: f64) {
        assert!(Degree::new(value).is_err());
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(1, 7, 7)]
    #[case(5, 4, 12)]
    #[case(12, 1, 2)]
    #[case(10, 1, 4)]
    fn offset_is_inclusive_and_wraps(#[case] from: u8, #[case] to: u8, #[case] expected: u8) {
        let from = House::new(from).unwrap();
        let to = House::new(to).unwrap();
        assert_eq!(from.offset_to(to), expected);
    }

    #[test]
    fn longitude_adds_house_span() {
        let position = Position::new(5, 12.5).unwrap();
        assert!((position.longitude() - 132.5).abs() < f64::EPSILON);
    }

    #[test]
    fn insert_rejects_duplicate_key() {
        let mut snapshot = PositionSnapshot::new().with(ObjectKey::Bu, 5, 1.0).unwrap();
        let err = snapshot
            .insert(ObjectKey::Bu, Position::new(6, 2.0).unwrap())
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicatePosition(ObjectKey::Bu));
        assert_eq!(snapshot.get(ObjectKey::Bu).unwrap().house.get(), 5);
    }

    #[test]
    fn in_house_lists_keys_in_order() {
        let snapshot = PositionSnapshot::new()
            .with(ObjectKey::Sa, 5, 2.0)
            .and_then(|s| s.with(ObjectKey::Bu, 5, 12.0))
            .and_then(|s| s.with(ObjectKey::Gu, 9, 3.0))
            .unwrap();
        let house = House::new(5).unwrap();
        let keys: Vec<_> = snapshot.in_house(house).collect();
        assert_eq!(keys, vec![ObjectKey::Bu, ObjectKey::Sa]);
    }

    #[test]
    fn deserializes_from_json_map() {
        let json = r#"{"Bu": {"house": 5, "degree": 12.5}, "Sa": {"house": 5, "degree": 2.0}}"#;
        let snapshot: PositionSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(ObjectKey::Sa), Some(Position::new(5, 2.0).unwrap()));
    }

    #[rstest]
    #[case(r#"{"Bu": {"house": 13, "degree": 1.0}}"#)]
    #[case(r#"{"Bu": {"house": 5, "degree": 30.0}}"#)]
    #[case(r#"{"Xx": {"house": 5, "degree": 1.0}}"#)]
    #[case(r#"{"Bu": {"house": 5, "degree": 1.0}, "Bu": {"house": 9, "degree": 2.0}}"#)]
    fn deserialization_validates(#[case] json: &str) {
        assert!(serde_json::from_str::<PositionSnapshot>(json).is_err());
    }

    #[test]
    fn repeated_key_is_a_duplicate_position() {
        let json = r#"{"Bu": {"house": 5, "degree": 1.0}, "Bu": {"house": 9, "degree": 2.0}}"#;
        let err = serde_json::from_str::<PositionSnapshot>(json).unwrap_err();
        assert!(
            err.to_string().contains("Duplicate position for Bu"),
            "unexpected error: {err}"
        );
    }
}
