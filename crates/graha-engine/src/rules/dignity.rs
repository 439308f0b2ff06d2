//! Dignity by sign placement.

use graha_core::enums::Dignity;
use graha_core::{ObjectDescriptor, Position};

/// Dignity of a graha at `position`.
///
/// Ranges are checked before whole signs, so a mooltrikona or own-sign
/// range that shares a sign with the exaltation point wins over it (Budha in
/// Virgo: exalted to 15, mooltrikona 15 to 20, own sign from 20).
#[must_use]
pub fn dignity(descriptor: &ObjectDescriptor, position: Position) -> Dignity {
    if descriptor.mooltrikona.contains(position) {
        Dignity::Mooltrikona
    } else if descriptor.own_signs.iter().any(|range| range.contains(position)) {
        Dignity::OwnSign
    } else if position.house == descriptor.exaltation.house {
        Dignity::Exalted
    } else if position.house == descriptor.debilitation.house {
        Dignity::Debilitated
    } else {
        Dignity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_core::{ObjectKey, grahas};
    use rstest::rstest;

    #[rstest]
    #[case(ObjectKey::Bu, 6, 10.0, Dignity::Exalted)]
    #[case(ObjectKey::Bu, 6, 17.0, Dignity::Mooltrikona)]
    #[case(ObjectKey::Bu, 6, 25.0, Dignity::OwnSign)]
    #[case(ObjectKey::Bu, 3, 1.0, Dignity::OwnSign)]
    #[case(ObjectKey::Bu, 12, 15.0, Dignity::Debilitated)]
    #[case(ObjectKey::Bu, 9, 15.0, Dignity::Neutral)]
    #[case(ObjectKey::Sy, 1, 10.0, Dignity::Exalted)]
    #[case(ObjectKey::Sy, 5, 19.0, Dignity::Mooltrikona)]
    #[case(ObjectKey::Ch, 2, 1.0, Dignity::Exalted)]
    #[case(ObjectKey::Ch, 2, 4.0, Dignity::Mooltrikona)]
    #[case(ObjectKey::Ma, 1, 20.0, Dignity::OwnSign)]
    #[case(ObjectKey::Sa, 1, 20.0, Dignity::Debilitated)]
    #[case(ObjectKey::Sa, 10, 0.0, Dignity::OwnSign)]
    fn dignity_by_placement(
        #[case] key: ObjectKey,
        #[case] house: u8,
        #[case] degree: f64,
        #[case] expected: Dignity,
    ) {
        let position = Position::new(house, degree).unwrap();
        assert_eq!(dignity(grahas::descriptor(key), position), expected);
    }
}
