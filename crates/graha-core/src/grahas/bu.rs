use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

use super::GENERIC_ASPECTS;

/// Budha takes its character from the grahas it is conjunct with
/// (BPHS 3.11, Brihat Jataka 2.5).
pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Bu,
        name: "Budha".into(),
        avatara: "Buddha".into(),
        unicode: '\u{263F}',
        base_character: Character::Benign,
        character_rule: CharacterRuleKind::Conjunction,
        deva: Some(Deva::Vishnu),
        gender: Some(Gender::Neuter),
        bhuta: Some(Bhuta::Pritvi),
        varna: Some(Varna::Vaishya),
        guna: Some(Guna::Raja),
        dhatu: vec![Dhatu::Rasa],
        rasa: Some(Rasa::Mishra),
        prakriti: vec![Prakriti::Kapha, Prakriti::Pitta, Prakriti::Vata],
        disha: Some(Disha::Uttara),
        maturity_age: 32,
        age_period: Some(AgePeriod { start: 5, end: 14 }),
        exaltation: SpecialPoint::new(6, 15.0)?,
        debilitation: SpecialPoint::new(12, 15.0)?,
        mooltrikona: SignRange::new(6, 15.0, 20.0)?,
        own_signs: vec![SignRange::whole(3)?, SignRange::new(6, 20.0, 30.0)?],
        aspects: AspectWeights::new(GENERIC_ASPECTS)?,
    })
}
