use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

use super::GENERIC_ASPECTS;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Sy,
        name: "Surya".into(),
        avatara: "Rama".into(),
        unicode: '\u{2609}',
        base_character: Character::Malefic,
        character_rule: CharacterRuleKind::Fixed,
        deva: Some(Deva::Agni),
        gender: Some(Gender::Male),
        bhuta: Some(Bhuta::Agni),
        varna: Some(Varna::Kshatriya),
        guna: Some(Guna::Sattva),
        dhatu: vec![Dhatu::Asthi],
        rasa: Some(Rasa::Katu),
        prakriti: vec![Prakriti::Pitta],
        disha: Some(Disha::Purva),
        maturity_age: 22,
        age_period: Some(AgePeriod { start: 52, end: 72 }),
        exaltation: SpecialPoint::new(1, 10.0)?,
        debilitation: SpecialPoint::new(7, 10.0)?,
        mooltrikona: SignRange::new(5, 0.0, 20.0)?,
        own_signs: vec![SignRange::new(5, 20.0, 30.0)?],
        aspects: AspectWeights::new(GENERIC_ASPECTS)?,
    })
}
