use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

use super::GENERIC_ASPECTS;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Sk,
        name: "Shukra".into(),
        avatara: "Parashurama".into(),
        unicode: '\u{2640}',
        base_character: Character::Benign,
        character_rule: CharacterRuleKind::Fixed,
        deva: Some(Deva::Shachi),
        gender: Some(Gender::Female),
        bhuta: Some(Bhuta::Jala),
        varna: Some(Varna::Brahmana),
        guna: Some(Guna::Raja),
        dhatu: vec![Dhatu::Shukra],
        rasa: Some(Rasa::Amla),
        prakriti: vec![Prakriti::Vata, Prakriti::Kapha],
        disha: Some(Disha::Agneya),
        maturity_age: 25,
        age_period: Some(AgePeriod { start: 14, end: 34 }),
        exaltation: SpecialPoint::new(12, 27.0)?,
        debilitation: SpecialPoint::new(6, 27.0)?,
        mooltrikona: SignRange::new(7, 0.0, 15.0)?,
        own_signs: vec![SignRange::new(7, 15.0, 30.0)?, SignRange::whole(2)?],
        aspects: AspectWeights::new(GENERIC_ASPECTS)?,
    })
}
