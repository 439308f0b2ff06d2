use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

use super::GENERIC_ASPECTS;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Ch,
        name: "Chandra".into(),
        avatara: "Krishna".into(),
        unicode: '\u{263D}',
        base_character: Character::Benign,
        character_rule: CharacterRuleKind::Fixed,
        deva: Some(Deva::Varuna),
        gender: Some(Gender::Female),
        bhuta: Some(Bhuta::Jala),
        varna: Some(Varna::Vaishya),
        guna: Some(Guna::Sattva),
        dhatu: vec![Dhatu::Rakta],
        rasa: Some(Rasa::Lavana),
        prakriti: vec![Prakriti::Vata, Prakriti::Kapha],
        disha: Some(Disha::Vayavya),
        maturity_age: 24,
        age_period: Some(AgePeriod { start: 0, end: 3 }),
        exaltation: SpecialPoint::new(2, 3.0)?,
        debilitation: SpecialPoint::new(8, 3.0)?,
        mooltrikona: SignRange::new(2, 3.0, 30.0)?,
        own_signs: vec![SignRange::whole(4)?],
        aspects: AspectWeights::new(GENERIC_ASPECTS)?,
    })
}
