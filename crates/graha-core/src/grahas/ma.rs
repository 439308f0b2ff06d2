use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Ma,
        name: "Mangala".into(),
        avatara: "Narasimha".into(),
        unicode: '\u{2642}',
        base_character: Character::Malefic,
        character_rule: CharacterRuleKind::Fixed,
        deva: Some(Deva::Skanda),
        gender: Some(Gender::Male),
        bhuta: Some(Bhuta::Agni),
        varna: Some(Varna::Kshatriya),
        guna: Some(Guna::Tamas),
        dhatu: vec![Dhatu::Majja],
        rasa: Some(Rasa::Tikta),
        prakriti: vec![Prakriti::Pitta],
        disha: Some(Disha::Dakshina),
        maturity_age: 28,
        age_period: Some(AgePeriod { start: 3, end: 5 }),
        exaltation: SpecialPoint::new(10, 28.0)?,
        debilitation: SpecialPoint::new(4, 28.0)?,
        mooltrikona: SignRange::new(1, 0.0, 12.0)?,
        own_signs: vec![SignRange::new(1, 12.0, 30.0)?, SignRange::whole(8)?],
        // Full aspect on the 4th and 8th.
        aspects: AspectWeights::new([
            1.0, 0.0, 0.25, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 0.25, 0.0, 0.0,
        ])?,
    })
}
