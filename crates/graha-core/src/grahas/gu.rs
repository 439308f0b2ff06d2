use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Gu,
        name: "Guru".into(),
        avatara: "Vamana".into(),
        unicode: '\u{2643}',
        base_character: Character::Benign,
        character_rule: CharacterRuleKind::Fixed,
        deva: Some(Deva::Indra),
        gender: Some(Gender::Male),
        bhuta: Some(Bhuta::Akasha),
        varna: Some(Varna::Brahmana),
        guna: Some(Guna::Sattva),
        dhatu: vec![Dhatu::Vasa],
        rasa: Some(Rasa::Madhura),
        prakriti: vec![Prakriti::Kapha],
        disha: Some(Disha::Ishanya),
        maturity_age: 16,
        age_period: Some(AgePeriod { start: 34, end: 52 }),
        exaltation: SpecialPoint::new(4, 5.0)?,
        debilitation: SpecialPoint::new(10, 5.0)?,
        mooltrikona: SignRange::new(9, 0.0, 10.0)?,
        own_signs: vec![SignRange::new(9, 10.0, 30.0)?, SignRange::whole(12)?],
        // Full aspect on the 5th and 9th.
        aspects: AspectWeights::new([
            1.0, 0.0, 0.25, 0.75, 1.0, 0.0, 1.0, 0.75, 1.0, 0.25, 0.0, 0.0,
        ])?,
    })
}
