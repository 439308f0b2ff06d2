use crate::descriptor::{AgePeriod, AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{
    Bhuta, Character, CharacterRuleKind, Deva, Dhatu, Disha, Gender, Guna, Prakriti, Rasa, Varna,
};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Sa,
        name: "Shani".into(),
        avatara: "Kurma".into(),
        unicode: '\u{2644}',
        base_character: Character::Malefic,
        character_rule: CharacterRuleKind::Fixed,
        deva: Some(Deva::Brahma),
        gender: Some(Gender::Neuter),
        bhuta: Some(Bhuta::Vayu),
        varna: Some(Varna::Shudra),
        guna: Some(Guna::Tamas),
        dhatu: vec![Dhatu::Snayu],
        rasa: Some(Rasa::Kashaya),
        prakriti: vec![Prakriti::Vata],
        disha: Some(Disha::Pashchima),
        maturity_age: 36,
        age_period: Some(AgePeriod {
            start: 72,
            end: 122,
        }),
        exaltation: SpecialPoint::new(7, 20.0)?,
        debilitation: SpecialPoint::new(1, 20.0)?,
        mooltrikona: SignRange::new(11, 0.0, 20.0)?,
        own_signs: vec![SignRange::new(11, 20.0, 30.0)?, SignRange::whole(10)?],
        // Full aspect on the 3rd and 10th.
        aspects: AspectWeights::new([
            1.0, 0.0, 1.0, 0.75, 0.5, 0.0, 1.0, 0.75, 0.5, 1.0, 0.0, 0.0,
        ])?,
    })
}
