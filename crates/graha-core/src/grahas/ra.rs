use crate::descriptor::{AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{Character, CharacterRuleKind, Disha, Guna, Prakriti};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

use super::NODE_ASPECTS;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Ra,
        name: "Rahu".into(),
        avatara: "Varaha".into(),
        unicode: '\u{260A}',
        base_character: Character::Malefic,
        character_rule: CharacterRuleKind::Fixed,
        deva: None,
        gender: None,
        bhuta: None,
        varna: None,
        guna: Some(Guna::Tamas),
        dhatu: Vec::new(),
        rasa: None,
        prakriti: vec![Prakriti::Vata],
        disha: Some(Disha::Nairritya),
        maturity_age: 42,
        age_period: None,
        exaltation: SpecialPoint::new(2, 20.0)?,
        debilitation: SpecialPoint::new(8, 20.0)?,
        mooltrikona: SignRange::whole(3)?,
        own_signs: vec![SignRange::whole(11)?],
        aspects: AspectWeights::new(NODE_ASPECTS)?,
    })
}
