use crate::descriptor::{AspectWeights, ObjectDescriptor, SignRange, SpecialPoint};
use crate::enums::{Character, CharacterRuleKind, Guna, Prakriti};
use crate::errors::CoreError;
use crate::keys::ObjectKey;

use super::NODE_ASPECTS;

pub(super) fn descriptor() -> Result<ObjectDescriptor, CoreError> {
    Ok(ObjectDescriptor {
        key: ObjectKey::Ke,
        name: "Ketu".into(),
        avatara: "Matsya".into(),
        unicode: '\u{260B}',
        base_character: Character::Malefic,
        character_rule: CharacterRuleKind::Fixed,
        deva: None,
        gender: None,
        bhuta: None,
        varna: None,
        guna: Some(Guna::Tamas),
        dhatu: Vec::new(),
        rasa: None,
        prakriti: vec![Prakriti::Pitta],
        disha: None,
        maturity_age: 48,
        age_period: None,
        exaltation: SpecialPoint::new(8, 20.0)?,
        debilitation: SpecialPoint::new(2, 20.0)?,
        mooltrikona: SignRange::whole(9)?,
        own_signs: vec![SignRange::whole(12)?],
        aspects: AspectWeights::new(NODE_ASPECTS)?,
    })
}
