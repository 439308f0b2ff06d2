//! Character rules.

use graha_config::MixedPeerBucket;
use graha_core::ObjectKey;
use graha_core::enums::{Character, CharacterRuleKind};

use super::RuleContext;
use crate::catalog::CharacterRule;
use crate::error::EngineError;

/// Longitude span of the waxing half of the lunar month.
const SHUKLA_PAKSHA_SPAN: f64 = 180.0;

/// The rule implementing `kind`.
#[must_use]
pub fn rule_for(kind: CharacterRuleKind) -> CharacterRule {
    match kind {
        CharacterRuleKind::Fixed => fixed,
        CharacterRuleKind::Conjunction => conjunction,
        CharacterRuleKind::Paksha => paksha,
    }
}

/// The descriptor's base character, whatever the snapshot says.
///
/// # Errors
///
/// Never fails; the signature matches [`CharacterRule`].
pub fn fixed(ctx: &RuleContext<'_, '_>) -> Result<Character, EngineError> {
    Ok(ctx.descriptor().base_character)
}

/// Character from the grahas sharing this object's house.
///
/// With no peers the base character stands. Otherwise each peer's resolved
/// character is tallied: benefic and malefic peers together give `Mixed`,
/// malefic peers alone give `Malefic`, anything else `Benign`.
///
/// # Errors
///
/// Propagates errors from resolving peers.
pub fn conjunction(ctx: &RuleContext<'_, '_>) -> Result<Character, EngineError> {
    let peers = ctx.peers();
    if peers.is_empty() {
        return Ok(ctx.descriptor().base_character);
    }

    let bucket = ctx.config().mixed_peer_bucket;
    let mut tally = Tally::default();
    for peer in peers {
        let character = ctx.peer_character(peer)?;
        tracing::trace!(key = %ctx.key(), %peer, %character, "conjunct peer");
        tally.record(character, bucket);
    }
    Ok(tally.outcome())
}

/// Benign while waxing, malefic while waning.
///
/// Not used by any builtin descriptor; opt in with
/// [`DescriptorCatalog::with_rule`](crate::DescriptorCatalog::with_rule) or a
/// descriptor naming [`CharacterRuleKind::Paksha`].
///
/// Waxing means the object's longitude is more than 0 and at most 180
/// degrees ahead of the Sun's, so new moon counts as waning and full moon as
/// waxing.
///
/// # Errors
///
/// Returns [`EngineError::MissingPosition`] if the Sun is not placed.
pub fn paksha(ctx: &RuleContext<'_, '_>) -> Result<Character, EngineError> {
    let sun = ctx.position_of(ObjectKey::Sy)?;
    let elongation = (ctx.position().longitude() - sun.longitude()).rem_euclid(360.0);
    if elongation > 0.0 && elongation <= SHUKLA_PAKSHA_SPAN {
        Ok(Character::Benign)
    } else {
        Ok(Character::Malefic)
    }
}

/// Benefic and malefic counts over conjunct peers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub benefic: usize,
    pub malefic: usize,
}

impl Tally {
    /// Count one peer; `Mixed` goes to `bucket`.
    pub const fn record(&mut self, character: Character, bucket: MixedPeerBucket) {
        match (character, bucket) {
            (Character::Benign, _) | (Character::Mixed, MixedPeerBucket::Benefic) => {
                self.benefic += 1;
            }
            (Character::Malefic, _) | (Character::Mixed, MixedPeerBucket::Malefic) => {
                self.malefic += 1;
            }
        }
    }

    #[must_use]
    pub const fn outcome(self) -> Character {
        if self.benefic > 0 && self.malefic > 0 {
            Character::Mixed
        } else if self.malefic > 0 {
            Character::Malefic
        } else {
            Character::Benign
        }
    }
}
