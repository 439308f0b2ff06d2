//! Descriptor lookup and per-key character rule overrides.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use graha_core::enums::Character;
use graha_core::{ObjectDescriptor, ObjectKey, grahas};

use crate::error::EngineError;
use crate::rules::{RuleContext, character};

/// A character resolution rule: a function of the resolving object's
/// descriptor, its position, and read access to every other key, all reached
/// through the [`RuleContext`].
pub type CharacterRule = fn(&RuleContext<'_, '_>) -> Result<Character, EngineError>;

/// The descriptors a session may resolve, plus optional rule overrides.
///
/// Builtin descriptors are borrowed from the process-wide table; custom ones
/// are owned by the catalog and validated on insertion.
#[derive(Clone)]
pub struct DescriptorCatalog {
    descriptors: BTreeMap<ObjectKey, Cow<'static, ObjectDescriptor>>,
    rule_overrides: BTreeMap<ObjectKey, CharacterRule>,
}

impl DescriptorCatalog {
    /// Catalog over the builtin descriptors of all nine grahas.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            descriptors: grahas::builtin()
                .iter()
                .map(|d| (d.key, Cow::Borrowed(d)))
                .collect(),
            rule_overrides: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            descriptors: BTreeMap::new(),
            rule_overrides: BTreeMap::new(),
        }
    }

    /// Add or replace the descriptor for `descriptor.key`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Core`] if the descriptor fails validation.
    pub fn with_descriptor(mut self, descriptor: ObjectDescriptor) -> Result<Self, EngineError> {
        descriptor.validate()?;
        self.descriptors.insert(descriptor.key, Cow::Owned(descriptor));
        Ok(self)
    }

    /// Drop the descriptor (and any rule override) for `key`.
    #[must_use]
    pub fn without(mut self, key: ObjectKey) -> Self {
        self.descriptors.remove(&key);
        self.rule_overrides.remove(&key);
        self
    }

    /// Resolve `key`'s character with `rule` instead of the rule its
    /// descriptor names.
    #[must_use]
    pub fn with_rule(mut self, key: ObjectKey, rule: CharacterRule) -> Self {
        self.rule_overrides.insert(key, rule);
        self
    }

    #[must_use]
    pub fn descriptor(&self, key: ObjectKey) -> Option<&ObjectDescriptor> {
        self.descriptors.get(&key).map(std::ops::Deref::deref)
    }

    /// The rule used for `descriptor`: an override if one is registered,
    /// otherwise the rule named by the descriptor.
    #[must_use]
    pub fn character_rule(&self, descriptor: &ObjectDescriptor) -> CharacterRule {
        self.rule_overrides
            .get(&descriptor.key)
            .copied()
            .unwrap_or_else(|| character::rule_for(descriptor.character_rule))
    }

    #[must_use]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.descriptors.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.descriptors.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for DescriptorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for DescriptorCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorCatalog")
            .field("keys", &self.descriptors.keys().collect::<Vec<_>>())
            .field(
                "rule_overrides",
                &self.rule_overrides.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ResolutionSession;
    use graha_core::PositionSnapshot;
    use graha_core::enums::CharacterRuleKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_borrows_every_graha() {
        let catalog = DescriptorCatalog::builtin();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), ObjectKey::ALL.to_vec());
        assert!(std::ptr::eq(
            catalog.descriptor(ObjectKey::Bu).unwrap(),
            grahas::descriptor(ObjectKey::Bu)
        ));
    }

    #[test]
    fn without_removes_descriptor() {
        let catalog = DescriptorCatalog::builtin().without(ObjectKey::Ra);
        assert!(!catalog.contains(ObjectKey::Ra));
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn with_descriptor_validates() {
        let mut descriptor = grahas::descriptor(ObjectKey::Sa).clone();
        descriptor.base_character = Character::Mixed;
        let err = DescriptorCatalog::empty()
            .with_descriptor(descriptor)
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(_)));
    }

    #[test]
    fn custom_descriptor_replaces_builtin() {
        let mut descriptor = grahas::descriptor(ObjectKey::Sa).clone();
        descriptor.base_character = Character::Benign;
        let catalog = DescriptorCatalog::builtin()
            .with_descriptor(descriptor)
            .unwrap();
        assert_eq!(
            catalog.descriptor(ObjectKey::Sa).unwrap().base_character,
            Character::Benign
        );
    }

    #[test]
    fn override_takes_precedence_over_descriptor_rule() {
        let catalog = DescriptorCatalog::builtin().with_rule(ObjectKey::Sa, character::conjunction);
        assert_eq!(
            catalog.descriptor(ObjectKey::Sa).unwrap().character_rule,
            CharacterRuleKind::Fixed
        );

        let snapshot = PositionSnapshot::new()
            .with(ObjectKey::Gu, 3, 4.0)
            .and_then(|s| s.with(ObjectKey::Sa, 3, 9.0))
            .unwrap();
        let session = ResolutionSession::new(&snapshot, &catalog);
        assert_eq!(
            session.resolve(ObjectKey::Sa).unwrap().character,
            Character::Benign
        );
    }
}
