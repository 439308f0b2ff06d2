//! Session-bound graha instances and their resolved attributes.

use std::cell::OnceCell;
use std::fmt;

use graha_core::enums::{Character, Dignity};
use graha_core::{House, ObjectDescriptor, ObjectKey, Position};
use serde::{Deserialize, Serialize};

use crate::catalog::CharacterRule;
use crate::error::EngineError;
use crate::rules::{RuleContext, aspect, dignity};
use crate::session::ResolutionSession;

/// Context-dependent attributes of one graha for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAttributes {
    pub key: ObjectKey,
    pub character: Character,
    pub dignity: Dignity,
}

/// A descriptor paired with one session's resolution cache.
///
/// Obtained from [`ResolutionSession::object`]; the registry guarantees one
/// instance per key per session.
pub struct ResolvableObject<'a> {
    descriptor: &'a ObjectDescriptor,
    character_rule: CharacterRule,
    resolved: OnceCell<ResolvedAttributes>,
}

impl<'a> ResolvableObject<'a> {
    pub(crate) const fn new(descriptor: &'a ObjectDescriptor, character_rule: CharacterRule) -> Self {
        Self {
            descriptor,
            character_rule,
            resolved: OnceCell::new(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> ObjectKey {
        self.descriptor.key
    }

    #[must_use]
    pub const fn descriptor(&self) -> &'a ObjectDescriptor {
        self.descriptor
    }

    /// Whether [`resolve`](Self::resolve) has already succeeded in this session.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Resolve this object's attributes against the session snapshot.
    ///
    /// The first successful call runs the character rule (which may resolve
    /// peers recursively) and caches the result; later calls return the cache.
    /// A failed call caches nothing.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingPosition`] if the snapshot does not place this
    ///   object, or a rule needs a position the snapshot lacks.
    /// - [`EngineError::CyclicResolution`] if this object is already being
    ///   resolved further up the call stack, or a peer is re-entered under
    ///   `CyclePolicy::Fail`.
    /// - [`EngineError::UnknownObjectKey`] if a peer has no descriptor.
    pub fn resolve(&self, session: &ResolutionSession<'a>) -> Result<ResolvedAttributes, EngineError> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(*resolved);
        }

        let key = self.key();
        let position = self.position(session)?;
        let _in_progress = session.enter(key)?;

        let context = RuleContext::new(session, self.descriptor, position);
        let character = (self.character_rule)(&context)?;
        let attributes = ResolvedAttributes {
            key,
            character,
            dignity: dignity::dignity(self.descriptor, position),
        };
        tracing::debug!(
            %key,
            %character,
            dignity = %attributes.dignity,
            house = %position.house,
            "resolved object"
        );

        Ok(*self.resolved.get_or_init(|| attributes))
    }

    /// Resolved character.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn character(&self, session: &ResolutionSession<'a>) -> Result<Character, EngineError> {
        self.resolve(session).map(|attributes| attributes.character)
    }

    /// Dignity by sign placement.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn dignity(&self, session: &ResolutionSession<'a>) -> Result<Dignity, EngineError> {
        self.resolve(session).map(|attributes| attributes.dignity)
    }

    /// Aspect strength cast onto `house`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingPosition`] if the snapshot does not place
    /// this object.
    pub fn aspect_on(&self, session: &ResolutionSession<'a>, house: House) -> Result<f64, EngineError> {
        let position = self.position(session)?;
        Ok(aspect::strength(self.descriptor, position.house, house))
    }

    /// Aspect strength cast onto the house occupied by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingPosition`] if either object is not placed.
    pub fn aspect_to(
        &self,
        session: &ResolutionSession<'a>,
        target: ObjectKey,
    ) -> Result<f64, EngineError> {
        let target = session
            .snapshot()
            .get(target)
            .ok_or(EngineError::MissingPosition(target))?;
        self.aspect_on(session, target.house)
    }

    /// Every house this object aspects with non-zero strength, starting with
    /// its own.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingPosition`] if the snapshot does not place
    /// this object.
    pub fn aspected_houses(
        &self,
        session: &ResolutionSession<'a>,
    ) -> Result<Vec<(House, f64)>, EngineError> {
        let position = self.position(session)?;
        Ok(aspect::aspected_houses(self.descriptor, position.house))
    }

    fn position(&self, session: &ResolutionSession<'a>) -> Result<Position, EngineError> {
        session
            .snapshot()
            .get(self.key())
            .ok_or(EngineError::MissingPosition(self.key()))
    }
}

impl fmt::Debug for ResolvableObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvableObject")
            .field("key", &self.key())
            .field("resolved", &self.resolved.get())
            .finish_non_exhaustive()
    }
}
