//! Resolution rules and the accessor they read the session through.
//!
//! A rule is a pure function of the resolving object's descriptor, its
//! position, and a read-only [`RuleContext`] for reaching other keys. Only
//! character rules consult peers; dignity and aspect rules read static
//! descriptor ranges against the snapshot and never recurse.

pub mod aspect;
pub mod character;
pub mod dignity;

use graha_config::{CyclePolicy, ResolutionConfig};
use graha_core::enums::Character;
use graha_core::{ObjectDescriptor, ObjectKey, Position};

use crate::error::EngineError;
use crate::session::ResolutionSession;

/// Read access to the session on behalf of one resolving object.
pub struct RuleContext<'s, 'a> {
    session: &'s ResolutionSession<'a>,
    descriptor: &'a ObjectDescriptor,
    position: Position,
}

impl<'s, 'a> RuleContext<'s, 'a> {
    pub(crate) const fn new(
        session: &'s ResolutionSession<'a>,
        descriptor: &'a ObjectDescriptor,
        position: Position,
    ) -> Self {
        Self {
            session,
            descriptor,
            position,
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

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        self.session.config()
    }

    /// Other keys sharing this object's house, in key order.
    #[must_use]
    pub fn peers(&self) -> Vec<ObjectKey> {
        self.session
            .snapshot()
            .in_house(self.position.house)
            .filter(|key| *key != self.key())
            .collect()
    }

    /// Position of any placed key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingPosition`] if `key` is not placed.
    pub fn position_of(&self, key: ObjectKey) -> Result<Position, EngineError> {
        self.session
            .snapshot()
            .get(key)
            .ok_or(EngineError::MissingPosition(key))
    }

    /// Base character of `key`, looked up through the registry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownObjectKey`] if `key` has no descriptor.
    pub fn base_character_of(&self, key: ObjectKey) -> Result<Character, EngineError> {
        Ok(self.session.object(key)?.descriptor().base_character)
    }

    /// Character `key` contributes to this object's resolution.
    ///
    /// Resolves `key` recursively through the registry, subject to the
    /// session's [`CyclePolicy`]: under `PeerBase` peers always contribute
    /// their base character, and a peer already in progress contributes its
    /// base character (`BaseCharacter`) or fails the resolution (`Fail`).
    ///
    /// # Errors
    ///
    /// Propagates the peer's resolution error, or returns
    /// [`EngineError::CyclicResolution`] under `CyclePolicy::Fail`.
    pub fn peer_character(&self, key: ObjectKey) -> Result<Character, EngineError> {
        let policy = self.config().cycle_policy;
        if policy == CyclePolicy::PeerBase {
            return self.base_character_of(key);
        }

        if self.session.is_in_progress(key) {
            if policy == CyclePolicy::Fail {
                return Err(self.session.cycle_error(key));
            }
            tracing::debug!(
                key = %self.key(),
                peer = %key,
                path = ?self.session.resolution_path(),
                "peer already in progress; using its base character"
            );
            return self.base_character_of(key);
        }

        Ok(self.session.resolve(key)?.character)
    }
}
