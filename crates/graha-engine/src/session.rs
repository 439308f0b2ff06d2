//! Resolution sessions.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use graha_config::ResolutionConfig;
use graha_core::{ObjectKey, PositionSnapshot};

use crate::catalog::DescriptorCatalog;
use crate::error::EngineError;
use crate::object::{ResolvableObject, ResolvedAttributes};
use crate::registry::ObjectRegistry;

/// Scope of one resolution run over one snapshot.
///
/// Owns the registry, the resolved-attribute caches (held by the registered
/// objects), and the stack of keys whose resolution is in progress. Create one
/// per chart computation and drop it afterwards.
pub struct ResolutionSession<'a> {
    snapshot: &'a PositionSnapshot,
    config: ResolutionConfig,
    registry: ObjectRegistry<'a>,
    in_progress: RefCell<Vec<ObjectKey>>,
}

impl<'a> ResolutionSession<'a> {
    /// Session with the default [`ResolutionConfig`].
    #[must_use]
    pub fn new(snapshot: &'a PositionSnapshot, catalog: &'a DescriptorCatalog) -> Self {
        Self::with_config(snapshot, catalog, ResolutionConfig::default())
    }

    #[must_use]
    pub fn with_config(
        snapshot: &'a PositionSnapshot,
        catalog: &'a DescriptorCatalog,
        config: ResolutionConfig,
    ) -> Self {
        Self {
            snapshot,
            config,
            registry: ObjectRegistry::new(catalog),
            in_progress: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> &'a PositionSnapshot {
        self.snapshot
    }

    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &ObjectRegistry<'a> {
        &self.registry
    }

    /// The session's instance for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownObjectKey`] if the catalog has no
    /// descriptor for `key`.
    pub fn object(&self, key: ObjectKey) -> Result<Rc<ResolvableObject<'a>>, EngineError> {
        self.registry.get(key)
    }

    /// Resolve `key`, or return its cached attributes.
    ///
    /// # Errors
    ///
    /// Propagates any [`EngineError`] from the lookup or the rules.
    pub fn resolve(&self, key: ObjectKey) -> Result<ResolvedAttributes, EngineError> {
        self.object(key)?.resolve(self)
    }

    /// Resolve every key placed in the snapshot, in key order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing key and returns its error.
    pub fn resolve_all(&self) -> Result<BTreeMap<ObjectKey, ResolvedAttributes>, EngineError> {
        self.snapshot
            .keys()
            .map(|key| self.resolve(key).map(|attributes| (key, attributes)))
            .collect()
    }

    /// Whether `key` is being resolved further up the current call stack.
    #[must_use]
    pub fn is_in_progress(&self, key: ObjectKey) -> bool {
        self.in_progress.borrow().contains(&key)
    }

    /// Keys currently being resolved, outermost first.
    #[must_use]
    pub fn resolution_path(&self) -> Vec<ObjectKey> {
        self.in_progress.borrow().clone()
    }

    /// Mark `key` as in progress until the returned guard is dropped.
    pub(crate) fn enter(&self, key: ObjectKey) -> Result<InProgress<'_>, EngineError> {
        if self.is_in_progress(key) {
            return Err(self.cycle_error(key));
        }
        self.in_progress.borrow_mut().push(key);
        Ok(InProgress {
            stack: &self.in_progress,
        })
    }

    pub(crate) fn cycle_error(&self, key: ObjectKey) -> EngineError {
        let mut path = self.resolution_path();
        path.push(key);
        EngineError::CyclicResolution { key, path }
    }
}

/// Pops its key off the in-progress stack when dropped, on success and on
/// error alike.
pub(crate) struct InProgress<'s> {
    stack: &'s RefCell<Vec<ObjectKey>>,
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enter_tracks_nested_keys() {
        let snapshot = PositionSnapshot::new();
        let catalog = DescriptorCatalog::builtin();
        let session = ResolutionSession::new(&snapshot, &catalog);

        {
            let _outer = session.enter(ObjectKey::Bu).unwrap();
            let _inner = session.enter(ObjectKey::Sa).unwrap();
            assert_eq!(session.resolution_path(), vec![ObjectKey::Bu, ObjectKey::Sa]);
            assert!(session.is_in_progress(ObjectKey::Bu));
        }

        assert!(session.resolution_path().is_empty());
    }

    #[test]
    fn reentering_a_key_is_a_cycle() {
        let snapshot = PositionSnapshot::new();
        let catalog = DescriptorCatalog::builtin();
        let session = ResolutionSession::new(&snapshot, &catalog);

        let _outer = session.enter(ObjectKey::Sy).unwrap();
        let _inner = session.enter(ObjectKey::Ma).unwrap();
        let Err(err) = session.enter(ObjectKey::Sy) else {
            panic!("expected CyclicResolution");
        };
        assert_eq!(
            err,
            EngineError::CyclicResolution {
                key: ObjectKey::Sy,
                path: vec![ObjectKey::Sy, ObjectKey::Ma, ObjectKey::Sy],
            }
        );
        assert_eq!(session.resolution_path(), vec![ObjectKey::Sy, ObjectKey::Ma]);
    }
}
